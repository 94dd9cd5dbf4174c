use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::error::AvatarError;

/// Synchronous notifications from [`crate::Avatar::draw`].
///
/// Called on the drawing thread; implementations should return quickly and must not call back
/// into the same avatar.
pub trait AvatarObserver: Send + Sync {
    /// A draw was answered from the cache.
    fn on_cache_hit(&self, _key: &str) {}

    /// A freshly rendered avatar of `len` bytes was stored.
    fn on_cache_insert(&self, _key: &str, _len: usize) {}

    /// Rasterization is about to start for `key`.
    fn on_render(&self, _key: &str) {}

    /// Rendering or encoding failed; the error is returned to the caller afterwards.
    fn on_render_failure(&self, _key: &str, _error: &AvatarError) {}
}

/// Observer that only counts events.
#[derive(Debug, Default)]
pub struct RenderCounter {
    renders: AtomicU64,
    hits: AtomicU64,
    inserts: AtomicU64,
    failures: AtomicU64,
}

impl RenderCounter {
    /// Zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rasterizations started.
    pub fn renders(&self) -> u64 {
        self.renders.load(Ordering::Relaxed)
    }

    /// Number of cache hits.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of cache inserts.
    pub fn inserts(&self) -> u64 {
        self.inserts.load(Ordering::Relaxed)
    }

    /// Number of failed renders.
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}

impl AvatarObserver for RenderCounter {
    fn on_cache_hit(&self, _key: &str) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn on_cache_insert(&self, _key: &str, _len: usize) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    fn on_render(&self, _key: &str) {
        self.renders.fetch_add(1, Ordering::Relaxed);
    }

    fn on_render_failure(&self, _key: &str, _error: &AvatarError) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }
}
