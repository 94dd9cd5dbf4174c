//! Memoization of encoded avatars keyed by transformed content.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::avatar::output::EncodedAvatar;

/// Concurrent content -> PNG map.
///
/// Unbounded: entries live until [`AvatarCache::clear`]. Racing `put`s for one key are
/// last-write-wins; renders for a key are deterministic so either value is correct.
#[derive(Debug, Default)]
pub(crate) struct AvatarCache {
    // Poisoning is ignored: values are immutable and inserted whole, so a panicking writer
    // cannot leave a partial entry behind.
    entries: RwLock<HashMap<String, EncodedAvatar>>,
}

impl AvatarCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&self, key: &str) -> Option<EncodedAvatar> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub(crate) fn put(&self, key: String, bytes: EncodedAvatar) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, bytes);
    }

    pub(crate) fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
#[path = "../tests/unit/cache.rs"]
mod tests;
