use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::avatar::observer::AvatarObserver;
use crate::avatar::output::EncodedAvatar;
use crate::cache::AvatarCache;
use crate::config::model::AvatarConfig;
use crate::content::{content_key, default_transform};
use crate::foundation::error::AvatarResult;
use crate::render::encode::encode_png;
use crate::render::fonts::FontLibrary;
use crate::render::raster::Rasterizer;

/// Avatar generator: configuration, rasterizer and render cache.
///
/// `draw` takes `&self`, so one instance can serve many threads. Configuration changes need
/// `&mut self` and never invalidate renders already cached, since the cache is keyed only by
/// transformed content.
pub struct Avatar {
    config: AvatarConfig,
    rasterizer: Rasterizer,
    cache: AvatarCache,
    observer: Option<Arc<dyn AvatarObserver>>,
    disposed: AtomicBool,
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new(AvatarConfig::default())
    }
}

impl Avatar {
    /// Avatar drawing with system fonts.
    pub fn new(config: AvatarConfig) -> Self {
        Self {
            config,
            rasterizer: Rasterizer::new(FontLibrary::system()),
            cache: AvatarCache::new(),
            observer: None,
            disposed: AtomicBool::new(false),
        }
    }

    /// Replace the font library.
    pub fn with_fonts(mut self, fonts: FontLibrary) -> Self {
        self.rasterizer = Rasterizer::new(fonts);
        self
    }

    /// Install an observer for cache and render events.
    pub fn with_observer(mut self, observer: Arc<dyn AvatarObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &AvatarConfig {
        &self.config
    }

    /// Mutable configuration. Cached renders are kept as they are.
    pub fn config_mut(&mut self) -> &mut AvatarConfig {
        &mut self.config
    }

    /// Fonts used for rendering; register extra faces through this.
    pub fn fonts_mut(&mut self) -> &mut FontLibrary {
        self.rasterizer.fonts_mut()
    }

    /// Draw `text` with the default content transform.
    pub fn draw(&self, text: &str) -> AvatarResult<EncodedAvatar> {
        let first_letter_only = self.config.first_letter_only();
        self.draw_with(text, |raw| default_transform(raw, first_letter_only))
    }

    /// Draw `text`, deriving the content (and cache key) with `transform`.
    ///
    /// `text` is checked for emptiness before `transform` runs.
    pub fn draw_with(
        &self,
        text: &str,
        transform: impl FnOnce(&str) -> String,
    ) -> AvatarResult<EncodedAvatar> {
        let key = content_key(text, transform)?;
        self.config.validate()?;

        if let Some(hit) = self.cache.get(&key) {
            tracing::debug!(key = %key, "avatar served from cache");
            self.notify(|o| o.on_cache_hit(&key));
            return Ok(hit);
        }

        self.notify(|o| o.on_render(&key));
        let rendered = self
            .rasterizer
            .render(&self.config, &key)
            .and_then(|canvas| encode_png(&canvas));
        let bytes = match rendered {
            Ok(bytes) => EncodedAvatar::from(bytes),
            Err(error) => {
                tracing::error!(key = %key, error = %error, "avatar render failed");
                self.notify(|o| o.on_render_failure(&key, &error));
                return Err(error);
            }
        };

        let len = bytes.len();
        self.cache.put(key.clone(), bytes.clone());
        tracing::debug!(key = %key, bytes = len, "avatar added to cache");
        self.notify(|o| o.on_cache_insert(&key, len));
        Ok(bytes)
    }

    /// Draw a batch in parallel on the rayon pool. Results are in input order.
    pub fn draw_many<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<AvatarResult<EncodedAvatar>> {
        texts.par_iter().map(|t| self.draw(t.as_ref())).collect()
    }

    /// Drop every cached render.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Release the cache. Only the first call has an effect; also run on drop.
    pub fn dispose(&self) {
        if !self.disposed.swap(true, Ordering::AcqRel) {
            self.cache.clear();
        }
    }

    fn notify(&self, f: impl FnOnce(&dyn AvatarObserver)) {
        if let Some(observer) = &self.observer {
            f(observer.as_ref());
        }
    }
}

impl Drop for Avatar {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Avatar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Avatar")
            .field("config", &self.config)
            .field("fonts", &self.rasterizer.fonts().face_count())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/facade.rs"]
mod tests;
