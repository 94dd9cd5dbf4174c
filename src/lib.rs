//! Lettermark draws letter avatars: a filled rectangle or ellipse with one centered line of
//! text, encoded as PNG.
//!
//! - Configure an [`AvatarConfig`] (size, shape, font, colors)
//! - Create an [`Avatar`] and call [`Avatar::draw`]
//! - Reuse the returned [`EncodedAvatar`]; repeated content is served from an in-memory cache
//!
//! Unless a fill color is set explicitly, the shape color is derived from the first character
//! of the content, so the same initial always gets the same color.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod avatar;
mod cache;
mod color;
mod config;
mod content;
mod foundation;
mod render;

#[cfg(test)]
#[path = "../tests/unit/fixtures.rs"]
mod fixtures;

pub use crate::avatar::facade::Avatar;
pub use crate::avatar::observer::{AvatarObserver, RenderCounter};
pub use crate::avatar::output::EncodedAvatar;
pub use crate::color::derive::{DERIVE_MULTIPLIER, color_for_content, derive_color};
pub use crate::config::model::{AvatarConfig, FONT_DPI, FontFamily, FontSpec, FontStyle, Shape};
pub use crate::content::{default_transform, validate_input};
pub use crate::foundation::core::{MAX_EDGE_PX, Rgba8, Size};
pub use crate::foundation::error::{AvatarError, AvatarResult, ErrorKind};
pub use crate::render::canvas::RasterCanvas;
pub use crate::render::encode::encode_png;
pub use crate::render::fonts::FontLibrary;
pub use crate::render::raster::Rasterizer;
