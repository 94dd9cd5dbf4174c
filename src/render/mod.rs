//! CPU rasterization of avatars and PNG encoding.
//!
//! A render is: clear to the background color, fill the shape, draw the content centered.
//! Text is shaped with `parley` against a face resolved from the [`fonts::FontLibrary`], and
//! everything is rasterized by `vello_cpu` into premultiplied RGBA8 before being converted to
//! a straight-alpha [`canvas::RasterCanvas`].

pub(crate) mod canvas;
pub(crate) mod encode;
pub(crate) mod fonts;
pub(crate) mod raster;
pub(crate) mod text;
