use image::ImageEncoder as _;

use crate::foundation::error::{AvatarError, AvatarResult};
use crate::render::canvas::RasterCanvas;

/// Encode a canvas as an RGBA8 PNG.
pub fn encode_png(canvas: &RasterCanvas) -> AvatarResult<Vec<u8>> {
    let mut buf = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buf)
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| AvatarError::render_failure(format!("encode png: {e}")))?;
    Ok(buf)
}
