use crate::foundation::core::{Rgba8, Size};
use crate::foundation::error::{AvatarError, AvatarResult};

/// Rendered avatar pixels: straight-alpha RGBA8, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterCanvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterCanvas {
    /// Build a canvas from premultiplied RGBA8 bytes, converting to straight alpha.
    pub(crate) fn from_premul(width: u32, height: u32, premul: &[u8]) -> AvatarResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if premul.len() != expected {
            return Err(AvatarError::render_failure(format!(
                "pixmap has {} bytes, expected {expected} for {width}x{height}",
                premul.len()
            )));
        }
        let mut data = premul.to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px: [u8; 4] = self.data[i..i + 4].try_into().ok()?;
        Some(Rgba8::from(px))
    }

    /// Raw straight-alpha bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
