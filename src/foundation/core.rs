use crate::foundation::error::{AvatarError, AvatarResult};

pub use kurbo::{BezPath, Ellipse, Point, Rect};

/// Largest raster edge accepted by the CPU backend.
pub const MAX_EDGE_PX: u32 = u16::MAX as u32;

/// Straight (non-premultiplied) RGBA8 color. Defaults to transparent black.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Opaque light gray (`#D3D3D3`).
    pub const LIGHT_GRAY: Self = Self::rgb(211, 211, 211);
    /// Opaque cornflower blue (`#6495ED`).
    pub const CORNFLOWER_BLUE: Self = Self::rgb(100, 149, 237);
    /// Opaque bisque (`#FFE4C4`).
    pub const BISQUE: Self = Self::rgb(255, 228, 196);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as an `[r, g, b, a]` array.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `#RRGGBBAA` representation.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// `#RRGGBB` representation, ignoring alpha.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub(crate) fn to_paint(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Avatar dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Unvalidated size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check that both edges are positive and within the raster backend limit.
    pub fn validate(self) -> AvatarResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(AvatarError::invalid_input(format!(
                "avatar size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_EDGE_PX || self.height > MAX_EDGE_PX {
            return Err(AvatarError::invalid_input(format!(
                "avatar size {}x{} exceeds {MAX_EDGE_PX}x{MAX_EDGE_PX}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Full-extent rectangle `(0,0)..(width,height)`.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(90, 90)
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl std::str::FromStr for Size {
    type Err = AvatarError;

    /// Parse `WxH`, e.g. `90x90`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| AvatarError::invalid_input(format!("size must be WxH, got \"{s}\"")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| AvatarError::invalid_input(format!("invalid size edge \"{v}\"")))
        };
        let size = Self::new(parse(w)?, parse(h)?);
        size.validate()?;
        Ok(size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
