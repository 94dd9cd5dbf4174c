use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::color::derive::color_for_content;
use crate::foundation::core::{Rgba8, Size};
use crate::foundation::error::{AvatarError, AvatarResult};

/// Logical DPI used to turn font point sizes into pixels.
pub const FONT_DPI: f32 = 96.0;

/// Geometric fill painted behind the text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Fills the whole canvas.
    #[default]
    Rectangle,
    /// Ellipse inscribed in `(0,0)..(width-1,height-1)`.
    Ellipse,
}

/// Font family selector.
///
/// Serialized as a plain string: `sans-serif`, `serif`, `monospace`, or any other family name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FontFamily {
    /// Generic sans-serif family.
    #[default]
    SansSerif,
    /// Generic serif family.
    Serif,
    /// Generic monospace family.
    Monospace,
    /// A specific installed or registered family.
    Named(String),
}

impl FontFamily {
    /// Build a named family.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Return `true` for the generic families.
    pub fn is_generic(&self) -> bool {
        !matches!(self, Self::Named(_))
    }
}

impl From<String> for FontFamily {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "sans-serif" | "sansserif" | "sans" => Self::SansSerif,
            "serif" => Self::Serif,
            "monospace" | "mono" => Self::Monospace,
            _ => Self::Named(s.trim().to_owned()),
        }
    }
}

impl From<&str> for FontFamily {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl From<FontFamily> for String {
    fn from(f: FontFamily) -> Self {
        f.to_string()
    }
}

impl std::fmt::Display for FontFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SansSerif => f.write_str("sans-serif"),
            Self::Serif => f.write_str("serif"),
            Self::Monospace => f.write_str("monospace"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Font style flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FontStyle {
    /// Bold weight (700) instead of regular (400).
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
}

impl FontStyle {
    /// Regular upright.
    pub const REGULAR: Self = Self {
        bold: false,
        italic: false,
    };
    /// Bold upright.
    pub const BOLD: Self = Self {
        bold: true,
        italic: false,
    };
    /// Regular italic.
    pub const ITALIC: Self = Self {
        bold: false,
        italic: true,
    };
    /// Bold italic.
    pub const BOLD_ITALIC: Self = Self {
        bold: true,
        italic: true,
    };

    /// CSS-style numeric weight.
    pub fn weight(self) -> u16 {
        if self.bold { 700 } else { 400 }
    }
}

/// Family, style flags and point size of the avatar text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontSpec {
    /// Family selector.
    pub family: FontFamily,
    /// Style flags.
    pub style: FontStyle,
    /// Size in points.
    pub point_size: f32,
}

impl FontSpec {
    /// Build a font spec.
    pub fn new(family: impl Into<FontFamily>, style: FontStyle, point_size: f32) -> Self {
        Self {
            family: family.into(),
            style,
            point_size,
        }
    }

    /// Size in pixels at [`FONT_DPI`].
    pub fn pixel_size(&self) -> f32 {
        self.point_size * FONT_DPI / 72.0
    }

    /// Check that the point size is finite and positive.
    pub fn validate(&self) -> AvatarResult<()> {
        if !self.point_size.is_finite() || self.point_size <= 0.0 {
            return Err(AvatarError::invalid_input(format!(
                "font size must be finite and > 0, got {}",
                self.point_size
            )));
        }
        Ok(())
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, FontStyle::BOLD, 28.0)
    }
}

/// Avatar appearance.
///
/// Setters take `&mut self` and return `&mut Self` so they chain. Values are validated as a
/// whole by [`AvatarConfig::validate`], which the draw path calls before every render.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvatarConfig {
    shape: Shape,
    size: Size,
    font: FontSpec,
    background_color: Rgba8,
    fill_color: Rgba8,
    fore_color: Rgba8,
    derive_fill_from_content: bool,
    first_letter_only: bool,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            shape: Shape::Rectangle,
            size: Size::default(),
            font: FontSpec::default(),
            background_color: Rgba8::WHITE,
            fill_color: Rgba8::LIGHT_GRAY,
            fore_color: Rgba8::WHITE,
            derive_fill_from_content: true,
            first_letter_only: true,
        }
    }
}

impl AvatarConfig {
    /// Parse a config from JSON and validate it. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> AvatarResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| AvatarError::invalid_input(format!("parse avatar config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> AvatarResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| AvatarError::invalid_input(format!("parse avatar config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> AvatarResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| AvatarError::io(path, e))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check size and font invariants.
    pub fn validate(&self) -> AvatarResult<()> {
        self.size.validate()?;
        self.font.validate()
    }

    /// Set the canvas size in pixels.
    pub fn set_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.size = Size::new(width, height);
        self
    }

    /// Set the shape.
    pub fn set_shape(&mut self, shape: Shape) -> &mut Self {
        self.shape = shape;
        self
    }

    /// Shorthand for `set_shape(Shape::Rectangle)`.
    pub fn as_rectangle(&mut self) -> &mut Self {
        self.set_shape(Shape::Rectangle)
    }

    /// Shorthand for `set_shape(Shape::Ellipse)`.
    pub fn as_ellipse(&mut self) -> &mut Self {
        self.set_shape(Shape::Ellipse)
    }

    /// Set the text font.
    pub fn set_font(
        &mut self,
        family: impl Into<FontFamily>,
        style: FontStyle,
        point_size: f32,
    ) -> &mut Self {
        self.font = FontSpec::new(family, style, point_size);
        self
    }

    /// Set the color painted behind the shape.
    pub fn set_background(&mut self, color: Rgba8) -> &mut Self {
        self.background_color = color;
        self
    }

    /// Use a fixed shape fill. Turns off derivation from content.
    pub fn fill(&mut self, color: Rgba8) -> &mut Self {
        self.fill_color = color;
        self.derive_fill_from_content = false;
        self
    }

    /// Derive the shape fill from the content's first character.
    pub fn derive_fill_from_content(&mut self) -> &mut Self {
        self.derive_fill_from_content = true;
        self
    }

    /// Set the text color.
    pub fn set_fore_color(&mut self, color: Rgba8) -> &mut Self {
        self.fore_color = color;
        self
    }

    /// Choose between "first letter, uppercased" and "whole trimmed text, uppercased" as the
    /// default content transform.
    pub fn set_first_letter_only(&mut self, first_letter_only: bool) -> &mut Self {
        self.first_letter_only = first_letter_only;
        self
    }

    /// Current shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Current canvas size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current font.
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// Background color.
    pub fn background_color(&self) -> Rgba8 {
        self.background_color
    }

    /// Configured fixed fill color (used only when derivation is off).
    pub fn fill_color(&self) -> Rgba8 {
        self.fill_color
    }

    /// Text color.
    pub fn fore_color(&self) -> Rgba8 {
        self.fore_color
    }

    /// Whether the fill is derived from content.
    pub fn derives_fill_from_content(&self) -> bool {
        self.derive_fill_from_content
    }

    /// Whether the default transform keeps only the first letter.
    pub fn first_letter_only(&self) -> bool {
        self.first_letter_only
    }

    /// Fill color used for `content`.
    pub fn effective_fill(&self, content: &str) -> Rgba8 {
        if self.derive_fill_from_content {
            color_for_content(content)
        } else {
            self.fill_color
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
