use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;
use crate::foundation::error::AvatarError;

impl Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
            Arr(Vec<u8>),
        }

        fn opaque() -> u8 {
            255
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_color(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                &[r, g, b] => Ok(Self::rgb(r, g, b)),
                &[r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

impl std::str::FromStr for Rgba8 {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s).map_err(AvatarError::invalid_input)
    }
}

/// Parse `#RRGGBB`, `#RRGGBBAA` (leading `#` optional) or one of the named colors.
pub(crate) fn parse_color(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    if let Some(named) = named_color(s) {
        return Ok(named);
    }
    let hex = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !hex.is_ascii() {
        return Err(format!("unknown color \"{s}\""));
    }
    match hex.len() {
        6 => Ok(Rgba8::rgb(
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
        )),
        8 => Ok(Rgba8::rgba(
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            hex_byte(&hex[6..8])?,
        )),
        _ => Err(format!(
            "color must be a known name, #RRGGBB or #RRGGBBAA, got \"{s}\""
        )),
    }
}

fn named_color(s: &str) -> Option<Rgba8> {
    let c = match s.to_ascii_lowercase().as_str() {
        "white" => Rgba8::WHITE,
        "black" => Rgba8::BLACK,
        "red" => Rgba8::RED,
        "green" => Rgba8::GREEN,
        "blue" => Rgba8::BLUE,
        "lightgray" | "lightgrey" => Rgba8::LIGHT_GRAY,
        "cornflowerblue" => Rgba8::CORNFLOWER_BLUE,
        "bisque" => Rgba8::BISQUE,
        "transparent" => Rgba8::TRANSPARENT,
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/color/parse.rs"]
mod tests;
