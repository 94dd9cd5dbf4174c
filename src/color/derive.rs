use crate::foundation::core::Rgba8;

/// Multiplier applied to a code point before it is split into RGB channels.
pub const DERIVE_MULTIPLIER: u32 = 1300;

/// Deterministic fill color for one character.
///
/// The code point is scaled by [`DERIVE_MULTIPLIER`] and reduced modulo `2^24`; the result is
/// read as `0xRRGGBB` (red = bits 16..=23, green = bits 8..=15, blue = bits 0..=7). Alpha is
/// always opaque.
pub fn derive_color(seed: char) -> Rgba8 {
    // 0x10FFFF * 1300 still fits in u32.
    let v = (u32::from(seed) * DERIVE_MULTIPLIER) & 0x00FF_FFFF;
    Rgba8::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// Fill color for transformed content, seeded by its first character.
///
/// Empty content maps to opaque black.
pub fn color_for_content(content: &str) -> Rgba8 {
    content.chars().next().map_or(Rgba8::BLACK, derive_color)
}

#[cfg(test)]
#[path = "../../tests/unit/color/derive.rs"]
mod tests;
