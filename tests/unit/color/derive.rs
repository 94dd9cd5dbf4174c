use std::collections::HashSet;

use super::*;

#[test]
fn known_values_are_pinned() {
    // 'A' = 65, 65 * 1300 = 84_500 = 0x01_4A_14
    assert_eq!(derive_color('A'), Rgba8::rgb(0x01, 0x4A, 0x14));
    // 'Z' = 90, 90 * 1300 = 117_000 = 0x01_C9_08
    assert_eq!(derive_color('Z'), Rgba8::rgb(0x01, 0xC9, 0x08));
    // '1' = 49, 49 * 1300 = 63_700 = 0x00_F8_D4
    assert_eq!(derive_color('1'), Rgba8::rgb(0x00, 0xF8, 0xD4));
    assert_eq!(derive_color('\0'), Rgba8::BLACK);
}

#[test]
fn wraps_modulo_24_bits() {
    // U+10FFFF * 1300 = 1_448_344_300 = 0x56_53_FA_EC -> low 24 bits 0x53_FA_EC
    assert_eq!(derive_color('\u{10FFFF}'), Rgba8::rgb(0x53, 0xFA, 0xEC));
}

#[test]
fn is_stable_across_calls() {
    for c in ['A', 'b', 'Ж', '中', '🙂'] {
        assert_eq!(derive_color(c), derive_color(c));
        assert_eq!(derive_color(c).a, 255);
    }
}

#[test]
fn uppercase_alphabet_has_no_collisions() {
    let colors: HashSet<Rgba8> = ('A'..='Z').map(derive_color).collect();
    assert_eq!(colors.len(), 26);
}

#[test]
fn content_uses_first_char_and_falls_back_to_black() {
    assert_eq!(color_for_content("AB"), derive_color('A'));
    assert_eq!(color_for_content("B."), derive_color('B'));
    assert_eq!(color_for_content(""), Rgba8::BLACK);
}
