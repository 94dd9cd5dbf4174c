//! Fonts shipped with the test suite, so rendering tests never depend on installed fonts.

use crate::render::fonts::FontLibrary;

pub(crate) const DEJAVU_SANS: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/fonts/DejaVuSans.ttf"
));

pub(crate) const DEJAVU_SANS_MONO_BOLD: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/fonts/DejaVuSansMono-Bold.ttf"
));

/// Library with a face per fixture file.
pub(crate) fn fixture_fonts() -> FontLibrary {
    let mut fonts = FontLibrary::empty();
    fonts.register_font_data(DEJAVU_SANS.to_vec());
    fonts.register_font_data(DEJAVU_SANS_MONO_BOLD.to_vec());
    fonts
}

/// Library holding exactly the faces in `files`.
pub(crate) fn fonts_from(files: &[&[u8]]) -> FontLibrary {
    let mut fonts = FontLibrary::empty();
    for bytes in files {
        fonts.register_font_data(bytes.to_vec());
    }
    fonts
}

/// Pack single-face TrueType files into one `ttcf` collection, face order preserved.
pub(crate) fn font_collection(faces: &[&[u8]]) -> Vec<u8> {
    fn be32(b: &[u8], at: usize) -> usize {
        u32::from_be_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]]) as usize
    }

    let mut out = Vec::new();
    out.extend_from_slice(b"ttcf");
    out.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    out.extend_from_slice(&(faces.len() as u32).to_be_bytes());
    out.resize(12 + 4 * faces.len(), 0);

    for (i, face) in faces.iter().enumerate() {
        let num_tables = usize::from(u16::from_be_bytes([face[4], face[5]]));
        let dir_start = out.len();
        out[12 + 4 * i..16 + 4 * i].copy_from_slice(&(dir_start as u32).to_be_bytes());
        out.extend_from_slice(&face[..12 + 16 * num_tables]);

        for t in 0..num_tables {
            let rec = 12 + 16 * t;
            let (off, len) = (be32(face, rec + 8), be32(face, rec + 12));
            while out.len() % 4 != 0 {
                out.push(0);
            }
            let moved = out.len() as u32;
            out.extend_from_slice(&face[off..off + len]);
            let slot = dir_start + rec + 8;
            out[slot..slot + 4].copy_from_slice(&moved.to_be_bytes());
        }
    }
    out
}
