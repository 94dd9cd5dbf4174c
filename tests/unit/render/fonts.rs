use super::*;
use crate::config::model::FontStyle;
use crate::fixtures::{DEJAVU_SANS, DEJAVU_SANS_MONO_BOLD, font_collection, fonts_from};

#[test]
fn empty_library_cannot_resolve_anything() {
    let lib = FontLibrary::empty();
    assert_eq!(lib.face_count(), 0);

    let err = lib.resolve(&FontSpec::default()).unwrap_err();
    assert!(matches!(err, AvatarError::RenderFailure(_)));
    assert!(err.to_string().contains("sans-serif"));
}

#[test]
fn missing_named_family_is_render_failure() {
    let lib = fonts_from(&[DEJAVU_SANS]);
    let spec = FontSpec::new(
        FontFamily::named("No Such Family 7f3a"),
        FontStyle::BOLD,
        28.0,
    );
    let err = lib.resolve(&spec).unwrap_err();
    assert!(matches!(err, AvatarError::RenderFailure(_)));
    assert!(err.to_string().contains("No Such Family 7f3a"));
}

#[test]
fn garbage_font_bytes_add_no_faces() {
    let mut lib = FontLibrary::empty();
    assert_eq!(lib.register_font_data(b"definitely not a font".to_vec()), 0);
    assert_eq!(lib.face_count(), 0);
}

#[test]
fn missing_font_dir_is_io_failure() {
    let mut lib = FontLibrary::empty();
    let err = lib
        .load_fonts_from_dir("does/not/exist/fonts")
        .unwrap_err();
    assert!(matches!(err, AvatarError::IoFailure { .. }));
}

#[test]
fn registered_face_resolves_by_name_and_generic_fallback() {
    let mut lib = FontLibrary::empty();
    assert_eq!(lib.register_font_data(DEJAVU_SANS.to_vec()), 1);

    let id = lib.resolve(&FontSpec::default()).unwrap();
    assert_eq!(lib.family_name(id), Some("DejaVu Sans"));
    assert!(lib.has_family("DejaVu Sans"));

    let named = FontSpec::new(FontFamily::named("DejaVu Sans"), FontStyle::REGULAR, 12.0);
    assert_eq!(lib.resolve(&named).unwrap(), id);

    let (data, index) = lib.face_data(id).unwrap();
    assert_eq!(data, DEJAVU_SANS);
    assert_eq!(index, 0);
}

#[test]
fn generic_families_prefer_matching_fallbacks() {
    let lib = fonts_from(&[DEJAVU_SANS, DEJAVU_SANS_MONO_BOLD]);
    let mono = lib
        .resolve(&FontSpec::new(FontFamily::Monospace, FontStyle::BOLD, 12.0))
        .unwrap();
    assert_eq!(lib.family_name(mono), Some("DejaVu Sans Mono"));

    let sans = lib
        .resolve(&FontSpec::new(FontFamily::SansSerif, FontStyle::BOLD, 12.0))
        .unwrap();
    assert_eq!(lib.family_name(sans), Some("DejaVu Sans"));
}

#[test]
fn collection_faces_keep_their_index() {
    let ttc = font_collection(&[DEJAVU_SANS, DEJAVU_SANS_MONO_BOLD]);
    let mut lib = FontLibrary::empty();
    assert_eq!(lib.register_font_data(ttc.clone()), 2);

    let spec = FontSpec::new(FontFamily::named("DejaVu Sans Mono"), FontStyle::BOLD, 12.0);
    let id = lib.resolve(&spec).unwrap();
    let (data, index) = lib.face_data(id).unwrap();
    assert_eq!(index, 1);
    assert_eq!(data, ttc);
}

#[test]
fn fonts_load_from_directory() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/fonts");
    let mut lib = FontLibrary::empty();
    assert_eq!(lib.load_fonts_from_dir(&dir).unwrap(), 2);
    assert!(lib.has_family("DejaVu Sans"));
    assert!(lib.has_family("DejaVu Sans Mono"));
}

#[test]
fn clones_do_not_share_registrations() {
    let base = FontLibrary::empty();
    let mut extended = base.clone();
    extended.register_font_data(DEJAVU_SANS.to_vec());
    assert_eq!(base.face_count(), 0);
    assert_eq!(extended.face_count(), 1);
}
