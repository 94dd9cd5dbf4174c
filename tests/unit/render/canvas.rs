use super::*;

#[test]
fn unpremultiplies_and_samples_pixels() {
    // opaque red, half-transparent premultiplied blue, fully transparent junk
    let premul = [255, 0, 0, 255, 0, 0, 64, 128, 9, 9, 9, 0, 1, 2, 3, 255];
    let canvas = RasterCanvas::from_premul(2, 2, &premul).unwrap();

    assert_eq!(canvas.size(), Size::new(2, 2));
    assert_eq!(canvas.pixel(0, 0), Some(Rgba8::RED));
    assert_eq!(canvas.pixel(1, 0), Some(Rgba8::rgba(0, 0, 128, 128)));
    assert_eq!(canvas.pixel(0, 1), Some(Rgba8::TRANSPARENT));
    assert_eq!(canvas.pixel(1, 1), Some(Rgba8::rgb(1, 2, 3)));
    assert_eq!(canvas.pixel(2, 0), None);
    assert_eq!(canvas.pixel(0, 2), None);
    assert_eq!(canvas.as_raw().len(), 16);
}

#[test]
fn rejects_mismatched_buffer_length() {
    let err = RasterCanvas::from_premul(2, 2, &[0; 12]).unwrap_err();
    assert!(matches!(err, AvatarError::RenderFailure(_)));
}
