use serde_json::json;

use super::*;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgba8::RED);

    let c: Rgba8 = serde_json::from_value(json!("0000ff80")).unwrap();
    assert_eq!(c, Rgba8::rgba(0, 0, 255, 0x80));
}

#[test]
fn parses_object_and_array() {
    let c: Rgba8 = serde_json::from_value(json!({"r": 10, "g": 20, "b": 30})).unwrap();
    assert_eq!(c, Rgba8::rgb(10, 20, 30));

    let c: Rgba8 = serde_json::from_value(json!([10, 20, 30, 40])).unwrap();
    assert_eq!(c, Rgba8::rgba(10, 20, 30, 40));

    assert!(serde_json::from_value::<Rgba8>(json!([1, 2])).is_err());
    assert!(serde_json::from_value::<Rgba8>(json!({"r": 300, "g": 0, "b": 0})).is_err());
}

#[test]
fn serializes_as_hex() {
    let v = serde_json::to_value(Rgba8::CORNFLOWER_BLUE).unwrap();
    assert_eq!(v, json!("#6495EDFF"));
    let back: Rgba8 = serde_json::from_value(v).unwrap();
    assert_eq!(back, Rgba8::CORNFLOWER_BLUE);
}

#[test]
fn from_str_accepts_names_and_rejects_garbage() {
    assert_eq!("LightGray".parse::<Rgba8>().unwrap(), Rgba8::LIGHT_GRAY);
    assert_eq!("white".parse::<Rgba8>().unwrap(), Rgba8::WHITE);
    assert_eq!("#FFE4C4".parse::<Rgba8>().unwrap(), Rgba8::BISQUE);

    for bad in ["", "#12345", "#GGGGGG", "mauve", "#ÿÿÿ"] {
        let err = bad.parse::<Rgba8>().unwrap_err();
        assert!(matches!(err, AvatarError::InvalidInput(_)), "{bad:?}");
    }
}
