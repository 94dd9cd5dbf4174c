use super::*;
use crate::avatar::observer::RenderCounter;
use crate::config::model::FontFamily;
use crate::foundation::core::Rgba8;
use crate::fixtures::fixture_fonts;
use crate::foundation::error::AvatarError;

fn fixture_avatar() -> Avatar {
    Avatar::default().with_fonts(fixture_fonts())
}

#[test]
fn second_draw_is_a_cache_hit() {
    let avatar = fixture_avatar();
    let counter = Arc::new(RenderCounter::new());
    let avatar = avatar.with_observer(counter.clone());

    let a = avatar.draw("alice").unwrap();
    let b = avatar.draw("  Anna ").unwrap();
    assert_eq!(a, b);
    assert_eq!(counter.renders(), 1);
    assert_eq!(counter.inserts(), 1);
    assert_eq!(counter.hits(), 1);
    assert_eq!(avatar.cache.len(), 1);
}

#[test]
fn invalid_text_fails_before_transform_and_cache() {
    let avatar = Avatar::default();
    let mut called = false;
    let err = avatar
        .draw_with("  \t", |s| {
            called = true;
            s.to_owned()
        })
        .unwrap_err();
    assert!(matches!(err, AvatarError::InvalidInput(_)));
    assert!(!called);
    assert_eq!(avatar.cache.len(), 0);
}

#[test]
fn empty_transform_output_is_invalid_input() {
    let avatar = Avatar::default();
    let err = avatar.draw_with("abc", |_| String::new()).unwrap_err();
    assert!(matches!(err, AvatarError::InvalidInput(_)));
}

#[test]
fn missing_font_is_reported_without_caching() {
    let counter = Arc::new(RenderCounter::new());
    let mut avatar = fixture_avatar().with_observer(counter.clone());
    avatar.config_mut().set_font(
        FontFamily::named("No Such Family 1f2e3d"),
        crate::config::model::FontStyle::BOLD,
        28.0,
    );

    let err = avatar.draw("x").unwrap_err();
    assert!(matches!(err, AvatarError::RenderFailure(_)));
    assert_eq!(counter.failures(), 1);
    assert_eq!(counter.inserts(), 0);
    assert_eq!(avatar.cache.len(), 0);
}

#[test]
fn config_changes_do_not_invalidate_cached_renders() {
    let mut avatar = fixture_avatar();
    let first = avatar.draw("Z").unwrap();
    avatar.config_mut().set_background(Rgba8::BLUE).as_ellipse();
    assert_eq!(avatar.draw("z").unwrap(), first);

    avatar.clear_cache();
    assert_ne!(avatar.draw("z").unwrap(), first);
}

#[test]
fn dispose_is_idempotent() {
    let avatar = fixture_avatar();
    avatar.draw("Q").unwrap();
    avatar.dispose();
    assert_eq!(avatar.cache.len(), 0);
    avatar.dispose();
    assert_eq!(avatar.cache.len(), 0);
}

#[test]
fn draw_many_keeps_input_order() {
    let avatar = fixture_avatar();
    let out = avatar.draw_many(&["bob", "", "amy", "Bea"]);
    assert_eq!(out.len(), 4);
    assert!(out[1].is_err());
    let bob = out[0].as_ref().unwrap();
    let bea = out[3].as_ref().unwrap();
    assert_eq!(bob, bea);
    assert_ne!(bob, out[2].as_ref().unwrap());
}
