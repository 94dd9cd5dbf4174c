use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AvatarError::invalid_input("x")
            .to_string()
            .contains("invalid input:")
    );
    assert!(
        AvatarError::render_failure("x")
            .to_string()
            .contains("render failure:")
    );
    let io = AvatarError::io("out/a.png", std::io::Error::other("disk full"));
    let msg = io.to_string();
    assert!(msg.contains("io failure:"));
    assert!(msg.contains("out/a.png"));
    assert!(msg.contains("disk full"));
}

#[test]
fn kinds_match_variants() {
    assert_eq!(
        AvatarError::invalid_input("x").kind(),
        ErrorKind::InvalidInput
    );
    assert_eq!(
        AvatarError::render_failure("x").kind(),
        ErrorKind::RenderFailure
    );
    assert_eq!(
        AvatarError::io("a", std::io::Error::other("x")).kind(),
        ErrorKind::IoFailure
    );
    assert_eq!(
        AvatarError::from(anyhow::anyhow!("x")).kind(),
        ErrorKind::Other
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AvatarError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
