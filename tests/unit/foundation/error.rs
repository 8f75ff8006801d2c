use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GreenscreenError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GreenscreenError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        GreenscreenError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        GreenscreenError::missing_input("x")
            .to_string()
            .contains("missing input:")
    );
    assert!(
        GreenscreenError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GreenscreenError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
