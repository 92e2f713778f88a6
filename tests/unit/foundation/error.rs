use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MockshotError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(MockshotError::font("x").to_string().contains("font error:"));
    assert!(
        MockshotError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        MockshotError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        MockshotError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MockshotError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: MockshotError = serde_json::from_str::<u32>("not json").unwrap_err().into();
    assert!(matches!(err, MockshotError::Serde(_)));
}
