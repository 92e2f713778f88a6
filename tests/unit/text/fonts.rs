use super::*;

#[test]
fn empty_database_falls_back_to_builtin_glyphs() {
    let mut fonts = FontProvider::builtin_only();
    assert_eq!(fonts.face_count(), 0);
    let handle = fonts.load_font("No Such Family", FontWeight::Bold, 24.0);
    assert!(matches!(handle.source, FontSource::Builtin));
    assert!(handle.fallback);
    assert_eq!(handle.size_px, 24.0);
}

#[test]
fn resolution_is_cached_per_family_and_weight() {
    let mut fonts = FontProvider::builtin_only();
    let a = fonts.load_font("X", FontWeight::Regular, 10.0);
    let b = fonts.load_font("X", FontWeight::Regular, 40.0);
    assert_eq!(fonts.resolved.len(), 1);
    assert_eq!(a.fallback, b.fallback);
    assert_eq!(b.size_px, 40.0);
    fonts.load_font("X", FontWeight::Bold, 10.0);
    assert_eq!(fonts.resolved.len(), 2);
}

#[test]
fn missing_family_never_errors_with_system_fonts() {
    let mut fonts = FontProvider::new(&RenderSettings::default());
    let handle = fonts.load_spec(&FontSpec {
        family: "Definitely Not Installed 1234".to_string(),
        weight: FontWeight::Regular,
        size_px: 18.0,
    });
    assert!(handle.fallback);
}

#[test]
fn font_spec_helpers_use_default_family() {
    assert_eq!(FontSpec::bold(64.0).family, DEFAULT_FAMILY);
    assert_eq!(FontSpec::bold(64.0).weight, FontWeight::Bold);
    assert_eq!(FontSpec::regular(18.0).weight, FontWeight::Regular);
}

#[test]
fn font_spec_weight_defaults_to_regular_in_json() {
    let spec: FontSpec = serde_json::from_str(r#"{"family":"A","size_px":12.0}"#).unwrap();
    assert_eq!(spec.weight, FontWeight::Regular);
}
