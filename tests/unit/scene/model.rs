use super::*;
use crate::{scene::dsl::SceneBuilder, text::fonts::FontSpec};

fn sample() -> SceneDescriptor {
    SceneBuilder::new(120, 80)
        .gradient(Rgba8::rgb(15, 23, 42), Rgba8::rgb(37, 99, 235))
        .ellipse([-10, -10, 40, 40], Rgba8::rgba(56, 189, 248, 95))
        .rounded_rect(
            RoundedRectSpec::new([10, 10, 100, 60], 12, Rgba8::rgb(255, 255, 255))
                .outline(Rgba8::rgb(210, 220, 236), 2),
        )
        .text(
            20,
            20,
            "Threads",
            FontSpec::bold(24.0),
            Rgba8::rgb(31, 41, 55),
        )
        .build()
        .unwrap()
}

#[test]
fn builder_keeps_op_order() {
    let desc = sample();
    assert_eq!(desc.ops.len(), 3);
    assert!(matches!(desc.ops[0], DrawOp::Ellipse(_)));
    assert!(matches!(desc.ops[1], DrawOp::RoundedRect(_)));
    assert!(matches!(desc.ops[2], DrawOp::Text(_)));
}

#[test]
fn json_preserves_descriptor() {
    let desc = sample();
    let json = desc.to_json_pretty().unwrap();
    assert!(json.contains("\"op\": \"rounded_rect\""));
    assert!(json.contains("\"kind\": \"gradient\""));
    assert_eq!(SceneDescriptor::from_json_str(&json).unwrap(), desc);
}

#[test]
fn hand_written_json_uses_defaults() {
    let json = r#"{
        "width": 10,
        "height": 10,
        "background": {"kind": "solid", "color": [1, 2, 3]},
        "ops": [
            {"op": "rounded_rect", "x0": 0, "y0": 0, "x1": 9, "y1": 9, "radius": 2,
             "fill": [4, 5, 6, 128]}
        ]
    }"#;
    let desc = SceneDescriptor::from_json_str(json).unwrap();
    let DrawOp::RoundedRect(r) = &desc.ops[0] else {
        panic!("expected rounded rect");
    };
    assert_eq!(r.outline, None);
    assert_eq!(r.outline_width, 1);
    assert_eq!(r.fill, Rgba8::rgba(4, 5, 6, 128));
}

#[test]
fn zero_size_and_bad_font_sizes_are_rejected() {
    assert!(SceneBuilder::new(0, 10).build().is_err());
    let bad = SceneBuilder::new(10, 10)
        .text(0, 0, "x", FontSpec::regular(-1.0), Rgba8::rgb(0, 0, 0))
        .build();
    assert!(matches!(bad, Err(MockshotError::Validation(_))));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SceneDescriptor::from_json_str("{\"width\": 1}").unwrap_err();
    assert!(matches!(err, MockshotError::Serde(_)));
}
