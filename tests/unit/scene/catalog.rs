use super::*;
use crate::scene::model::{Background, DrawOp};

#[test]
fn every_still_has_a_valid_descriptor() {
    for scene in CatalogScene::ALL {
        let desc = scene.descriptor().unwrap();
        desc.validate().unwrap();
        assert!(!desc.ops.is_empty(), "{scene} has no ops");
    }
}

#[test]
fn catalog_sizes_and_backgrounds() {
    let hero = hero().unwrap();
    assert_eq!((hero.width, hero.height), (1400, 820));
    assert_eq!(
        hero.background,
        Background::Gradient {
            from: Rgba8::rgb(15, 23, 42),
            to: Rgba8::rgb(37, 99, 235),
        }
    );
    let desktop = desktop_overview().unwrap();
    assert_eq!((desktop.width, desktop.height), (1280, 820));
    assert!(matches!(desktop.background, Background::Solid { .. }));
    let showcase = showcase().unwrap();
    assert_eq!((showcase.width, showcase.height), (1280, 620));
    let mobile = mobile_base().unwrap();
    assert_eq!((mobile.width, mobile.height), (430, 860));
}

#[test]
fn closed_mobile_scene_is_the_bare_base() {
    assert_eq!(mobile_with_sidebar(0.0).unwrap(), mobile_base().unwrap());
}

#[test]
fn open_mobile_scene_adds_overlay_panel_and_labels() {
    let base = mobile_base().unwrap().ops.len();
    let open = mobile_with_sidebar(1.0).unwrap().ops;
    let labels = sidebar_panel().labels.len();
    assert_eq!(labels, 9);
    assert_eq!(open.len(), base + 2 + labels);
    assert!(matches!(open[base], DrawOp::RoundedRect(ref r) if r.fill.a == 120));
}

#[test]
fn scene_names_parse_back() {
    for scene in CatalogScene::ALL {
        assert_eq!(scene.name().parse::<CatalogScene>().unwrap(), scene);
        assert!(scene.file_name().ends_with(".png"));
    }
    assert!("nope".parse::<CatalogScene>().is_err());
}

#[test]
fn demo_fractions_hold_at_both_ends() {
    assert_eq!(SIDEBAR_DEMO_FRACTIONS.len(), 10);
    assert_eq!(SIDEBAR_DEMO_FRACTIONS[4], SIDEBAR_DEMO_FRACTIONS[5]);
    assert_eq!(SIDEBAR_DEMO_FRACTIONS[0], SIDEBAR_DEMO_FRACTIONS[9]);
    assert_eq!(SIDEBAR_DEMO_FRAME_MS, 180);
    assert_eq!(SIDEBAR_DEMO_LOOPS, 0);
}
