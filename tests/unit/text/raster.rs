use super::*;

fn builtin() -> TextRenderer {
    TextRenderer::new(FontProvider::builtin_only())
}

#[test]
fn builtin_blocks_skip_whitespace() {
    let mask = rasterize_blocks("a b", 10.0).unwrap();
    assert_eq!(mask.width, 18);
    assert_eq!(mask.height, 10);
    // Blocks span x in [0,5) and [12,17), rows [2,8).
    let at = |x: u32, y: u32| mask.coverage[(y * mask.width + x) as usize];
    assert_eq!(at(0, 2), 255);
    assert_eq!(at(4, 7), 255);
    assert_eq!(at(5, 5), 0);
    assert_eq!(at(7, 5), 0);
    assert_eq!(at(12, 5), 255);
    assert_eq!(at(0, 1), 0);
    assert_eq!(at(0, 8), 0);
}

#[test]
fn draw_text_paints_at_origin_with_color() {
    let mut r = builtin();
    let mut canvas = Canvas::new(60, 30, Rgba8::rgb(255, 255, 255)).unwrap();
    let ink = Rgba8::rgb(17, 24, 39);
    r.draw_text(
        &mut canvas,
        &TextSpec::new(10, 5, "Hi", FontSpec::regular(10.0), ink),
    )
    .unwrap();
    assert_eq!(canvas.pixel(10, 7), Some(ink));
    assert_eq!(canvas.pixel(9, 7), Some(Rgba8::rgb(255, 255, 255)));
    assert_eq!(canvas.pixel(10, 4), Some(Rgba8::rgb(255, 255, 255)));
}

#[test]
fn transparent_or_empty_text_is_noop() {
    let mut r = builtin();
    let mut canvas = Canvas::new(20, 20, Rgba8::rgb(1, 2, 3)).unwrap();
    let before = canvas.clone();
    r.draw_text(
        &mut canvas,
        &TextSpec::new(0, 0, "abc", FontSpec::bold(12.0), Rgba8::rgba(0, 0, 0, 0)),
    )
    .unwrap();
    r.draw_text(
        &mut canvas,
        &TextSpec::new(0, 0, "", FontSpec::bold(12.0), Rgba8::rgb(0, 0, 0)),
    )
    .unwrap();
    assert_eq!(canvas, before);
}

#[test]
fn overflowing_text_is_clipped_by_the_canvas_only() {
    let mut r = builtin();
    let mut canvas = Canvas::new(16, 16, Rgba8::rgb(0, 0, 0)).unwrap();
    r.draw_text(
        &mut canvas,
        &TextSpec::new(
            8,
            0,
            "a long label that overflows",
            FontSpec::regular(10.0),
            Rgba8::rgb(255, 255, 255),
        ),
    )
    .unwrap();
    assert_eq!(canvas.pixel(8, 5), Some(Rgba8::rgb(255, 255, 255)));
}

#[test]
fn invalid_size_is_rejected() {
    let mut r = builtin();
    assert!(r.rasterize("x", &FontSpec::regular(0.0)).is_err());
    assert!(r.rasterize("x", &FontSpec::regular(f32::NAN)).is_err());
}

#[test]
fn system_fonts_produce_some_coverage() {
    let mut r = TextRenderer::new(FontProvider::new(
        &crate::render::settings::RenderSettings::default(),
    ));
    let mask = r.rasterize("Threads", &FontSpec::bold(24.0)).unwrap();
    assert!(!mask.is_blank());
}

#[test]
fn oversized_builtin_text_is_rejected_before_allocating() {
    let mut r = builtin();
    let err = r
        .rasterize("wide", &FontSpec::regular(1.0e6))
        .unwrap_err();
    assert!(matches!(err, MockshotError::Render(_)));
    assert!(r.rasterize("x", &FontSpec::regular(70_000.0)).is_err());
}

#[test]
fn resolved_face_ink_spans_the_run_inside_the_line_box() {
    let provider = FontProvider::new(&crate::render::settings::RenderSettings::default());
    if provider.face_count() == 0 {
        return;
    }
    let mut r = TextRenderer::new(provider);
    let font = FontSpec::regular(24.0);
    let handle = r.fonts().load_spec(&font);
    assert!(matches!(handle.source, FontSource::Face(_)));

    let mask = r.rasterize("HHHHHHHH", &font).unwrap();
    let (w, h) = (mask.width as usize, mask.height as usize);
    let inked = |x: usize, y: usize| mask.coverage[y * w + x] > 0;

    let cols: Vec<usize> = (0..w).filter(|&x| (0..h).any(|y| inked(x, y))).collect();
    let rows: Vec<usize> = (0..h).filter(|&y| (0..w).any(|x| inked(x, y))).collect();
    assert!(!cols.is_empty(), "no ink for a resolved face");

    // Eight glyphs side by side, not stacked at the origin.
    let (first, last) = (cols[0], cols[cols.len() - 1]);
    assert!(first < w / 4, "ink starts at column {first} of {w}");
    assert!(last > w * 3 / 4, "ink ends at column {last} of {w}");

    // Cap height sits well inside the box: ink above the bottom edge, several rows tall.
    assert!(rows[0] < h / 2, "ink starts at row {} of {h}", rows[0]);
    assert!(rows.len() >= 8);
    assert!(rows[rows.len() - 1] < h - 1);
}

#[test]
fn resolved_face_paints_onto_the_canvas() {
    let provider = FontProvider::new(&crate::render::settings::RenderSettings::default());
    if provider.face_count() == 0 {
        return;
    }
    let mut r = TextRenderer::new(provider);
    let mut canvas = Canvas::new(200, 40, Rgba8::rgb(255, 255, 255)).unwrap();
    r.draw_text(
        &mut canvas,
        &TextSpec::new(4, 4, "New thread", FontSpec::regular(18.0), Rgba8::rgb(0, 0, 0)),
    )
    .unwrap();
    let dark = canvas
        .data()
        .chunks_exact(4)
        .filter(|px| px[0] < 128)
        .count();
    assert!(dark > 20, "only {dark} dark pixels");
}
