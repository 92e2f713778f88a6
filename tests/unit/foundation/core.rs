use super::*;

#[test]
fn zero_sized_canvas_is_rejected() {
    assert!(matches!(
        Canvas::new(0, 10, Rgba8::rgb(0, 0, 0)),
        Err(MockshotError::Validation(_))
    ));
    assert!(Canvas::from_fn(10, 0, |_, _| Rgba8::rgb(0, 0, 0)).is_err());
}

#[test]
fn new_fills_every_pixel() {
    let c = Canvas::new(3, 2, Rgba8::rgb(1, 2, 3)).unwrap();
    assert_eq!(c.data().len(), 3 * 2 * 4);
    for px in c.data().chunks_exact(4) {
        assert_eq!(px, &[1, 2, 3, 255]);
    }
    assert_eq!(c.pixel(3, 0), None);
}

#[test]
fn from_fn_is_row_major() {
    let c = Canvas::from_fn(4, 3, |x, y| Rgba8::rgb(x as u8, y as u8, 0)).unwrap();
    assert_eq!(c.pixel(2, 1), Some(Rgba8::rgb(2, 1, 0)));
    assert_eq!(&c.data()[(4 + 3) * 4..(4 + 3) * 4 + 4], &[3, 1, 0, 255]);
}

#[test]
fn blend_pixel_respects_alpha_and_bounds() {
    let mut c = Canvas::new(2, 2, Rgba8::rgb(100, 100, 100)).unwrap();
    c.blend_pixel(0, 0, Rgba8::rgba(200, 0, 0, 0), 255);
    assert_eq!(c.pixel(0, 0), Some(Rgba8::rgb(100, 100, 100)));

    c.blend_pixel(1, 0, Rgba8::rgb(200, 0, 0), 255);
    assert_eq!(c.pixel(1, 0), Some(Rgba8::rgb(200, 0, 0)));

    c.blend_pixel(0, 1, Rgba8::rgba(200, 0, 0, 51), 255);
    // 100 * 204/255 + 200 * 51/255 = 80 + 40
    assert_eq!(c.pixel(0, 1), Some(Rgba8::rgb(120, 80, 80)));

    let before = c.clone();
    c.blend_pixel(-1, 0, Rgba8::rgb(0, 0, 0), 255);
    c.blend_pixel(0, 2, Rgba8::rgb(0, 0, 0), 255);
    assert_eq!(c, before);
}

#[test]
fn color_serializes_as_channel_arrays() {
    assert_eq!(
        serde_json::to_string(&Rgba8::rgb(1, 2, 3)).unwrap(),
        "[1,2,3]"
    );
    assert_eq!(
        serde_json::to_string(&Rgba8::rgba(1, 2, 3, 4)).unwrap(),
        "[1,2,3,4]"
    );
    let c: Rgba8 = serde_json::from_str("[9,8,7]").unwrap();
    assert_eq!(c, Rgba8::rgb(9, 8, 7));
    assert!(serde_json::from_str::<Rgba8>("[1,2]").is_err());
}
