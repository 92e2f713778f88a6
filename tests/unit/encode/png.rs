use std::path::PathBuf;

use super::*;
use crate::foundation::core::Rgba8;

fn out_dir() -> PathBuf {
    PathBuf::from("target").join("unit_encode_png")
}

#[test]
fn png_round_trips_pixels_and_creates_directories() {
    let path = out_dir().join("nested").join("deeper").join("solid.png");
    let _ = std::fs::remove_file(&path);

    let canvas = Canvas::from_fn(7, 5, |x, y| Rgba8::rgb(x as u8 * 30, y as u8 * 40, 9)).unwrap();
    write_png(&canvas, &path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (7, 5));
    assert_eq!(img.as_raw().as_slice(), canvas.data());
}

#[test]
fn unwritable_path_is_an_error() {
    let dir = out_dir();
    std::fs::create_dir_all(&dir).unwrap();
    // A directory cannot be replaced by a file.
    let canvas = Canvas::new(2, 2, Rgba8::rgb(0, 0, 0)).unwrap();
    assert!(write_png(&canvas, &dir).is_err());
}
