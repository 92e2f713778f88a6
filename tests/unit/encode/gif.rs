use std::{fs::File, io::BufReader, path::PathBuf};

use image::AnimationDecoder as _;

use super::*;
use crate::{
    animation::sequence::animate,
    foundation::core::{Canvas, Rgba8},
};

fn out_path(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_encode_gif");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn sequence(loop_count: u16) -> AnimationSequence {
    animate(
        &[0.0, 0.5, 1.0, 1.0],
        |t| {
            let v = (t * 255.0) as u8;
            Canvas::new(16, 8, Rgba8::rgb(v, 0, 255 - v))
        },
        180,
        loop_count,
    )
    .unwrap()
}

fn netscape_loop_count(bytes: &[u8]) -> Option<u16> {
    let tag = b"NETSCAPE2.0";
    let at = bytes.windows(tag.len()).position(|w| w == tag)?;
    let sub = &bytes[at + tag.len()..];
    // Sub-block: size 3, id 1, little-endian count.
    (sub.len() >= 4 && sub[0] == 3 && sub[1] == 1).then(|| u16::from_le_bytes([sub[2], sub[3]]))
}

#[test]
fn gif_keeps_frame_count_size_and_delay() {
    let path = out_path("demo.gif");
    write_gif(&sequence(0), &path).unwrap();

    let decoder = image::codecs::gif::GifDecoder::new(BufReader::new(File::open(&path).unwrap()))
        .unwrap();
    let frames = decoder.into_frames().collect_frames().unwrap();
    assert_eq!(frames.len(), 4);
    for frame in &frames {
        assert_eq!(frame.buffer().dimensions(), (16, 8));
        assert_eq!(frame.delay().numer_denom_ms(), (180, 1));
    }
}

#[test]
fn zero_loop_count_repeats_forever() {
    let path = out_path("forever.gif");
    write_gif(&sequence(0), &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(netscape_loop_count(&bytes), Some(0));
}

#[test]
fn finite_loop_count_is_written() {
    let path = out_path("thrice.gif");
    write_gif(&sequence(3), &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(netscape_loop_count(&bytes), Some(3));
}

#[test]
fn repeat_mapping() {
    assert!(matches!(repeat_for(0), Repeat::Infinite));
    assert!(matches!(repeat_for(2), Repeat::Finite(2)));
}
