use std::{fs::File, io::BufWriter, path::Path};

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};

use crate::{
    animation::sequence::AnimationSequence,
    encode::ensure_parent_dir,
    foundation::error::{MockshotError, MockshotResult},
};

/// Write `seq` as an animated GIF.
///
/// Every frame carries the sequence's display time; a loop count of 0 is written as
/// "repeat forever". GIF stores delays in hundredths of a second, so durations round to 10 ms.
#[tracing::instrument(skip(seq), fields(frames = seq.len(), ms = seq.frame_duration_ms()))]
pub fn write_gif(seq: &AnimationSequence, path: &Path) -> MockshotResult<()> {
    ensure_parent_dir(path)?;
    let file =
        File::create(path).with_context(|| format!("create gif '{}'", path.display()))?;

    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder.set_repeat(repeat_for(seq.loop_count()))?;

    let delay = image::Delay::from_numer_denom_ms(seq.frame_duration_ms(), 1);
    let frames = seq
        .frames()
        .iter()
        .map(|canvas| {
            canvas
                .to_rgba_image()
                .map(|img| image::Frame::from_parts(img, 0, 0, delay))
        })
        .collect::<MockshotResult<Vec<_>>>()?;

    encoder
        .encode_frames(frames)
        .map_err(|e| MockshotError::encode(format!("encode gif '{}': {e}", path.display())))?;
    tracing::debug!(path = %path.display(), "gif written");
    Ok(())
}

fn repeat_for(loop_count: u16) -> Repeat {
    match loop_count {
        0 => Repeat::Infinite,
        n => Repeat::Finite(n),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
