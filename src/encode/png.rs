use std::path::Path;

use anyhow::Context as _;

use crate::{
    encode::ensure_parent_dir,
    foundation::{core::Canvas, error::MockshotResult},
};

/// Write `canvas` as an 8-bit RGBA PNG, creating parent directories as needed.
#[tracing::instrument(skip(canvas), fields(w = canvas.width(), h = canvas.height()))]
pub fn write_png(canvas: &Canvas, path: &Path) -> MockshotResult<()> {
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        canvas.data(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "png written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
