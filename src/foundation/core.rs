use rayon::prelude::*;

use crate::foundation::{
    error::{MockshotError, MockshotResult},
    math::{lerp_u8, mul_div255_u8},
};

/// Straight (non-premultiplied) RGBA8 color.
///
/// Serialized as `[r, g, b]` when opaque and `[r, g, b, a]` otherwise; both forms are accepted
/// on input, with a missing alpha meaning fully opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 = opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Channels as a byte array.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Rgba8> for Vec<u8> {
    fn from(c: Rgba8) -> Self {
        if c.a == 255 {
            vec![c.r, c.g, c.b]
        } else {
            vec![c.r, c.g, c.b, c.a]
        }
    }
}

impl TryFrom<Vec<u8>> for Rgba8 {
    type Error = String;

    fn try_from(v: Vec<u8>) -> Result<Self, Self::Error> {
        match v.as_slice() {
            &[r, g, b] => Ok(Self::rgb(r, g, b)),
            &[r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
            other => Err(format!(
                "color must have 3 or 4 channels, got {}",
                other.len()
            )),
        }
    }
}

/// Mutable W×H pixel grid, origin top-left, row-major, straight RGBA8.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl Canvas {
    /// Canvas filled with a single color.
    pub fn new(width: u32, height: u32, fill: Rgba8) -> MockshotResult<Self> {
        let len = buffer_len(width, height)?;
        let data = fill.to_array().repeat(len / 4);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Canvas whose pixels are computed independently by `pixel(x, y)`.
    ///
    /// Rows are evaluated in parallel; the result does not depend on scheduling.
    pub fn from_fn<F>(width: u32, height: u32, pixel: F) -> MockshotResult<Self>
    where
        F: Fn(u32, u32) -> Rgba8 + Sync,
    {
        let len = buffer_len(width, height)?;
        let mut data = vec![0u8; len];
        let row_len = width as usize * 4;
        data.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, px) in row.chunks_exact_mut(4).enumerate() {
                    px.copy_from_slice(&pixel(x as u32, y as u32).to_array());
                }
            });
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Tightly packed RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the canvas, returning its RGBA8 bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        let px = &self.data[idx..idx + 4];
        Some(Rgba8::rgba(px[0], px[1], px[2], px[3]))
    }

    /// Copy into an [`image::RgbaImage`] for encoding.
    pub fn to_rgba_image(&self) -> MockshotResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| MockshotError::encode("canvas buffer does not match its dimensions"))
    }

    /// Alpha-composite `src` over the pixel at `(x, y)`; coordinates outside the canvas are
    /// ignored. `coverage` scales the source alpha (255 = fully covered).
    pub(crate) fn blend_pixel(&mut self, x: i64, y: i64, src: Rgba8, coverage: u8) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let a = mul_div255_u8(u16::from(src.a), u16::from(coverage));
        if a == 0 {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        let px = &mut self.data[idx..idx + 4];
        px[0] = lerp_u8(px[0], src.r, a);
        px[1] = lerp_u8(px[1], src.g, a);
        px[2] = lerp_u8(px[2], src.b, a);
        px[3] = a.saturating_add(mul_div255_u8(u16::from(px[3]), 255 - u16::from(a)));
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

fn buffer_len(width: u32, height: u32) -> MockshotResult<usize> {
    if width == 0 || height == 0 {
        return Err(MockshotError::validation(format!(
            "canvas size must be non-zero, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| MockshotError::validation("canvas buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
