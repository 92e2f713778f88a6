use crate::foundation::core::{Canvas, Rgba8};

/// 8-bit coverage mask produced by the text rasterizer, placed relative to a canvas origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageMask {
    /// Mask width in pixels.
    pub width: u32,
    /// Mask height in pixels.
    pub height: u32,
    /// Row-major coverage, 255 = fully covered.
    pub coverage: Vec<u8>,
}

impl CoverageMask {
    /// Empty (fully uncovered) mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            coverage: vec![0; width as usize * height as usize],
        }
    }

    /// Mark an axis-aligned block as fully covered, clipped to the mask.
    pub fn fill_block(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let (w, h) = (i64::from(self.width), i64::from(self.height));
        for y in y0.max(0)..y1.min(h) {
            for x in x0.max(0)..x1.min(w) {
                self.coverage[(y * w + x) as usize] = 255;
            }
        }
    }

    /// Whether any pixel has non-zero coverage.
    pub fn is_blank(&self) -> bool {
        self.coverage.iter().all(|&c| c == 0)
    }
}

/// Composite `color` through `mask` onto `canvas` with the mask's top-left at `(ox, oy)`.
///
/// Effective alpha per pixel is `color.a * coverage / 255`; parts of the mask outside the canvas
/// are dropped.
pub fn composite_mask(canvas: &mut Canvas, mask: &CoverageMask, ox: i64, oy: i64, color: Rgba8) {
    if color.a == 0 {
        return;
    }
    for my in 0..mask.height {
        let row = (my as usize) * (mask.width as usize);
        for mx in 0..mask.width {
            let cov = mask.coverage[row + mx as usize];
            if cov == 0 {
                continue;
            }
            canvas.blend_pixel(ox + i64::from(mx), oy + i64::from(my), color, cov);
        }
    }
}

/// Blend `color` over every pixel of `canvas`.
pub fn fill_over(canvas: &mut Canvas, color: Rgba8) {
    if color.a == 0 {
        return;
    }
    let (w, h) = canvas.size();
    for y in 0..h {
        for x in 0..w {
            canvas.blend_pixel(i64::from(x), i64::from(y), color, 255);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
