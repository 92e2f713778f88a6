use std::collections::HashMap;

use crate::{
    foundation::{
        core::{Canvas, Rgba8},
        error::{MockshotError, MockshotResult},
    },
    render::composite::{CoverageMask, composite_mask},
    text::{
        fonts::{FaceKey, FontFace, FontProvider, FontSource, FontSpec},
        layout::TextLayoutEngine,
    },
};

/// Single-line text run drawn left to right from its top-left origin, never wrapped or clipped.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextSpec {
    /// Left edge of the line box.
    pub x: i32,
    /// Top edge of the line box.
    pub y: i32,
    /// Content.
    pub text: String,
    /// Font descriptor.
    pub font: FontSpec,
    /// Text color; alpha below 255 blends with what is underneath.
    pub color: Rgba8,
}

impl TextSpec {
    /// Text run at `(x, y)`.
    pub fn new(x: i32, y: i32, text: impl Into<String>, font: FontSpec, color: Rgba8) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            font,
            color,
        }
    }
}

// Block glyph metrics, as fractions of the em size.
const BLOCK_ADVANCE: f32 = 0.6;
const BLOCK_WIDTH: f32 = 0.5;
const BLOCK_HEIGHT: f32 = 0.62;
const BLOCK_BASELINE: f32 = 0.8;

/// Shapes and rasterizes text runs into coverage masks, then composites them.
///
/// Owns non-thread-safe shaping state; parallel renderers create one per worker.
pub struct TextRenderer {
    fonts: FontProvider,
    layout: TextLayoutEngine,
    font_cache: HashMap<FaceKey, vello_cpu::peniko::FontData>,
}

impl TextRenderer {
    /// Renderer resolving fonts through `fonts`.
    pub fn new(fonts: FontProvider) -> Self {
        Self {
            fonts,
            layout: TextLayoutEngine::new(),
            font_cache: HashMap::new(),
        }
    }

    /// Font provider used by this renderer.
    pub fn fonts(&mut self) -> &mut FontProvider {
        &mut self.fonts
    }

    /// Paint `spec` onto `canvas`.
    pub fn draw_text(&mut self, canvas: &mut Canvas, spec: &TextSpec) -> MockshotResult<()> {
        if spec.text.is_empty() || spec.color.a == 0 {
            return Ok(());
        }
        let mask = self.rasterize(&spec.text, &spec.font)?;
        composite_mask(
            canvas,
            &mask,
            i64::from(spec.x),
            i64::from(spec.y),
            spec.color,
        );
        Ok(())
    }

    /// Coverage mask for `text`, with the line box's top-left at the mask origin.
    pub fn rasterize(&mut self, text: &str, font: &FontSpec) -> MockshotResult<CoverageMask> {
        if !font.size_px.is_finite() || font.size_px <= 0.0 {
            return Err(MockshotError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let handle = self.fonts.load_spec(font);
        match handle.source {
            FontSource::Face(face) => self.rasterize_outline(text, &face, handle.size_px),
            FontSource::Builtin => rasterize_blocks(text, handle.size_px),
        }
    }

    fn rasterize_outline(
        &mut self,
        text: &str,
        face: &FontFace,
        size_px: f32,
    ) -> MockshotResult<CoverageMask> {
        let layout = self.layout.layout_line(text, face, size_px)?;
        let font = self.font_data_for(face);

        let width = layout.full_width().ceil().max(0.0) as u32 + 2;
        let height = layout.height().ceil().max(0.0) as u32 + 2;
        let w16: u16 = width
            .try_into()
            .map_err(|_| MockshotError::render("text run width exceeds u16"))?;
        let h16: u16 = height
            .try_into()
            .map_err(|_| MockshotError::render("text run height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(w16, h16);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
        ctx.render_to_pixmap(&mut pixmap);

        let coverage = pixmap
            .data_as_u8_slice()
            .chunks_exact(4)
            .map(|px| px[3])
            .collect();
        Ok(CoverageMask {
            width,
            height,
            coverage,
        })
    }

    fn font_data_for(&mut self, face: &FontFace) -> vello_cpu::peniko::FontData {
        self.font_cache
            .entry(FaceKey::of(face))
            .or_insert_with(|| {
                vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(face.bytes.as_ref().clone()),
                    face.index,
                )
            })
            .clone()
    }
}

/// One solid block per non-whitespace character on a fixed advance.
fn rasterize_blocks(text: &str, size_px: f32) -> MockshotResult<CoverageMask> {
    let advance = size_px * BLOCK_ADVANCE;
    let count = text.chars().count();
    let width = (f64::from(advance) * count as f64).ceil().max(1.0);
    let height = f64::from(size_px).ceil().max(1.0);
    if width > f64::from(u16::MAX) {
        return Err(MockshotError::render("text run width exceeds u16"));
    }
    if height > f64::from(u16::MAX) {
        return Err(MockshotError::render("text run height exceeds u16"));
    }

    let block_w = ((size_px * BLOCK_WIDTH).round() as i64).max(1);
    let block_h = ((size_px * BLOCK_HEIGHT).round() as i64).max(1);
    let baseline = (size_px * BLOCK_BASELINE).round() as i64;

    let mut mask = CoverageMask::new(width as u32, height as u32);
    for (i, ch) in text.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        let x0 = (advance * i as f32).round() as i64;
        mask.fill_block(x0, baseline - block_h, x0 + block_w, baseline);
    }
    Ok(mask)
}

#[cfg(test)]
#[path = "../../tests/unit/text/raster.rs"]
mod tests;
