use crate::{
    foundation::{core::Canvas, error::MockshotResult},
    render::{
        gradient::gradient,
        shapes::{draw_ellipse, draw_rounded_rect},
    },
    scene::{
        model::{Background, DrawOp, SceneDescriptor},
        overlay::OverlayPanel,
    },
    text::{fonts::FontProvider, raster::TextRenderer},
};

/// One-pass painter: background first, then each op in order onto the same canvas.
pub struct SceneComposer {
    text: TextRenderer,
}

impl SceneComposer {
    /// Composer resolving text through `fonts`.
    pub fn new(fonts: FontProvider) -> Self {
        Self {
            text: TextRenderer::new(fonts),
        }
    }

    /// Text renderer shared by every scene this composer builds.
    pub fn text_renderer(&mut self) -> &mut TextRenderer {
        &mut self.text
    }

    /// Render `desc` into a fresh canvas. Identical descriptors give byte-identical canvases.
    #[tracing::instrument(skip(self, desc), fields(w = desc.width, h = desc.height, ops = desc.ops.len()))]
    pub fn build_scene(&mut self, desc: &SceneDescriptor) -> MockshotResult<Canvas> {
        desc.validate()?;
        let mut canvas = background_canvas(desc)?;
        self.paint_ops(&mut canvas, &desc.ops)?;
        Ok(canvas)
    }

    /// Render `base` with `panel` opened to fraction `t` painted on top.
    #[tracing::instrument(skip(self, base, panel))]
    pub fn build_overlay_scene(
        &mut self,
        base: &SceneDescriptor,
        panel: &OverlayPanel,
        t: f64,
    ) -> MockshotResult<Canvas> {
        let mut canvas = self.build_scene(base)?;
        let ops = panel.ops_at(t, base.width, base.height);
        self.paint_ops(&mut canvas, &ops)?;
        Ok(canvas)
    }

    fn paint_ops(&mut self, canvas: &mut Canvas, ops: &[DrawOp]) -> MockshotResult<()> {
        for op in ops {
            match op {
                DrawOp::RoundedRect(r) => draw_rounded_rect(canvas, r),
                DrawOp::Ellipse(e) => draw_ellipse(canvas, e),
                DrawOp::Text(t) => self.text.draw_text(canvas, t)?,
            }
        }
        Ok(())
    }
}

fn background_canvas(desc: &SceneDescriptor) -> MockshotResult<Canvas> {
    match desc.background {
        Background::Gradient { from, to } => gradient(desc.width, desc.height, from, to),
        Background::Solid { color } => Canvas::new(desc.width, desc.height, color.with_alpha(255)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compose.rs"]
mod tests;
