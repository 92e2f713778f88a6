use crate::{
    foundation::{core::Rgba8, math::scale_round},
    render::shapes::RoundedRectSpec,
    scene::model::DrawOp,
    text::raster::TextSpec,
};

/// Slide-in panel drawn over a dimmed scene, parametrized by an opening fraction `t`.
///
/// At fraction `t` the whole canvas is dimmed with alpha `round(max_overlay_alpha * t)`, the
/// panel is `round(max_width * t)` pixels wide, and its labels are drawn only while that width
/// is strictly greater than `label_threshold`.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayPanel {
    /// Dimming color; its alpha is ignored.
    pub overlay: Rgba8,
    /// Dimming alpha at `t = 1`.
    pub max_overlay_alpha: u8,
    /// Panel width at `t = 1`.
    pub max_width: u32,
    /// Panel left edge.
    pub left: i32,
    /// Panel top edge.
    pub top: i32,
    /// Gap between the panel bottom and the canvas bottom.
    pub bottom_inset: i32,
    /// Panel corner radius.
    pub radius: u32,
    /// Panel fill.
    pub fill: Rgba8,
    /// Panel outline.
    pub outline: Rgba8,
    /// Panel outline width.
    pub outline_width: u32,
    /// Widths at or below this hide the labels.
    pub label_threshold: u32,
    /// Labels painted inside the panel, in order.
    pub labels: Vec<TextSpec>,
}

/// Derived geometry of an [`OverlayPanel`] at one fraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayState {
    /// Alpha of the full-canvas dimming layer.
    pub overlay_alpha: u8,
    /// Current panel width in pixels.
    pub panel_width: u32,
    /// Whether the labels are painted.
    pub labels_visible: bool,
}

impl OverlayPanel {
    /// State at fraction `t`, clamped to `[0, 1]`.
    pub fn state_at(&self, t: f64) -> OverlayState {
        let overlay_alpha = scale_round(u32::from(self.max_overlay_alpha), t) as u8;
        let panel_width = scale_round(self.max_width, t);
        OverlayState {
            overlay_alpha,
            panel_width,
            labels_visible: panel_width > self.label_threshold,
        }
    }

    /// Fraction at which the unrounded panel width equals the label threshold.
    pub fn label_fraction(&self) -> f64 {
        f64::from(self.label_threshold) / f64::from(self.max_width.max(1))
    }

    /// Draw ops for fraction `t` on a `width`×`height` canvas: dimming layer, panel, labels.
    ///
    /// A zero alpha dimming layer and a zero-width panel contribute no ops.
    pub fn ops_at(&self, t: f64, width: u32, height: u32) -> Vec<DrawOp> {
        let state = self.state_at(t);
        let mut ops = Vec::new();

        if state.overlay_alpha > 0 {
            let dim = self.overlay.with_alpha(state.overlay_alpha);
            ops.push(DrawOp::RoundedRect(RoundedRectSpec::new(
                [0, 0, width as i32 - 1, height as i32 - 1],
                0,
                dim,
            )));
        }

        if state.panel_width > 0 {
            let bounds = [
                self.left,
                self.top,
                self.left + state.panel_width as i32,
                height as i32 - self.bottom_inset,
            ];
            ops.push(DrawOp::RoundedRect(
                RoundedRectSpec::new(bounds, self.radius, self.fill)
                    .outline(self.outline, self.outline_width),
            ));
        }

        if state.labels_visible {
            ops.extend(self.labels.iter().cloned().map(DrawOp::Text));
        }
        ops
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/overlay.rs"]
mod tests;
