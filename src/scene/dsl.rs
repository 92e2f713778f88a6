use crate::{
    foundation::{core::Rgba8, error::MockshotResult},
    render::shapes::{EllipseSpec, RoundedRectSpec},
    scene::model::{Background, DrawOp, SceneDescriptor},
    text::{fonts::FontSpec, raster::TextSpec},
};

/// Fluent builder for [`SceneDescriptor`]s. Ops are recorded in call order.
pub struct SceneBuilder {
    width: u32,
    height: u32,
    background: Background,
    ops: Vec<DrawOp>,
}

impl SceneBuilder {
    /// New scene with a black solid background.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Background::Solid {
                color: Rgba8::rgb(0, 0, 0),
            },
            ops: Vec::new(),
        }
    }

    /// Diagonal gradient background.
    pub fn gradient(mut self, from: Rgba8, to: Rgba8) -> Self {
        self.background = Background::Gradient { from, to };
        self
    }

    /// Flat background.
    pub fn solid(mut self, color: Rgba8) -> Self {
        self.background = Background::Solid { color };
        self
    }

    /// Append any draw op.
    pub fn op(mut self, op: DrawOp) -> Self {
        self.ops.push(op);
        self
    }

    /// Append a rounded rectangle.
    pub fn rounded_rect(self, rect: RoundedRectSpec) -> Self {
        self.op(DrawOp::RoundedRect(rect))
    }

    /// Append an ellipse.
    pub fn ellipse(self, bounds: [i32; 4], fill: Rgba8) -> Self {
        self.op(DrawOp::Ellipse(EllipseSpec::new(bounds, fill)))
    }

    /// Append a text run.
    pub fn text(self, x: i32, y: i32, text: impl Into<String>, font: FontSpec, color: Rgba8) -> Self {
        self.op(DrawOp::Text(TextSpec::new(x, y, text, font, color)))
    }

    /// Append several ops produced elsewhere.
    pub fn extend(mut self, ops: impl IntoIterator<Item = DrawOp>) -> Self {
        self.ops.extend(ops);
        self
    }

    /// Finish and validate.
    pub fn build(self) -> MockshotResult<SceneDescriptor> {
        let desc = SceneDescriptor {
            width: self.width,
            height: self.height,
            background: self.background,
            ops: self.ops,
        };
        desc.validate()?;
        Ok(desc)
    }
}

/// Rounded rectangle shorthand used by the catalog.
pub fn rr(bounds: [i32; 4], radius: u32, fill: Rgba8) -> RoundedRectSpec {
    RoundedRectSpec::new(bounds, radius, fill)
}
