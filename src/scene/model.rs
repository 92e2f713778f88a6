use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Rgba8,
        error::{MockshotError, MockshotResult},
    },
    render::shapes::{EllipseSpec, RoundedRectSpec},
    text::raster::TextSpec,
};

/// Complete description of one still image: canvas size, background and ordered draw ops.
///
/// Descriptors are plain data; they can be built with [`crate::SceneBuilder`], taken from the
/// [`crate::catalog`], or loaded from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneDescriptor {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Background painted before any draw op.
    pub background: Background,
    /// Draw ops in painting order; later ops paint over earlier ones.
    #[serde(default)]
    pub ops: Vec<DrawOp>,
}

/// Canvas background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Background {
    /// Diagonal two-color gradient, `from` at the top-left.
    Gradient {
        /// Top-left color.
        from: Rgba8,
        /// Bottom-right color.
        to: Rgba8,
    },
    /// Flat opaque fill.
    Solid {
        /// Fill color.
        color: Rgba8,
    },
}

/// One primitive draw call.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Rounded rectangle, optionally outlined.
    RoundedRect(RoundedRectSpec),
    /// Filled ellipse.
    Ellipse(EllipseSpec),
    /// Single-line text run.
    Text(TextSpec),
}

impl SceneDescriptor {
    /// Check the canvas size and font sizes. Geometry problems are clamped when drawing, not
    /// reported here.
    pub fn validate(&self) -> MockshotResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MockshotError::validation(format!(
                "scene canvas must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        for (idx, op) in self.ops.iter().enumerate() {
            if let DrawOp::Text(t) = op
                && (!t.font.size_px.is_finite() || t.font.size_px <= 0.0)
            {
                return Err(MockshotError::validation(format!(
                    "op {idx}: text size_px must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    /// Parse a descriptor from JSON text and validate it.
    pub fn from_json_str(json: &str) -> MockshotResult<Self> {
        let desc: Self = serde_json::from_str(json)?;
        desc.validate()?;
        Ok(desc)
    }

    /// Read, parse and validate a descriptor JSON file.
    pub fn from_path(path: &Path) -> MockshotResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read scene descriptor '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> MockshotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
