//! Mockshot renders the marketing media of a repository procedurally: gradient hero cards,
//! flat UI mockups built from rounded panels and text, and a looping GIF of a sidebar opening
//! over a phone layout.
//!
//! Everything is CPU rasterized into straight RGBA8 and is deterministic for a given font set:
//!
//! - Describe a still as a [`SceneDescriptor`] (or pick one from [`catalog`])
//! - Paint it with a [`SceneComposer`]
//! - Animate an [`OverlayPanel`] over a base scene into an [`AnimationSequence`]
//! - Write PNGs and GIFs, or let [`render_catalog`] produce the whole media set
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
/// PNG and GIF writers.
pub mod encode;
/// One-shot catalog rendering.
pub mod pipeline;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod text;

pub use crate::foundation::core::{Canvas, Rgba8};
pub use crate::foundation::error::{MockshotError, MockshotResult};

pub use crate::animation::sequence::{
    AnimationSequence, OverlayAnimation, animate, animate_parallel,
};
pub use crate::encode::{ensure_parent_dir, gif::write_gif, png::write_png};
pub use crate::pipeline::{render_catalog, render_sidebar_demo, sidebar_demo};
pub use crate::render::composite::{CoverageMask, composite_mask, fill_over};
pub use crate::render::gradient::{gradient, gradient_mix};
pub use crate::render::settings::{FONT_DIR_ENV, RenderSettings, THREADS_ENV};
pub use crate::render::shapes::{
    EllipseSpec, RoundedGeom, RoundedRectSpec, draw_ellipse, draw_rounded_rect,
};
pub use crate::scene::catalog;
pub use crate::scene::compose::SceneComposer;
pub use crate::scene::dsl::{SceneBuilder, rr};
pub use crate::scene::model::{Background, DrawOp, SceneDescriptor};
pub use crate::scene::overlay::{OverlayPanel, OverlayState};
pub use crate::text::fonts::{
    DEFAULT_FAMILY, FaceKey, FontFace, FontHandle, FontProvider, FontSource, FontSpec, FontWeight,
};
pub use crate::text::raster::{TextRenderer, TextSpec};
