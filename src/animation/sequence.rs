use rayon::prelude::*;

use crate::{
    foundation::{
        core::Canvas,
        error::{MockshotError, MockshotResult},
    },
    render::settings::RenderSettings,
    scene::{compose::SceneComposer, model::SceneDescriptor, overlay::OverlayPanel},
    text::fonts::FontProvider,
};

/// Ordered frames of identical size with a per-frame display time and a loop count.
///
/// Only [`animate`] and friends construct sequences, so every frame is guaranteed to share the
/// first frame's dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationSequence {
    frames: Vec<Canvas>,
    frame_duration_ms: u32,
    loop_count: u16,
}

impl AnimationSequence {
    fn from_frames(
        frames: Vec<Canvas>,
        frame_duration_ms: u32,
        loop_count: u16,
    ) -> MockshotResult<Self> {
        let Some(first) = frames.first() else {
            return Err(MockshotError::validation(
                "animation needs at least one frame",
            ));
        };
        let size = first.size();
        if let Some((idx, frame)) = frames.iter().enumerate().find(|(_, f)| f.size() != size) {
            return Err(MockshotError::validation(format!(
                "frame {idx} is {}x{}, expected {}x{}",
                frame.width(),
                frame.height(),
                size.0,
                size.1
            )));
        }
        Ok(Self {
            frames,
            frame_duration_ms,
            loop_count,
        })
    }

    /// Frames in display order.
    pub fn frames(&self) -> &[Canvas] {
        &self.frames
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; sequences hold at least one frame.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Shared frame size.
    pub fn size(&self) -> (u32, u32) {
        self.frames[0].size()
    }

    /// Display time of each frame.
    pub fn frame_duration_ms(&self) -> u32 {
        self.frame_duration_ms
    }

    /// Loop count; 0 loops forever.
    pub fn loop_count(&self) -> u16 {
        self.loop_count
    }

    /// Play time of one loop: `frame_duration_ms × frame count`.
    pub fn total_duration_ms(&self) -> u64 {
        u64::from(self.frame_duration_ms) * self.frames.len() as u64
    }
}

/// Call `build_frame` once per value of `fractions`, in order, and package the frames.
///
/// Repeated fractions yield repeated frames; nothing is deduplicated.
#[tracing::instrument(skip(fractions, build_frame), fields(frames = fractions.len()))]
pub fn animate<F>(
    fractions: &[f64],
    mut build_frame: F,
    frame_duration_ms: u32,
    loop_count: u16,
) -> MockshotResult<AnimationSequence>
where
    F: FnMut(f64) -> MockshotResult<Canvas>,
{
    let mut frames = Vec::with_capacity(fractions.len());
    for (idx, &t) in fractions.iter().enumerate() {
        tracing::debug!(idx, t, "rendering frame");
        frames.push(build_frame(t)?);
    }
    AnimationSequence::from_frames(frames, frame_duration_ms, loop_count)
}

/// Frame parameters for an overlay animation over a fixed base scene.
#[derive(Clone, Debug)]
pub struct OverlayAnimation {
    /// Scene under the overlay.
    pub base: SceneDescriptor,
    /// Panel opened by each fraction.
    pub panel: OverlayPanel,
    /// Opening fraction per frame.
    pub fractions: Vec<f64>,
    /// Display time of each frame.
    pub frame_duration_ms: u32,
    /// Loop count; 0 loops forever.
    pub loop_count: u16,
}

impl OverlayAnimation {
    /// Render every frame sequentially with `composer`.
    pub fn render(&self, composer: &mut SceneComposer) -> MockshotResult<AnimationSequence> {
        animate(
            &self.fractions,
            |t| composer.build_overlay_scene(&self.base, &self.panel, t),
            self.frame_duration_ms,
            self.loop_count,
        )
    }

    /// Same frames as [`OverlayAnimation::render`], built on a rayon pool.
    pub fn render_parallel(
        &self,
        fonts: &FontProvider,
        settings: &RenderSettings,
    ) -> MockshotResult<AnimationSequence> {
        animate_parallel(
            &self.fractions,
            fonts,
            settings,
            |composer, t| composer.build_overlay_scene(&self.base, &self.panel, t),
            self.frame_duration_ms,
            self.loop_count,
        )
    }
}

/// Parallel [`animate`]: frames are built on a rayon pool sized by `settings.threads`, each
/// worker owning a [`SceneComposer`] over a clone of `fonts`. Output order matches
/// `fractions`.
#[tracing::instrument(skip(fractions, fonts, settings, build_frame), fields(frames = fractions.len()))]
pub fn animate_parallel<F>(
    fractions: &[f64],
    fonts: &FontProvider,
    settings: &RenderSettings,
    build_frame: F,
    frame_duration_ms: u32,
    loop_count: u16,
) -> MockshotResult<AnimationSequence>
where
    F: Fn(&mut SceneComposer, f64) -> MockshotResult<Canvas> + Sync,
{
    settings.validate()?;
    let pool = build_thread_pool(settings.threads)?;
    let rendered = pool.install(|| {
        fractions
            .par_iter()
            .map_init(
                || SceneComposer::new(fonts.clone()),
                |composer, &t| build_frame(composer, t),
            )
            .collect::<Vec<_>>()
    });

    let frames = rendered.into_iter().collect::<MockshotResult<Vec<_>>>()?;
    AnimationSequence::from_frames(frames, frame_duration_ms, loop_count)
}

fn build_thread_pool(threads: Option<usize>) -> MockshotResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MockshotError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sequence.rs"]
mod tests;
