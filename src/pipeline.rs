use std::path::{Path, PathBuf};

use crate::{
    animation::sequence::{AnimationSequence, OverlayAnimation},
    encode::{gif::write_gif, png::write_png},
    foundation::error::MockshotResult,
    render::settings::RenderSettings,
    scene::{
        catalog::{
            self, CatalogScene, SIDEBAR_DEMO_FILE, SIDEBAR_DEMO_FRACTIONS, SIDEBAR_DEMO_FRAME_MS,
            SIDEBAR_DEMO_LOOPS,
        },
        compose::SceneComposer,
    },
    text::fonts::FontProvider,
};

/// Frames of the mobile sidebar demo: open, hold, close.
pub fn sidebar_demo() -> MockshotResult<OverlayAnimation> {
    Ok(OverlayAnimation {
        base: catalog::mobile_base()?,
        panel: catalog::sidebar_panel(),
        fractions: SIDEBAR_DEMO_FRACTIONS.to_vec(),
        frame_duration_ms: SIDEBAR_DEMO_FRAME_MS,
        loop_count: SIDEBAR_DEMO_LOOPS,
    })
}

/// Render the sidebar demo, on a rayon pool when `settings.parallel` is set.
pub fn render_sidebar_demo(
    fonts: &FontProvider,
    settings: &RenderSettings,
) -> MockshotResult<AnimationSequence> {
    let demo = sidebar_demo()?;
    if settings.parallel {
        demo.render_parallel(fonts, settings)
    } else {
        demo.render(&mut SceneComposer::new(fonts.clone()))
    }
}

/// Render every catalog still and the sidebar demo into `out_dir`.
///
/// Pipeline:
/// 1. resolve fonts once from `settings` (system fonts, `./fonts`, `settings.font_dirs`)
/// 2. build and write each [`CatalogScene`] as PNG, in [`CatalogScene::ALL`] order
/// 3. render the sidebar demo frames and write them as a looping GIF
///
/// Returns the written paths in that order. Existing files are overwritten.
#[tracing::instrument(skip(out_dir, settings), fields(out_dir = %out_dir.display()))]
pub fn render_catalog(out_dir: &Path, settings: &RenderSettings) -> MockshotResult<Vec<PathBuf>> {
    settings.validate()?;
    let fonts = FontProvider::new(settings);
    tracing::info!(faces = fonts.face_count(), "font database loaded");

    let mut written = Vec::with_capacity(CatalogScene::ALL.len() + 1);
    let mut composer = SceneComposer::new(fonts.clone());
    for scene in CatalogScene::ALL {
        let canvas = composer.build_scene(&scene.descriptor()?)?;
        let path = out_dir.join(scene.file_name());
        write_png(&canvas, &path)?;
        tracing::info!(%scene, path = %path.display(), "still written");
        written.push(path);
    }

    let seq = render_sidebar_demo(&fonts, settings)?;
    let path = out_dir.join(SIDEBAR_DEMO_FILE);
    write_gif(&seq, &path)?;
    tracing::info!(
        frames = seq.len(),
        total_ms = seq.total_duration_ms(),
        path = %path.display(),
        "animation written"
    );
    written.push(path);

    Ok(written)
}
