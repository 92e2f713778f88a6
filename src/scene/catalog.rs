//! The fixed set of repository media scenes.
//!
//! Coordinates are in canvas pixels with inclusive rectangle bounds. Every scene uses
//! [`crate::DEFAULT_FAMILY`]; a missing family falls back at render time.

use std::str::FromStr;

use crate::{
    foundation::{
        core::Rgba8,
        error::{MockshotError, MockshotResult},
    },
    scene::{
        dsl::{SceneBuilder, rr},
        model::SceneDescriptor,
        overlay::OverlayPanel,
    },
    text::{fonts::FontSpec, raster::TextSpec},
};

/// Opening fractions of the sidebar demo; the repeated `1.0` holds the open state.
pub const SIDEBAR_DEMO_FRACTIONS: [f64; 10] = [0.0, 0.2, 0.45, 0.7, 1.0, 1.0, 0.75, 0.45, 0.2, 0.0];
/// Display time of each sidebar demo frame.
pub const SIDEBAR_DEMO_FRAME_MS: u32 = 180;
/// Sidebar demo loop count (0 = forever).
pub const SIDEBAR_DEMO_LOOPS: u16 = 0;

const INK: Rgba8 = Rgba8::rgb(17, 24, 39);
const SLATE: Rgba8 = Rgba8::rgb(55, 65, 81);
const MUTED: Rgba8 = Rgba8::rgb(107, 114, 128);
const PLACEHOLDER: Rgba8 = Rgba8::rgb(148, 163, 184);
const WHITE: Rgba8 = Rgba8::rgb(255, 255, 255);

fn title() -> FontSpec {
    FontSpec::bold(64.0)
}
fn subtitle() -> FontSpec {
    FontSpec::regular(30.0)
}
fn body() -> FontSpec {
    FontSpec::regular(22.0)
}
fn body_bold() -> FontSpec {
    FontSpec::bold(24.0)
}
fn small() -> FontSpec {
    FontSpec::regular(18.0)
}

/// Gradient hero card with a floating app window mockup.
pub fn hero() -> MockshotResult<SceneDescriptor> {
    let mut b = SceneBuilder::new(1400, 820)
        .gradient(Rgba8::rgb(15, 23, 42), Rgba8::rgb(37, 99, 235))
        .ellipse([920, -120, 1520, 480], Rgba8::rgba(56, 189, 248, 95))
        .ellipse([-220, 430, 420, 1030], Rgba8::rgba(16, 185, 129, 80))
        .text(72, 78, "Codex Web App", title(), Rgba8::rgb(245, 248, 255))
        .text(
            72,
            160,
            "Fast local runtime. Mobile-ready UX. CI by default.",
            subtitle(),
            Rgba8::rgba(212, 228, 255, 235),
        )
        .rounded_rect(rr([72, 230, 360, 292], 32, Rgba8::rgb(16, 185, 129)))
        .text(110, 248, "npm run start", body_bold(), Rgba8::rgb(4, 35, 38))
        .rounded_rect(
            rr([520, 90, 1325, 735], 30, Rgba8::rgba(245, 247, 252, 250))
                .outline(Rgba8::rgba(210, 220, 236, 220), 2),
        )
        .rounded_rect(
            rr([550, 130, 760, 695], 20, Rgba8::rgb(236, 241, 249))
                .outline(Rgba8::rgb(219, 228, 241), 1),
        )
        .text(580, 160, "Threads", body_bold(), Rgba8::rgb(31, 41, 55));

    for (i, label) in ["home", "mobile-fix", "release-check", "new-thread"]
        .into_iter()
        .enumerate()
    {
        let y = 210 + i as i32 * 56;
        b = b
            .rounded_rect(
                rr([572, y, 738, y + 40], 12, Rgba8::rgb(252, 253, 255))
                    .outline(Rgba8::rgb(228, 233, 243), 1),
            )
            .text(590, y + 10, label, small(), Rgba8::rgb(71, 85, 105));
    }

    b = b
        .text(800, 145, "Let's build", FontSpec::bold(44.0), INK)
        .text(801, 196, "home", FontSpec::regular(34.0), MUTED);

    let cards = [
        "Build a classic Snake game in this repo.",
        "Create a one-page PDF summary of this app.",
        "Summarize last week's PRs by teammate.",
    ];
    for (i, card) in cards.into_iter().enumerate() {
        let y = 250 + i as i32 * 126;
        b = b
            .rounded_rect(
                rr([790, y, 1285, y + 102], 22, WHITE).outline(Rgba8::rgb(228, 233, 243), 2),
            )
            .text(815, y + 37, card, body(), SLATE);
    }
    b.build()
}

/// Flat desktop layout: sidebar, greeting, suggestion cards and composer.
pub fn desktop_overview() -> MockshotResult<SceneDescriptor> {
    let mut b = SceneBuilder::new(1280, 820)
        .solid(Rgba8::rgb(237, 242, 247))
        .rounded_rect(
            rr([40, 40, 1240, 780], 26, Rgba8::rgb(250, 252, 255))
                .outline(Rgba8::rgb(214, 223, 236), 2),
        )
        .rounded_rect(
            rr([58, 58, 320, 762], 20, Rgba8::rgb(241, 245, 252))
                .outline(Rgba8::rgb(224, 231, 243), 2),
        )
        .text(86, 90, "New thread", body_bold(), INK);

    for (i, item) in ["Automations", "Skills", "Threads", "home"]
        .into_iter()
        .enumerate()
    {
        b = b.text(88, 145 + i as i32 * 46, item, body(), Rgba8::rgb(75, 85, 99));
    }

    b = b
        .text(370, 96, "Open", body_bold(), SLATE)
        .text(370, 210, "Let's build", FontSpec::bold(54.0), INK)
        .text(372, 274, "home", FontSpec::regular(38.0), MUTED);

    let cards = [
        "Build a classic Snake game in this repo.",
        "Create a one-page PDF that summarizes this app.",
        "Summarize last week's PRs by teammate and theme.",
    ];
    for (i, card) in cards.into_iter().enumerate() {
        let y = 326 + i as i32 * 136;
        b = b
            .rounded_rect(
                rr([355, y, 1195, y + 115], 26, WHITE).outline(Rgba8::rgb(227, 232, 241), 2),
            )
            .text(390, y + 44, card, body(), SLATE);
    }

    b.rounded_rect(
        rr([355, 742, 1195, 770], 14, Rgba8::rgb(245, 248, 252))
            .outline(Rgba8::rgb(221, 228, 239), 1),
    )
    .text(382, 747, "Ask Codex anything...", small(), PLACEHOLDER)
    .build()
}

/// Phone-sized layout with the sidebar closed; the base for [`sidebar_panel`].
pub fn mobile_base() -> MockshotResult<SceneDescriptor> {
    let (w, h) = (430, 860);
    let mut b = SceneBuilder::new(w as u32, h as u32)
        .solid(Rgba8::rgb(229, 233, 240))
        .rounded_rect(
            rr([8, 8, w - 8, h - 8], 28, Rgba8::rgb(245, 247, 251))
                .outline(Rgba8::rgb(205, 214, 228), 2),
        )
        .rounded_rect(
            rr([20, 20, w - 20, h - 20], 24, Rgba8::rgb(248, 250, 253))
                .outline(Rgba8::rgb(221, 229, 241), 1),
        )
        .text(36, 46, "New thread", small(), Rgba8::rgb(31, 41, 55))
        .rounded_rect(rr([170, 34, 286, 68], 16, WHITE).outline(Rgba8::rgb(218, 226, 237), 1))
        .text(205, 45, "Open", small(), SLATE)
        .text(130, 300, "Let's build", FontSpec::bold(58.0), INK)
        .text(166, 362, "home", FontSpec::regular(46.0), MUTED);

    let cards = [
        "Build a classic Snake game in this repo.",
        "Create a one-page PDF that summarizes this app.",
        "Summarize last week's PRs by teammate.",
    ];
    for (i, card) in cards.into_iter().enumerate() {
        let y = 410 + i as i32 * 102;
        b = b
            .rounded_rect(
                rr([34, y, 396, y + 86], 22, WHITE).outline(Rgba8::rgb(226, 233, 242), 2),
            )
            .text(48, y + 32, card, FontSpec::regular(20.0), SLATE);
    }

    b.rounded_rect(rr([34, 734, 396, 818], 24, WHITE).outline(Rgba8::rgb(215, 224, 236), 2))
        .text(48, 768, "Ask Codex anything...", small(), PLACEHOLDER)
        .build()
}

/// Mobile sidebar that slides in over [`mobile_base`].
pub fn sidebar_panel() -> OverlayPanel {
    let nav = Rgba8::rgb(75, 85, 99);
    let thread = Rgba8::rgb(71, 85, 105);
    let mut labels = vec![
        TextSpec::new(38, 50, "New thread", small(), Rgba8::rgb(31, 41, 55)),
        TextSpec::new(38, 92, "Automations", small(), nav),
        TextSpec::new(38, 128, "Skills", small(), nav),
        TextSpec::new(38, 174, "Threads", small(), MUTED),
        TextSpec::new(38, 214, "home", small(), SLATE),
    ];
    for (i, item) in ["mobile-fix", "roadmap", "release", "issues"]
        .into_iter()
        .enumerate()
    {
        labels.push(TextSpec::new(56, 252 + i as i32 * 34, item, small(), thread));
    }

    OverlayPanel {
        overlay: INK,
        max_overlay_alpha: 120,
        max_width: 322,
        left: 20,
        top: 20,
        bottom_inset: 20,
        radius: 24,
        fill: Rgba8::rgb(243, 246, 251),
        outline: Rgba8::rgb(215, 225, 237),
        outline_width: 1,
        label_threshold: 120,
        labels,
    }
}

/// [`mobile_base`] with the sidebar at fraction `t`, flattened into one descriptor.
pub fn mobile_with_sidebar(t: f64) -> MockshotResult<SceneDescriptor> {
    let mut desc = mobile_base()?;
    desc.ops
        .extend(sidebar_panel().ops_at(t, desc.width, desc.height));
    Ok(desc)
}

/// Gradient card listing the project's strengths.
pub fn showcase() -> MockshotResult<SceneDescriptor> {
    let mut b = SceneBuilder::new(1280, 620)
        .gradient(Rgba8::rgb(17, 24, 39), Rgba8::rgb(30, 64, 175))
        .rounded_rect(
            rr([52, 58, 1228, 562], 28, Rgba8::rgba(255, 255, 255, 240))
                .outline(Rgba8::rgb(212, 221, 235), 2),
        )
        .text(
            90,
            106,
            "Why this repo feels production-ready",
            FontSpec::bold(46.0),
            Rgba8::rgb(15, 23, 42),
        );

    let bullets = [
        "Mobile-fit UX behavior and sidebar handling",
        "Start/stop/status/selftest command flow",
        "CI on every push and pull request",
        "Issue templates, PR checklist, and release checklist",
        "Source-backed Codex research and legal notes",
    ];
    for (i, bullet) in bullets.into_iter().enumerate() {
        let y = 190 + i as i32 * 72;
        b = b
            .rounded_rect(
                rr([92, y - 6, 1188, y + 52], 16, Rgba8::rgb(247, 250, 255))
                    .outline(Rgba8::rgb(226, 232, 242), 1),
            )
            .text(
                118,
                y + 10,
                format!("- {bullet}"),
                body(),
                Rgba8::rgb(51, 65, 85),
            );
    }
    b.build()
}

/// Named still images of the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CatalogScene {
    /// `hero-card.png`
    Hero,
    /// `desktop-overview.png`
    Desktop,
    /// `mobile-overview.png`
    Mobile,
    /// `mobile-sidebar-open.png`
    MobileSidebarOpen,
    /// `repo-showcase.png`
    Showcase,
}

impl CatalogScene {
    /// Every still, in output order.
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::Desktop,
        Self::Mobile,
        Self::MobileSidebarOpen,
        Self::Showcase,
    ];

    /// Short name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
            Self::MobileSidebarOpen => "mobile-open",
            Self::Showcase => "showcase",
        }
    }

    /// Output file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Hero => "hero-card.png",
            Self::Desktop => "desktop-overview.png",
            Self::Mobile => "mobile-overview.png",
            Self::MobileSidebarOpen => "mobile-sidebar-open.png",
            Self::Showcase => "repo-showcase.png",
        }
    }

    /// Descriptor for this still.
    pub fn descriptor(self) -> MockshotResult<SceneDescriptor> {
        match self {
            Self::Hero => hero(),
            Self::Desktop => desktop_overview(),
            Self::Mobile => mobile_with_sidebar(0.0),
            Self::MobileSidebarOpen => mobile_with_sidebar(1.0),
            Self::Showcase => showcase(),
        }
    }
}

impl std::fmt::Display for CatalogScene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CatalogScene {
    type Err = MockshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scene| scene.name() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|s| s.name()).collect();
                MockshotError::validation(format!(
                    "unknown scene '{s}', expected one of: {}",
                    known.join(", ")
                ))
            })
    }
}

/// File name of the sidebar demo animation.
pub const SIDEBAR_DEMO_FILE: &str = "mobile-sidebar-demo.gif";

#[cfg(test)]
#[path = "../../tests/unit/scene/catalog.rs"]
mod tests;
