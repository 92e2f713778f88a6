use std::collections::HashMap;

use crate::{
    foundation::error::{MockshotError, MockshotResult},
    text::fonts::{FaceKey, FontFace},
};

/// Brush carried through Parley layouts. Glyphs are rasterized as coverage only; color is
/// applied when the mask is composited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaskBrush;

/// Stateful helper for building single-line Parley layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<MaskBrush>,
    registered: HashMap<FaceKey, String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            registered: HashMap::new(),
        }
    }

    /// Shape `text` as one unwrapped line in `face` at `size_px`.
    pub fn layout_line(
        &mut self,
        text: &str,
        face: &FontFace,
        size_px: f32,
    ) -> MockshotResult<parley::Layout<MaskBrush>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(MockshotError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let family_name = self.register(face)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(f32::from(face.weight)),
        ));
        builder.push_default(parley::style::StyleProperty::Brush(MaskBrush));

        let mut layout: parley::Layout<MaskBrush> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    fn register(&mut self, face: &FontFace) -> MockshotResult<String> {
        let key = FaceKey::of(face);
        if let Some(name) = self.registered.get(&key) {
            return Ok(name.clone());
        }

        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(face.bytes.as_ref().clone()),
            None,
        );
        let mut family_id = families.first().map(|(id, _)| *id);
        for (id, _) in &families {
            if self.font_ctx.collection.family_name(*id) == Some(face.family.as_str()) {
                family_id = Some(*id);
                break;
            }
        }
        let family_id = family_id
            .ok_or_else(|| MockshotError::font("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| MockshotError::font("registered font family has no name"))?
            .to_string();
        self.registered.insert(key, family_name.clone());
        Ok(family_name)
    }
}
