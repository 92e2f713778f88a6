use std::{collections::HashMap, path::Path, sync::Arc};

use usvg::fontdb;

use crate::render::settings::RenderSettings;

/// Family used by every catalog scene.
pub const DEFAULT_FAMILY: &str = "DejaVu Sans";

/// Font weight requested by a text run.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    /// Normal (400).
    #[default]
    Regular,
    /// Bold (700).
    Bold,
}

impl FontWeight {
    fn to_fontdb(self) -> fontdb::Weight {
        match self {
            Self::Regular => fontdb::Weight::NORMAL,
            Self::Bold => fontdb::Weight::BOLD,
        }
    }
}

/// Font descriptor: family, weight and pixel size.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontSpec {
    /// Family name looked up in the font database.
    pub family: String,
    /// Requested weight.
    #[serde(default)]
    pub weight: FontWeight,
    /// Em size in pixels.
    pub size_px: f32,
}

impl FontSpec {
    /// [`DEFAULT_FAMILY`] at regular weight.
    pub fn regular(size_px: f32) -> Self {
        Self {
            family: DEFAULT_FAMILY.to_string(),
            weight: FontWeight::Regular,
            size_px,
        }
    }

    /// [`DEFAULT_FAMILY`] at bold weight.
    pub fn bold(size_px: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..Self::regular(size_px)
        }
    }
}

/// Raw bytes of one resolved font face.
#[derive(Clone)]
pub struct FontFace {
    /// Family name reported by the face.
    pub family: String,
    /// Face index inside `bytes` (non-zero for collections).
    pub index: u32,
    /// OpenType weight class of the face (400 regular, 700 bold).
    pub weight: u16,
    /// Complete font file contents.
    pub bytes: Arc<Vec<u8>>,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family", &self.family)
            .field("index", &self.index)
            .field("weight", &self.weight)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

/// Identity of a resolved face, used to key per-face caches.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FaceKey {
    family: String,
    index: u32,
    weight: u16,
}

impl FaceKey {
    /// Key for `face`.
    pub fn of(face: &FontFace) -> Self {
        Self {
            family: face.family.clone(),
            index: face.index,
            weight: face.weight,
        }
    }
}

/// Where a handle's glyphs come from.
#[derive(Clone, Debug)]
pub enum FontSource {
    /// Outline font shaped and rasterized from its bytes.
    Face(Arc<FontFace>),
    /// Built-in block glyph set, used when no font file is available at all.
    Builtin,
}

/// Result of [`FontProvider::load_font`]; always usable, possibly a fallback.
#[derive(Clone, Debug)]
pub struct FontHandle {
    /// Glyph source.
    pub source: FontSource,
    /// Em size in pixels.
    pub size_px: f32,
    /// Whether the requested family/weight was unavailable and something else was substituted.
    pub fallback: bool,
}

/// Resolves font descriptors against system fonts and configured font directories.
///
/// Cloning is cheap; the database is shared and each clone keeps its own resolution cache.
#[derive(Clone)]
pub struct FontProvider {
    db: Arc<fontdb::Database>,
    resolved: HashMap<(String, FontWeight), (FontSource, bool)>,
}

impl FontProvider {
    /// System fonts, `./fonts`, then every directory in `settings.font_dirs`.
    pub fn new(settings: &RenderSettings) -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        load_fonts_from_dir(&mut db, Path::new("fonts"));
        for dir in &settings.font_dirs {
            load_fonts_from_dir(&mut db, dir);
        }
        tracing::debug!(faces = db.len(), "font database ready");
        Self::from_database(db)
    }

    /// Provider with no fonts at all; every request resolves to the built-in glyph set.
    pub fn builtin_only() -> Self {
        Self::from_database(fontdb::Database::new())
    }

    /// Provider over an already populated database.
    pub fn from_database(db: fontdb::Database) -> Self {
        Self {
            db: Arc::new(db),
            resolved: HashMap::new(),
        }
    }

    /// Number of faces known to the database.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Resolve `family` at `weight`, falling back to the generic sans-serif face, then to any
    /// face, then to the built-in glyph set. Never fails.
    pub fn load_font(&mut self, family: &str, weight: FontWeight, size_px: f32) -> FontHandle {
        let key = (family.to_string(), weight);
        let (source, fallback) = match self.resolved.get(&key) {
            Some(hit) => hit.clone(),
            None => {
                let resolved = self.resolve(family, weight);
                self.resolved.insert(key, resolved.clone());
                resolved
            }
        };
        FontHandle {
            source,
            size_px,
            fallback,
        }
    }

    /// Shorthand for [`FontProvider::load_font`] with a [`FontSpec`].
    pub fn load_spec(&mut self, spec: &FontSpec) -> FontHandle {
        self.load_font(&spec.family, spec.weight, spec.size_px)
    }

    fn resolve(&self, family: &str, weight: FontWeight) -> (FontSource, bool) {
        if let Some(face) = self.query(fontdb::Family::Name(family), weight) {
            return (FontSource::Face(face), false);
        }

        let substitute = self
            .query(fontdb::Family::SansSerif, weight)
            .or_else(|| {
                let id = self.db.faces().next().map(|f| f.id)?;
                self.face_data(id)
            });

        match substitute {
            Some(face) => {
                tracing::warn!(
                    requested = family,
                    ?weight,
                    substitute = %face.family,
                    "font family unavailable, substituting"
                );
                (FontSource::Face(face), true)
            }
            None => {
                tracing::warn!(
                    requested = family,
                    ?weight,
                    "no fonts available, using built-in glyphs"
                );
                (FontSource::Builtin, true)
            }
        }
    }

    fn query(&self, family: fontdb::Family<'_>, weight: FontWeight) -> Option<Arc<FontFace>> {
        let families = [family];
        let query = fontdb::Query {
            families: &families,
            weight: weight.to_fontdb(),
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        let id = self.db.query(&query)?;
        self.face_data(id)
    }

    fn face_data(&self, id: fontdb::ID) -> Option<Arc<FontFace>> {
        let info = self.db.face(id)?;
        let family = info
            .families
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_default();
        let weight = info.weight.0;
        let (bytes, index) = self
            .db
            .with_face_data(id, |data, index| (data.to_vec(), index))?;
        Some(Arc::new(FontFace {
            family,
            index,
            weight,
            bytes: Arc::new(bytes),
        }))
    }
}

fn load_fonts_from_dir(db: &mut fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(err) = db.load_font_file(&path) {
            tracing::debug!(path = %path.display(), %err, "skipping unreadable font file");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
