use std::path::Path;
use std::sync::{Arc, LazyLock};

use usvg::fontdb;

use crate::config::model::{FontFamily, FontSpec};
use crate::foundation::error::{AvatarError, AvatarResult};

static SYSTEM_FONTS: LazyLock<Arc<fontdb::Database>> = LazyLock::new(|| {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    tracing::debug!(faces = db.len(), "loaded system fonts");
    Arc::new(db)
});

const SANS_SERIF_FALLBACKS: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Arial",
    "Helvetica",
    "Verdana",
    "Segoe UI",
    "Roboto",
    "FreeSans",
];

const SERIF_FALLBACKS: &[&str] = &[
    "DejaVu Serif",
    "Liberation Serif",
    "Noto Serif",
    "Times New Roman",
    "Georgia",
    "FreeSerif",
];

const MONOSPACE_FALLBACKS: &[&str] = &[
    "DejaVu Sans Mono",
    "Liberation Mono",
    "Noto Sans Mono",
    "Courier New",
    "Consolas",
    "FreeMono",
];

/// Set of font faces the rasterizer can draw with.
///
/// Cloning is cheap; adding fonts to a clone copies the face index on first write.
#[derive(Clone, Debug)]
pub struct FontLibrary {
    db: Arc<fontdb::Database>,
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::system()
    }
}

impl FontLibrary {
    /// Fonts installed on the system, scanned once per process.
    pub fn system() -> Self {
        Self {
            db: Arc::clone(&SYSTEM_FONTS),
        }
    }

    /// A library with no faces. Rendering fails until fonts are registered.
    pub fn empty() -> Self {
        Self {
            db: Arc::new(fontdb::Database::new()),
        }
    }

    /// Register every face contained in `bytes` (TTF, OTF or TTC). Returns the number of faces
    /// added.
    pub fn register_font_data(&mut self, bytes: Vec<u8>) -> usize {
        let db = Arc::make_mut(&mut self.db);
        let before = db.len();
        db.load_font_data(bytes);
        db.len() - before
    }

    /// Register all `.ttf`, `.otf` and `.ttc` files directly inside `dir`. Unreadable font
    /// files are skipped. Returns the number of faces added.
    pub fn load_fonts_from_dir(&mut self, dir: impl AsRef<Path>) -> AvatarResult<usize> {
        let dir = dir.as_ref();
        let rd = std::fs::read_dir(dir).map_err(|e| AvatarError::io(dir, e))?;

        let db = Arc::make_mut(&mut self.db);
        let before = db.len();
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
            if let Err(e) = db.load_font_file(&path) {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable font file");
            }
        }
        Ok(db.len() - before)
    }

    /// Number of faces available.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Return `true` when at least one face belongs to `family` (exact name match).
    pub fn has_family(&self, family: &str) -> bool {
        self.db
            .faces()
            .any(|f| f.families.iter().any(|(name, _)| name == family))
    }

    /// Pick the face that best matches `spec`.
    ///
    /// Named families must exist. Generic families try the database's own mapping, then a
    /// list of common families, then any face at all.
    pub(crate) fn resolve(&self, spec: &FontSpec) -> AvatarResult<fontdb::ID> {
        let weight = fontdb::Weight(spec.style.weight());
        let style = if spec.style.italic {
            fontdb::Style::Italic
        } else {
            fontdb::Style::Normal
        };
        let query_one = |family: fontdb::Family<'_>| {
            self.db.query(&fontdb::Query {
                families: &[family],
                weight,
                stretch: fontdb::Stretch::Normal,
                style,
            })
        };

        let (generic, fallbacks) = match &spec.family {
            FontFamily::Named(name) => {
                return query_one(fontdb::Family::Name(name)).ok_or_else(|| {
                    AvatarError::render_failure(format!("font family '{name}' is not available"))
                });
            }
            FontFamily::SansSerif => (fontdb::Family::SansSerif, SANS_SERIF_FALLBACKS),
            FontFamily::Serif => (fontdb::Family::Serif, SERIF_FALLBACKS),
            FontFamily::Monospace => (fontdb::Family::Monospace, MONOSPACE_FALLBACKS),
        };

        query_one(generic)
            .or_else(|| {
                fallbacks
                    .iter()
                    .find_map(|name| query_one(fontdb::Family::Name(name)))
            })
            .or_else(|| self.db.faces().next().map(|f| f.id))
            .ok_or_else(|| {
                AvatarError::render_failure(format!(
                    "no font available for generic family '{}'",
                    spec.family
                ))
            })
    }

    /// Raw bytes of the file or blob holding `id`, plus the face index inside it.
    pub(crate) fn face_data(&self, id: fontdb::ID) -> AvatarResult<(Vec<u8>, u32)> {
        self.db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| AvatarError::render_failure("font face data is unavailable"))
    }

    /// Primary family name of face `id`.
    pub(crate) fn family_name(&self, id: fontdb::ID) -> Option<&str> {
        self.db
            .face(id)
            .and_then(|f| f.families.first())
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fonts.rs"]
mod tests;
