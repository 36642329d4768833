//! Font registration.
//!
//! Faces are registered under a family name and a [`FontStyle`] before the
//! first render. Lookups are case-insensitive on the family, like CSS
//! family names, and fall back to the regular face when a styled variant is
//! missing. Nothing is synthesized: a family without a bold face renders
//! bold text with its regular face.

use std::collections::HashMap;
use std::path::Path;

use rusttype::{Font, Scale};

use crate::error::FontError;

/// Weight and slant of a registered face.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
}

impl FontStyle {
    pub const REGULAR: Self = Self {
        bold: false,
        italic: false,
    };
    pub const BOLD: Self = Self {
        bold: true,
        italic: false,
    };
    pub const ITALIC: Self = Self {
        bold: false,
        italic: true,
    };
    pub const BOLD_ITALIC: Self = Self {
        bold: true,
        italic: true,
    };
}

/// Registry of parsed font faces.
#[derive(Default)]
pub struct FontBook {
    faces: HashMap<(String, FontStyle), Font<'static>>,
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("faces", &self.faces.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn family_key(family: &str) -> String {
    family.trim().trim_matches(['\'', '"']).to_lowercase()
}

impl FontBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register raw TrueType/OpenType data as `family` in `style`.
    ///
    /// A later registration of the same family and style replaces the
    /// earlier one.
    pub fn register(
        &mut self,
        family: &str,
        style: FontStyle,
        data: Vec<u8>,
    ) -> Result<(), FontError> {
        let font = Font::try_from_vec(data).ok_or_else(|| FontError::InvalidFont(family.to_owned()))?;
        log::debug!("registered font {family:?} {style:?}");
        self.faces.insert((family_key(family), style), font);
        Ok(())
    }

    /// Read a font file and register it.
    pub fn register_file(
        &mut self,
        family: &str,
        style: FontStyle,
        path: impl AsRef<Path>,
    ) -> Result<(), FontError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_owned(),
            source,
        })?;
        self.register(family, style, data)
    }

    /// The face for `family` in `style`, or its regular face.
    pub fn face(&self, family: &str, style: FontStyle) -> Option<&Font<'static>> {
        let key = family_key(family);
        self.faces
            .get(&(key.clone(), style))
            .or_else(|| self.faces.get(&(key, FontStyle::REGULAR)))
    }

    /// Whether `family` has any face at all.
    pub fn contains(&self, family: &str) -> bool {
        self.face(family, FontStyle::REGULAR).is_some()
            || self.faces.keys().any(|(f, _)| *f == family_key(family))
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Pick the first face in `families` that has a glyph for `c`.
    pub fn resolve<'a>(
        &'a self,
        families: &[String],
        style: FontStyle,
        c: char,
    ) -> Option<&'a Font<'static>> {
        families
            .iter()
            .filter_map(|family| self.face(family, style))
            .find(|font| font.glyph(c).id().0 != 0)
    }
}

/// The rusttype scale that renders a font at an em size of `px` pixels.
///
/// rusttype scales by the ascent-to-descent height, while font sizes are
/// em sizes.
pub fn em_scale(font: &Font<'_>, px: f32) -> Scale {
    let units_per_em = f32::from(font.units_per_em().max(1));
    let vm = font.v_metrics_unscaled();
    let height = vm.ascent - vm.descent;
    if height <= 0.0 {
        return Scale::uniform(px);
    }
    Scale::uniform(px * height / units_per_em)
}
