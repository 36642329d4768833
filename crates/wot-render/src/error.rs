//! Error types for rendering and font registration.

use std::path::PathBuf;

use wot_core::ViewportError;

/// A colour string that is not `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a known
/// colour name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised colour {0:?}")]
pub struct ColorParseError(pub String);

/// Configuration rejected before any drawing happens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error("font size must be a finite number greater than zero, got {0}")]
    InvalidFontSize(f64),
    #[error("world writability must be 0, 1 or 2, got {0}")]
    InvalidWritability(i64),
    #[error("invalid `{option}`: {source}")]
    Color {
        option: &'static str,
        #[source]
        source: ColorParseError,
    },
}

/// Failure to register a font face.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// The font data could not be parsed.
    #[error("invalid font data for family {0:?}")]
    InvalidFont(String),
    #[error("failed to read font file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
