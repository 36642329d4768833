//! **wot-render**: composites world-of-text tiles onto a 2D surface.
//!
//! [`render`] validates a [`RenderConfig`], fills an [`ImageSurface`] with
//! the public colour and paints every visible tile of a
//! [`WorldSnapshot`](wot_core::WorldSnapshot) onto it. [`render_into`] does
//! the same against any [`Surface`], which is how the compositor is tested
//! without fonts.
//!
//! Fonts are never discovered from the system. Register faces in a
//! [`FontBook`] first; characters no registered face covers are skipped.

mod color;
mod compositor;
mod config;
mod context;
mod error;
mod fonts;
mod raster;
mod render;
mod surface;

pub use color::parse_color;
pub use compositor::composite_tile;
pub use config::{DEFAULT_SYMBOL_FONT, GENERIC_FAMILY, RenderConfig};
pub use context::{RenderContext, Theme};
pub use error::{ColorParseError, FontError, RenderError};
pub use fonts::{FontBook, FontStyle, em_scale};
pub use raster::ImageSurface;
pub use render::{RenderStats, render, render_into};
pub use surface::{DrawOp, FontSpec, RecordingSurface, Surface};
