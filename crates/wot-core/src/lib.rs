//! **wot-core**: data model and codecs for rendering world-of-text snapshots.
//!
//! This crate provides the foundational types used by the renderer: tile and
//! world snapshot decoding, colours and writability, the viewport coordinate
//! mapper, and the cell content codec (graphemes, decoration marks and
//! permission overlays).

pub mod codec;
pub mod geom;
pub mod permission;
pub mod style;
pub mod tile;
pub mod viewport;
pub mod world;

pub use codec::{decoration_of, split_graphemes, strip_decorations};
pub use geom::{TileBounds, TilePos};
pub use permission::{PermissionGrid, PermissionOverlay, decode_permission_overlay};
pub use style::{Decoration, Rgb, Writability, resolve_writability};
pub use tile::{LinkKind, TILE_AREA, TILE_COLS, TILE_ROWS, Tile, TileProperties};
pub use viewport::{Viewport, ViewportError};
pub use world::{DecodeError, WorldSnapshot};
