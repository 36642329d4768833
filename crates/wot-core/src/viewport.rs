//! Coordinate mapping between world tiles, canvas pixels and the visible
//! tile range.
//!
//! All world-space arithmetic is done in `f64`: tile coordinates in a large
//! world multiplied by the tile footprint quickly exceed what `f32` can hold
//! exactly. Values handed to the drawing surface are canvas-relative and small.

use crate::geom::{TileBounds, TilePos};
use crate::tile::{TILE_COLS, TILE_ROWS};

/// Tile footprint in pre-zoom units.
pub const TILE_WIDTH: f64 = 160.0;
pub const TILE_HEIGHT: f64 = 144.0;

/// Cell footprint in pre-zoom units. 16 x 10 = 160 and 8 x 18 = 144.
pub const CELL_WIDTH: f64 = TILE_WIDTH / TILE_COLS as f64;
pub const CELL_HEIGHT: f64 = TILE_HEIGHT / TILE_ROWS as f64;

/// Pan coordinates count in blocks of this many tiles.
pub const COORD_TILE_SPAN: f64 = 4.0;

/// Rejected viewport parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewportError {
    #[error("zoom must be a finite number greater than zero, got {0}")]
    InvalidZoom(f64),
    #[error("canvas must be at least 1x1 pixels, got {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },
    #[error("pan coordinates must be finite, got ({x}, {y})")]
    InvalidCoord { x: f64, y: f64 },
}

/// The visible world region for one render.
///
/// Built once per render call and never mutated; everything derived from
/// zoom (tile size, cell size, pan offset, visible bounds) lives here.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
    bounds: TileBounds,
}

impl Viewport {
    /// Create a viewport of `width x height` pixels centred on the pan
    /// coordinate `(coord_x, coord_y)` at the given zoom.
    pub fn new(
        width: u32,
        height: u32,
        zoom: f64,
        coord_x: f64,
        coord_y: f64,
    ) -> Result<Self, ViewportError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(ViewportError::InvalidZoom(zoom));
        }
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidCanvasSize { width, height });
        }
        if !(coord_x.is_finite() && coord_y.is_finite()) {
            return Err(ViewportError::InvalidCoord {
                x: coord_x,
                y: coord_y,
            });
        }

        // The vertical term negates coord_y before the shared negation, so a
        // positive coord_y moves the view towards negative tile rows.
        let offset_x = -(TILE_WIDTH * zoom * coord_x * COORD_TILE_SPAN);
        let offset_y = -(TILE_HEIGHT * zoom * -coord_y * COORD_TILE_SPAN);

        let mut vp = Self {
            width,
            height,
            zoom,
            offset_x,
            offset_y,
            bounds: TileBounds::new(TilePos::ZERO, TilePos::ZERO),
        };
        let top_left = vp.pixel_to_tile(0.0, 0.0);
        let bottom_right = vp.pixel_to_tile(f64::from(width - 1), f64::from(height - 1));
        vp.bounds = TileBounds::new(top_left, bottom_right);
        Ok(vp)
    }

    /// Canvas size in pixels.
    #[inline]
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Pan offset in canvas pixels.
    #[inline]
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    /// Tile footprint on the canvas.
    #[inline]
    pub fn tile_size(&self) -> (f64, f64) {
        (TILE_WIDTH * self.zoom, TILE_HEIGHT * self.zoom)
    }

    /// Cell footprint on the canvas.
    #[inline]
    pub fn cell_size(&self) -> (f64, f64) {
        (CELL_WIDTH * self.zoom, CELL_HEIGHT * self.zoom)
    }

    /// Scale a pre-zoom length (font size, line offsets) to canvas pixels.
    #[inline]
    pub fn scale(&self, len: f64) -> f64 {
        len * self.zoom
    }

    /// The tile containing canvas pixel `(px, py)`.
    pub fn pixel_to_tile(&self, px: f64, py: f64) -> TilePos {
        let x = (px - self.offset_x - f64::from(self.width) / 2.0) / self.zoom;
        let y = (py - self.offset_y - f64::from(self.height) / 2.0) / self.zoom;
        TilePos::new(
            (x / TILE_WIDTH).floor() as i64,
            (y / TILE_HEIGHT).floor() as i64,
        )
    }

    /// Canvas position of a tile's top-left corner.
    pub fn tile_to_pixel(&self, tile: TilePos) -> (f64, f64) {
        self.cell_to_pixel(tile, 0, 0)
    }

    /// Canvas position of the top-left corner of cell `(col, row)` in a tile.
    pub fn cell_to_pixel(&self, tile: TilePos, col: usize, row: usize) -> (f64, f64) {
        let wx = tile.x as f64 * TILE_WIDTH + col as f64 * CELL_WIDTH;
        let wy = tile.y as f64 * TILE_HEIGHT + row as f64 * CELL_HEIGHT;
        (
            self.offset_x + f64::from(self.width) / 2.0 + wx * self.zoom,
            self.offset_y + f64::from(self.height) / 2.0 + wy * self.zoom,
        )
    }

    /// Inclusive tile range covering every canvas pixel.
    #[inline]
    pub fn bounds(&self) -> TileBounds {
        self.bounds
    }

    /// Whether any part of the tile can land on the canvas.
    #[inline]
    pub fn is_tile_visible(&self, tile: TilePos) -> bool {
        self.bounds.contains(tile)
    }
}
