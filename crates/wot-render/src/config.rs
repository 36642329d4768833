//! Render configuration as supplied by the caller.
//!
//! Keys follow the camelCase names used by world tooling, so a settings
//! object can be deserialized directly from JSON. Every field has a default.

use serde::Deserialize;

/// Family name the block-symbol font is registered under.
pub const DEFAULT_SYMBOL_FONT: &str = "LegacyComputing";

/// Generic family appended to every font chain.
pub const GENERIC_FAMILY: &str = "sans-serif";

/// Options recognised by [`render`](crate::render).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// Horizontal pan, in blocks of four tiles.
    pub coord_x: f64,
    /// Vertical pan, in blocks of four tiles.
    pub coord_y: f64,
    /// 1.0 is 100 %.
    pub zoom: f64,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Text font family.
    pub font: String,
    /// Font size in pre-zoom pixels.
    pub font_size: f64,
    pub owner_color: String,
    pub member_color: String,
    pub public_color: String,
    pub text_color: String,
    pub coord_link_color: String,
    #[serde(rename = "URLLinkColor", alias = "urlLinkColor")]
    pub url_link_color: String,
    /// Writability of tiles that do not carry their own (0, 1 or 2).
    pub world_writability: i64,
    /// Clip text to its cell. Descenders that reach below the cell are cut.
    pub glyph_drawing_mode: bool,
    /// Family of the block-symbol font, tried before `font` for
    /// undecorated cells.
    pub symbol_font: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            coord_x: 0.0,
            coord_y: 0.0,
            zoom: 1.0,
            width: 800,
            height: 600,
            font: "Courier New".to_owned(),
            font_size: 16.0,
            owner_color: "#ddd".to_owned(),
            member_color: "#eee".to_owned(),
            public_color: "#fff".to_owned(),
            text_color: "#000".to_owned(),
            coord_link_color: "#008000".to_owned(),
            url_link_color: "#0000FF".to_owned(),
            world_writability: 0,
            glyph_drawing_mode: false,
            symbol_font: DEFAULT_SYMBOL_FONT.to_owned(),
        }
    }
}

impl RenderConfig {
    /// Set the canvas size (builder).
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the pan coordinate (builder).
    pub fn with_coord(mut self, x: f64, y: f64) -> Self {
        self.coord_x = x;
        self.coord_y = y;
        self
    }

    /// Set the zoom (builder).
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }
}
