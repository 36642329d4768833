//! The [`Tile`] type and its per-cell [`TileProperties`].
//!
//! Property arrays come from user-edited world data. Decoding is lenient:
//! a field of the wrong shape is treated as absent and logged, never
//! propagated as an error.

use serde_json::{Map, Value};

use crate::geom::TilePos;
use crate::style::{Rgb, Writability};

/// Cells per tile row.
pub const TILE_COLS: usize = 16;
/// Cell rows per tile.
pub const TILE_ROWS: usize = 8;
/// Cells per tile.
pub const TILE_AREA: usize = TILE_COLS * TILE_ROWS;

/// Target of a cell link. Only the kind matters for rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Url,
    Coord,
    /// A link of a type this renderer has no colour for.
    Other,
}

impl LinkKind {
    fn from_value(link: &Value) -> Option<Self> {
        match link {
            Value::Null | Value::Bool(false) => None,
            Value::Object(obj) => Some(match obj.get("type").and_then(Value::as_str) {
                Some("url") => Self::Url,
                Some("coord") => Self::Coord,
                _ => Self::Other,
            }),
            _ => Some(Self::Other),
        }
    }
}

/// Decoded per-cell tile properties.
///
/// Each array is indexed row-major by cell. Missing arrays are empty, and
/// lookups past the end mean "no override".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileProperties {
    /// Explicit foreground colours. `None` means the theme text colour.
    pub color: Vec<Option<Rgb>>,
    /// Background overrides. `None` means keep the permission colour.
    pub bgcolor: Vec<Option<Rgb>>,
    /// Link kind per cell.
    pub links: Vec<Option<LinkKind>>,
    /// Raw permission-overlay string, still encoded.
    pub char_overlay: Option<String>,
    /// Writability stored inside the properties (sparse snapshots only).
    pub writability: Option<Writability>,
}

impl TileProperties {
    /// Decode properties that may still be a JSON-encoded string.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => match serde_json::from_str::<Value>(s) {
                Ok(Value::Object(obj)) => Self::from_object(&obj),
                Ok(_) => Self::default(),
                Err(err) => {
                    log::warn!("ignoring undecodable tile properties: {err}");
                    Self::default()
                }
            },
            Value::Object(obj) => Self::from_object(obj),
            Value::Null => Self::default(),
            other => {
                log::warn!("ignoring tile properties of unexpected type: {other}");
                Self::default()
            }
        }
    }

    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            color: decode_cells(obj.get("color"), "color", foreground_entry),
            bgcolor: decode_cells(obj.get("bgcolor"), "bgcolor", background_entry),
            links: decode_links(obj.get("cell_props")),
            char_overlay: obj
                .get("char")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
            writability: writability_from_value(obj.get("writability")),
        }
    }

    /// Foreground override of cell `idx`.
    #[inline]
    pub fn fg(&self, idx: usize) -> Option<Rgb> {
        self.color.get(idx).copied().flatten()
    }

    /// Background override of cell `idx`.
    #[inline]
    pub fn bg(&self, idx: usize) -> Option<Rgb> {
        self.bgcolor.get(idx).copied().flatten()
    }

    /// Link attached to cell `idx`.
    #[inline]
    pub fn link(&self, idx: usize) -> Option<LinkKind> {
        self.links.get(idx).copied().flatten()
    }
}

/// Read a writability level, treating anything but `0 | 1 | 2` as "inherit".
pub fn writability_from_value(value: Option<&Value>) -> Option<Writability> {
    value.and_then(Value::as_i64).and_then(Writability::from_level)
}

fn as_integer(v: &Value) -> Option<i64> {
    v.as_i64().or_else(|| v.as_f64().map(|f| f.trunc() as i64))
}

fn foreground_entry(v: &Value) -> Option<Rgb> {
    as_integer(v).filter(|&n| n > 0).map(Rgb::from_packed)
}

fn background_entry(v: &Value) -> Option<Rgb> {
    as_integer(v).filter(|&n| n != -1).map(Rgb::from_packed)
}

fn decode_cells(
    field: Option<&Value>,
    name: &str,
    entry: fn(&Value) -> Option<Rgb>,
) -> Vec<Option<Rgb>> {
    match field {
        Some(Value::Array(items)) => items.iter().take(TILE_AREA).map(entry).collect(),
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            log::warn!("ignoring tile `{name}` that is not an array: {other}");
            Vec::new()
        }
    }
}

/// Look up child `i` of a container that may be an array or an object keyed
/// by decimal index.
fn indexed(container: &Value, i: usize) -> Option<&Value> {
    match container {
        Value::Array(items) => items.get(i),
        Value::Object(obj) => obj.get(&i.to_string()),
        _ => None,
    }
}

fn decode_links(field: Option<&Value>) -> Vec<Option<LinkKind>> {
    let Some(props) = field.filter(|v| v.is_array() || v.is_object()) else {
        return Vec::new();
    };
    let mut links = vec![None; TILE_AREA];
    for row in 0..TILE_ROWS {
        let Some(row_props) = indexed(props, row) else {
            continue;
        };
        for col in 0..TILE_COLS {
            links[row * TILE_COLS + col] = indexed(row_props, col)
                .and_then(|cell| cell.get("link"))
                .and_then(LinkKind::from_value);
        }
    }
    links
}

/// One 16x8 tile of the world.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tile {
    pub pos: TilePos,
    /// Cell text, 128 graphemes in row-major order when well formed.
    pub content: String,
    /// Tile-level writability; `None` inherits the world default.
    pub writability: Option<Writability>,
    pub properties: TileProperties,
}

impl Tile {
    /// An empty tile at `pos` with no properties.
    pub fn new(pos: TilePos, content: impl Into<String>) -> Self {
        Self {
            pos,
            content: content.into(),
            writability: None,
            properties: TileProperties::default(),
        }
    }

    /// Set the tile writability (builder).
    pub fn with_writability(mut self, writability: Option<Writability>) -> Self {
        self.writability = writability;
        self
    }

    /// Set the properties (builder).
    pub fn with_properties(mut self, properties: TileProperties) -> Self {
        self.properties = properties;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn properties_from_encoded_string() {
        let raw = json!(r##"{"color":[0,16711680],"bgcolor":[-1,0],"char":"#1,2"}"##);
        let props = TileProperties::from_value(&raw);
        assert_eq!(props.fg(0), None);
        assert_eq!(props.fg(1), Some(Rgb::from_rgb(255, 0, 0)));
        assert_eq!(props.bg(0), None);
        // Zero is black, not "no override".
        assert_eq!(props.bg(1), Some(Rgb::BLACK));
        assert_eq!(props.char_overlay.as_deref(), Some("#1,2"));
    }

    #[test]
    fn absent_and_out_of_range_entries_mean_no_override() {
        let props = TileProperties::from_value(&json!({"color": [255], "bgcolor": [-1]}));
        assert_eq!(props.fg(0), Some(Rgb(255)));
        assert_eq!(props.fg(127), None);
        assert_eq!(props.bg(5), None);
    }

    #[test]
    fn malformed_fields_degrade_to_absent() {
        let props = TileProperties::from_value(&json!({
            "color": "red",
            "bgcolor": [null, "blue", 65280],
            "char": 7,
            "writability": "owner",
        }));
        assert!(props.color.is_empty());
        assert_eq!(props.bg(0), None);
        assert_eq!(props.bg(1), None);
        assert_eq!(props.bg(2), Some(Rgb::from_rgb(0, 255, 0)));
        assert_eq!(props.char_overlay, None);
        assert_eq!(props.writability, None);

        assert_eq!(TileProperties::from_value(&json!("{not json")), TileProperties::default());
        assert_eq!(TileProperties::from_value(&json!(12)), TileProperties::default());
    }

    #[test]
    fn cell_props_as_objects_or_arrays() {
        let props = TileProperties::from_value(&json!({
            "cell_props": {
                "1": { "3": { "link": { "type": "url", "url": "https://example.com" } } },
                "7": { "15": { "link": { "type": "coord", "link_tileX": 1 } },
                       "0": { "link": { "type": "mailto" } } }
            }
        }));
        assert_eq!(props.link(TILE_COLS + 3), Some(LinkKind::Url));
        assert_eq!(props.link(TILE_AREA - 1), Some(LinkKind::Coord));
        assert_eq!(props.link(7 * TILE_COLS), Some(LinkKind::Other));
        assert_eq!(props.link(0), None);

        let props = TileProperties::from_value(&json!({
            "cell_props": [[{ "link": { "type": "coord" } }]]
        }));
        assert_eq!(props.link(0), Some(LinkKind::Coord));
        assert_eq!(props.link(1), None);
    }

    #[test]
    fn sparse_writability_lives_in_properties() {
        let props = TileProperties::from_value(&json!({ "writability": 1 }));
        assert_eq!(props.writability, Some(Writability::Member));
        let props = TileProperties::from_value(&json!({ "writability": null }));
        assert_eq!(props.writability, None);
    }
}
