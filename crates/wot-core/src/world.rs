//! World snapshots: the dense tile list and the sparse `"row,col"` map.

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;
use serde_json::Value;

use crate::geom::TilePos;
use crate::tile::{Tile, TileProperties, writability_from_value};

/// A snapshot that could not be read as a tile collection at all.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot must be an array of tiles or an object keyed by \"row,col\", got {0}")]
    NotATileCollection(&'static str),
}

/// One tile as it appears on the wire, before normalization.
///
/// Every field is kept as raw JSON so that one bad tile never fails the
/// whole snapshot.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTile {
    #[serde(default)]
    tile_x: Value,
    #[serde(default)]
    tile_y: Value,
    #[serde(default)]
    content: Value,
    #[serde(default)]
    writability: Value,
    #[serde(default)]
    properties: Value,
}

impl RawTile {
    fn content(&self) -> String {
        self.content.as_str().unwrap_or_default().to_owned()
    }
}

/// All tiles of a world, read-only for the duration of a render.
#[derive(Clone, Debug, PartialEq)]
pub enum WorldSnapshot {
    /// An ordered tile download. Each tile carries its own position.
    Dense(Vec<Tile>),
    /// Tiles keyed by position. `None` marks a known-empty slot.
    Sparse(BTreeMap<TilePos, Option<Tile>>),
}

impl Default for WorldSnapshot {
    fn default() -> Self {
        Self::Dense(Vec::new())
    }
}

impl WorldSnapshot {
    /// Decode a snapshot from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, DecodeError> {
        Self::from_value(serde_json::from_str(s)?)
    }

    /// Decode a snapshot from a JSON byte stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DecodeError> {
        Self::from_value(serde_json::from_reader(reader)?)
    }

    /// Decode a snapshot that has already been parsed one level.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Array(items) => Ok(Self::Dense(
                items.into_iter().filter_map(dense_tile).collect(),
            )),
            Value::Object(entries) => {
                let mut tiles = BTreeMap::new();
                for (key, value) in entries {
                    let Some(pos) = TilePos::from_row_col_key(&key) else {
                        log::debug!("skipping sparse entry with unparseable key {key:?}");
                        continue;
                    };
                    tiles.insert(pos, sparse_tile(pos, value));
                }
                Ok(Self::Sparse(tiles))
            }
            Value::Null => Err(DecodeError::NotATileCollection("null")),
            Value::Bool(_) => Err(DecodeError::NotATileCollection("a boolean")),
            Value::Number(_) => Err(DecodeError::NotATileCollection("a number")),
            Value::String(_) => Err(DecodeError::NotATileCollection("a string")),
        }
    }

    /// Every present tile, in storage order.
    pub fn tiles(&self) -> Box<dyn Iterator<Item = &Tile> + '_> {
        match self {
            Self::Dense(tiles) => Box::new(tiles.iter()),
            Self::Sparse(tiles) => Box::new(tiles.values().flatten()),
        }
    }

    /// Number of present tiles.
    pub fn len(&self) -> usize {
        self.tiles().count()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles().next().is_none()
    }
}

fn dense_tile(value: Value) -> Option<Tile> {
    let raw: RawTile = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("skipping malformed tile: {err}");
            return None;
        }
    };
    let (Some(x), Some(y)) = (raw.tile_x.as_i64(), raw.tile_y.as_i64()) else {
        log::warn!("skipping tile without integer coordinates");
        return None;
    };
    Some(Tile {
        pos: TilePos::new(x, y),
        content: raw.content(),
        writability: writability_from_value(Some(&raw.writability)),
        properties: TileProperties::from_value(&raw.properties),
    })
}

fn sparse_tile(pos: TilePos, value: Value) -> Option<Tile> {
    if value.is_null() {
        return None;
    }
    let raw: RawTile = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("treating malformed tile at {pos} as empty: {err}");
            return None;
        }
    };
    let properties = TileProperties::from_value(&raw.properties);
    Some(Tile {
        pos,
        content: raw.content(),
        writability: properties.writability,
        properties,
    })
}
