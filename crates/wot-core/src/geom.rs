//! Geometry primitives: [`TilePos`] and [`TileBounds`].

use std::fmt;

// ---------------------------------------------------------------------------
// TilePos
// ---------------------------------------------------------------------------

/// A tile coordinate in the world grid. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TilePos {
    pub x: i64,
    pub y: i64,
}

impl TilePos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new tile position.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Parse a sparse-map key of the form `"tileY,tileX"` (row first).
    ///
    /// Returns `None` for anything that is not exactly two integers.
    pub fn from_row_col_key(key: &str) -> Option<Self> {
        let (row, col) = key.split_once(',')?;
        let y = row.trim().parse().ok()?;
        let x = col.trim().parse().ok()?;
        Some(Self::new(x, y))
    }
}

impl PartialOrd for TilePos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TilePos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// TileBounds
// ---------------------------------------------------------------------------

/// An inclusive rectangle of tiles \[min, max\].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileBounds {
    pub min: TilePos,
    pub max: TilePos,
}

impl TileBounds {
    /// Create bounds from two corners, canonicalized so `min <= max` per axis.
    #[inline]
    pub fn new(a: TilePos, b: TilePos) -> Self {
        Self {
            min: TilePos::new(a.x.min(b.x), a.y.min(b.y)),
            max: TilePos::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Whether the tile lies inside the bounds (edges included).
    #[inline]
    pub fn contains(&self, p: TilePos) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }
}

impl fmt::Display for TileBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..={}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_col_key_is_row_first() {
        assert_eq!(TilePos::from_row_col_key("3,-7"), Some(TilePos::new(-7, 3)));
        assert_eq!(TilePos::from_row_col_key(" 0 , 1 "), Some(TilePos::new(1, 0)));
        assert_eq!(TilePos::from_row_col_key("1"), None);
        assert_eq!(TilePos::from_row_col_key("a,b"), None);
        assert_eq!(TilePos::from_row_col_key("1,2,3"), None);
    }

    #[test]
    fn bounds_canonicalize_and_contain() {
        let b = TileBounds::new(TilePos::new(2, 5), TilePos::new(-1, 0));
        assert_eq!(b.min, TilePos::new(-1, 0));
        assert_eq!(b.max, TilePos::new(2, 5));
        assert!(b.contains(TilePos::new(-1, 0)));
        assert!(b.contains(TilePos::new(2, 5)));
        assert!(!b.contains(TilePos::new(3, 5)));
    }

    #[test]
    fn extreme_bounds_stay_well_formed() {
        let b = TileBounds::new(TilePos::new(i64::MAX, i64::MAX), TilePos::new(i64::MIN, i64::MIN));
        assert!(b.contains(TilePos::ZERO));
        assert!(b.contains(TilePos::new(i64::MIN, i64::MAX)));
        assert_eq!(
            b.to_string(),
            format!("[{}..={}]", TilePos::new(i64::MIN, i64::MIN), TilePos::new(i64::MAX, i64::MAX))
        );
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(TilePos::new(5, 0) < TilePos::new(0, 1));
        assert!(TilePos::new(-1, 2) < TilePos::new(0, 2));
    }
}
