//! **wot-glyphs**: exact fill geometry for terminal graphics symbols.
//!
//! Block elements, shades, quadrants, sextants, octants and the triangular
//! "shard" symbols are drawn as filled rectangles and polygons instead of
//! font outlines. The shapes line up with the cell edges at every zoom level
//! and do not depend on which fonts are installed.
//!
//! Everything here is pure: a code point and a cell rectangle go in, a list
//! of [`Shape`]s in the same coordinate space comes out. The tables are
//! `static` and safe to share between threads.
//!
//! [`is_valid_special_symbol`] is the gate. A code point that fails it has no
//! geometry and must be drawn as text.

mod block;
mod mosaic;
mod shard;

/// An axis-aligned rectangle, `(x, y)` is the top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// A filled shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect(Rect),
    /// A closed polygon. The edge from the last vertex back to the first is
    /// implied.
    Polygon(Vec<[f32; 2]>),
}

/// The drawing family a symbol belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GlyphFamily {
    /// Full, half and n/8 blocks anchored to one cell edge.
    Fractional,
    /// Light, medium and dark shade.
    Shade,
    /// 2x2 quadrant blocks.
    Quadrant,
    /// 2x3 sextant blocks.
    Sextant,
    /// Triangles and wedges over a 3x5 anchor grid.
    Shard,
    /// 2x4 octant blocks.
    Octant,
}

/// Classify a code point. Families are disjoint; the first match wins.
pub fn classify(c: char) -> Option<GlyphFamily> {
    if block::is_fractional(c) {
        Some(GlyphFamily::Fractional)
    } else if block::is_shade(c) {
        Some(GlyphFamily::Shade)
    } else if block::is_quadrant(c) {
        Some(GlyphFamily::Quadrant)
    } else if mosaic::is_sextant(c) {
        Some(GlyphFamily::Sextant)
    } else if shard::is_shard(c) {
        Some(GlyphFamily::Shard)
    } else if mosaic::is_octant(c) {
        Some(GlyphFamily::Octant)
    } else {
        None
    }
}

/// Whether `c` has built-in geometry at all.
#[inline]
pub fn is_valid_special_symbol(c: char) -> bool {
    classify(c).is_some()
}

/// Whether `c` is one of the geometric triangles (U+25E2..U+25E5, U+25B2,
/// U+25BA, U+25BC, U+25C4) that only use built-in geometry in bold cells.
/// Regular-weight cells draw them from the font.
#[inline]
pub fn requires_bold(c: char) -> bool {
    shard::is_bold_gated(c)
}

/// Fill geometry for `c` inside `cell`.
///
/// Returns an empty list for code points without geometry and for the
/// blank octant pattern.
pub fn glyph_shapes(c: char, cell: Rect) -> Vec<Shape> {
    match classify(c) {
        Some(GlyphFamily::Fractional) => block::fractional(c, cell).into_iter().collect(),
        Some(GlyphFamily::Shade) => block::shade(c, cell),
        Some(GlyphFamily::Quadrant) => block::quadrant(c, cell),
        Some(GlyphFamily::Sextant) => mosaic::sextant(c, cell),
        Some(GlyphFamily::Shard) => shard::shard(c, cell).into_iter().collect(),
        Some(GlyphFamily::Octant) => mosaic::octant(c, cell),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CELL: Rect = Rect::new(10.0, 20.0, 10.0, 18.0);

    fn ch(cp: u32) -> char {
        char::from_u32(cp).unwrap()
    }

    #[test]
    fn family_ranges() {
        assert_eq!(classify('\u{2580}'), Some(GlyphFamily::Fractional));
        assert_eq!(classify('\u{2590}'), Some(GlyphFamily::Fractional));
        assert_eq!(classify('\u{2592}'), Some(GlyphFamily::Shade));
        assert_eq!(classify('\u{2594}'), Some(GlyphFamily::Fractional));
        assert_eq!(classify('\u{2596}'), Some(GlyphFamily::Quadrant));
        assert_eq!(classify('\u{259F}'), Some(GlyphFamily::Quadrant));
        assert_eq!(classify('\u{1FB00}'), Some(GlyphFamily::Sextant));
        assert_eq!(classify('\u{1FB3B}'), Some(GlyphFamily::Sextant));
        assert_eq!(classify('\u{1FB3C}'), Some(GlyphFamily::Shard));
        assert_eq!(classify('\u{1FB6F}'), Some(GlyphFamily::Shard));
        assert_eq!(classify('\u{1FB82}'), Some(GlyphFamily::Fractional));
        assert_eq!(classify('\u{1FB8B}'), Some(GlyphFamily::Fractional));
        assert_eq!(classify('\u{1FB9A}'), Some(GlyphFamily::Shard));
        assert_eq!(classify('\u{25E3}'), Some(GlyphFamily::Shard));
        assert_eq!(classify('\u{25C4}'), Some(GlyphFamily::Shard));
        assert_eq!(classify('\u{1CD00}'), Some(GlyphFamily::Octant));
        assert_eq!(classify('\u{1CDE5}'), Some(GlyphFamily::Octant));
        assert_eq!(classify('\u{1FBE7}'), Some(GlyphFamily::Octant));
    }

    #[test]
    fn predicate_matches_the_documented_set() {
        let ranges: &[(u32, u32)] = &[
            (0x2580, 0x259F),
            (0x25E2, 0x25E5),
            (0x1CD00, 0x1CDE5),
            (0x1FB00, 0x1FB6F),
            (0x1FB82, 0x1FB8B),
        ];
        let singles = [
            0x25B2, 0x25BA, 0x25BC, 0x25C4, 0x1CEA0, 0x1CEA3, 0x1CEA8, 0x1CEAB, 0x1FB9A,
            0x1FB9B, 0x1FBE6, 0x1FBE7,
        ];
        for cp in 0..=0x1FFFF {
            let Some(c) = char::from_u32(cp) else { continue };
            let expected = ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
                || singles.contains(&cp);
            assert_eq!(is_valid_special_symbol(c), expected, "U+{cp:04X}");
        }
    }

    #[test]
    fn outside_every_family_has_no_shapes() {
        for c in ['A', ' ', '\u{2500}', '\u{257F}', '\u{25B3}', '\u{1FB70}', '\u{1FB8C}', '\u{1CDE6}'] {
            assert!(!is_valid_special_symbol(c));
            assert!(glyph_shapes(c, CELL).is_empty());
        }
    }

    #[test]
    fn bold_gate_covers_only_plain_triangles() {
        for cp in [0x25E2, 0x25E3, 0x25E4, 0x25E5, 0x25B2, 0x25BA, 0x25BC, 0x25C4] {
            assert!(requires_bold(ch(cp)), "U+{cp:04X}");
        }
        for cp in [0x1FB3C, 0x1FB9A, 0x2580, 0x25E1, 0x25E6, 0x25B3] {
            assert!(!requires_bold(ch(cp)), "U+{cp:04X}");
        }
    }

    #[test]
    fn every_symbol_with_geometry_has_a_shape() {
        for cp in 0..=0x1FFFF {
            let Some(c) = char::from_u32(cp) else { continue };
            if is_valid_special_symbol(c) {
                assert!(!glyph_shapes(c, CELL).is_empty(), "U+{cp:04X}");
            }
        }
    }

    fn shape_points(shape: &Shape) -> Vec<[f32; 2]> {
        match shape {
            Shape::Rect(r) => vec![[r.x, r.y], [r.right(), r.bottom()]],
            Shape::Polygon(pts) => pts.clone(),
        }
    }

    proptest! {
        #[test]
        fn shapes_stay_inside_the_cell(
            cp in prop_oneof![
                0x2580u32..=0x259F,
                0x25B2u32..=0x25E5,
                0x1CD00u32..=0x1CDE5,
                0x1FB00u32..=0x1FB9B,
            ],
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 1.0f32..64.0,
            h in 1.0f32..64.0,
        ) {
            let cell = Rect::new(x, y, w, h);
            let eps = 1e-3 * (1.0 + x.abs().max(y.abs()));
            for shape in glyph_shapes(ch(cp), cell) {
                for [px, py] in shape_points(&shape) {
                    prop_assert!(px >= x - eps && px <= x + w + eps);
                    prop_assert!(py >= y - eps && py <= y + h + eps);
                }
            }
        }
    }
}
