//! Mosaic blocks: 2x3 sextants and 2x4 octants.
//!
//! Both families fill a regular grid of sub-cells from a bit pattern. Bit
//! `row * 2 + col` covers the sub-cell in column `col` (0 left, 1 right) and
//! row `row` counted from the top.

use crate::{Rect, Shape};

fn grid_cells(pattern: u32, rows: u32, cell: Rect) -> Vec<Shape> {
    let Rect { x, y, w, h } = cell;
    let sw = w / 2.0;
    let sh = h / rows as f32;
    (0..rows * 2)
        .filter(|bit| pattern >> bit & 1 != 0)
        .map(|bit| {
            let col = (bit & 1) as f32;
            let row = (bit >> 1) as f32;
            Shape::Rect(Rect::new(x + sw * col, y + sh * row, sw, sh))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Sextants (U+1FB00..=U+1FB3B)
// ---------------------------------------------------------------------------

/// The block skips the blank pattern, both half columns (already encoded as
/// U+258C and U+2590) and the full pattern, so each run of 20 code points is
/// shifted by one more than the last.
fn sextant_pattern(c: char) -> Option<u32> {
    let cp = c as u32;
    let rel = cp.checked_sub(0x1FB00)?;
    match cp {
        0x1FB00..=0x1FB13 => Some(rel + 1),
        0x1FB14..=0x1FB27 => Some(rel + 2),
        0x1FB28..=0x1FB3B => Some(rel + 3),
        _ => None,
    }
}

pub(crate) fn is_sextant(c: char) -> bool {
    sextant_pattern(c).is_some()
}

pub(crate) fn sextant(c: char, cell: Rect) -> Vec<Shape> {
    sextant_pattern(c).map_or_else(Vec::new, |p| grid_cells(p, 3, cell))
}

// ---------------------------------------------------------------------------
// Octants (U+1CD00..=U+1CDE5 and strays)
// ---------------------------------------------------------------------------

/// Bit patterns for U+1CD00..=U+1CDE5. Patterns that already exist elsewhere
/// in Unicode (blank, full, halves, quadrants, ...) have no code point here.
#[rustfmt::skip]
const OCTANT_PATTERNS: [u8; 230] = [
      4,   6,   7,   8,   9,  11,  12,  13,  14,  16,  17,  18,  19,  21,  22,  23,
     24,  25,  26,  27,  28,  29,  30,  31,  32,  33,  34,  35,  36,  37,  38,  39,
     41,  42,  43,  44,  45,  46,  47,  48,  49,  50,  51,  52,  53,  54,  55,  56,
     57,  58,  59,  60,  61,  62,  65,  66,  67,  68,  69,  70,  71,  72,  73,  74,
     75,  76,  77,  78,  79,  81,  82,  83,  84,  86,  87,  88,  89,  91,  92,  93,
     94,  96,  97,  98,  99, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110,
    111, 112, 113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126,
    127, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143,
    144, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159,
    161, 162, 163, 164, 166, 167, 168, 169, 171, 172, 173, 174, 176, 177, 178, 179,
    180, 181, 182, 183, 184, 185, 186, 187, 188, 189, 190, 191, 193, 194, 195, 196,
    197, 198, 199, 200, 201, 202, 203, 204, 205, 206, 207, 208, 209, 210, 211, 212,
    213, 214, 215, 216, 217, 218, 219, 220, 221, 222, 223, 224, 225, 226, 227, 228,
    229, 230, 231, 232, 233, 234, 235, 236, 237, 238, 239, 241, 242, 243, 244, 246,
    247, 248, 249, 251, 253, 254,
];

/// Octant patterns encoded outside the main block.
const OCTANT_STRAYS: [(char, u8); 6] = [
    ('\u{1CEA8}', 0b0000_0001),
    ('\u{1CEAB}', 0b0000_0010),
    ('\u{1CEA3}', 0b0100_0000),
    ('\u{1CEA0}', 0b1000_0000),
    ('\u{1FBE6}', 0b0001_0100),
    ('\u{1FBE7}', 0b0010_1000),
];

fn octant_pattern(c: char) -> Option<u8> {
    let cp = c as u32;
    if (0x1CD00..=0x1CDE5).contains(&cp) {
        return Some(OCTANT_PATTERNS[(cp - 0x1CD00) as usize]);
    }
    OCTANT_STRAYS
        .iter()
        .find(|&&(stray, _)| stray == c)
        .map(|&(_, pattern)| pattern)
}

pub(crate) fn is_octant(c: char) -> bool {
    octant_pattern(c).is_some()
}

/// Pattern 0 draws nothing.
pub(crate) fn octant(c: char, cell: Rect) -> Vec<Shape> {
    match octant_pattern(c) {
        Some(0) | None => Vec::new(),
        Some(p) => grid_cells(u32::from(p), 4, cell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: Rect = Rect::new(0.0, 0.0, 10.0, 18.0);

    fn ch(cp: u32) -> char {
        char::from_u32(cp).unwrap()
    }

    #[test]
    fn sextant_subranges_skip_reserved_patterns() {
        assert_eq!(sextant_pattern(ch(0x1FB00)), Some(1));
        assert_eq!(sextant_pattern(ch(0x1FB13)), Some(20));
        // 21 (left column) is U+258C.
        assert_eq!(sextant_pattern(ch(0x1FB14)), Some(22));
        assert_eq!(sextant_pattern(ch(0x1FB27)), Some(41));
        // 42 (right column) is U+2590.
        assert_eq!(sextant_pattern(ch(0x1FB28)), Some(43));
        assert_eq!(sextant_pattern(ch(0x1FB3B)), Some(62));
        assert_eq!(sextant_pattern(ch(0x1FB3C)), None);
        assert_eq!(sextant_pattern(ch(0x1FAFF)), None);
    }

    #[test]
    fn sextant_upper_left() {
        assert_eq!(
            sextant(ch(0x1FB00), CELL),
            vec![Shape::Rect(Rect::new(0.0, 0.0, 5.0, 6.0))]
        );
    }

    #[test]
    fn sextant_bottom_row() {
        // Pattern 0b110000 = lower third, U+1FB2D.
        assert_eq!(
            sextant(ch(0x1FB2D), CELL),
            vec![
                Shape::Rect(Rect::new(0.0, 12.0, 5.0, 6.0)),
                Shape::Rect(Rect::new(5.0, 12.0, 5.0, 6.0)),
            ]
        );
    }

    #[test]
    fn octant_table_is_strictly_increasing() {
        assert!(OCTANT_PATTERNS.windows(2).all(|w| w[0] < w[1]));
        assert!(!OCTANT_PATTERNS.contains(&0));
        assert!(!OCTANT_PATTERNS.contains(&255));
    }

    #[test]
    fn octant_first_entry() {
        // Pattern 4 = left half of the second row.
        assert_eq!(
            octant(ch(0x1CD00), CELL),
            vec![Shape::Rect(Rect::new(0.0, 4.5, 5.0, 4.5))]
        );
    }

    #[test]
    fn octant_strays() {
        assert_eq!(
            octant(ch(0x1CEA8), CELL),
            vec![Shape::Rect(Rect::new(0.0, 0.0, 5.0, 4.5))]
        );
        assert_eq!(
            octant(ch(0x1CEA0), CELL),
            vec![Shape::Rect(Rect::new(5.0, 13.5, 5.0, 4.5))]
        );
        assert_eq!(octant(ch(0x1FBE6), CELL).len(), 2);
        assert!(is_octant(ch(0x1CEAB)));
        assert!(!is_octant(ch(0x1CEA1)));
    }
}
