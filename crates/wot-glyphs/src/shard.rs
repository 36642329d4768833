//! Triangles and wedges ("shards") over a 3x5 anchor grid.
//!
//! Vertices are `(column, row)` indices into the anchor grid:
//!
//! ```text
//! columns: 0, w/2, w
//! rows:    0, h/3, h/2, 2h/3, h
//! ```

use crate::{Rect, Shape};

/// Polygons for U+1FB3C..=U+1FB6F (0..=51), U+1FB9A..=U+1FB9B (52, 53),
/// U+25E2..=U+25E5 (54..=57) and U+25B2, U+25BA, U+25BC, U+25C4 (58..=61).
#[rustfmt::skip]
static SHARDS: [&[(u8, u8)]; 62] = [
    &[(0, 3), (1, 4), (0, 4)],
    &[(0, 3), (2, 4), (0, 4)],
    &[(0, 1), (1, 4), (0, 4)],
    &[(0, 1), (2, 4), (0, 4)],
    &[(0, 0), (1, 4), (0, 4)],
    &[(1, 0), (2, 0), (2, 4), (0, 4), (0, 1)],
    &[(2, 0), (2, 4), (0, 4), (0, 1)],
    &[(1, 0), (2, 0), (2, 4), (0, 4), (0, 3)],
    &[(2, 0), (2, 4), (0, 4), (0, 3)],
    &[(1, 0), (2, 0), (2, 4), (0, 4)],
    &[(2, 1), (2, 4), (0, 4), (0, 3)],
    &[(2, 3), (2, 4), (1, 4)],
    &[(2, 3), (2, 4), (0, 4)],
    &[(2, 1), (2, 4), (1, 4)],
    &[(2, 1), (2, 4), (0, 4)],
    &[(2, 0), (2, 4), (1, 4)],
    &[(0, 0), (1, 0), (2, 1), (2, 4), (0, 4)],
    &[(0, 0), (2, 1), (2, 4), (0, 4)],
    &[(0, 0), (1, 0), (2, 3), (2, 4), (0, 4)],
    &[(0, 0), (2, 3), (2, 4), (0, 4)],
    &[(0, 0), (1, 0), (2, 4), (0, 4)],
    &[(0, 1), (2, 3), (2, 4), (0, 4)],
    &[(0, 0), (2, 0), (2, 4), (1, 4), (0, 3)],
    &[(0, 0), (2, 0), (2, 4), (0, 3)],
    &[(0, 0), (2, 0), (2, 4), (1, 4), (0, 1)],
    &[(0, 0), (2, 0), (2, 4), (0, 1)],
    &[(0, 0), (2, 0), (2, 4), (1, 4)],
    &[(0, 0), (1, 0), (0, 1)],
    &[(0, 0), (2, 0), (0, 1)],
    &[(0, 0), (1, 0), (0, 3)],
    &[(0, 0), (2, 0), (0, 3)],
    &[(0, 0), (1, 0), (0, 4)],
    &[(0, 0), (2, 0), (2, 1), (0, 3)],
    &[(0, 0), (2, 0), (2, 3), (1, 4), (0, 4)],
    &[(0, 0), (2, 0), (2, 3), (0, 4)],
    &[(0, 0), (2, 0), (2, 1), (1, 4), (0, 4)],
    &[(0, 0), (2, 0), (2, 1), (0, 4)],
    &[(0, 0), (2, 0), (1, 4), (0, 4)],
    &[(1, 0), (2, 0), (2, 1)],
    &[(0, 0), (2, 0), (2, 1)],
    &[(1, 0), (2, 0), (2, 3)],
    &[(0, 0), (2, 0), (2, 3)],
    &[(1, 0), (2, 0), (2, 4)],
    &[(0, 0), (2, 0), (2, 3), (0, 1)],
    &[(0, 0), (2, 0), (2, 4), (0, 4), (1, 2)],
    &[(0, 0), (1, 2), (2, 0), (2, 4), (0, 4)],
    &[(0, 0), (2, 0), (1, 2), (2, 4), (0, 4)],
    &[(0, 0), (2, 0), (2, 4), (1, 2), (0, 4)],
    &[(0, 0), (1, 2), (0, 4)],
    &[(0, 0), (2, 0), (1, 2)],
    &[(2, 0), (2, 4), (1, 2)],
    &[(1, 2), (2, 4), (0, 4)],
    // hourglasses
    &[(0, 0), (2, 4), (0, 4), (2, 0)],
    &[(2, 0), (2, 4), (0, 0), (0, 4)],
    // right triangles, drawn only for bold cells
    &[(2, 0), (2, 4), (0, 4)],
    &[(0, 0), (2, 4), (0, 4)],
    &[(0, 0), (2, 0), (0, 4)],
    &[(0, 0), (2, 0), (2, 4)],
    // isosceles triangles, drawn only for bold cells
    &[(1, 0), (2, 4), (0, 4)],
    &[(0, 0), (2, 2), (0, 4)],
    &[(0, 0), (2, 0), (1, 4)],
    &[(2, 0), (2, 4), (0, 2)],
];

const RIGHT_TRIANGLES: u32 = 54;
const ISOSCELES_TRIANGLES: u32 = 58;

fn isosceles_index(c: char) -> Option<u32> {
    match c {
        '\u{25B2}' => Some(ISOSCELES_TRIANGLES),
        '\u{25BA}' => Some(ISOSCELES_TRIANGLES + 1),
        '\u{25BC}' => Some(ISOSCELES_TRIANGLES + 2),
        '\u{25C4}' => Some(ISOSCELES_TRIANGLES + 3),
        _ => None,
    }
}

fn shard_index(c: char) -> Option<usize> {
    let cp = c as u32;
    let idx = match cp {
        0x1FB3C..=0x1FB6F => cp - 0x1FB3C,
        // The block continues at U+1FB9A after an unrelated run of 42.
        0x1FB9A..=0x1FB9B => cp - 0x1FB3C - 42,
        0x25E2..=0x25E5 => cp - 0x25E2 + RIGHT_TRIANGLES,
        _ => isosceles_index(c)?,
    };
    Some(idx as usize)
}

pub(crate) fn is_shard(c: char) -> bool {
    shard_index(c).is_some()
}

pub(crate) fn is_bold_gated(c: char) -> bool {
    shard_index(c).is_some_and(|i| i >= RIGHT_TRIANGLES as usize)
}

pub(crate) fn shard(c: char, cell: Rect) -> Option<Shape> {
    let vertices = SHARDS.get(shard_index(c)?)?;
    let Rect { x, y, w, h } = cell;
    let cols = [0.0, w / 2.0, w];
    let rows = [0.0, h / 3.0, h / 2.0, h / 3.0 * 2.0, h];
    Some(Shape::Polygon(
        vertices
            .iter()
            .map(|&(col, row)| [x + cols[usize::from(col)], y + rows[usize::from(row)]])
            .collect(),
    ))
}
