//! Block elements: fractional blocks, shades and quadrants.

use crate::{Rect, Shape};

/// The cell edge a fractional block grows from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// (edge, filled eighths) for U+2580..=U+2590.
#[rustfmt::skip]
const FRACTIONAL_BASIC: [(Edge, u8); 17] = [
    (Edge::Top, 4),    // 2580 upper half
    (Edge::Bottom, 1), // 2581
    (Edge::Bottom, 2),
    (Edge::Bottom, 3),
    (Edge::Bottom, 4), // 2584 lower half
    (Edge::Bottom, 5),
    (Edge::Bottom, 6),
    (Edge::Bottom, 7),
    (Edge::Left, 8),   // 2588 full block
    (Edge::Left, 7),
    (Edge::Left, 6),
    (Edge::Left, 5),
    (Edge::Left, 4),   // 258C left half
    (Edge::Left, 3),
    (Edge::Left, 2),
    (Edge::Left, 1),
    (Edge::Right, 4),  // 2590 right half
];

/// U+2594..=U+2595.
const FRACTIONAL_EIGHTHS: [(Edge, u8); 2] = [(Edge::Top, 1), (Edge::Right, 1)];

/// U+1FB82..=U+1FB8B.
#[rustfmt::skip]
const FRACTIONAL_LEGACY: [(Edge, u8); 10] = [
    (Edge::Top, 2), (Edge::Top, 3), (Edge::Top, 5), (Edge::Top, 6), (Edge::Top, 7),
    (Edge::Right, 2), (Edge::Right, 3), (Edge::Right, 5), (Edge::Right, 6), (Edge::Right, 7),
];

fn fractional_entry(c: char) -> Option<(Edge, u8)> {
    let cp = c as u32;
    match cp {
        0x2580..=0x2590 => Some(FRACTIONAL_BASIC[(cp - 0x2580) as usize]),
        0x2594..=0x2595 => Some(FRACTIONAL_EIGHTHS[(cp - 0x2594) as usize]),
        0x1FB82..=0x1FB8B => Some(FRACTIONAL_LEGACY[(cp - 0x1FB82) as usize]),
        _ => None,
    }
}

pub(crate) fn is_fractional(c: char) -> bool {
    fractional_entry(c).is_some()
}

/// The cell with `size * (1 - fraction)` cut away from the side opposite
/// the anchoring edge.
pub(crate) fn fractional(c: char, cell: Rect) -> Option<Shape> {
    let (edge, eighths) = fractional_entry(c)?;
    let frac = f32::from(eighths) / 8.0;
    let Rect { x, y, w, h } = cell;
    let rect = match edge {
        Edge::Left => Rect::new(x, y, w * frac, h),
        Edge::Right => Rect::new(x + (w - w * frac), y, w * frac, h),
        Edge::Top => Rect::new(x, y, w, h * frac),
        Edge::Bottom => Rect::new(x, y + (h - h * frac), w, h * frac),
    };
    Some(Shape::Rect(rect))
}

const LIGHT_SHADE: char = '\u{2591}';
const DARK_SHADE: char = '\u{2593}';
const SHADE_ROWS: usize = 10;

pub(crate) fn is_shade(c: char) -> bool {
    matches!(c, '\u{2591}'..='\u{2593}')
}

/// Halftone lattice: `cols x 10` dots offset by half a column on even rows.
/// Dark shade also fills the gaps between dot rows with solid bands.
pub(crate) fn shade(c: char, cell: Rect) -> Vec<Shape> {
    let Rect { x, y, w, h } = cell;
    let cols = if c == LIGHT_SHADE { 3 } else { 5 };
    let colsf = cols as f32;
    let rowsf = SHADE_ROWS as f32;

    let mut shapes = Vec::with_capacity(cols * SHADE_ROWS + SHADE_ROWS);
    for i in 0..cols {
        for j in 0..SHADE_ROWS {
            let stagger = if j % 2 == 0 { w / (colsf * 2.0) } else { 0.0 };
            shapes.push(Shape::Rect(Rect::new(
                x + i as f32 * w / colsf + stagger,
                y + j as f32 * h / rowsf,
                w / 10.0,
                h / 20.0,
            )));
        }
    }
    if c == DARK_SHADE {
        for j in 0..SHADE_ROWS {
            shapes.push(Shape::Rect(Rect::new(
                x,
                y + h / 20.0 + j as f32 * h / rowsf,
                w,
                h / 20.0,
            )));
        }
    }
    shapes
}

/// Quadrant presence for U+2596..=U+259F.
/// Bit 3 upper left, bit 2 upper right, bit 1 lower left, bit 0 lower right.
const QUADRANT_PATTERNS: [u8; 10] = [
    0b0010, // 2596 lower left
    0b0001, // 2597 lower right
    0b1000, // 2598 upper left
    0b1011, // 2599
    0b1001, // 259A
    0b1110, // 259B
    0b1101, // 259C
    0b0100, // 259D upper right
    0b0110, // 259E
    0b0111, // 259F
];

pub(crate) fn is_quadrant(c: char) -> bool {
    matches!(c, '\u{2596}'..='\u{259F}')
}

pub(crate) fn quadrant(c: char, cell: Rect) -> Vec<Shape> {
    let Some(&pattern) = QUADRANT_PATTERNS.get((c as u32).wrapping_sub(0x2596) as usize) else {
        return Vec::new();
    };
    let Rect { x, y, w, h } = cell;
    let (hw, hh) = (w / 2.0, h / 2.0);
    [
        (0b1000, x, y),
        (0b0100, x + hw, y),
        (0b0010, x, y + hh),
        (0b0001, x + hw, y + hh),
    ]
    .into_iter()
    .filter(|&(bit, _, _)| pattern & bit != 0)
    .map(|(_, qx, qy)| Shape::Rect(Rect::new(qx, qy, hw, hh)))
    .collect()
}
