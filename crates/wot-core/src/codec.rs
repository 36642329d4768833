//! Cell content codec: grapheme splitting and text-decoration marks.
//!
//! Tile content is a flat string. A cell is one base code point followed by
//! any number of combining marks. Text decorations ride along as combining
//! marks from a 16-value window starting at U+20F1 whose low four bits are
//! the [`Decoration`] mask.

use crate::style::Decoration;

/// Code point ranges that attach to the preceding grapheme.
const COMBINING_RANGES: [(u32, u32); 4] = [
    (0x0300, 0x036F),
    (0x1DC0, 0x1DFF),
    (0x20D0, 0x20FF),
    (0xFE20, 0xFE2F),
];

/// Base of the decoration window. The window is `BASE + 1 ..= BASE + 16`.
const DECORATION_BASE: u32 = 0x20F0;

/// Whether `c` is a combining mark for the purpose of grapheme splitting.
#[inline]
pub fn is_combining(c: char) -> bool {
    let cp = c as u32;
    COMBINING_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

#[inline]
fn is_decoration_mark(c: char) -> bool {
    let cp = c as u32;
    (DECORATION_BASE + 1..=DECORATION_BASE + 16).contains(&cp)
}

/// Split content into graphemes. A well-formed tile yields 128 of them.
///
/// A combining mark with nothing before it starts a grapheme of its own.
pub fn split_graphemes(content: &str) -> Vec<&str> {
    let mut graphemes = Vec::new();
    let mut start = 0;
    for (i, c) in content.char_indices() {
        if i == 0 || is_combining(c) {
            continue;
        }
        graphemes.push(&content[start..i]);
        start = i;
    }
    if !content.is_empty() {
        graphemes.push(&content[start..]);
    }
    graphemes
}

/// Decoration carried by the grapheme's last code point, if any.
pub fn decoration_of(grapheme: &str) -> Option<Decoration> {
    let last = grapheme.chars().next_back()?;
    if !is_decoration_mark(last) {
        return None;
    }
    let field = (last as u32 - DECORATION_BASE) as u8;
    Some(Decoration(field & 0x0F))
}

/// Strip every trailing decoration mark, returning the base grapheme.
pub fn strip_decorations(grapheme: &str) -> &str {
    grapheme.trim_end_matches(is_decoration_mark)
}

/// Append the decoration mark for `deco` to a base grapheme.
///
/// An empty mask adds nothing.
pub fn decorate(base: &str, deco: Decoration) -> String {
    let mut s = String::from(base);
    if deco.is_empty() {
        return s;
    }
    if let Some(mark) = char::from_u32(DECORATION_BASE + u32::from(deco.0 & 0x0F)) {
        s.push(mark);
    }
    s
}
