//! Per-cell write-permission overlays.
//!
//! A tile may carry a `char` property that overrides writability cell by
//! cell. The first character selects one of three encodings:
//!
//! ```text
//! @<base64>   each symbol v = c1*16 + c2*4 + c3 fills three cells
//! #<n>,<n>,.. one decimal value per cell
//! x<hh><hh>.. two hex digits per cell
//! ```
//!
//! Raw values map `0 -> inherit, 1 -> public, 2 -> member, 3 -> owner`.

use crate::style::Writability;
use crate::tile::TILE_AREA;

const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Decoded overlay: one optional writability per cell.
pub type PermissionGrid = [Option<Writability>; TILE_AREA];

/// An overlay string split by encoding, not yet decoded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PermissionOverlay<'a> {
    Base64(&'a str),
    Decimal(&'a str),
    Hex(&'a str),
    /// Unrecognised leading character, or an empty string.
    Unknown,
}

impl<'a> PermissionOverlay<'a> {
    /// Classify an overlay string by its leading character.
    pub fn parse(s: &'a str) -> Self {
        if let Some(body) = s.strip_prefix('@') {
            Self::Base64(body)
        } else if let Some(body) = s.strip_prefix('#') {
            Self::Decimal(body)
        } else if let Some(body) = s.strip_prefix('x') {
            Self::Hex(body)
        } else {
            Self::Unknown
        }
    }

    /// Decode into a full permission grid.
    pub fn decode(self) -> PermissionGrid {
        let mut raw = [0u8; TILE_AREA];
        match self {
            Self::Base64(body) => {
                let digits = body.bytes().flat_map(|b| {
                    let v = base64_value(b);
                    [v >> 4 & 3, v >> 2 & 3, v & 3]
                });
                for (slot, d) in raw.iter_mut().zip(digits) {
                    *slot = d;
                }
            }
            Self::Decimal(body) => {
                for (slot, field) in raw.iter_mut().zip(body.split(',')) {
                    *slot = leading_int(field, 10).map_or(0, raw_level);
                }
            }
            Self::Hex(body) => {
                let mut chars = body.chars();
                for slot in raw.iter_mut() {
                    let pair: String = chars.by_ref().take(2).collect();
                    if pair.is_empty() {
                        break;
                    }
                    *slot = leading_int(&pair, 16).map_or(0, raw_level);
                }
            }
            Self::Unknown => {
                log::debug!("unrecognised permission overlay encoding; ignoring overlay");
            }
        }
        raw.map(from_raw)
    }
}

/// Decode an overlay string in one step.
pub fn decode_permission_overlay(s: &str) -> PermissionGrid {
    PermissionOverlay::parse(s).decode()
}

/// Symbols outside the alphabet count as raw 0.
fn base64_value(b: u8) -> u8 {
    BASE64_ALPHABET
        .iter()
        .position(|&a| a == b)
        .map_or(0, |p| p as u8)
}

/// Integer value of the longest valid numeric prefix of `s`, after leading
/// whitespace and an optional sign. Trailing garbage is ignored.
fn leading_int(s: &str, radix: u32) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: Option<i64> = None;
    for d in digits.chars().map_while(|c| c.to_digit(radix)) {
        value = Some(
            value
                .unwrap_or(0)
                .checked_mul(i64::from(radix))?
                .checked_add(i64::from(d))?,
        );
    }
    value.map(|v| if negative { -v } else { v })
}

/// Out-of-range raw values count as "inherit".
fn raw_level<N: TryInto<u8>>(n: N) -> u8 {
    n.try_into().ok().filter(|&v| v <= 3).unwrap_or(0)
}

fn from_raw(raw: u8) -> Option<Writability> {
    match raw {
        1 => Some(Writability::Public),
        2 => Some(Writability::Member),
        3 => Some(Writability::Owner),
        _ => None,
    }
}

fn to_raw(w: Option<Writability>) -> u8 {
    w.map_or(0, |w| w.level() + 1)
}

/// Encode a grid in the `#` decimal format.
pub fn encode_decimal(grid: &PermissionGrid) -> String {
    let body: Vec<String> = grid.iter().map(|&w| to_raw(w).to_string()).collect();
    format!("#{}", body.join(","))
}

/// Encode a grid in the `x` hex format.
pub fn encode_hex(grid: &PermissionGrid) -> String {
    let mut s = String::with_capacity(1 + TILE_AREA * 2);
    s.push('x');
    for &w in grid {
        s.push_str(&format!("{:02x}", to_raw(w)));
    }
    s
}

/// Encode a grid in the `@` base64 format. The last symbol is padded with
/// inherit values.
pub fn encode_base64(grid: &PermissionGrid) -> String {
    let mut s = String::with_capacity(1 + TILE_AREA.div_ceil(3));
    s.push('@');
    for chunk in grid.chunks(3) {
        let mut v = 0u8;
        for i in 0..3 {
            v = v << 2 | chunk.get(i).map_or(0, |&w| to_raw(w));
        }
        s.push(char::from(BASE64_ALPHABET[usize::from(v)]));
    }
    s
}
