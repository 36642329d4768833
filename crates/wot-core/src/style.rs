//! Visual styling: [`Rgb`], [`Decoration`], and [`Writability`].

use std::ops::{BitAnd, BitOr};

// ---------------------------------------------------------------------------
// Rgb
// ---------------------------------------------------------------------------

/// A 24-bit RGB colour packed into a `u32` (0x00RRGGBB).
///
/// Black is a real colour here. "No colour" is always spelled `Option<Rgb>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const BLACK: Self = Self(0x000000);
    pub const WHITE: Self = Self(0xFFFFFF);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Build from a packed integer as stored in tile properties, keeping the
    /// low 24 bits.
    #[inline]
    pub const fn from_packed(v: i64) -> Self {
        Self((v as u32) & 0xFF_FFFF)
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Components as an opaque RGBA quadruple.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), 0xFF]
    }
}

// ---------------------------------------------------------------------------
// Decoration
// ---------------------------------------------------------------------------

/// Bitmask of text decorations carried by trailing combining marks.
///
/// The bit layout matches the 4-bit field encoded in the mark itself, so a
/// mark can be decoded with a plain mask.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Decoration(pub u8);

impl Decoration {
    pub const NONE: Self = Self(0);
    pub const STRIKE: Self = Self(1 << 0);
    pub const UNDERLINE: Self = Self(1 << 1);
    pub const ITALIC: Self = Self(1 << 2);
    pub const BOLD: Self = Self(1 << 3);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn bold(self) -> bool {
        self.contains(Self::BOLD)
    }

    #[inline]
    pub const fn italic(self) -> bool {
        self.contains(Self::ITALIC)
    }

    #[inline]
    pub const fn underline(self) -> bool {
        self.contains(Self::UNDERLINE)
    }

    #[inline]
    pub const fn strike(self) -> bool {
        self.contains(Self::STRIKE)
    }
}

impl BitOr for Decoration {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Decoration {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Writability
// ---------------------------------------------------------------------------

/// Edit-permission class of a tile or cell, also used as a colour key.
///
/// "Inherit from the enclosing level" is `Option::None`, never a variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Writability {
    Public = 0,
    Member = 1,
    Owner = 2,
}

impl Writability {
    /// Map the wire value `0 | 1 | 2`. Anything else is not a writability.
    #[inline]
    pub const fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Self::Public),
            1 => Some(Self::Member),
            2 => Some(Self::Owner),
            _ => None,
        }
    }

    #[inline]
    pub const fn level(self) -> u8 {
        self as u8
    }
}

/// Resolve a chain of optional writabilities, most specific first, down to
/// the configured world default.
#[inline]
pub fn resolve_writability(
    cell: Option<Writability>,
    tile: Option<Writability>,
    world: Writability,
) -> Writability {
    cell.or(tile).unwrap_or(world)
}
