//! The drawing surface the compositor paints onto.
//!
//! [`Surface`] is the seam between tile composition and rasterization. The
//! compositor only ever issues solid fills, so any backend that can fill a
//! rectangle, a polygon and a run of text can host a render.

use wot_core::Rgb;
use wot_glyphs::{Rect, Shape};

/// Font selection for one [`Surface::fill_text`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FontSpec<'a> {
    /// Families to try in order, per character.
    pub families: &'a [String],
    /// Em size in canvas pixels.
    pub size_px: f32,
    pub bold: bool,
    pub italic: bool,
    /// Pixels outside this rectangle are left untouched.
    pub clip: Option<Rect>,
}

/// A 2D canvas accepting solid fills in canvas pixel coordinates.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Fill a closed polygon with the non-zero winding rule.
    fn fill_polygon(&mut self, points: &[[f32; 2]], color: Rgb);

    /// Draw `text` with its alphabetic baseline starting at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &FontSpec<'_>, color: Rgb);

    fn fill_shape(&mut self, shape: &Shape, color: Rgb) {
        match shape {
            Shape::Rect(rect) => self.fill_rect(*rect, color),
            Shape::Polygon(points) => self.fill_polygon(points, color),
        }
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        (**self).fill_rect(rect, color);
    }

    fn fill_polygon(&mut self, points: &[[f32; 2]], color: Rgb) {
        (**self).fill_polygon(points, color);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &FontSpec<'_>, color: Rgb) {
        (**self).fill_text(text, x, y, font, color);
    }
}

/// One call recorded by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Rect {
        rect: Rect,
        color: Rgb,
    },
    Polygon {
        points: Vec<[f32; 2]>,
        color: Rgb,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        families: Vec<String>,
        size_px: f32,
        bold: bool,
        italic: bool,
        clip: Option<Rect>,
        color: Rgb,
    },
}

/// A surface that records every call instead of drawing.
///
/// Useful for asserting what the compositor asked for without depending on
/// installed fonts or rasterization details.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Recorded text runs, in call order.
    pub fn texts(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Text { .. }))
    }

    /// Recorded rectangle fills, in call order.
    pub fn rects(&self) -> impl Iterator<Item = (Rect, Rgb)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Rect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.ops.push(DrawOp::Rect { rect, color });
    }

    fn fill_polygon(&mut self, points: &[[f32; 2]], color: Rgb) {
        self.ops.push(DrawOp::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &FontSpec<'_>, color: Rgb) {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            x,
            y,
            families: font.families.to_vec(),
            size_px: font.size_px,
            bold: font.bold,
            italic: font.italic,
            clip: font.clip,
            color,
        });
    }
}
