//! An in-memory RGBA [`Surface`] backed by `image` and `rusttype`.
//!
//! Fills are aliased and sample at pixel centres, so shapes that share an
//! edge never both cover (or both miss) the pixels along it. A rect too thin
//! to hold a pixel centre still keeps one pixel. Text is anti-aliased by
//! coverage blending.

use image::{Rgba, RgbaImage};
use rusttype::point as rt_point;
use wot_core::Rgb;
use wot_glyphs::Rect;

use crate::fonts::{FontBook, FontStyle, em_scale};
use crate::surface::{FontSpec, Surface};

/// A raster canvas that draws text with faces from a [`FontBook`].
pub struct ImageSurface<'f> {
    image: RgbaImage,
    fonts: &'f FontBook,
}

impl<'f> ImageSurface<'f> {
    /// A transparent canvas of `width x height` pixels.
    pub fn new(width: u32, height: u32, fonts: &'f FontBook) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            fonts,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// The colour at `(x, y)`, ignoring alpha.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.image
            .get_pixel_checked(x, y)
            .map(|&Rgba([r, g, b, _])| Rgb::from_rgb(r, g, b))
    }

    /// Half-open pixel span whose centres fall in `[lo, hi)`, clamped to
    /// `0..limit`.
    fn span(lo: f32, hi: f32, limit: u32) -> (u32, u32) {
        let clamp = |v: f32| (v - 0.5).ceil().clamp(0.0, limit as f32) as u32;
        (clamp(lo), clamp(hi))
    }

    /// Like [`Self::span`], but a non-empty interval that misses every pixel
    /// centre still covers the pixel under its midpoint.
    fn cover(lo: f32, hi: f32, limit: u32) -> (u32, u32) {
        let (a, b) = Self::span(lo, hi, limit);
        if a < b || hi <= lo {
            return (a, b);
        }
        let mid = ((lo + hi) / 2.0).floor();
        if !(0.0..limit as f32).contains(&mid) {
            return (a, b);
        }
        (mid as u32, mid as u32 + 1)
    }

    fn fill_row(&mut self, y: u32, x0: u32, x1: u32, color: Rgba<u8>) {
        for x in x0..x1 {
            self.image.put_pixel(x, y, color);
        }
    }
}

impl std::fmt::Debug for ImageSurface<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageSurface")
            .field("size", &self.image.dimensions())
            .finish_non_exhaustive()
    }
}

impl Surface for ImageSurface<'_> {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let (w, h) = self.image.dimensions();
        let (x0, x1) = Self::cover(rect.x, rect.right(), w);
        let (y0, y1) = Self::cover(rect.y, rect.bottom(), h);
        let px = Rgba(color.to_rgba());
        for y in y0..y1 {
            self.fill_row(y, x0, x1, px);
        }
    }

    fn fill_polygon(&mut self, points: &[[f32; 2]], color: Rgb) {
        if points.len() < 3 {
            return;
        }
        let (w, h) = self.image.dimensions();
        let (top, bottom) = points
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p[1]), hi.max(p[1]))
            });
        let (y0, y1) = Self::span(top, bottom, h);
        let px = Rgba(color.to_rgba());

        let mut crossings: Vec<(f32, i32)> = Vec::with_capacity(points.len());
        for y in y0..y1 {
            let sy = y as f32 + 0.5;
            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = &points[(i + 1) % points.len()];
                let dir = if a[1] <= sy && b[1] > sy {
                    1
                } else if b[1] <= sy && a[1] > sy {
                    -1
                } else {
                    continue;
                };
                let t = (sy - a[1]) / (b[1] - a[1]);
                crossings.push((a[0] + t * (b[0] - a[0]), dir));
            }
            crossings.sort_by(|l, r| l.0.total_cmp(&r.0));

            let mut winding = 0;
            let mut start = 0.0;
            for &(x, dir) in &crossings {
                let was_inside = winding != 0;
                winding += dir;
                if !was_inside && winding != 0 {
                    start = x;
                } else if was_inside && winding == 0 {
                    let (x0, x1) = Self::span(start, x, w);
                    self.fill_row(y, x0, x1, px);
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &FontSpec<'_>, color: Rgb) {
        let (w, h) = self.image.dimensions();
        let fonts = self.fonts;
        let style = FontStyle {
            bold: font.bold,
            italic: font.italic,
        };
        let fg = color.to_rgba();
        let inside_clip = |px: i32, py: i32| {
            font.clip.is_none_or(|c| {
                let (cx, cy) = (px as f32 + 0.5, py as f32 + 0.5);
                cx >= c.x && cx < c.right() && cy >= c.y && cy < c.bottom()
            })
        };

        let mut pen_x = x;
        let mut prev: Option<(*const rusttype::Font<'static>, rusttype::GlyphId)> = None;
        for c in text.chars() {
            let Some(face) = fonts.resolve(font.families, style, c) else {
                log::trace!("no face for {c:?} in {:?}", font.families);
                prev = None;
                continue;
            };
            let scale = em_scale(face, font.size_px);
            let glyph = face.glyph(c);
            let id = glyph.id();
            if let Some((prev_face, prev_id)) = prev {
                if std::ptr::eq(prev_face, face) {
                    pen_x += face.pair_kerning(scale, prev_id, id);
                }
            }
            let glyph = glyph.scaled(scale);
            let advance = glyph.h_metrics().advance_width;
            let glyph = glyph.positioned(rt_point(pen_x, y));

            if let Some(bb) = glyph
                .pixel_bounding_box()
                .filter(|bb| box_is_visible(bb, (w, h), font.clip))
            {
                let image = &mut self.image;
                glyph.draw(|gx, gy, v| {
                    let px = gx as i32 + bb.min.x;
                    let py = gy as i32 + bb.min.y;
                    if px < 0 || py < 0 || px as u32 >= w || py as u32 >= h || !inside_clip(px, py) {
                        return;
                    }
                    let alpha = v.clamp(0.0, 1.0);
                    let dst = image.get_pixel_mut(px as u32, py as u32);
                    let bg = dst.0;
                    *dst = Rgba([
                        blend(bg[0], fg[0], alpha),
                        blend(bg[1], fg[1], alpha),
                        blend(bg[2], fg[2], alpha),
                        blend(bg[3], fg[3], alpha),
                    ]);
                });
            }
            pen_x += advance;
            prev = Some((face as *const _, id));
        }
    }
}

/// Whether a glyph's pixel box reaches the canvas and the clip rectangle.
fn box_is_visible(bb: &rusttype::Rect<i32>, (w, h): (u32, u32), clip: Option<Rect>) -> bool {
    let on_canvas =
        bb.max.x > 0 && bb.max.y > 0 && bb.min.x < w as i32 && bb.min.y < h as i32;
    on_canvas
        && clip.is_none_or(|c| {
            (bb.max.x as f32) > c.x
                && (bb.max.y as f32) > c.y
                && (bb.min.x as f32) < c.right()
                && (bb.min.y as f32) < c.bottom()
        })
}

/// Simple alpha-blend of two u8 color channels.
fn blend(bg: u8, fg: u8, alpha: f32) -> u8 {
    ((1.0 - alpha) * bg as f32 + alpha * fg as f32) as u8
}
