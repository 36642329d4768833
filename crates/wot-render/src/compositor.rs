//! Paints one tile onto a [`Surface`].
//!
//! A tile is painted in three passes over its 128 cells: backgrounds from
//! writability, literal background colours, then decorations and glyphs.
//! Every background lands before any text, so glyphs that overhang their
//! cell are not cut by the next cell's fill.

use wot_core::{
    Rgb, TILE_AREA, TILE_COLS, Tile, decode_permission_overlay, decoration_of,
    resolve_writability, split_graphemes, strip_decorations,
};
use wot_glyphs::{Rect, glyph_shapes, is_valid_special_symbol, requires_bold};

use crate::context::RenderContext;
use crate::surface::{FontSpec, Surface};

/// Distance between the text baseline and the cell bottom, pre-zoom.
const BASELINE_INSET: f64 = 5.0;
/// Font size whose half gives the strike-through height, pre-zoom.
const STRIKE_REFERENCE: f64 = 16.0;

/// Canvas placement of one cell.
#[derive(Copy, Clone, Debug)]
struct CellBox {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl CellBox {
    fn rect(&self) -> Rect {
        Rect::new(self.x as f32, self.y as f32, self.w as f32, self.h as f32)
    }

    /// A full-width band of `thickness` starting at canvas row `y`.
    fn band(&self, y: f64, thickness: f64) -> Rect {
        Rect::new(self.x as f32, y as f32, self.w as f32, thickness as f32)
    }
}

fn cell_box(ctx: &RenderContext, tile: &Tile, idx: usize) -> CellBox {
    let (x, y) = ctx
        .viewport
        .cell_to_pixel(tile.pos, idx % TILE_COLS, idx / TILE_COLS);
    let (w, h) = ctx.viewport.cell_size();
    CellBox { x, y, w, h }
}

/// Composite `tile` onto `surface`.
pub fn composite_tile<S: Surface + ?Sized>(tile: &Tile, ctx: &RenderContext, surface: &mut S) {
    let zoom = ctx.viewport.zoom();
    let theme = &ctx.theme;
    let props = &tile.properties;
    let tile_writability = resolve_writability(None, tile.writability, ctx.world_writability);

    let (tx, ty) = ctx.viewport.tile_to_pixel(tile.pos);
    let (tw, th) = ctx.viewport.tile_size();
    surface.fill_rect(
        Rect::new(tx as f32, ty as f32, tw as f32, th as f32),
        theme.writability_color(tile_writability),
    );

    if let Some(overlay) = props.char_overlay.as_deref() {
        let grid = decode_permission_overlay(overlay);
        for (idx, cell) in grid.iter().enumerate() {
            let w = resolve_writability(*cell, tile.writability, ctx.world_writability);
            surface.fill_rect(cell_box(ctx, tile, idx).rect(), theme.writability_color(w));
        }
    }

    for idx in 0..TILE_AREA {
        if let Some(bg) = props.bg(idx) {
            surface.fill_rect(cell_box(ctx, tile, idx).rect(), bg);
        }
    }

    let graphemes = split_graphemes(&tile.content);
    if graphemes.len() != TILE_AREA {
        log::trace!(
            "tile {} has {} graphemes, expected {TILE_AREA}",
            tile.pos,
            graphemes.len()
        );
    }
    let band = zoom.round().max(1.0);
    let text_y_offset = ctx.viewport.cell_size().1 - BASELINE_INSET * zoom;

    for (idx, grapheme) in graphemes.into_iter().take(TILE_AREA).enumerate() {
        let cell = cell_box(ctx, tile, idx);
        let explicit = props.fg(idx);
        let fg = explicit.unwrap_or(theme.text);
        let base = strip_decorations(grapheme);
        let deco = decoration_of(grapheme);

        let underline_y = (cell.y + text_y_offset + zoom).floor();
        if let Some(d) = deco {
            if d.underline() {
                surface.fill_rect(cell.band(underline_y, band), fg);
            }
            if d.strike() {
                let strike_y = (cell.y + (STRIKE_REFERENCE * zoom / 2.0).floor()).floor();
                surface.fill_rect(cell.band(strike_y, band), fg);
            }
        }

        let mut color = fg;
        if let Some(link) = props.link(idx) {
            if explicit.is_none() {
                color = theme.link_color(link).unwrap_or(fg);
            }
            surface.fill_rect(cell.band(underline_y, band), color);
        }

        // A grapheme of bare decoration marks keeps its bands but has no glyph.
        let Some(c) = base.chars().next() else {
            continue;
        };
        let bold = deco.is_some_and(|d| d.bold());
        if is_valid_special_symbol(c) && !(requires_bold(c) && !bold) {
            for shape in glyph_shapes(c, cell.rect()) {
                surface.fill_shape(&shape, color);
            }
        } else if base != " " && base != "\u{a0}" {
            let style = deco.map(|d| (d.bold(), d.italic()));
            draw_text(surface, ctx, base, &cell, text_y_offset, style, color);
        }
    }
}

fn draw_text<S: Surface + ?Sized>(
    surface: &mut S,
    ctx: &RenderContext,
    text: &str,
    cell: &CellBox,
    text_y_offset: f64,
    style: Option<(bool, bool)>,
    color: Rgb,
) {
    // Decorated cells skip the symbol font: it has no bold or italic faces.
    let families = if style.is_some() {
        &ctx.text_families
    } else {
        &ctx.symbol_families
    };
    let (bold, italic) = style.unwrap_or_default();
    let spec = FontSpec {
        families,
        size_px: ctx.font_size,
        bold,
        italic,
        clip: ctx.glyph_drawing_mode.then(|| cell.rect()),
    };
    surface.fill_text(
        text,
        cell.x.floor() as f32,
        (cell.y + text_y_offset).floor() as f32,
        &spec,
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::surface::{DrawOp, RecordingSurface};
    use wot_core::{Decoration, LinkKind, TilePos, TileProperties, Writability};

    const RED: Rgb = Rgb(0xFF0000);

    fn ctx() -> RenderContext {
        // Tile (0,0) has its top-left corner at the canvas origin.
        RenderContext::new(&RenderConfig::default().with_size(320, 288).with_coord(0.25, -0.25))
            .unwrap()
    }

    fn content_with(idx: usize, grapheme: &str) -> String {
        (0..TILE_AREA)
            .map(|i| if i == idx { grapheme } else { " " })
            .collect()
    }

    fn texts(s: &RecordingSurface) -> Vec<(String, f32, f32, Vec<String>, bool, bool, Rgb)> {
        s.texts()
            .filter_map(|op| match op {
                DrawOp::Text {
                    text,
                    x,
                    y,
                    families,
                    bold,
                    italic,
                    color,
                    ..
                } => Some((text.clone(), *x, *y, families.clone(), *bold, *italic, *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn fixture_places_tile_at_origin() {
        assert_eq!(ctx().viewport.tile_to_pixel(TilePos::ZERO), (0.0, 0.0));
    }

    #[test]
    fn tile_background_then_text() {
        let ctx = ctx();
        let tile = Tile::new(TilePos::ZERO, content_with(17, "A"));
        let mut s = RecordingSurface::new(320, 288);
        composite_tile(&tile, &ctx, &mut s);

        assert_eq!(s.ops[0], DrawOp::Rect {
            rect: Rect::new(0.0, 0.0, 160.0, 144.0),
            color: ctx.theme.public,
        });
        // Cell (1,1): x 10, y 18, baseline 18 + 13.
        assert_eq!(texts(&s), vec![(
            "A".to_owned(),
            10.0,
            31.0,
            ctx.symbol_families.clone(),
            false,
            false,
            Rgb::BLACK,
        )]);
    }

    #[test]
    fn tile_writability_falls_back_to_world() {
        let config = RenderConfig {
            world_writability: 2,
            ..RenderConfig::default().with_size(320, 288).with_coord(0.25, -0.25)
        };
        let ctx = RenderContext::new(&config).unwrap();
        let mut s = RecordingSurface::new(320, 288);
        composite_tile(&Tile::new(TilePos::ZERO, ""), &ctx, &mut s);
        assert_eq!(s.rects().next().map(|(_, c)| c), Some(ctx.theme.owner));

        s.clear();
        let tile = Tile::new(TilePos::ZERO, "").with_writability(Some(Writability::Member));
        composite_tile(&tile, &ctx, &mut s);
        assert_eq!(s.rects().next().map(|(_, c)| c), Some(ctx.theme.member));
    }

    #[test]
    fn overlay_refills_every_cell() {
        let ctx = ctx();
        let props = TileProperties {
            char_overlay: Some("#3".to_owned()),
            ..TileProperties::default()
        };
        let tile = Tile::new(TilePos::ZERO, "")
            .with_writability(Some(Writability::Public))
            .with_properties(props);
        let mut s = RecordingSurface::new(320, 288);
        composite_tile(&tile, &ctx, &mut s);

        let rects: Vec<_> = s.rects().collect();
        assert_eq!(rects.len(), 1 + TILE_AREA);
        assert_eq!(rects[1], (Rect::new(0.0, 0.0, 10.0, 18.0), ctx.theme.owner));
        assert!(rects[2..].iter().all(|&(_, c)| c == ctx.theme.public));
    }

    #[test]
    fn public_overlay_overrides_owner_tile() {
        let ctx = ctx();
        let props = TileProperties {
            char_overlay: Some("#1".to_owned()),
            ..TileProperties::default()
        };
        let tile = Tile::new(TilePos::ZERO, "")
            .with_writability(Some(Writability::Owner))
            .with_properties(props);
        let mut s = RecordingSurface::new(320, 288);
        composite_tile(&tile, &ctx, &mut s);

        let rects: Vec<_> = s.rects().collect();
        assert_eq!(rects[0].1, ctx.theme.owner);
        assert_eq!(rects[1], (Rect::new(0.0, 0.0, 10.0, 18.0), ctx.theme.public));
        assert_eq!(rects[2], (Rect::new(10.0, 0.0, 10.0, 18.0), ctx.theme.owner));
        assert!(rects[2..].iter().all(|&(_, c)| c == ctx.theme.owner));
    }

    #[test]
    fn literal_background_wins() {
        let ctx = ctx();
        let mut bgcolor = vec![None; TILE_AREA];
        bgcolor[16] = Some(RED);
        let props = TileProperties {
            bgcolor,
            ..TileProperties::default()
        };
        let tile = Tile::new(TilePos::ZERO, "").with_properties(props);
        let mut s = RecordingSurface::new(320, 288);
        composite_tile(&tile, &ctx, &mut s);
        let rects: Vec<_> = s.rects().collect();
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[1], (Rect::new(0.0, 18.0, 10.0, 18.0), RED));
    }

    #[test]
    fn decorations_draw_bands_in_text_colour() {
        let ctx = ctx();
        let g = wot_core::codec::decorate("x", Decoration::UNDERLINE | Decoration::STRIKE | Decoration::BOLD);
        let mut color = vec![None; TILE_AREA];
        color[0] = Some(RED);
        let props = TileProperties {
            color,
            ..TileProperties::default()
        };
        let tile = Tile::new(TilePos::ZERO, content_with(0, &g)).with_properties(props);
        let mut s = RecordingSurface::new(320, 288);
        composite_tile(&tile, &ctx, &mut s);

        let rects: Vec<_> = s.rects().skip(1).collect();
        assert_eq!(rects, vec![
            (Rect::new(0.0, 14.0, 10.0, 1.0), RED),
            (Rect::new(0.0, 8.0, 10.0, 1.0), RED),
        ]);
        assert_eq!(texts(&s), vec![(
            "x".to_owned(),
            0.0,
            13.0,
            ctx.text_families.clone(),
            true,
            false,
            RED,
        )]);
    }

    #[test]
    fn link_recolours_and_underlines() {
        let ctx = ctx();
        let mut links = vec![None; TILE_AREA];
        links[0] = Some(LinkKind::Url);
        links[1] = Some(LinkKind::Coord);
        links[2] = Some(LinkKind::Url);
        let mut color = vec![None; TILE_AREA];
        color[2] = Some(RED);
        let props = TileProperties {
            links,
            color,
            ..TileProperties::default()
        };
        let content: String = ["a", "b", "c"].concat() + &" ".repeat(TILE_AREA - 3);
        let tile = Tile::new(TilePos::ZERO, content).with_properties(props);
        let mut s = RecordingSurface::new(320, 288);
        composite_tile(&tile, &ctx, &mut s);

        let bands: Vec<_> = s.rects().skip(1).collect();
        assert_eq!(bands, vec![
            (Rect::new(0.0, 14.0, 10.0, 1.0), ctx.theme.url_link),
            (Rect::new(10.0, 14.0, 10.0, 1.0), ctx.theme.coord_link),
            (Rect::new(20.0, 14.0, 10.0, 1.0), RED),
        ]);
        let colors: Vec<_> = texts(&s).into_iter().map(|t| t.6).collect();
        assert_eq!(colors, vec![ctx.theme.url_link, ctx.theme.coord_link, RED]);
    }

    #[test]
    fn block_symbols_use_geometry() {
        let ctx = ctx();
        let tile = Tile::new(TilePos::ZERO, content_with(0, "\u{2580}"));
        let mut s = RecordingSurface::new(320, 288);
        composite_tile(&tile, &ctx, &mut s);
        assert!(texts(&s).is_empty());
        assert_eq!(s.rects().nth(1), Some((Rect::new(0.0, 0.0, 10.0, 9.0), Rgb::BLACK)));
    }

    #[test]
    fn plain_triangle_needs_bold_for_geometry() {
        let ctx = ctx();
        let tile = Tile::new(TilePos::ZERO, content_with(0, "\u{25E2}"));
        let mut s = RecordingSurface::new(320, 288);
        composite_tile(&tile, &ctx, &mut s);
        assert_eq!(texts(&s).len(), 1);
        assert!(!s.ops.iter().any(|op| matches!(op, DrawOp::Polygon { .. })));

        let bold = wot_core::codec::decorate("\u{25E2}", Decoration::BOLD);
        let tile = Tile::new(TilePos::ZERO, content_with(0, &bold));
        s.clear();
        composite_tile(&tile, &ctx, &mut s);
        assert!(texts(&s).is_empty());
        assert!(s.ops.iter().any(|op| matches!(op, DrawOp::Polygon { .. })));
    }

    #[test]
    fn spaces_draw_nothing() {
        let ctx = ctx();
        let content = "\u{a0}".to_owned() + &" ".repeat(TILE_AREA - 1);
        let tile = Tile::new(TilePos::ZERO, content);
        let mut s = RecordingSurface::new(320, 288);
        composite_tile(&tile, &ctx, &mut s);
        assert!(texts(&s).is_empty());
        assert_eq!(s.ops.len(), 1);
    }

    #[test]
    fn bare_marks_keep_their_bands() {
        let ctx = ctx();
        let mark = wot_core::codec::decorate("", Decoration::UNDERLINE | Decoration::STRIKE);
        let content = mark + &" ".repeat(TILE_AREA - 1);
        let tile = Tile::new(TilePos::ZERO, content);
        let mut s = RecordingSurface::new(320, 288);
        composite_tile(&tile, &ctx, &mut s);
        assert!(texts(&s).is_empty());
        assert_eq!(
            s.rects().skip(1).collect::<Vec<_>>(),
            vec![
                (Rect::new(0.0, 14.0, 10.0, 1.0), Rgb::BLACK),
                (Rect::new(0.0, 8.0, 10.0, 1.0), Rgb::BLACK),
            ]
        );
    }

    #[test]
    fn glyph_mode_clips_to_cell() {
        let config = RenderConfig {
            glyph_drawing_mode: true,
            ..RenderConfig::default().with_size(320, 288).with_coord(0.25, -0.25)
        };
        let ctx = RenderContext::new(&config).unwrap();
        let tile = Tile::new(TilePos::ZERO, content_with(0, "g"));
        let mut s = RecordingSurface::new(320, 288);
        composite_tile(&tile, &ctx, &mut s);
        let clip = s.texts().find_map(|op| match op {
            DrawOp::Text { clip, .. } => *clip,
            _ => None,
        });
        assert_eq!(clip, Some(Rect::new(0.0, 0.0, 10.0, 18.0)));
    }
}
