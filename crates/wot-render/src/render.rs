//! Render entry points.

use wot_core::WorldSnapshot;
use wot_glyphs::Rect;

use crate::compositor::composite_tile;
use crate::config::RenderConfig;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::fonts::FontBook;
use crate::raster::ImageSurface;
use crate::surface::Surface;

/// Tile counts from one render.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Tiles composited.
    pub drawn: usize,
    /// Tiles skipped because they lie outside the viewport.
    pub culled: usize,
}

/// Paint `world` onto an existing surface.
///
/// The whole surface is first filled with the public colour, then every
/// visible tile is composited in snapshot order.
pub fn render_into<S: Surface + ?Sized>(
    world: &WorldSnapshot,
    ctx: &RenderContext,
    surface: &mut S,
) -> RenderStats {
    let (w, h) = surface.size();
    surface.fill_rect(Rect::new(0.0, 0.0, w as f32, h as f32), ctx.theme.public);

    let mut stats = RenderStats::default();
    for tile in world.tiles() {
        if !ctx.viewport.is_tile_visible(tile.pos) {
            stats.culled += 1;
            continue;
        }
        composite_tile(tile, ctx, surface);
        stats.drawn += 1;
    }
    log::debug!(
        "rendered {} tiles ({} culled) in view {}",
        stats.drawn,
        stats.culled,
        ctx.viewport.bounds()
    );
    stats
}

/// Render `world` to a new raster of the configured size.
pub fn render<'f>(
    world: &WorldSnapshot,
    config: &RenderConfig,
    fonts: &'f FontBook,
) -> Result<ImageSurface<'f>, RenderError> {
    let ctx = RenderContext::new(config)?;
    if fonts.is_empty() {
        log::warn!("no fonts registered; text cells will be blank");
    }
    let mut surface = ImageSurface::new(config.width, config.height, fonts);
    render_into(world, &ctx, &mut surface);
    Ok(surface)
}
