//! Validated, immutable per-render state.

use wot_core::{LinkKind, Rgb, Viewport, Writability};

use crate::color::parse_color;
use crate::config::{GENERIC_FAMILY, RenderConfig};
use crate::error::RenderError;

/// Resolved theme colours.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub owner: Rgb,
    pub member: Rgb,
    pub public: Rgb,
    pub text: Rgb,
    pub url_link: Rgb,
    pub coord_link: Rgb,
}

impl Theme {
    /// Background colour for a writability class.
    #[inline]
    pub fn writability_color(&self, writability: Writability) -> Rgb {
        match writability {
            Writability::Public => self.public,
            Writability::Member => self.member,
            Writability::Owner => self.owner,
        }
    }

    /// Text colour for a link kind, if the theme has one.
    #[inline]
    pub fn link_color(&self, kind: LinkKind) -> Option<Rgb> {
        match kind {
            LinkKind::Url => Some(self.url_link),
            LinkKind::Coord => Some(self.coord_link),
            LinkKind::Other => None,
        }
    }
}

/// Everything the compositor needs, built once from a [`RenderConfig`].
#[derive(Clone, Debug, PartialEq)]
pub struct RenderContext {
    pub viewport: Viewport,
    pub theme: Theme,
    pub world_writability: Writability,
    /// Font em size in canvas pixels.
    pub font_size: f32,
    /// Font chain for undecorated cells: symbol font first.
    pub symbol_families: Vec<String>,
    /// Font chain for decorated cells.
    pub text_families: Vec<String>,
    pub glyph_drawing_mode: bool,
}

fn color(option: &'static str, value: &str) -> Result<Rgb, RenderError> {
    parse_color(value).map_err(|source| RenderError::Color { option, source })
}

impl RenderContext {
    pub fn new(config: &RenderConfig) -> Result<Self, RenderError> {
        let viewport = Viewport::new(
            config.width,
            config.height,
            config.zoom,
            config.coord_x,
            config.coord_y,
        )?;
        if !(config.font_size.is_finite() && config.font_size > 0.0) {
            return Err(RenderError::InvalidFontSize(config.font_size));
        }
        let world_writability = Writability::from_level(config.world_writability)
            .ok_or(RenderError::InvalidWritability(config.world_writability))?;

        let theme = Theme {
            owner: color("ownerColor", &config.owner_color)?,
            member: color("memberColor", &config.member_color)?,
            public: color("publicColor", &config.public_color)?,
            text: color("textColor", &config.text_color)?,
            url_link: color("URLLinkColor", &config.url_link_color)?,
            coord_link: color("coordLinkColor", &config.coord_link_color)?,
        };

        let text_families = vec![config.font.clone(), GENERIC_FAMILY.to_owned()];
        let mut symbol_families = Vec::with_capacity(3);
        symbol_families.push(config.symbol_font.clone());
        symbol_families.extend(text_families.iter().cloned());

        Ok(Self {
            font_size: viewport.scale(config.font_size) as f32,
            viewport,
            theme,
            world_writability,
            symbol_families,
            text_families,
            glyph_drawing_mode: config.glyph_drawing_mode,
        })
    }

    /// Zoom as a surface-space scalar.
    #[inline]
    pub fn zoom(&self) -> f32 {
        self.viewport.zoom() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorParseError;
    use wot_core::ViewportError;

    #[test]
    fn defaults_resolve() {
        let ctx = RenderContext::new(&RenderConfig::default()).unwrap();
        assert_eq!(ctx.theme.owner, Rgb(0xDDDDDD));
        assert_eq!(ctx.theme.member, Rgb(0xEEEEEE));
        assert_eq!(ctx.theme.public, Rgb::WHITE);
        assert_eq!(ctx.theme.text, Rgb::BLACK);
        assert_eq!(ctx.theme.coord_link, Rgb(0x008000));
        assert_eq!(ctx.theme.url_link, Rgb(0x0000FF));
        assert_eq!(ctx.world_writability, Writability::Public);
        assert_eq!(ctx.font_size, 16.0);
        assert_eq!(ctx.symbol_families, ["LegacyComputing", "Courier New", "sans-serif"]);
        assert_eq!(ctx.text_families, ["Courier New", "sans-serif"]);
    }

    #[test]
    fn font_size_scales_with_zoom() {
        let ctx = RenderContext::new(&RenderConfig::default().with_zoom(1.5)).unwrap();
        assert_eq!(ctx.font_size, 24.0);
    }

    #[test]
    fn rejects_structural_errors() {
        let err = RenderContext::new(&RenderConfig::default().with_zoom(0.0)).unwrap_err();
        assert_eq!(err, RenderError::Viewport(ViewportError::InvalidZoom(0.0)));

        let err = RenderContext::new(&RenderConfig::default().with_size(0, 10)).unwrap_err();
        assert!(matches!(err, RenderError::Viewport(ViewportError::InvalidCanvasSize { .. })));

        let config = RenderConfig {
            font_size: -1.0,
            ..RenderConfig::default()
        };
        assert_eq!(RenderContext::new(&config), Err(RenderError::InvalidFontSize(-1.0)));

        let config = RenderConfig {
            world_writability: 3,
            ..RenderConfig::default()
        };
        assert_eq!(RenderContext::new(&config), Err(RenderError::InvalidWritability(3)));
    }

    #[test]
    fn names_the_bad_colour_option() {
        let config = RenderConfig {
            member_color: "mauve".to_owned(),
            ..RenderConfig::default()
        };
        assert_eq!(
            RenderContext::new(&config),
            Err(RenderError::Color {
                option: "memberColor",
                source: ColorParseError("mauve".to_owned()),
            })
        );
    }

    #[test]
    fn theme_lookups() {
        let ctx = RenderContext::new(&RenderConfig::default()).unwrap();
        assert_eq!(ctx.theme.writability_color(Writability::Owner), ctx.theme.owner);
        assert_eq!(ctx.theme.link_color(LinkKind::Coord), Some(ctx.theme.coord_link));
        assert_eq!(ctx.theme.link_color(LinkKind::Other), None);
    }
}
