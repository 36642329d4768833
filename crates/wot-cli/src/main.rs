use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use image::ImageFormat;
use tracing_subscriber::EnvFilter;
use wot_core::WorldSnapshot;
use wot_render::{FontBook, FontStyle, RenderConfig, render};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a world-of-text snapshot to a PNG image")]
struct Cli {
    /// World snapshot JSON: a tile array or an object keyed by "row,col"
    world: PathBuf,
    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,
    /// Render settings JSON (camelCase keys); flags below override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(flatten)]
    overrides: Overrides,
    /// Register a font face, e.g. `Courier New:bold=/fonts/courbd.ttf`
    #[arg(long = "font-file", value_name = "FAMILY[:STYLE]=PATH", value_parser = parse_font_file)]
    font_files: Vec<FontFile>,
    /// Font file for block and legacy-computing symbols
    #[arg(long, value_name = "PATH")]
    symbol_font: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone, Default)]
struct Overrides {
    /// Horizontal pan, in blocks of four tiles
    #[arg(long, allow_negative_numbers = true)]
    coord_x: Option<f64>,
    /// Vertical pan, in blocks of four tiles
    #[arg(long, allow_negative_numbers = true)]
    coord_y: Option<f64>,
    /// Zoom factor, 1.0 is 100%
    #[arg(long)]
    zoom: Option<f64>,
    /// Output width in pixels
    #[arg(long)]
    width: Option<u32>,
    /// Output height in pixels
    #[arg(long)]
    height: Option<u32>,
    /// Text font family
    #[arg(long)]
    font: Option<String>,
    /// Font size in pixels at 100% zoom
    #[arg(long)]
    font_size: Option<f64>,
    /// Writability of tiles without their own (0 public, 1 member, 2 owner)
    #[arg(long)]
    world_writability: Option<i64>,
    /// Clip text to its cell
    #[arg(long)]
    glyph_drawing_mode: bool,
}

impl Overrides {
    fn apply(self, config: &mut RenderConfig) {
        macro_rules! set {
            ($($field:ident),*) => {
                $(if let Some(v) = self.$field { config.$field = v; })*
            };
        }
        set!(coord_x, coord_y, zoom, width, height, font, font_size, world_writability);
        if self.glyph_drawing_mode {
            config.glyph_drawing_mode = true;
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct FontFile {
    family: String,
    style: FontStyle,
    path: PathBuf,
}

fn parse_font_file(arg: &str) -> Result<FontFile> {
    let Some((name, path)) = arg.split_once('=') else {
        bail!("expected FAMILY[:STYLE]=PATH, got {arg:?}");
    };
    let (family, style) = match name.rsplit_once(':') {
        Some((family, style)) => {
            let style = match style.to_ascii_lowercase().as_str() {
                "regular" => FontStyle::REGULAR,
                "bold" => FontStyle::BOLD,
                "italic" => FontStyle::ITALIC,
                "bold-italic" | "bolditalic" => FontStyle::BOLD_ITALIC,
                other => bail!("unknown font style {other:?}"),
            };
            (family, style)
        }
        None => (name, FontStyle::REGULAR),
    };
    if family.trim().is_empty() || path.is_empty() {
        bail!("expected FAMILY[:STYLE]=PATH, got {arg:?}");
    }
    Ok(FontFile {
        family: family.trim().to_owned(),
        style,
        path: PathBuf::from(path),
    })
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };
    let file = File::open(path).with_context(|| format!("failed to open config {path:?}"))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse config {path:?}"))
}

fn load_world(path: &Path) -> Result<WorldSnapshot> {
    let file = File::open(path).with_context(|| format!("failed to open world {path:?}"))?;
    WorldSnapshot::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to decode world {path:?}"))
}

fn load_fonts(cli: &Cli, config: &RenderConfig) -> Result<FontBook> {
    let mut fonts = FontBook::new();
    if let Some(path) = &cli.symbol_font {
        fonts
            .register_file(&config.symbol_font, FontStyle::REGULAR, path)
            .context("failed to load symbol font")?;
    }
    for f in &cli.font_files {
        fonts
            .register_file(&f.family, f.style, &f.path)
            .with_context(|| format!("failed to load font for {:?}", f.family))?;
    }
    Ok(fonts)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;
    cli.overrides.clone().apply(&mut config);
    log::debug!("render config: {config:?}");

    let world = load_world(&cli.world)?;
    let fonts = load_fonts(&cli, &config)?;
    log::info!("loaded {} tiles from {:?}", world.len(), cli.world);

    let surface = render(&world, &config, &fonts).context("invalid render settings")?;
    surface
        .into_image()
        .save_with_format(&cli.output, ImageFormat::Png)
        .with_context(|| format!("failed to write {:?}", cli.output))?;
    log::info!("wrote {:?}", cli.output);
    Ok(())
}
