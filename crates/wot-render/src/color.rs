//! Parsing of theme colour strings.

use wot_core::Rgb;

use crate::error::ColorParseError;

const NAMED: [(&str, Rgb); 7] = [
    ("black", Rgb(0x000000)),
    ("white", Rgb(0xFFFFFF)),
    ("red", Rgb(0xFF0000)),
    ("green", Rgb(0x008000)),
    ("blue", Rgb(0x0000FF)),
    ("gray", Rgb(0x808080)),
    ("grey", Rgb(0x808080)),
];

/// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a basic colour name.
pub fn parse_color(s: &str) -> Result<Rgb, ColorParseError> {
    let t = s.trim();
    let err = || ColorParseError(s.to_owned());

    if let Some(hex) = t.strip_prefix('#') {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let v = u32::from_str_radix(hex, 16).map_err(|_| err())?;
        return match hex.len() {
            3 => {
                let (r, g, b) = ((v >> 8) & 0xF, (v >> 4) & 0xF, v & 0xF);
                Ok(Rgb((r * 0x11) << 16 | (g * 0x11) << 8 | b * 0x11))
            }
            6 => Ok(Rgb(v)),
            _ => Err(err()),
        };
    }

    let lower = t.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts: Vec<u8> = args
            .split(',')
            .map(|p| p.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .map_err(|_| err())?;
        return match parts.as_slice() {
            &[r, g, b] => Ok(Rgb::from_rgb(r, g, b)),
            _ => Err(err()),
        };
    }

    NAMED
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|&(_, rgb)| rgb)
        .ok_or_else(err)
}
