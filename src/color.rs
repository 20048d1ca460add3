use std::str::FromStr;

use ratatui::style::Color;

/// CSS color keywords that should keep their web RGB value instead of the
/// terminal's ANSI palette entry of the same name.
const CSS_NAMED: &[(&str, (u8, u8, u8))] = &[
    ("black", (0x00, 0x00, 0x00)),
    ("white", (0xff, 0xff, 0xff)),
    ("red", (0xff, 0x00, 0x00)),
    ("green", (0x00, 0x80, 0x00)),
    ("blue", (0x00, 0x00, 0xff)),
    ("yellow", (0xff, 0xff, 0x00)),
    ("orange", (0xff, 0xa5, 0x00)),
    ("purple", (0x80, 0x00, 0x80)),
    ("gray", (0x80, 0x80, 0x80)),
    ("grey", (0x80, 0x80, 0x80)),
    ("pink", (0xff, 0xc0, 0xcb)),
    ("brown", (0xa5, 0x2a, 0x2a)),
    ("cyan", (0x00, 0xff, 0xff)),
    ("aqua", (0x00, 0xff, 0xff)),
    ("magenta", (0xff, 0x00, 0xff)),
    ("fuchsia", (0xff, 0x00, 0xff)),
    ("lime", (0x00, 0xff, 0x00)),
    ("navy", (0x00, 0x00, 0x80)),
    ("teal", (0x00, 0x80, 0x80)),
    ("maroon", (0x80, 0x00, 0x00)),
    ("olive", (0x80, 0x80, 0x00)),
    ("silver", (0xc0, 0xc0, 0xc0)),
    ("gold", (0xff, 0xd7, 0x00)),
    ("coral", (0xff, 0x7f, 0x50)),
    ("crimson", (0xdc, 0x14, 0x3c)),
    ("indigo", (0x4b, 0x00, 0x82)),
    ("violet", (0xee, 0x82, 0xee)),
    ("tomato", (0xff, 0x63, 0x47)),
];

/// Parses a CSS-style color string into a terminal color.
///
/// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `rgba(r, g, b[, a])` (alpha is
/// dropped), common CSS keywords, and anything else ratatui understands.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let lower = value.to_ascii_lowercase();

    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(args) = functional_args(&lower) {
        return parse_rgb_args(args);
    }
    if let Some((_, (r, g, b))) = CSS_NAMED.iter().find(|(name, _)| *name == lower) {
        return Some(Color::Rgb(*r, *g, *b));
    }
    Color::from_str(&lower).ok()
}

/// Picks a readable foreground for text drawn over `background`.
pub fn contrast_fg(background: Color) -> Color {
    match background {
        Color::Rgb(r, g, b) => {
            let luma = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
            if luma > 150.0 {
                Color::Black
            } else {
                Color::White
            }
        }
        Color::White | Color::Yellow | Color::LightYellow | Color::LightCyan | Color::Gray => {
            Color::Black
        }
        _ => Color::White,
    }
}

fn functional_args(value: &str) -> Option<&str> {
    let rest = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))?;
    rest.strip_suffix(')')
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut channels = hex.chars().map(|ch| {
                let digit = ch.to_digit(16).unwrap_or(0) as u8;
                digit * 17
            });
            let r = channels.next()?;
            let g = channels.next()?;
            let b = channels.next()?;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) {
        return None;
    }
    let r = parse_channel(parts[0])?;
    let g = parse_channel(parts[1])?;
    let b = parse_channel(parts[2])?;
    Some(Color::Rgb(r, g, b))
}

fn parse_channel(raw: &str) -> Option<u8> {
    let (number, scale) = match raw.strip_suffix('%') {
        Some(percent) => (percent, 2.55),
        None => (raw, 1.0),
    };
    let value = number.trim().parse::<f32>().ok()? * scale;
    if !value.is_finite() || !(0.0..=255.0).contains(&value) {
        return None;
    }
    Some(value.round() as u8)
}
