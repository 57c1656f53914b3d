// Calendar color parsing
// Calendar colors arrive as hex strings (#RGB or #RRGGBB) from the calendar list.

/// Alpha applied to event bar fills when the caller does not pick one.
pub const DEFAULT_BAR_ALPHA: f32 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Parse `#RGB`, `#RRGGBB` (leading `#` optional) into RGB components.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().trim_start_matches('#');
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    if !expanded.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&expanded[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Translucent fill for an event bar. `alpha` is clamped to `0.0..=1.0`.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> Option<Rgba> {
    let (r, g, b) = parse_hex_color(hex)?;
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Some(Rgba { r, g, b, a })
}
