//! Color name parsing and formatting helpers.
//!
//! Used by the configuration file (`ColorSpec`) and the command script (`color` command).

use crate::draw::{Color, color::*};

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Parses a color given either as a name or as `r,g,b` with 0-255 components.
pub fn parse_color(value: &str) -> Option<Color> {
    if let Some(color) = name_to_color(value) {
        return Some(color);
    }
    let components: Vec<u8> = value
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .ok()?;
    match components.as_slice() {
        [r, g, b] => Some(Color::from_rgba8(*r, *g, *b, 255)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_color_mapping() {
        assert_eq!(name_to_color("white").unwrap(), WHITE);
        assert_eq!(name_to_color(" Red ").unwrap(), RED);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn parse_color_accepts_rgb_triplets() {
        assert_eq!(parse_color("0, 0,255"), Some(BLUE));
        assert_eq!(parse_color("black"), Some(BLACK));
        assert!(parse_color("1,2").is_none());
        assert!(parse_color("1,2,300").is_none());
    }
}
