use crate::error::ParseColorError;
use crate::types::Color;

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
///
/// Shorthand digits are doubled (`#f00` -> `#ff0000`) and the alpha byte,
/// when present, is scaled to 0..=1.
pub fn parse_hex_string(input: &str) -> Result<Color, ParseColorError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix('#')
        .ok_or_else(|| ParseColorError::UnrecognizedSyntax(trimmed.to_string()))?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidHexDigit(trimmed.to_string()));
    }

    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        _ => return Err(ParseColorError::InvalidHexLength(trimmed.to_string())),
    };

    let byte = |at: usize| -> Result<u8, ParseColorError> {
        u8::from_str_radix(&expanded[at..at + 2], 16)
            .map_err(|_| ParseColorError::InvalidHexDigit(trimmed.to_string()))
    };

    let red = f64::from(byte(0)?);
    let green = f64::from(byte(2)?);
    let blue = f64::from(byte(4)?);
    let alpha = if expanded.len() == 8 {
        f64::from(byte(6)?) / 255.0
    } else {
        1.0
    };

    Ok(Color::rgba(red, green, blue, alpha))
}
