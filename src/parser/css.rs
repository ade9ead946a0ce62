use crate::error::ParseColorError;
use crate::types::Color;

/// Parse any other CSS color syntax (named colors, `hsl(...)`, `hwb(...)`,
/// `oklch(...)` and friends) by delegating to `csscolorparser`.
pub fn parse_css_string(input: &str) -> Result<Color, ParseColorError> {
    let trimmed = input.trim();
    let parsed: csscolorparser::Color = trimmed
        .parse()
        .map_err(|_| ParseColorError::UnrecognizedSyntax(trimmed.to_string()))?;

    let [r, g, b, a] = parsed.to_rgba8();
    Ok(Color::rgba(
        f64::from(r),
        f64::from(g),
        f64::from(b),
        f64::from(a) / 255.0,
    ))
}
