use crate::error::ParseColorError;
use crate::types::Color;

/// Parse the comma form `rgb(R, G, B)` / `rgba(R, G, B, A)`.
///
/// The function name is case-insensitive and whitespace around every number
/// is ignored. The 3-component `rgb` form sets alpha to 1; `rgba` requires
/// exactly 4 components. Channels must be numbers in 0..=255 and alpha in
/// 0..=1; out-of-range values are an error, never clamped.
pub fn parse_rgb_string(input: &str) -> Result<Color, ParseColorError> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();

    let (rest, function, expected) = if let Some(rest) = lower.strip_prefix("rgba") {
        (rest, "rgba", 4)
    } else if let Some(rest) = lower.strip_prefix("rgb") {
        (rest, "rgb", 3)
    } else {
        return Err(ParseColorError::UnrecognizedSyntax(trimmed.to_string()));
    };

    let inner = rest
        .trim_start()
        .strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .ok_or_else(|| ParseColorError::UnrecognizedSyntax(trimmed.to_string()))?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != expected {
        return Err(ParseColorError::ComponentCount {
            function,
            expected,
            found: parts.len(),
        });
    }

    let red = parse_channel(parts[0])?;
    let green = parse_channel(parts[1])?;
    let blue = parse_channel(parts[2])?;
    let alpha = if expected == 4 {
        parse_alpha(parts[3])?
    } else {
        1.0
    };

    Ok(Color::rgba(red, green, blue, alpha))
}

fn parse_channel(text: &str) -> Result<f64, ParseColorError> {
    let value: f64 = text
        .parse()
        .map_err(|_| ParseColorError::InvalidChannel(text.to_string()))?;
    if !value.is_finite() || !(0.0..=255.0).contains(&value) {
        return Err(ParseColorError::InvalidChannel(text.to_string()));
    }
    Ok(value)
}

fn parse_alpha(text: &str) -> Result<f64, ParseColorError> {
    let value: f64 = text
        .parse()
        .map_err(|_| ParseColorError::InvalidAlpha(text.to_string()))?;
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ParseColorError::InvalidAlpha(text.to_string()));
    }
    Ok(value)
}
