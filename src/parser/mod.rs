pub mod css;
pub mod hex;
pub mod rgb;

use std::str::FromStr;

use crate::error::ParseColorError;
use crate::types::Color;

/// Parse any supported CSS color syntax into a [`Color`].
///
/// Dispatch order:
///   1. the context-dependent keywords `inherit`, `currentColor`, `initial`
///      and `unset` are an [`Unresolvable`](ParseColorError::Unresolvable)
///      error, since they name no concrete color on their own
///   2. a leading `#` goes to the hex parser
///   3. an `rgb`/`rgba` prefix goes to the strict comma-form parser, so
///      out-of-range components stay errors instead of being clamped
///   4. everything else goes to `csscolorparser`
pub fn parse_color(input: &str) -> Result<Color, ParseColorError> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();

    if matches!(
        lower.as_str(),
        "inherit" | "currentcolor" | "initial" | "unset"
    ) {
        return Err(ParseColorError::Unresolvable(lower));
    }

    if trimmed.starts_with('#') {
        return hex::parse_hex_string(trimmed);
    }

    if lower.starts_with("rgb") {
        return rgb::parse_rgb_string(trimmed);
    }

    css::parse_css_string(trimmed)
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_hex() {
        let c = parse_color("#112233").unwrap();
        assert_eq!((c.red, c.green, c.blue), (17.0, 34.0, 51.0));
    }

    #[test]
    fn dispatches_rgb_form() {
        let c = parse_color("rgb(17, 34, 51)").unwrap();
        assert_eq!((c.red, c.green, c.blue, c.alpha), (17.0, 34.0, 51.0, 1.0));
    }

    #[test]
    fn dispatches_rgba_form() {
        let c = parse_color("rgba(17, 34, 51, 0)").unwrap();
        assert_eq!(c.alpha, 0.0);
    }

    #[test]
    fn dispatches_named_color() {
        let c = parse_color("rebeccapurple").unwrap();
        assert_eq!((c.red, c.green, c.blue), (102.0, 51.0, 153.0));
    }

    #[test]
    fn out_of_range_rgb_is_not_clamped() {
        assert!(matches!(
            parse_color("rgb(300, 0, 0)"),
            Err(ParseColorError::InvalidChannel(_))
        ));
    }

    #[test]
    fn context_keywords_are_unresolvable() {
        for keyword in ["inherit", "currentColor", "initial", "unset"] {
            assert!(
                matches!(
                    parse_color(keyword),
                    Err(ParseColorError::Unresolvable(_))
                ),
                "{keyword} should not resolve"
            );
        }
    }

    #[test]
    fn from_str_round_trips_through_parse_color() {
        let c: Color = "rgb(1, 2, 3)".parse().unwrap();
        assert_eq!((c.red, c.green, c.blue), (1.0, 2.0, 3.0));
        assert!("blurple".parse::<Color>().is_err());
    }

    #[test]
    fn color_parse_convenience() {
        let c = Color::parse("#fff").unwrap();
        assert_eq!(c, Color::WHITE);
    }
}
