use serde::{Deserialize, Serialize};

use crate::error::ParseColorError;

/// An RGBA color.
///
/// Channels are `f64` in 0..=255 and may be fractional (compositing a
/// half-transparent color produces exact midpoints such as 127.5). Alpha is
/// in 0..=1, where 1 is fully opaque.
///
/// `Color` is a plain immutable value. The constructors take the numbers
/// they are given; range enforcement happens at the parse boundary
/// (see [`crate::parser`]), where bad input is a
/// [`ParseColorError`](crate::error::ParseColorError) rather than a clamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Color = Color {
        red: 255.0,
        green: 255.0,
        blue: 255.0,
        alpha: 1.0,
    };

    pub const BLACK: Color = Color {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };

    /// Fully opaque color from the three channels.
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    /// Parse any supported CSS color syntax. See [`crate::parser::parse_color`].
    pub fn parse(input: &str) -> Result<Self, ParseColorError> {
        crate::parser::parse_color(input)
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    /// Channels are rounded to the nearest byte.
    pub fn to_hex_string(&self) -> String {
        let r = self.red.round() as u8;
        let g = self.green.round() as u8;
        let b = self.blue.round() as u8;
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            let a = (self.alpha * 255.0).round() as u8;
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

/// Text rendering traits that decide which WCAG threshold applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in CSS pixels.
    pub font_size_px: f64,
    /// Bold or heavier weight.
    pub bold: bool,
}

impl TextStyle {
    pub fn new(font_size_px: f64, bold: bool) -> Self {
        Self { font_size_px, bold }
    }
}

/// WCAG conformance target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conformance {
    Aa,
    Aaa,
}

impl Conformance {
    /// Minimum contrast ratio this level requires.
    /// AA: 4.5 normal, 3.0 large. AAA: 7.0 normal, 4.5 large.
    pub fn min_ratio(self, large_text: bool) -> f64 {
        match (self, large_text) {
            (Conformance::Aa, false) => 4.5,
            (Conformance::Aa, true) => 3.0,
            (Conformance::Aaa, false) => 7.0,
            (Conformance::Aaa, true) => 4.5,
        }
    }
}

/// Outcome of a full contrast check for one foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    /// WCAG contrast ratio, rounded to 2 decimals.
    pub ratio: f64,
    /// Whether the checked text classified as WCAG large text.
    pub large_text: bool,
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
    /// APCA lightness contrast, rounded to 2 decimals. Positive for dark
    /// text on a light background, negative for the reverse.
    pub apca_lc: f64,
}

impl ContrastReport {
    /// Pass flag for the given conformance level, using the text size class
    /// the check was run with.
    pub fn passes(&self, level: Conformance) -> bool {
        match (level, self.large_text) {
            (Conformance::Aa, false) => self.pass_aa,
            (Conformance::Aa, true) => self.pass_aa_large,
            (Conformance::Aaa, false) => self.pass_aaa,
            (Conformance::Aaa, true) => self.pass_aaa_large,
        }
    }
}
