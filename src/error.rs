use thiserror::Error;

/// Error produced when a textual color value cannot be turned into a
/// [`Color`](crate::types::Color).
///
/// Out-of-range components are reported as errors rather than clamped, so a
/// caller can tell `rgb(300, 0, 0)` apart from a color that merely happens
/// to be red.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The input matches none of the supported color syntaxes.
    #[error("unrecognized color syntax {0:?}")]
    UnrecognizedSyntax(String),

    /// An `rgb(...)`/`rgba(...)` form with the wrong number of components.
    #[error("{function}() takes {expected} components, found {found}")]
    ComponentCount {
        function: &'static str,
        expected: usize,
        found: usize,
    },

    /// A channel component that is not a number in 0..=255.
    #[error("invalid channel value {0:?}, expected a number in 0..=255")]
    InvalidChannel(String),

    /// An alpha component that is not a number in 0..=1.
    #[error("invalid alpha value {0:?}, expected a number in 0..=1")]
    InvalidAlpha(String),

    /// A hex literal with a digit count other than 3, 4, 6 or 8.
    #[error("hex color {0:?} must have 3, 4, 6, or 8 digits")]
    InvalidHexLength(String),

    /// A hex literal containing a non-hexadecimal digit.
    #[error("hex color {0:?} contains a non-hex digit")]
    InvalidHexDigit(String),

    /// CSS keywords like `inherit` or `currentColor` that name no concrete
    /// color value without surrounding document context.
    #[error("keyword {0:?} does not resolve to a concrete color")]
    Unresolvable(String),
}
