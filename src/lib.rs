//! Perceptual color math for accessibility tooling.
//!
//! Builds on an RGBA [`Color`] value: WCAG 2.1 relative luminance and
//! contrast ratios, alpha compositing onto opaque backdrops, AA/AAA
//! compliance checks with large-text classification, the APCA Lc metric as
//! a second opinion, and CSS-style color string parsing.

pub mod error;
pub mod math;
pub mod parser;
pub mod types;

pub use error::ParseColorError;
pub use math::apca::apca_lc;
pub use math::checker::{check_contrast, check_contrast_over, has_valid_contrast_ratio, is_large_text};
pub use math::composite::flatten_over;
pub use math::wcag::{check_wcag_thresholds, contrast_ratio, relative_luminance, WcagResult};
pub use parser::parse_color;
pub use types::{Color, Conformance, ContrastReport, TextStyle};
