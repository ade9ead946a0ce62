use crate::types::{Color, ContrastReport, TextStyle};

/// WCAG large-text classification: at least 18pt regular or 14pt bold,
/// with 1pt = 96/72 CSS pixels (24px regular, 18.67px bold).
pub fn is_large_text(font_size_px: f64, bold: bool) -> bool {
    let pt = font_size_px * 72.0 / 96.0;
    pt >= 18.0 || (bold && pt >= 14.0)
}

/// WCAG AA pass/fail for a text color over a background.
///
/// The contrast ratio (with implicit flattening of a translucent
/// foreground) is held against 3.0 for large text and 4.5 otherwise.
/// A color checked against itself always fails: the ratio is 1.
pub fn has_valid_contrast_ratio(
    foreground: Color,
    background: Color,
    font_size_px: f64,
    bold: bool,
) -> bool {
    let ratio = super::wcag::contrast_ratio(foreground, background);
    let minimum = if is_large_text(font_size_px, bold) {
        3.0
    } else {
        4.5
    };
    ratio >= minimum
}

/// Full contrast check for one foreground/background pair: rounded WCAG
/// ratio, every AA/AAA flag, and the APCA Lc as a second opinion.
pub fn check_contrast(foreground: Color, background: Color, style: TextStyle) -> ContrastReport {
    let ratio_raw = super::wcag::contrast_ratio(foreground, background);
    let flags = super::wcag::check_wcag_thresholds(ratio_raw);
    let lc_raw = super::apca::apca_lc(foreground, background);

    ContrastReport {
        ratio: round2(ratio_raw),
        large_text: is_large_text(style.font_size_px, style.bold),
        pass_aa: flags.pass_aa,
        pass_aa_large: flags.pass_aa_large,
        pass_aaa: flags.pass_aaa,
        pass_aaa_large: flags.pass_aaa_large,
        apca_lc: round2(lc_raw),
    }
}

/// Like [`check_contrast`], but the background may itself be translucent:
/// it is flattened over `backdrop` first, then the foreground resolves
/// against that effective background.
pub fn check_contrast_over(
    foreground: Color,
    background: Color,
    backdrop: Color,
    style: TextStyle,
) -> ContrastReport {
    let effective_bg = if background.is_opaque() {
        background
    } else {
        super::composite::flatten_over(background, backdrop)
    };
    check_contrast(foreground, effective_bg, style)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
