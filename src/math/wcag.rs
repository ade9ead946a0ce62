use crate::types::Color;

/// Convert an sRGB channel (0-255, possibly fractional) to linear light.
/// sRGB -> linear: if V <= 0.04045: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: f64) -> f64 {
    let v = channel / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.1, in 0..=1.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
///
/// Alpha is ignored; the color is treated as already opaque. Black maps to
/// exactly 0.0 and white to exactly 1.0.
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * srgb_to_linear(color.red)
        + 0.7152 * srgb_to_linear(color.green)
        + 0.0722 * srgb_to_linear(color.blue)
}

/// WCAG 2.1 contrast ratio between a foreground and a background, in 1..=21.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
///
/// A foreground with alpha < 1 is flattened over the background first. The
/// background's own alpha is ignored, so a pair of identical colors always
/// yields exactly 1.0 and opaque pairs are symmetric under swap.
pub fn contrast_ratio(foreground: Color, background: Color) -> f64 {
    let foreground = if foreground.is_opaque() {
        foreground
    } else {
        super::composite::flatten_over(foreground, background)
    };

    let fl = relative_luminance(foreground);
    let bl = relative_luminance(background);
    let (lighter, darker) = if fl > bl { (fl, bl) } else { (bl, fl) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pass/fail flags for every WCAG 2.1 threshold at once.
/// AA: 4.5 normal, 3.0 large. AAA: 7.0 normal, 4.5 large.
pub fn check_wcag_thresholds(ratio: f64) -> WcagResult {
    WcagResult {
        pass_aa: ratio >= 4.5,
        pass_aa_large: ratio >= 3.0,
        pass_aaa: ratio >= 7.0,
        pass_aaa_large: ratio >= 4.5,
    }
}

pub struct WcagResult {
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── relative_luminance ──

    #[test]
    fn black_luminance_is_zero() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
    }

    #[test]
    fn white_luminance_is_one() {
        assert_eq!(relative_luminance(Color::WHITE), 1.0);
    }

    #[test]
    fn luminance_tracks_brightness() {
        let white = relative_luminance(Color::WHITE);
        let yellow = relative_luminance(Color::rgb(255.0, 255.0, 0.0));
        let darkyellow = relative_luminance(Color::rgb(128.0, 128.0, 0.0));
        let blue = relative_luminance(Color::rgb(0.0, 0.0, 255.0));
        let black = relative_luminance(Color::BLACK);

        assert!(white > yellow);
        assert!(yellow > darkyellow);
        assert!(yellow > blue);
        assert!(blue > black);
    }

    #[test]
    fn luminance_ignores_alpha() {
        let opaque = relative_luminance(Color::rgb(30.0, 41.0, 59.0));
        let ghost = relative_luminance(Color::rgba(30.0, 41.0, 59.0, 0.2));
        assert_eq!(opaque, ghost);
    }

    // ── contrast_ratio ──

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert_eq!(ratio, 21.0);
    }

    #[test]
    fn same_color_is_exactly_1() {
        let yellow = Color::rgb(255.0, 255.0, 0.0);
        assert_eq!(contrast_ratio(Color::BLACK, Color::BLACK), 1.0);
        assert_eq!(contrast_ratio(Color::WHITE, Color::WHITE), 1.0);
        assert_eq!(contrast_ratio(yellow, yellow), 1.0);
    }

    #[test]
    fn transparent_fg_resolves_against_bg() {
        // Fully transparent black over black flattens to black itself.
        let transparent = Color::rgba(0.0, 0.0, 0.0, 0.0);
        assert_eq!(contrast_ratio(transparent, Color::BLACK), 1.0);
    }

    #[test]
    fn gray_on_white() {
        // colord: 4.54
        let ratio = contrast_ratio(Color::rgb(118.0, 118.0, 118.0), Color::WHITE);
        assert!((ratio - 4.54).abs() < 0.01);
    }

    #[test]
    fn red_on_white() {
        // colord: 3.99
        let ratio = contrast_ratio(Color::rgb(255.0, 0.0, 0.0), Color::WHITE);
        assert!((ratio - 3.99).abs() < 0.01);
    }

    #[test]
    fn slate_on_white() {
        // colord: 14.62
        let ratio = contrast_ratio(Color::rgb(30.0, 41.0, 59.0), Color::WHITE);
        assert!((ratio - 14.63).abs() < 0.01);
    }

    #[test]
    fn order_independent_for_opaque_pairs() {
        let yellow = Color::rgb(255.0, 255.0, 0.0);
        assert_eq!(
            contrast_ratio(yellow, Color::BLACK),
            contrast_ratio(Color::BLACK, yellow)
        );
        assert_eq!(
            contrast_ratio(yellow, Color::WHITE),
            contrast_ratio(Color::WHITE, yellow)
        );
    }

    #[test]
    fn wider_luminance_gap_means_higher_ratio() {
        let yellow = Color::rgb(255.0, 255.0, 0.0);
        let yw = contrast_ratio(yellow, Color::WHITE);
        let yb = contrast_ratio(yellow, Color::BLACK);
        let wb = contrast_ratio(Color::WHITE, Color::BLACK);
        assert!(yw < yb);
        assert!(yb < wb);
    }

    #[test]
    fn half_transparent_fg_lands_between() {
        // White at 50% over black reads as mid gray against black.
        let ghost = Color::rgba(255.0, 255.0, 255.0, 0.5);
        let ratio = contrast_ratio(ghost, Color::BLACK);
        assert!((ratio - 5.28).abs() < 0.01);
    }

    // ── check_wcag_thresholds ──

    #[test]
    fn aa_normal_requires_4_5() {
        let r = check_wcag_thresholds(4.5);
        assert!(r.pass_aa);
        assert!(r.pass_aa_large);
        assert!(!r.pass_aaa);
        assert!(r.pass_aaa_large);
    }

    #[test]
    fn aa_large_requires_3() {
        let r = check_wcag_thresholds(3.0);
        assert!(!r.pass_aa);
        assert!(r.pass_aa_large);
        assert!(!r.pass_aaa_large);
    }

    #[test]
    fn aaa_normal_requires_7() {
        let r = check_wcag_thresholds(7.0);
        assert!(r.pass_aa);
        assert!(r.pass_aaa);
    }

    #[test]
    fn just_below_thresholds_fail() {
        let r = check_wcag_thresholds(2.99);
        assert!(!r.pass_aa);
        assert!(!r.pass_aa_large);
        assert!(!r.pass_aaa);
        assert!(!r.pass_aaa_large);
    }
}
