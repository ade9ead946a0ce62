use crate::types::Color;

// SA98G constants from the APCA 0.1.9 reference model.
const MAIN_TRC: f64 = 2.4;
const S_RCO: f64 = 0.2126729;
const S_GCO: f64 = 0.7151522;
const S_BCO: f64 = 0.0721750;

const NORM_BG: f64 = 0.56;
const NORM_TXT: f64 = 0.57;
const REV_BG: f64 = 0.65;
const REV_TXT: f64 = 0.62;

const BLK_THRS: f64 = 0.022;
const BLK_CLMP: f64 = 1.414;

const SCALE_BOW: f64 = 1.14;
const SCALE_WOB: f64 = 1.14;
const LO_BOW_OFFSET: f64 = 0.027;
const LO_WOB_OFFSET: f64 = 0.027;
const DELTA_Y_MIN: f64 = 0.0005;
const LO_CLIP: f64 = 0.1;

/// APCA screen luminance (Ys). Uses a simple 2.4 power curve, not the WCAG
/// piecewise transform.
fn screen_luminance(color: Color) -> f64 {
    let linearize = |c: f64| (c / 255.0).powf(MAIN_TRC);
    S_RCO * linearize(color.red) + S_GCO * linearize(color.green) + S_BCO * linearize(color.blue)
}

/// Soft clamp near black so very dark values keep usable contrast.
fn soft_clamp_black(y: f64) -> f64 {
    if y > BLK_THRS {
        y
    } else {
        y + (BLK_THRS - y).powf(BLK_CLMP)
    }
}

/// APCA lightness contrast (Lc) for text over a background.
/// Positive Lc = dark text on light bg, negative = light text on dark bg.
/// |Lc| >= 60 is roughly the AA bar for body text.
///
/// A text color with alpha < 1 is flattened over the background first; the
/// background's own alpha is ignored.
pub fn apca_lc(text: Color, background: Color) -> f64 {
    let text = if text.is_opaque() {
        text
    } else {
        super::composite::flatten_over(text, background)
    };

    let txt_y = soft_clamp_black(screen_luminance(text));
    let bg_y = soft_clamp_black(screen_luminance(background));

    if (bg_y - txt_y).abs() < DELTA_Y_MIN {
        return 0.0;
    }

    let output_contrast = if bg_y > txt_y {
        // Normal polarity, dark text on light bg.
        let sapc = (bg_y.powf(NORM_BG) - txt_y.powf(NORM_TXT)) * SCALE_BOW;
        if sapc < LO_CLIP {
            0.0
        } else {
            sapc - LO_BOW_OFFSET
        }
    } else {
        // Reverse polarity, light text on dark bg.
        let sapc = (bg_y.powf(REV_BG) - txt_y.powf(REV_TXT)) * SCALE_WOB;
        if sapc > -LO_CLIP {
            0.0
        } else {
            sapc + LO_WOB_OFFSET
        }
    };

    output_contrast * 100.0
}
