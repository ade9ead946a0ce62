use crate::types::Color;

/// Alpha-composite a foreground color over a background ("over" operator).
/// formula per channel: result = fg * alpha + bg * (1 - alpha)
///
/// The background is treated as fully opaque and the result always is:
/// compositing onto an opaque backdrop resolves all transparency. Channels
/// stay fractional, so half black over white is exactly (127.5, 127.5,
/// 127.5).
pub fn flatten_over(foreground: Color, background: Color) -> Color {
    let alpha = foreground.alpha;
    let blend = |fg: f64, bg: f64| fg * alpha + bg * (1.0 - alpha);

    Color::rgb(
        blend(foreground.red, background.red),
        blend(foreground.green, background.green),
        blend(foreground.blue, background.blue),
    )
}
