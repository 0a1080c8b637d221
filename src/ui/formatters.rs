//! Number and text formatting for the canvas widgets.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a live curve reading for the status bar.
///
/// Large and tiny magnitudes switch to scientific notation; everything else
/// keeps about five significant digits.
pub fn format_stat_value(val: f64) -> String {
    if val.is_nan() {
        return "NaN".to_string();
    }
    if val.is_infinite() {
        return if val > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if val == 0.0 {
        return "0".to_string();
    }
    match magnitude(val) {
        m if !(-3..6).contains(&m) => format!("{:.3e}", val),
        m => format!("{:.*}", (4 - m).clamp(2, 5) as usize, val),
    }
}

/// Format an axis tick label.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    if val == 0.0 {
        return "0".to_string();
    }
    match magnitude(val) {
        m if !(-2..5).contains(&m) => format!("{:.1e}", val),
        m if m >= 2 => format!("{:.0}", val),
        m if m >= 0 => format!("{:.1}", val),
        _ => format!("{:.2}", val),
    }
}

/// Cut `text` to at most `max_width` terminal columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Decimal exponent of `val`, e.g. 2 for 250.0 and -1 for 0.5.
fn magnitude(val: f64) -> i32 {
    val.abs().log10().floor() as i32
}
