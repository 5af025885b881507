//! WCAG 2.1 contrast computation and remediation.
//!
//! Ratios come from relative luminance in linearized sRGB space; the
//! thresholds (4.5/3.0 for AA, 7.0/4.5 for AAA) live on [`WcagLevel`].

use crate::domain::model::{AdjustedColor, ColorRamp, ContrastResult, Rgb, WcagLevel};
use crate::utils::error::Result;

/// Per-iteration channel step used by [`adjust_color_for_contrast`].
const ADJUST_STEP: u8 = 5;

/// Parses a hex color string. The engine's only hard error: everything else
/// here is total over well-formed colors.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    Rgb::from_hex(hex)
}

/// Formats a color as uppercase `#RRGGBB`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.1: piecewise sRGB linearization combined
/// with the 0.2126/0.7152/0.0722 channel weights. Returns a value in [0, 1].
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// Contrast ratio `(L_lighter + 0.05) / (L_darker + 0.05)`.
/// Symmetric in its arguments; always in [1, 21].
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Checks a foreground/background pair. Both level verdicts are populated
/// regardless of which one the caller cares about; `large_text` selects the
/// relaxed threshold column.
pub fn check_contrast(foreground: Rgb, background: Rgb, large_text: bool) -> ContrastResult {
    let ratio = contrast_ratio(foreground, background);

    ContrastResult {
        foreground,
        background,
        ratio,
        meets_aa: ratio >= WcagLevel::Aa.required_ratio(large_text),
        meets_aaa: ratio >= WcagLevel::Aaa.required_ratio(large_text),
    }
}

/// Steps a color toward the target contrast ratio against `background`.
///
/// The direction is decided once up front: lighten when the color's luminance
/// is below the background's, darken otherwise. Each iteration moves every
/// channel by 5 (saturating) and re-measures. Never errors; when the budget
/// runs out short of the target, the last color is returned with
/// `converged: false`.
pub fn adjust_color_for_contrast(
    color: Rgb,
    background: Rgb,
    target_ratio: f64,
    max_iterations: u32,
) -> AdjustedColor {
    let should_lighten = relative_luminance(color) < relative_luminance(background);

    let mut current = color;
    let mut ratio = contrast_ratio(current, background);
    let mut iteration = 0;

    while ratio < target_ratio && iteration < max_iterations {
        current = if should_lighten {
            current.lighten(ADJUST_STEP)
        } else {
            current.darken(ADJUST_STEP)
        };
        ratio = contrast_ratio(current, background);
        iteration += 1;
    }

    AdjustedColor {
        color: current,
        converged: ratio >= target_ratio,
        ratio,
    }
}

/// Five-point tint/shade ramp at fixed channel offsets (+60, +30, 0, -30, -60).
pub fn generate_color_variations(base: Rgb) -> ColorRamp {
    ColorRamp {
        lighter: base.lighten(60),
        light: base.lighten(30),
        base,
        dark: base.darken(30),
        darker: base.darken(60),
    }
}
