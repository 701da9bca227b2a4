use crate::types::LevelFlags;

/// Conformance tiers in escalation order, most demanding first.
/// Classification and the suggestion search both walk this table.
pub const LEVELS: [(f64, &str); 3] = [(7.0, "AAA"), (4.5, "AA"), (3.0, "AA Large")];

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.1.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Calculate WCAG 2.1 contrast ratio between two colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
///
/// Returned unrounded; classification must happen on this value, never on
/// the 2-decimal display form.
pub fn contrast_ratio(a: (u8, u8, u8), b: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(a.0, a.1, a.2);
    let l2 = relative_luminance(b.0, b.1, b.2);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pass/fail flags for each tier, from the unrounded ratio.
pub fn classify(ratio: f64) -> LevelFlags {
    LevelFlags {
        aaa: ratio >= 7.0,
        aa: ratio >= 4.5,
        aa_large: ratio >= 3.0,
    }
}

/// Display form of a ratio: fixed 2 decimals, round-half-up.
pub fn display_ratio(ratio: f64) -> String {
    format!("{:.2}", (ratio * 100.0).round() / 100.0)
}
