use log::debug;

use crate::error::EngineError;
use crate::types::Suggestion;

use super::{color_parse, hex, hsl, wcag};

/// Lightness step for the search walk, in HSL percentage units.
const LIGHTNESS_STEP: f64 = 1.0;

/// Search for the nearest accessible adjustment of a failing color pair.
///
/// Exactly one side moves: `color1` when `adjust_background` is set,
/// `color2` otherwise. Hue and saturation stay fixed; only HSL lightness
/// walks outward from its current value, 1 unit per step, toward whichever
/// extreme (white or black) offers the larger attainable ratio against the
/// fixed color -- the break-even rule spelled out below. Tiers are
/// tried in escalation order (AAA, then AA, then AA Large), each pass
/// restarting from the original lightness, and the first lightness that
/// meets the pass's threshold wins -- the nearest-adjustment guarantee.
///
/// A pair that already meets a tier returns the inputs unchanged with that
/// tier as `target_level`. If even AA Large is unreachable before the walk
/// hits lightness 0 or 100, the result is `NoAccessibleAdjustment`.
pub fn suggest_adjustment(
    color1: &str,
    color2: &str,
    adjust_background: bool,
) -> Result<Suggestion, EngineError> {
    let c1 = color_parse::normalize(color1)?;
    let c2 = color_parse::normalize(color2)?;

    let (movable_hex, fixed_hex) = if adjust_background {
        (&c1, &c2)
    } else {
        (&c2, &c1)
    };
    let movable = hex::parse_hex_rgb(movable_hex)?;
    let fixed = hex::parse_hex_rgb(fixed_hex)?;

    // Walk toward whichever extreme offers the larger attainable ratio.
    // Pushing to white reaches 1.05 / (Lf + 0.05); pushing to black reaches
    // (Lf + 0.05) / 0.05. The two tie when Lf + 0.05 == sqrt(1.05 * 0.05).
    let fixed_lum = wcag::relative_luminance(fixed.0, fixed.1, fixed.2);
    let lighten = fixed_lum + 0.05 <= (1.05_f64 * 0.05).sqrt();

    let (h, s, start_l) = hsl::rgb_to_hsl(movable.0, movable.1, movable.2);
    let original_ratio = wcag::contrast_ratio(movable, fixed);

    for (threshold, label) in wcag::LEVELS {
        if original_ratio >= threshold {
            // Already at this tier; nothing to adjust.
            return Ok(build(
                &c1,
                &c2,
                movable_hex.clone(),
                adjust_background,
                original_ratio,
                label,
            ));
        }
        if let Some((candidate, ratio)) = walk_lightness(h, s, start_l, lighten, fixed, threshold) {
            return Ok(build(
                &c1,
                &c2,
                hex::rgb_to_hex(candidate.0, candidate.1, candidate.2),
                adjust_background,
                ratio,
                label,
            ));
        }
        debug!("suggest: {label} unreachable for {movable_hex} vs {fixed_hex}, escalating down");
    }

    Err(EngineError::NoAccessibleAdjustment)
}

/// Step lightness outward from `start` until the contrast ratio against
/// `fixed` meets `threshold`. Returns the first qualifying color, or None
/// once the terminal bound (0 or 100) has been evaluated without success.
fn walk_lightness(
    h: f64,
    s: f64,
    start: f64,
    lighten: bool,
    fixed: (u8, u8, u8),
    threshold: f64,
) -> Option<((u8, u8, u8), f64)> {
    let mut l = start;
    loop {
        if lighten {
            if l >= 100.0 {
                return None;
            }
            l = (l + LIGHTNESS_STEP).min(100.0);
        } else {
            if l <= 0.0 {
                return None;
            }
            l = (l - LIGHTNESS_STEP).max(0.0);
        }

        let candidate = hsl::hsl_to_rgb(h, s, l);
        let ratio = wcag::contrast_ratio(candidate, fixed);
        if ratio >= threshold {
            return Some((candidate, ratio));
        }
    }
}

fn build(
    c1: &str,
    c2: &str,
    suggested: String,
    adjust_background: bool,
    ratio: f64,
    label: &str,
) -> Suggestion {
    let (suggested_color1, suggested_color2) = if adjust_background {
        (suggested, c2.to_string())
    } else {
        (c1.to_string(), suggested)
    };
    Suggestion {
        suggested_color1,
        suggested_color2,
        new_ratio: wcag::display_ratio(ratio),
        target_level: label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_ratio(hex1: &str, hex2: &str) -> f64 {
        let a = hex::parse_hex_rgb(hex1).unwrap();
        let b = hex::parse_hex_rgb(hex2).unwrap();
        wcag::contrast_ratio(a, b)
    }

    #[test]
    fn already_aaa_returns_inputs_unchanged() {
        let s = suggest_adjustment("#000000", "#FFFFFF", true).unwrap();
        assert_eq!(s.suggested_color1, "#000000");
        assert_eq!(s.suggested_color2, "#FFFFFF");
        assert_eq!(s.target_level, "AAA");
        assert_eq!(s.new_ratio, "21.00");
    }

    #[test]
    fn adjust_background_moves_only_color1() {
        let s = suggest_adjustment("#779977", "#888888", true).unwrap();
        assert_ne!(s.suggested_color1, "#779977");
        assert_eq!(s.suggested_color2, "#888888");
    }

    #[test]
    fn adjust_text_moves_only_color2() {
        let s = suggest_adjustment("#888888", "#779977", false).unwrap();
        assert_eq!(s.suggested_color1, "#888888");
        assert_ne!(s.suggested_color2, "#779977");
    }

    #[test]
    fn suggestion_meets_claimed_tier_threshold() {
        // Near-mid-gray pair: low initial contrast, AAA out of reach.
        let s = suggest_adjustment("#777777", "#808080", true).unwrap();
        let achieved = raw_ratio(&s.suggested_color1, &s.suggested_color2);
        let (threshold, _) = wcag::LEVELS
            .iter()
            .find(|(_, label)| *label == s.target_level)
            .expect("known tier label");
        assert!(
            achieved >= *threshold,
            "claimed {} but ratio {achieved}",
            s.target_level
        );
    }

    #[test]
    fn mid_gray_fixed_color_caps_at_aa() {
        // Against #808080 the best reachable ratio is (0.2159 + 0.05) / 0.05
        // = 5.32, so AAA is impossible and AA must be reported.
        let s = suggest_adjustment("#777777", "#808080", true).unwrap();
        assert_eq!(s.target_level, "AA");
        assert!(raw_ratio(&s.suggested_color1, "#808080") >= 4.5);
        // Nearest adjustment: the walk stops at the first qualifying gray,
        // well short of pure black.
        assert_ne!(s.suggested_color1, "#000000");
    }

    #[test]
    fn dark_fixed_color_walks_lighter() {
        let s = suggest_adjustment("#335577", "#222222", true).unwrap();
        let (_, _, original_l) = hsl::rgb_to_hsl(0x33, 0x55, 0x77);
        let (r, g, b) = hex::parse_hex_rgb(&s.suggested_color1).unwrap();
        let (_, _, adjusted_l) = hsl::rgb_to_hsl(r, g, b);
        assert!(adjusted_l > original_l, "{original_l} -> {adjusted_l}");
    }

    #[test]
    fn light_fixed_color_walks_darker() {
        let s = suggest_adjustment("#AABBCC", "#DDDDDD", true).unwrap();
        let (_, _, original_l) = hsl::rgb_to_hsl(0xAA, 0xBB, 0xCC);
        let (r, g, b) = hex::parse_hex_rgb(&s.suggested_color1).unwrap();
        let (_, _, adjusted_l) = hsl::rgb_to_hsl(r, g, b);
        assert!(adjusted_l < original_l, "{original_l} -> {adjusted_l}");
    }

    #[test]
    fn hue_and_saturation_preserved() {
        let s = suggest_adjustment("#336699", "#444455", true).unwrap();
        let (h0, s0, _) = hsl::rgb_to_hsl(0x33, 0x66, 0x99);
        let (r, g, b) = hex::parse_hex_rgb(&s.suggested_color1).unwrap();
        let (h1, s1, _) = hsl::rgb_to_hsl(r, g, b);
        // 8-bit quantization allows small drift.
        assert!((h0 - h1).abs() < 4.0, "hue {h0} -> {h1}");
        assert!((s0 - s1).abs() < 4.0, "saturation {s0} -> {s1}");
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let a = suggest_adjustment("#777777", "#997755", false).unwrap();
        let b = suggest_adjustment("#777777", "#997755", false).unwrap();
        assert_eq!(a.suggested_color1, b.suggested_color1);
        assert_eq!(a.suggested_color2, b.suggested_color2);
        assert_eq!(a.new_ratio, b.new_ratio);
        assert_eq!(a.target_level, b.target_level);
    }

    #[test]
    fn new_ratio_not_below_original_when_passing() {
        let original = raw_ratio("#1E293B", "#FFFFFF"); // ~14.6, already AAA
        let s = suggest_adjustment("#1E293B", "#FFFFFF", false).unwrap();
        assert_eq!(s.target_level, "AAA");
        let achieved = raw_ratio(&s.suggested_color1, &s.suggested_color2);
        assert!(achieved >= original - 1e-9);
    }

    #[test]
    fn invalid_input_rejected() {
        assert!(suggest_adjustment("#nope", "#FFFFFF", true).is_err());
        assert!(suggest_adjustment("#FFFFFF", "zzz", false).is_err());
    }
}
