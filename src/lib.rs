#[macro_use]
extern crate napi_derive;

pub mod engine;
pub mod error;
pub mod math;
pub mod types;

use napi::Result;

use types::{PaletteColor, PaletteReport, Suggestion};

#[napi]
pub fn health_check() -> String {
    "contrast-checker-native ok".to_string()
}

/// Check every pairwise combination of a hex palette, optionally against
/// white and black as well.
#[napi]
pub fn check_palette(colors: Vec<String>, include_black_white: bool) -> Result<PaletteReport> {
    Ok(engine::check_palette(&colors, include_black_white)?)
}

/// Suggest the nearest adjustment of one side of a color pair that reaches
/// the highest attainable WCAG tier.
#[napi]
pub fn suggest_adjustment(
    color1: String,
    color2: String,
    adjust_background: bool,
) -> Result<Suggestion> {
    Ok(math::suggest::suggest_adjustment(
        &color1,
        &color2,
        adjust_background,
    )?)
}

/// Produce the exporter-facing JSON document for a named palette.
#[napi]
pub fn export_report_json(colors: Vec<PaletteColor>, include_black_white: bool) -> Result<String> {
    Ok(engine::export_report_json(&colors, include_black_white)?)
}
