use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::EngineError;
use crate::math::{color_parse, hex, wcag};
use crate::types::{
    MatrixExport, PairResult, PaletteColor, PaletteReport, PaletteRow, Summary,
};

pub const WHITE: &str = "#FFFFFF";
pub const BLACK: &str = "#000000";

/// Build the full pairwise contrast report for a palette.
///
/// Every input is canonicalized first; the first invalid entry fails the
/// whole call. Rows are keyed by canonical hex, so duplicate palette
/// entries collapse to a single row (map semantics of the exported shape;
/// a documented limitation, not deduplication by intent). Each row is
/// independent and rows are computed in parallel, collected in palette
/// insertion order.
pub fn check_palette(
    colors: &[String],
    include_black_white: bool,
) -> Result<PaletteReport, EngineError> {
    let mut palette: Vec<String> = Vec::with_capacity(colors.len());
    for input in colors {
        let canonical = color_parse::normalize(input)?;
        if !palette.contains(&canonical) {
            palette.push(canonical);
        }
    }

    let mut comparison = palette.clone();
    if include_black_white {
        for extra in [WHITE, BLACK] {
            if !comparison.iter().any(|c| c == extra) {
                comparison.push(extra.to_string());
            }
        }
    }

    let rows = palette
        .par_iter()
        .map(|color1| build_row(color1, &comparison))
        .collect::<Result<Vec<_>, _>>()?;

    let mut summary = Summary {
        aaa: 0,
        aa: 0,
        aa_large: 0,
        total: 0,
    };
    for row in &rows {
        for entry in &row.entries {
            summary.total += 1;
            summary.aaa += u32::from(entry.level.aaa);
            summary.aa += u32::from(entry.level.aa);
            summary.aa_large += u32::from(entry.level.aa_large);
        }
    }

    debug!(
        "checked palette of {} colors: {} comparisons, {} pass AA",
        palette.len(),
        summary.total,
        summary.aa
    );
    Ok(PaletteReport { rows, summary })
}

/// Compare one palette color against every other member of the comparison
/// set. A color is never compared against itself; a comparison set of one
/// yields an empty row, not an error.
fn build_row(color1: &str, comparison: &[String]) -> Result<PaletteRow, EngineError> {
    let rgb1 = hex::parse_hex_rgb(color1)?;
    let mut entries = Vec::with_capacity(comparison.len().saturating_sub(1));
    for color2 in comparison {
        if color2 == color1 {
            continue;
        }
        let rgb2 = hex::parse_hex_rgb(color2)?;
        let raw = wcag::contrast_ratio(rgb1, rgb2);
        entries.push(PairResult {
            color: color2.clone(),
            ratio: wcag::display_ratio(raw),
            level: wcag::classify(raw),
        });
    }
    Ok(PaletteRow {
        color: color1.to_string(),
        entries,
    })
}

#[derive(Serialize)]
struct ExportDoc<'a> {
    colors: &'a [PaletteColor],
    results: MatrixExport<'a>,
    summary: Summary,
}

/// Render the report as the JSON document the exporters consume: named
/// palette colors, the nested result mapping, and the summary, with keys
/// in palette insertion order.
pub fn export_report_json(
    colors: &[PaletteColor],
    include_black_white: bool,
) -> Result<String, EngineError> {
    let mut named: Vec<PaletteColor> = Vec::with_capacity(colors.len());
    for color in colors {
        let canonical = color_parse::normalize(&color.hex)?;
        if !named.iter().any(|n| n.hex == canonical) {
            named.push(PaletteColor {
                hex: canonical,
                name: color.name.clone(),
            });
        }
    }

    let hexes: Vec<String> = named.iter().map(|n| n.hex.clone()).collect();
    let report = check_palette(&hexes, include_black_white)?;
    let doc = ExportDoc {
        colors: &named,
        results: MatrixExport(&report.rows),
        summary: report.summary,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
