use napi_derive::napi;
use serde::Serialize;

/// Pass/fail flags for the WCAG conformance tiers.
#[napi(object)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelFlags {
    pub aaa: bool,
    pub aa: bool,
    pub aa_large: bool,
}

/// One matrix cell: the row's key color compared against `color`.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct PairResult {
    pub color: String,
    /// Display ratio, fixed to 2 decimals ("4.50"). Pass flags were
    /// computed from the unrounded ratio before this string was made.
    pub ratio: String,
    pub level: LevelFlags,
}

/// One matrix row: every comparison for a single palette color, in
/// comparison-set order.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct PaletteRow {
    pub color: String,
    pub entries: Vec<PairResult>,
}

/// Aggregate pass counts over all matrix entries. Both directions of a
/// palette-internal pair are counted, one per row that holds them.
#[napi(object)]
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub aaa: u32,
    pub aa: u32,
    pub aa_large: u32,
    pub total: u32,
}

/// Full result of a palette check.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct PaletteReport {
    pub rows: Vec<PaletteRow>,
    pub summary: Summary,
}

/// User palette entry for export: the display name travels with the hex
/// value so exporters never do positional lookups.
#[napi(object)]
#[derive(Debug, Clone, Serialize)]
pub struct PaletteColor {
    pub hex: String,
    pub name: String,
}

/// Output of the accessible-adjustment search. Exactly one of the two
/// suggested colors differs from its input, unless the pair already met
/// the reported tier.
#[napi(object)]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub suggested_color1: String,
    pub suggested_color2: String,
    /// Display form of the achieved ratio ("4.50").
    pub new_ratio: String,
    /// Tier actually reached: "AAA", "AA" or "AA Large".
    pub target_level: String,
}

/// Serializes matrix rows as the nested `{"#HEX1": {"#HEX2": {ratio,
/// level}}}` mapping the JSON/SVG exporters consume. Key order follows
/// palette insertion order, which a derived map type would not preserve.
pub struct MatrixExport<'a>(pub &'a [PaletteRow]);

impl Serialize for MatrixExport<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut outer = serializer.serialize_map(Some(self.0.len()))?;
        for row in self.0 {
            outer.serialize_entry(&row.color, &RowExport(&row.entries))?;
        }
        outer.end()
    }
}

struct RowExport<'a>(&'a [PairResult]);

impl Serialize for RowExport<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut inner = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            inner.serialize_entry(
                &entry.color,
                &CellExport {
                    ratio: &entry.ratio,
                    level: entry.level,
                },
            )?;
        }
        inner.end()
    }
}

#[derive(Serialize)]
struct CellExport<'a> {
    ratio: &'a str,
    level: LevelFlags,
}
