use csscolorparser::Color;

use crate::error::EngineError;

/// Canonicalize user color input to uppercase "#RRGGBB".
///
/// Accepts hex (3/6 digit, "#" optional) plus the sRGB functional forms
/// `rgb(...)` and `hsl(...)`, which go through csscolorparser. Every other
/// syntax (named colors, oklch, display-p3, ...) is out of scope and
/// rejected as `InvalidColor`. So is any translucent value (`rgba`,
/// `hsla`, slash alpha): the engine has no compositing step, and dropping
/// the alpha would report a ratio for a color the user did not give.
pub fn normalize(input: &str) -> Result<String, EngineError> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();

    if ["rgb(", "rgba(", "hsl(", "hsla("]
        .iter()
        .any(|prefix| lower.starts_with(prefix))
    {
        let color = trimmed
            .parse::<Color>()
            .map_err(|_| EngineError::InvalidColor(input.to_string()))?;
        let [r, g, b, a] = color.to_rgba8();
        if a < 255 {
            return Err(EngineError::InvalidColor(input.to_string()));
        }
        return Ok(super::hex::rgb_to_hex(r, g, b));
    }

    super::hex::normalize_hex(trimmed)
}
