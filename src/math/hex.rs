use crate::error::EngineError;

/// Canonicalize hex input to uppercase "#RRGGBB".
/// Accepts 3- or 6-digit hex with an optional "#" prefix; 3-digit
/// shorthand expands by doubling each nibble ("#ABC" -> "#AABBCC").
pub fn normalize_hex(input: &str) -> Result<String, EngineError> {
    let trimmed = input.trim();
    let raw = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let expanded: String = match raw.len() {
        3 => raw.chars().flat_map(|c| [c, c]).collect(),
        6 => raw.to_string(),
        _ => return Err(EngineError::InvalidColor(input.to_string())),
    };
    if !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EngineError::InvalidColor(input.to_string()));
    }
    Ok(format!("#{}", expanded.to_uppercase()))
}

/// Parse a validated "#RRGGBB" string to RGB channels (0-255).
pub fn parse_hex_rgb(hex: &str) -> Result<(u8, u8, u8), EngineError> {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    if raw.len() != 6 || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EngineError::InvalidColor(hex.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&raw[i..i + 2], 16)
            .map_err(|_| EngineError::InvalidColor(hex.to_string()))
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Format RGB channels as canonical uppercase "#RRGGBB".
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}
