use thiserror::Error;

/// Engine-level failures surfaced to the JS caller.
///
/// `InvalidColor` carries the offending input verbatim so the UI can point
/// at the bad entry instead of guessing a replacement color.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("no accessible adjustment found within the lightness range")]
    NoAccessibleAdjustment,

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<EngineError> for napi::Error {
    fn from(err: EngineError) -> Self {
        napi::Error::from_reason(err.to_string())
    }
}
