use thiserror::Error;

/// Errors the extraction pipeline surfaces to its caller.
///
/// Parse failures are deliberately absent: model output that is not valid JSON
/// (or not one of the recognized shapes) is absorbed into an empty result by
/// the response parser, so the caller only ever sees input and generation
/// failures as actionable errors.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Empty or whitespace-only transcript; rejected before any backend call
    #[error("transcript is empty")]
    EmptyTranscript,

    /// Backend unreachable, backend-side error, or malformed transport response
    #[error("generation request failed: {0}")]
    Generation(String),
}

impl From<reqwest::Error> for ExtractError {
    fn from(e: reqwest::Error) -> Self {
        ExtractError::Generation(e.to_string())
    }
}
