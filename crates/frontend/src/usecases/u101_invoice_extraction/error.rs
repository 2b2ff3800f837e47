use thiserror::Error;

/// Why an extraction call failed.
///
/// Only written to the console; the page shows one fixed message for all of them.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to build request: {0}")]
    Request(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("extraction service returned HTTP {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
