use thiserror::Error;

/// Errors surfaced by the remote backend boundary.
///
/// `RowNotFound` and `MultipleRows` only apply to the single-row result
/// shapes; lookups that may legitimately be absent use `maybe_single` and
/// return `Ok(None)` instead of an error.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP transport error: {0}")]
    Http(String),

    #[error("{message}")]
    Api {
        message: String,
        code: Option<String>,
    },

    #[error("Record not found")]
    RowNotFound,

    #[error("Expected a single row, got {0}")]
    MultipleRows(usize),

    #[error("Failed to decode backend response: {0}")]
    Decode(String),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl BackendError {
    pub fn api(message: impl Into<String>, code: Option<String>) -> Self {
        BackendError::Api {
            message: message.into(),
            code,
        }
    }
}
