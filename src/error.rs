use thiserror::Error;

use crate::backend::BackendError;
use crate::schemas::ValidationError;

/// Application-level error taxonomy.
///
/// Validation failures are raised locally before any remote call; backend
/// failures are propagated verbatim with no retry or backoff. Every error is
/// scoped to the single operation that produced it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Credenciales inválidas")]
    InvalidCredentials,

    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Session store error: {0}")]
    SessionStore(String),
}
