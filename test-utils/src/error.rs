use thiserror::Error;

/// Errors raised while preparing a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Temporary directory or document file could not be created.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Document could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
