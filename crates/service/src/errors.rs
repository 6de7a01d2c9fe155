use thiserror::Error;

/// Failures of the file-backed storage helpers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("corrupt data in {path}: {reason}")]
    Corrupt { path: String, reason: String },
}

impl ServiceError {
    pub fn storage(e: impl std::fmt::Display) -> Self { Self::Storage(e.to_string()) }
}
