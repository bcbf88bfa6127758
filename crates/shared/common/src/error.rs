//! Unified error handling for the options provider and its tooling.
//!
//! Consumers of the provider never see these errors: they are raised once,
//! at startup or while checking a deployment manifest.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Snapshot violations
    #[error("Invalid options: {0}")]
    Options(#[from] DomainError),

    // Lifecycle
    #[error("Options provider is already initialized")]
    AlreadyInitialized,

    // Manifest loading
    #[error("Invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Output
    #[error("Could not render options: {0}")]
    Render(serde_json::Error),
}

impl AppError {
    /// Get error code for operators
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Options(e) => e.code(),
            AppError::AlreadyInitialized => "ALREADY_INITIALIZED",
            AppError::Manifest(_) => "INVALID_MANIFEST",
            AppError::Io(_) => "IO_ERROR",
            AppError::Render(_) => "RENDER_ERROR",
        }
    }

    pub fn render(err: serde_json::Error) -> Self {
        AppError::Render(err)
    }

    /// The underlying domain error, if this is a snapshot violation
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Options(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
