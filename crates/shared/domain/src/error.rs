//! Domain-level errors.
//!
//! These errors describe a misconfigured deployment snapshot. They are
//! detected once, when a snapshot is checked, and never per access.

use thiserror::Error;

/// Which URL field of the global options an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlField {
    Url,
    Api,
}

impl std::fmt::Display for UrlField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlField::Url => write!(f, "url"),
            UrlField::Api => write!(f, "api"),
        }
    }
}

/// Domain-specific errors for configuration snapshot violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// `url` or `api` is not a valid absolute URL
    #[error("Malformed {field}: '{value}' ({reason})")]
    MalformedUrl {
        field: UrlField,
        value: String,
        reason: String,
    },

    /// `api` is served from a different origin than `url`
    #[error("Origin mismatch: api origin '{api}' differs from url origin '{url}'")]
    OriginMismatch { url: String, api: String },

    /// Deployment name is blank
    #[error("Deployment name must not be empty")]
    EmptyName,

    /// A module record does not match the module's own options shape
    #[error("Options for module '{module}' could not be decoded: {reason}")]
    ModuleDecode { module: String, reason: String },
}

impl DomainError {
    /// Create a malformed URL error
    pub fn malformed_url(
        field: UrlField,
        value: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        DomainError::MalformedUrl {
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a module decode error
    pub fn module_decode(module: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        DomainError::ModuleDecode {
            module: module.into(),
            reason: reason.to_string(),
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::MalformedUrl { .. } => "MALFORMED_URL",
            DomainError::OriginMismatch { .. } => "ORIGIN_MISMATCH",
            DomainError::EmptyName => "EMPTY_NAME",
            DomainError::ModuleDecode { .. } => "MODULE_DECODE",
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
