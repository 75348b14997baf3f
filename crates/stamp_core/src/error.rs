//! Error types for the core module.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while registering templates or building results.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Template not registered: {0}")]
    TemplateNotRegistered(String),

    #[error("Malformed request data: {0}")]
    MalformedRequest(String),

    #[error("Render engine failure: {0}")]
    Engine(#[source] anyhow::Error),

    #[error("Unknown result format tag: {0}")]
    UnknownResultFormat(String),

    #[error("Template error: {0}")]
    Template(#[from] stamp_templates::TemplateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
