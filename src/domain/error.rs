use std::io;

use thiserror::Error;

/// Library-wide error type for dapgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Transport-level failure talking to Data Designer.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Data Designer answered with a non-success status.
    #[error("Data Designer API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The service was reachable but generated nothing usable.
    #[error("{0}")]
    Generation(String),

    /// The generated record could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Failure while turning a generated record into a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A required field is absent (or null) in the generated record.
    #[error("Generated record is missing required field '{0}'")]
    MissingField(String),

    /// A required field holds something other than text.
    #[error("Generated field '{field}' is {kind}, expected a string")]
    NonTextField { field: String, kind: &'static str },

    /// The document template itself failed.
    #[error("Failed to render principle document: {0}")]
    Template(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
