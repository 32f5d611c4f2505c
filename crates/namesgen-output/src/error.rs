//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

use crate::gofmt::FormatError;

/// Errors that can occur while rendering, formatting or writing output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Template failed to register or render.
    #[error("template error: {message}")]
    Template { message: String },

    /// Rendered text is not valid Go.
    #[error("generated source is not valid Go")]
    Format(#[from] FormatError),

    /// Output file or its directory could not be created or opened.
    #[error("failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or syncing the output file failed.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OutputError {
    /// Pipeline stage this error belongs to, used in diagnostics.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Template { .. } => "render",
            Self::Format(_) => "format",
            Self::Open { .. } | Self::Write { .. } => "write",
        }
    }
}

impl From<handlebars::TemplateError> for OutputError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::Template {
            message: err.to_string(),
        }
    }
}

impl From<handlebars::RenderError> for OutputError {
    fn from(err: handlebars::RenderError) -> Self {
        Self::Template {
            message: err.to_string(),
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
