//! Error types for resume generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a generation run.
///
/// There is no recovery layer: the first error stops the batch, and outputs
/// already written by earlier templates stay on disk.
#[derive(Debug, Error)]
pub enum Error {
    /// The structured data file could not be read.
    #[error("data file not found: {path}")]
    DataFileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The data file was read but does not parse as a mapping.
    #[error("failed to parse {path}: {message}")]
    DataParse { path: PathBuf, message: String },

    /// No template with the requested name exists.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// The template failed to render: a syntax error, or a reference to a
    /// field the data record does not define.
    #[error("template rendering failed: {0}")]
    TemplateRender(#[source] minijinja::Error),

    /// The output file or one of its parent directories could not be
    /// created or written.
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::TemplateNotFound => Error::TemplateNotFound(err.to_string()),
            _ => Error::TemplateRender(err),
        }
    }
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;
