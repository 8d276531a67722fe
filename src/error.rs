//! Error types for mdxml operations.

use thiserror::Error;

/// Errors that can occur during Markdown parsing or XML output.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid section: {0}")]
    InvalidSection(String),

    #[error("No sections to write to XML")]
    EmptySectionSet,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
