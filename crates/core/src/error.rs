//! Error types for rendering the guide artifacts.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or packaging the guide.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the source file or write an output file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A document block cannot be represented in the output format.
    #[error("Invalid document content: {0}")]
    InvalidContent(String),

    /// ZIP archive error while assembling a package.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML writing error while serializing a package part.
    #[error("XML error: {0}")]
    XmlError(String),
}
