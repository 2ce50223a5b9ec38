//! Error types for slide deck generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or saving a slide deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open, read or write a file.
    #[error("Failed to access file: {0}")]
    IoError(#[from] std::io::Error),

    /// An image could not be read or its format was not recognized.
    #[error("Image error: {0}")]
    ImageError(String),

    /// The requested layout does not exist in the deck's catalog.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// No slide with the given identifier exists.
    #[error("Unknown slide: {0}")]
    UnknownSlide(usize),

    /// No shape with the given identifier exists on the slide.
    #[error("Unknown shape: {0}")]
    UnknownShape(u32),

    /// The shape does not support the requested operation.
    #[error("Unsupported shape operation: {0}")]
    UnsupportedOperation(String),

    /// ZIP archive error (for PPTX).
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML writing error (for PPTX).
    #[error("XML error: {0}")]
    XmlError(String),

    /// A style configuration file could not be understood.
    #[error("Invalid style configuration: {0}")]
    StyleConfig(String),
}
