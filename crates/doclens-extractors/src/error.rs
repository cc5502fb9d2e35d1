//! Extraction error types.

use thiserror::Error;

/// Errors that can occur during text extraction.
///
/// Messages are sanitized for client consumption; the underlying decoder
/// errors are logged at the extraction site and never carried here.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Declared content type is not handled by any extractor.
    /// Carries the rejected content type verbatim for diagnostics.
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    /// PDF parsing produced no text.
    #[cfg(feature = "pdf")]
    #[error("Failed to extract text from PDF")]
    Pdf,

    /// Image decoding or OCR produced no text.
    #[cfg(feature = "image")]
    #[error("Failed to extract text from image")]
    Image,
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
