//! Pipeline error types.

use doclens_extractors::ExtractError;
use thiserror::Error;

/// Errors surfaced by the document pipeline.
///
/// Only text extraction can fail a request; every stage after it degrades
/// into a generic success response instead of erroring.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Text extraction rejected or failed on the upload.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_passes_through() {
        let err = PipelineError::from(ExtractError::UnsupportedType("text/plain".to_string()));
        assert_eq!(err.to_string(), "Unsupported file type: text/plain");
    }
}
