//! Core types for text extraction.

use serde::{Deserialize, Serialize};

/// Modality of the original upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// Paginated PDF document.
    Pdf,
    /// Raster image with sniffed format.
    Image {
        /// Image format (e.g., "png", "jpeg").
        format: String,
    },
}

/// Text extracted from an upload, with the modality it came from.
///
/// The text is trimmed of leading and trailing whitespace by the extractor
/// that produced it and is immutable from then on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedContent {
    /// Extracted text, possibly empty.
    pub text: String,

    /// Original content modality.
    pub modality: Modality,
}

impl ExtractedContent {
    /// Create new extracted content.
    pub fn new(text: String, modality: Modality) -> Self {
        Self { text, modality }
    }

    /// Check if extraction produced meaningful content.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Get content length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_emptiness() {
        let content = ExtractedContent::new("  ".to_string(), Modality::Pdf);
        assert!(content.is_empty());

        let content = ExtractedContent::new("hello".to_string(), Modality::Pdf);
        assert!(!content.is_empty());
        assert_eq!(content.len(), 5);
    }

    #[test]
    fn test_modality_serializes_lowercase() {
        let json = serde_json::to_string(&Modality::Pdf).unwrap();
        assert_eq!(json, "\"pdf\"");
    }
}
