//! Core types for the document understanding pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{Display, EnumString};

/// Coarse document category assigned by the classifier.
///
/// Exactly one label per request; `Generic` is the default when no
/// indicator set matches. Labels serialize to snake_case.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// CV-style document listing skills and experience.
    Resume,
    /// Academic article with abstract and references.
    Research,
    /// Receipt or invoice with purchases and totals.
    Receipt,
    /// Meeting notes, agendas, minutes.
    MeetingNotes,
    /// Structured report with analysis and findings.
    Report,
    /// Catch-all for everything else.
    #[default]
    Generic,
}

/// Deduplicated, lowercase keyword spans. `BTreeSet` keeps the serialized
/// sequence stably sorted.
pub type KeywordSet = BTreeSet<String>;

/// Output of the summarizer: a non-empty summary plus the category it
/// was tailored to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    /// The extractive summary. Never empty.
    pub summary: String,
    /// Category detected for the text.
    pub doc_type: DocumentType,
}

/// Terminal pipeline output, serialized back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResponse {
    /// Extractive summary with category lead-in.
    pub summary: String,
    /// Sorted keyword spans; empty in degraded mode.
    pub keywords: Vec<String>,
    /// Detected document category.
    pub doc_type: DocumentType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_document_type_display() {
        assert_eq!(DocumentType::Resume.to_string(), "resume");
        assert_eq!(DocumentType::Research.to_string(), "research");
        assert_eq!(DocumentType::Receipt.to_string(), "receipt");
        assert_eq!(DocumentType::MeetingNotes.to_string(), "meeting_notes");
        assert_eq!(DocumentType::Report.to_string(), "report");
        assert_eq!(DocumentType::Generic.to_string(), "generic");
    }

    #[test]
    fn test_document_type_from_str() {
        assert_eq!(
            DocumentType::from_str("meeting_notes").unwrap(),
            DocumentType::MeetingNotes
        );
        assert_eq!(DocumentType::from_str("generic").unwrap(), DocumentType::Generic);
        assert!(DocumentType::from_str("unknown").is_err());
    }

    #[test]
    fn test_document_type_default() {
        assert_eq!(DocumentType::default(), DocumentType::Generic);
    }

    #[test]
    fn test_response_serializes_snake_case_label() {
        let response = PipelineResponse {
            summary: "s".to_string(),
            keywords: vec!["a".to_string()],
            doc_type: DocumentType::MeetingNotes,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["doc_type"], "meeting_notes");
        assert_eq!(json["summary"], "s");
        assert_eq!(json["keywords"][0], "a");
    }
}
