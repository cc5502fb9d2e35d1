//! Heuristic document-type classification.
//!
//! A document is labeled by scanning its text for category-indicative
//! terms. Rules are evaluated in a fixed priority order and the first
//! match wins, so a document carrying both resume and receipt terms
//! classifies as a resume.

use crate::types::DocumentType;

/// Ordered classification rules. Order is the tie-break: earlier rules
/// shadow later ones.
const RULES: &[(DocumentType, &[&str])] = &[
    (DocumentType::Resume, &["resume", "skills", "experience"]),
    (DocumentType::Research, &["abstract", "journal", "doi", "references"]),
    (DocumentType::Receipt, &["invoice", "receipt", "total", "payment"]),
    (DocumentType::MeetingNotes, &["meeting", "agenda", "minutes"]),
    (DocumentType::Report, &["report", "analysis", "findings"]),
];

/// Assign one category label to the text.
///
/// Total and deterministic: identical input always yields the same label,
/// and text matching no indicator set yields [`DocumentType::Generic`].
pub fn classify(text: &str) -> DocumentType {
    let lowered = text.to_lowercase();

    for (doc_type, indicators) in RULES {
        if indicators.iter().any(|term| lowered.contains(term)) {
            return *doc_type;
        }
    }

    DocumentType::Generic
}
