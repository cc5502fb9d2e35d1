//! Category-aware extractive summarization.
//!
//! The summary is a lead window of verbatim sentences prefixed with a
//! lead-in for the detected category. Sentence splitting is heuristic:
//! terminal punctuation followed by whitespace. It will mis-split on
//! abbreviations and decimal numbers; that limitation is accepted.

use crate::classify::classify;
use crate::types::{DocumentType, SummaryResult};

/// Summary returned for empty input text.
pub const EMPTY_TEXT_SUMMARY: &str = "No text to summarize.";

/// Characters of raw text kept when the splitter finds no sentences.
pub const FALLBACK_TRUNCATION_CHARS: usize = 300;

/// Category lead-in prefixed to every summary.
fn preamble(doc_type: DocumentType) -> &'static str {
    match doc_type {
        DocumentType::Resume => "This appears to be a resume highlighting experience and skills.",
        DocumentType::Research => {
            "This looks like a research article summarizing study and findings."
        }
        DocumentType::Receipt => "This is a receipt or invoice showing purchases and totals.",
        DocumentType::MeetingNotes => {
            "These are meeting notes summarizing discussions and decisions."
        }
        DocumentType::Report => {
            "This appears to be a structured report with analysis and conclusions."
        }
        DocumentType::Generic => "This is a general document summarized below.",
    }
}

/// Split text into sentences at terminal punctuation (`.`, `!`, `?`)
/// followed by whitespace.
///
/// Text carrying no terminal punctuation at all yields no sentences, which
/// sends the summarizer down its truncation fallback.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.contains(['.', '!', '?']) {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev_terminal = false;
    let mut chars = trimmed.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if prev_terminal && c.is_whitespace() {
            sentences.push(&trimmed[start..i]);

            // Swallow the whole whitespace run.
            let mut next_start = i + c.len_utf8();
            while let Some(&(j, d)) = chars.peek() {
                if !d.is_whitespace() {
                    break;
                }
                chars.next();
                next_start = j + d.len_utf8();
            }

            start = next_start;
            prev_terminal = false;
            continue;
        }

        prev_terminal = matches!(c, '.' | '!' | '?');
    }

    if start < trimmed.len() {
        sentences.push(&trimmed[start..]);
    }

    sentences
}

/// Produce a category-tailored extractive summary of `text`.
///
/// Empty text yields a fixed placeholder with no classification. Text the
/// splitter cannot sentence-split is truncated to
/// [`FALLBACK_TRUNCATION_CHARS`] characters. Otherwise the first
/// `max_sentences` sentences (clamped to what the text has) are joined
/// with single spaces under the category lead-in.
pub fn summarize(text: &str, max_sentences: i64) -> SummaryResult {
    if text.trim().is_empty() {
        return SummaryResult {
            summary: EMPTY_TEXT_SUMMARY.to_string(),
            doc_type: DocumentType::Generic,
        };
    }

    let doc_type = classify(text);
    let sentences = split_sentences(text);

    if sentences.is_empty() {
        let truncated: String = text.chars().take(FALLBACK_TRUNCATION_CHARS).collect();
        return SummaryResult {
            summary: format!("{truncated}..."),
            doc_type,
        };
    }

    let take = max_sentences.clamp(0, sentences.len() as i64) as usize;
    let chosen = sentences[..take].join(" ");

    SummaryResult {
        summary: format!("{}\n\n{}", preamble(doc_type), chosen),
        doc_type,
    }
}
