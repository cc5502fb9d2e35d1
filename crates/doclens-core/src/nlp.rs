//! Lexical NLP engine.
//!
//! Approximates the spans a statistical model would report using surface
//! patterns only: noun phrases are runs of adjacent content tokens between
//! stopwords and punctuation, named entities are capitalized multiword
//! spans and acronyms. Good enough for keyword harvesting; not a parser.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use thiserror::Error;

use crate::keywords::{Annotations, NlpEngine};

/// Error building an NLP engine.
#[derive(Error, Debug)]
pub enum NlpError {
    /// A lexical pattern failed to compile.
    #[error("failed to compile lexical pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Function words that terminate a noun-phrase chunk.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "if", "then", "else", "of", "to", "in", "on",
        "at", "by", "for", "with", "from", "as", "is", "are", "was", "were", "be", "been",
        "being", "it", "its", "this", "that", "these", "those", "he", "she", "they", "we",
        "you", "i", "his", "her", "their", "our", "your", "my", "not", "no", "so", "too",
        "very", "can", "will", "just", "do", "does", "did", "has", "have", "had", "about",
        "into", "over", "after", "before", "between", "out", "up", "down", "there", "here",
        "when", "where", "why", "how", "all", "each", "both", "more", "most", "other",
        "some", "such", "than",
    ]
    .into_iter()
    .collect()
});

/// Lexical phrase and entity recognizer.
///
/// Patterns compile at construction, so an engine that cannot load
/// reports the failure once, at startup, and the process continues in
/// degraded mode.
pub struct LexicalEngine {
    token: Regex,
    entity: Regex,
}

impl LexicalEngine {
    /// Longest token run kept as a single noun phrase.
    const MAX_PHRASE_TOKENS: usize = 4;

    /// Build the engine, compiling its patterns.
    pub fn new() -> Result<Self, NlpError> {
        Ok(Self {
            token: Regex::new(r"[A-Za-z0-9][A-Za-z0-9'\-]*")?,
            entity: Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+\b|\b[A-Z]{2,}\b")?,
        })
    }

    /// Runs of adjacent content tokens, broken at stopwords, punctuation,
    /// and line boundaries.
    fn noun_phrases(&self, text: &str) -> Vec<String> {
        fn flush(chunk: &mut Vec<&str>, out: &mut Vec<String>) {
            let has_word = chunk
                .iter()
                .any(|w| w.chars().any(|c| c.is_ascii_alphabetic()));
            if !chunk.is_empty() && has_word {
                out.push(chunk.join(" "));
            }
            chunk.clear();
        }

        let mut phrases = Vec::new();
        let mut chunk: Vec<&str> = Vec::new();
        let mut last_end = 0;

        for token in self.token.find_iter(text) {
            let gap = &text[last_end..token.start()];
            if !chunk.is_empty() && gap.chars().any(|c| c != ' ') {
                flush(&mut chunk, &mut phrases);
            }

            let word = token.as_str();
            if STOPWORDS.contains(word.to_lowercase().as_str()) {
                flush(&mut chunk, &mut phrases);
            } else {
                chunk.push(word);
                if chunk.len() == Self::MAX_PHRASE_TOKENS {
                    flush(&mut chunk, &mut phrases);
                }
            }

            last_end = token.end();
        }

        flush(&mut chunk, &mut phrases);
        phrases
    }

    /// Capitalized multiword spans and acronyms.
    fn entities(&self, text: &str) -> Vec<String> {
        self.entity
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl NlpEngine for LexicalEngine {
    fn annotate(&self, text: &str) -> Annotations {
        Annotations {
            noun_phrases: self.noun_phrases(text),
            entities: self.entities(text),
        }
    }
}
