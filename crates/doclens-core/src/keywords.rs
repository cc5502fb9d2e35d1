//! Keyword and entity extraction.
//!
//! Delegates span recognition to an [`NlpEngine`] collaborator and folds
//! the reported spans into a lowercase, deduplicated set. Engine
//! availability is an explicit value decided once at startup: a pipeline
//! built without an engine runs in degraded mode and returns empty sets
//! instead of failing.

use std::sync::Arc;

use crate::types::KeywordSet;

/// Spans an NLP engine reports over one text.
#[derive(Debug, Clone, Default)]
pub struct Annotations {
    /// Noun-phrase surface texts, in document order.
    pub noun_phrases: Vec<String>,
    /// Named-entity surface texts, in document order.
    pub entities: Vec<String>,
}

/// Phrase and entity recognition over plain text.
///
/// Implementations must be read-only after construction; one handle is
/// shared by every in-flight request.
pub trait NlpEngine: Send + Sync {
    /// Report noun-phrase and named-entity spans found in `text`.
    fn annotate(&self, text: &str) -> Annotations;
}

/// Keyword extractor with explicit engine availability.
#[derive(Clone)]
pub struct KeywordExtractor {
    engine: Option<Arc<dyn NlpEngine>>,
}

impl KeywordExtractor {
    /// Extractor backed by an engine.
    pub fn new(engine: Arc<dyn NlpEngine>) -> Self {
        Self {
            engine: Some(engine),
        }
    }

    /// Degraded-mode extractor: every extraction returns an empty set.
    pub fn disabled() -> Self {
        Self { engine: None }
    }

    /// Build from an optional engine handle, as produced at startup.
    pub fn from_engine(engine: Option<Arc<dyn NlpEngine>>) -> Self {
        Self { engine }
    }

    /// Whether an engine is attached.
    pub fn is_available(&self) -> bool {
        self.engine.is_some()
    }

    /// Lowercase, deduplicated keyword spans for `text`.
    ///
    /// Returns an empty set immediately when no engine is attached or the
    /// text is empty; neither is an error.
    pub fn extract(&self, text: &str) -> KeywordSet {
        let mut keywords = KeywordSet::new();

        let Some(engine) = &self.engine else {
            return keywords;
        };
        if text.is_empty() {
            return keywords;
        }

        let annotations = engine.annotate(text);
        for span in annotations
            .noun_phrases
            .into_iter()
            .chain(annotations.entities)
        {
            keywords.insert(span.to_lowercase());
        }

        keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedEngine {
        annotations: Annotations,
    }

    impl NlpEngine for FixedEngine {
        fn annotate(&self, _text: &str) -> Annotations {
            self.annotations.clone()
        }
    }

    fn engine_with(noun_phrases: &[&str], entities: &[&str]) -> Arc<dyn NlpEngine> {
        Arc::new(FixedEngine {
            annotations: Annotations {
                noun_phrases: noun_phrases.iter().map(|s| s.to_string()).collect(),
                entities: entities.iter().map(|s| s.to_string()).collect(),
            },
        })
    }

    #[test]
    fn test_disabled_extractor_returns_empty_set() {
        let extractor = KeywordExtractor::disabled();
        assert!(!extractor.is_available());
        assert!(extractor.extract("Plenty of text here.").is_empty());
    }

    #[test]
    fn test_empty_text_returns_empty_set_even_with_engine() {
        let extractor = KeywordExtractor::new(engine_with(&["something"], &[]));
        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn test_spans_are_lowercased_and_deduplicated() {
        let extractor =
            KeywordExtractor::new(engine_with(&["Machine Learning", "SQL"], &["machine learning"]));

        let keywords = extractor.extract("whatever");
        let collected: Vec<&str> = keywords.iter().map(String::as_str).collect();
        assert_eq!(collected, vec!["machine learning", "sql"]);
    }

    #[test]
    fn test_noun_phrases_and_entities_both_collected() {
        let extractor = KeywordExtractor::new(engine_with(&["skills"], &["John Doe"]));

        let keywords = extractor.extract("whatever");
        assert!(keywords.contains("skills"));
        assert!(keywords.contains("john doe"));
        assert_eq!(keywords.len(), 2);
    }

    #[test]
    fn test_from_engine_none_is_degraded() {
        let extractor = KeywordExtractor::from_engine(None);
        assert!(!extractor.is_available());
    }
}
