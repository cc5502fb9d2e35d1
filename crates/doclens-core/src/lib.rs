//! doclens-core - Document understanding pipeline.
//!
//! This crate provides the decision logic of the service: heuristic
//! document-type classification, keyword/entity extraction, category-aware
//! extractive summarization, and the orchestrator that sequences them
//! behind text extraction.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use doclens_core::{DocumentPipeline, KeywordExtractor, LexicalEngine};
//! use doclens_extractors::ExtractionPipeline;
//!
//! let keywords = match LexicalEngine::new() {
//!     Ok(engine) => KeywordExtractor::new(Arc::new(engine)),
//!     Err(_) => KeywordExtractor::disabled(),
//! };
//! let pipeline = DocumentPipeline::new(ExtractionPipeline::with_defaults(), keywords);
//!
//! let response = pipeline.process(&bytes, "application/pdf", 3).await?;
//! println!("{} -> {}", response.doc_type, response.summary);
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod keywords;
pub mod nlp;
pub mod pipeline;
pub mod summarize;
pub mod types;

// Re-export commonly used types
pub use classify::classify;
pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult};
pub use keywords::{Annotations, KeywordExtractor, NlpEngine};
pub use nlp::{LexicalEngine, NlpError};
pub use pipeline::{DocumentPipeline, DEGRADED_SUMMARY};
pub use summarize::{split_sentences, summarize};
pub use types::{DocumentType, KeywordSet, PipelineResponse, SummaryResult};
