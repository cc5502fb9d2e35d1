//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Tunable pipeline defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Sentences kept in the summary lead window when the caller does not
    /// say otherwise.
    pub default_max_sentences: i64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_max_sentences: 3,
        }
    }
}
