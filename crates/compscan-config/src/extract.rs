//! Extraction thresholds.

use serde::{Deserialize, Serialize};

const fn default_max_condition_len() -> usize {
    100
}

const fn default_min_text_len() -> usize {
    2
}

const fn default_max_text_len() -> usize {
    100
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractConfig {
    /// Conditional-rendering conditions longer than this are dropped.
    #[serde(default = "default_max_condition_len")]
    pub max_condition_len: usize,

    #[serde(default = "default_min_text_len")]
    pub min_text_len: usize,

    #[serde(default = "default_max_text_len")]
    pub max_text_len: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_condition_len: default_max_condition_len(),
            min_text_len: default_min_text_len(),
            max_text_len: default_max_text_len(),
        }
    }
}
