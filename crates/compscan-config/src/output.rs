//! Output configuration for `compscan scan` and `compscan inspect`.

use serde::{Deserialize, Serialize};

const fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Attach each file's source text to its JSONL records.
    #[serde(default)]
    pub include_source: bool,

    /// Indent `--format json` output. JSONL records are always one line.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_source: false,
            pretty: default_pretty(),
        }
    }
}
