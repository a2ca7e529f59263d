//! Directory scanning configuration.

use serde::{Deserialize, Serialize};

fn default_extensions() -> Vec<String> {
    vec!["tsx".to_string(), "jsx".to_string()]
}

const fn default_skip_tests() -> bool {
    true
}

fn default_ignore_file() -> String {
    ".compscanignore".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// File extensions (without the dot) that are analyzed.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Skip test, spec, and story files plus `__tests__` / `__mocks__`.
    #[serde(default = "default_skip_tests")]
    pub skip_tests: bool,

    /// Gitignore-syntax file honored in every scanned directory.
    #[serde(default = "default_ignore_file")]
    pub ignore_file: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            skip_tests: default_skip_tests(),
            ignore_file: default_ignore_file(),
        }
    }
}

impl ScanConfig {
    /// Whether `ext` (without the dot) is scanned. Case-insensitive.
    #[must_use]
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}
