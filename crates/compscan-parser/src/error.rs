//! Parser error types for compscan-parser.

/// Errors that can occur before extraction starts.
///
/// Once a tree is accepted, extraction itself never fails: constructs that
/// are not recognized are skipped.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {language}: {message}")]
    ParseFailed { language: String, message: String },

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),
}
