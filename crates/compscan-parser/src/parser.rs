//! ast-grep wrapper, grammar selection from file extensions, and tree
//! validation.

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

use crate::error::ParserError;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Detect the grammar to use from a file path extension.
///
/// The JavaScript grammar understands JSX, so `.jsx` files share it with
/// plain `.js`. Returns `None` for anything that cannot hold a component.
#[must_use]
pub fn detect_language(file_path: &str) -> Option<SupportLang> {
    let ext = file_path.rsplit('.').next()?;
    match ext {
        "tsx" => Some(SupportLang::Tsx),
        "jsx" | "js" | "mjs" | "cjs" => Some(SupportLang::JavaScript),
        "ts" | "mts" | "cts" => Some(SupportLang::TypeScript),
        _ => None,
    }
}

/// Parse source code into an ast-grep tree for the given language.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang) -> AstTree {
    use ast_grep_language::LanguageExt;
    lang.ast_grep(source)
}

/// Pick a grammar for `file_path`, parse `source`, and reject unusable trees.
///
/// # Errors
///
/// Returns [`ParserError::UnsupportedLanguage`] for unknown extensions and
/// [`ParserError::ParseFailed`] when nothing in the file parsed.
pub fn parse_file_source(source: &str, file_path: &str) -> Result<AstTree, ParserError> {
    let lang = detect_language(file_path)
        .ok_or_else(|| ParserError::UnsupportedLanguage(file_path.to_string()))?;
    let tree = parse_source(source, lang);
    validate_tree(&tree, source, lang)?;
    Ok(tree)
}

/// A tree is unusable when a non-blank file produced no top-level
/// statements, or only `ERROR` nodes at the top level. Local syntax errors
/// further down are tolerated.
fn validate_tree(tree: &AstTree, source: &str, lang: SupportLang) -> Result<(), ParserError> {
    if source.trim().is_empty() {
        return Ok(());
    }

    let root = tree.root();
    let mut statements = 0usize;
    let mut errors = 0usize;
    for child in root.children() {
        match child.kind().as_ref() {
            "comment" => {}
            "ERROR" => {
                statements += 1;
                errors += 1;
            }
            _ => statements += 1,
        }
    }

    if root.kind().as_ref() == "ERROR" || (statements > 0 && errors == statements) {
        return Err(ParserError::ParseFailed {
            language: format!("{lang:?}").to_lowercase(),
            message: "no top-level statement could be parsed".to_string(),
        });
    }
    Ok(())
}
