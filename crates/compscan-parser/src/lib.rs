//! # compscan-parser
//!
//! ast-grep-based metadata extraction for React function components.
//!
//! For each TSX/JSX file the pipeline runs, in order:
//! - **Tree provider**: grammar selection from the extension and rejection
//!   of unusable trees ([`parse_file_source`])
//! - **Type-alias index**: local interfaces and object type aliases,
//!   flattened into prop descriptors ([`TypeIndex`])
//! - **Imports and directive**: file-level facts
//! - **Locator**: module-scope components in four declaration shapes
//!   ([`locate_components`])
//! - **Extractor**: one walk per component filling a [`ComponentMetadata`]
//!
//! Components that render nothing interactive are dropped from the result.

pub mod error;
pub mod extractors;
pub mod parser;
pub mod types;

pub use error::ParserError;
pub use extractors::component::{ExtractOptions, extract_component};
pub use extractors::locator::{
    ComponentCandidate, ComponentShape, classify_initializer, locate_components,
};
pub use extractors::type_index::TypeIndex;
pub use parser::{AstTree, detect_language, parse_file_source, parse_source};
pub use types::*;

/// Analyze one file's source with default thresholds.
///
/// # Errors
///
/// Returns [`ParserError`] when the extension has no grammar or the tree is
/// unusable.
pub fn analyze_source(source: &str, file_path: &str) -> Result<FileAnalysis, ParserError> {
    analyze_source_with(source, file_path, &ExtractOptions::default())
}

/// Analyze one file's source with explicit thresholds.
///
/// # Errors
///
/// Returns [`ParserError`] when the extension has no grammar or the tree is
/// unusable.
pub fn analyze_source_with(
    source: &str,
    file_path: &str,
    options: &ExtractOptions,
) -> Result<FileAnalysis, ParserError> {
    let tree = parse_file_source(source, file_path)?;
    let analysis = analyze_tree(&tree, options);
    tracing::debug!(
        file = file_path,
        components = analysis.components.len(),
        "analyzed file"
    );
    Ok(analysis)
}

/// Run the extraction pipeline over an already parsed tree.
#[must_use]
pub fn analyze_tree(tree: &AstTree, options: &ExtractOptions) -> FileAnalysis {
    let root = tree.root();
    let index = TypeIndex::build(&root);

    let components = locate_components(&root)
        .iter()
        .map(|candidate| extract_component(candidate, &index, options))
        .filter(|meta| {
            let keep = meta.has_rendered_surface();
            if !keep {
                tracing::debug!(component = %meta.name, "dropping component without rendered surface");
            }
            keep
        })
        .collect();

    FileAnalysis {
        directive: extractors::imports::detect_directive(&root),
        imports: extractors::imports::collect_imports(&root),
        components,
    }
}
