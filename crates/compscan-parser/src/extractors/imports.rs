//! File-level facts: the leading directive and every import statement.

use ast_grep_core::Node;

use super::helpers::unquote;
use crate::types::{ImportDescriptor, NamedImport};

/// `"use client"` / `"use server"` at the top of the file.
///
/// Only the directive prologue is inspected; scanning stops at the first
/// statement that is neither a comment nor an expression statement.
pub fn detect_directive<D: ast_grep_core::Doc>(root: &Node<D>) -> Option<String> {
    for child in root.children() {
        let kind = child.kind();
        match kind.as_ref() {
            "comment" => {}
            "expression_statement" => {
                let directive = child
                    .children()
                    .filter(|c| c.kind().as_ref() == "string")
                    .map(|c| unquote(&c.text()))
                    .find(|s| s == "use client" || s == "use server");
                if directive.is_some() {
                    return directive;
                }
            }
            _ => break,
        }
    }
    None
}

/// Every top-level `import` statement, in source order.
///
/// Side-effect imports (`import "./styles.css"`) are kept with no bindings.
pub fn collect_imports<D: ast_grep_core::Doc>(root: &Node<D>) -> Vec<ImportDescriptor> {
    root.children()
        .filter(|c| c.kind().as_ref() == "import_statement")
        .filter_map(|stmt| import_descriptor(&stmt))
        .collect()
}

fn import_descriptor<D: ast_grep_core::Doc>(stmt: &Node<D>) -> Option<ImportDescriptor> {
    let source = stmt
        .field("source")
        .or_else(|| stmt.children().find(|c| c.kind().as_ref() == "string"))
        .map(|s| unquote(&s.text()))?;

    let mut import = ImportDescriptor {
        source,
        ..ImportDescriptor::default()
    };

    let Some(clause) = stmt
        .children()
        .find(|c| c.kind().as_ref() == "import_clause")
    else {
        return Some(import);
    };

    for part in clause.children() {
        match part.kind().as_ref() {
            "identifier" => import.default_import = Some(part.text().to_string()),
            "namespace_import" => {
                import.namespace_import = part
                    .children()
                    .filter(|c| c.kind().as_ref() == "identifier")
                    .last()
                    .map(|id| id.text().to_string());
            }
            "named_imports" => {
                import.named.extend(
                    part.children()
                        .filter(|c| c.kind().as_ref() == "import_specifier")
                        .filter_map(|spec| named_import(&spec)),
                );
            }
            _ => {}
        }
    }
    Some(import)
}

fn named_import<D: ast_grep_core::Doc>(spec: &Node<D>) -> Option<NamedImport> {
    let name = spec.field("name").map(|n| unquote(&n.text()))?;
    let alias = spec.field("alias").map(|a| a.text().to_string());
    Some(NamedImport { name, alias })
}
