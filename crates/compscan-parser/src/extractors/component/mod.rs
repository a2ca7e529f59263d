//! Per-component extraction.
//!
//! One [`Extractor`] owns the [`ComponentMetadata`] being built and is
//! threaded by `&mut` through a single walk of the component's function:
//!
//! 1. **Props**: destructured first parameter, merged with the declared
//!    props type from the [`TypeIndex`] (or an inline object annotation).
//! 2. **Handlers**: `handle*` / `on*` functions bound directly in the body.
//! 3. **Body walk**: every node is visited once. Hook calls, network calls,
//!    list rendering, markup elements, text, and conditional rendering are
//!    recognized independently of each other.
//!
//! Constructs that match no rule contribute nothing.

mod hooks;
mod markup;
mod props;

use ast_grep_core::Node;

use super::helpers::{end_line, start_line};
use super::locator::ComponentCandidate;
use super::type_index::TypeIndex;
use crate::types::ComponentMetadata;

/// Length thresholds applied while harvesting markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Conditions longer than this (in characters) are not recorded.
    pub max_condition_len: usize,
    pub min_text_len: usize,
    pub max_text_len: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_condition_len: 100,
            min_text_len: 2,
            max_text_len: 100,
        }
    }
}

/// Accumulator for one component.
struct Extractor<'o> {
    options: &'o ExtractOptions,
    meta: ComponentMetadata,
}

/// Build the metadata record for one located component.
///
/// The record is returned unfiltered; dropping components without a
/// rendered surface is the caller's decision.
pub fn extract_component<D: ast_grep_core::Doc>(
    candidate: &ComponentCandidate<'_, D>,
    index: &TypeIndex,
    options: &ExtractOptions,
) -> ComponentMetadata {
    let mut meta = ComponentMetadata::new(candidate.name.clone(), candidate.shape.wrapper());
    meta.is_exported = candidate.is_exported;
    meta.is_default = candidate.is_default;
    meta.props_type.clone_from(&candidate.props_type);
    meta.start_line = start_line(&candidate.anchor);
    meta.end_line = end_line(&candidate.anchor);

    let mut extractor = Extractor { options, meta };
    let function = candidate.shape.function();

    extractor.collect_props(
        function,
        index,
        candidate.props_type.as_deref(),
        candidate.inline_props.as_ref(),
    );
    if let Some(body) = function.field("body") {
        extractor.collect_handlers(&body);
        extractor.walk(&body);
    }
    extractor.finish()
}

impl Extractor<'_> {
    fn walk<D: ast_grep_core::Doc>(&mut self, node: &Node<D>) {
        match node.kind().as_ref() {
            "call_expression" => self.visit_call(node),
            "variable_declarator" => self.visit_declarator(node),
            "jsx_element" => {
                if let Some(opening) = node
                    .children()
                    .find(|c| c.kind().as_ref() == "jsx_opening_element")
                {
                    self.visit_element(&opening, Some(node));
                }
            }
            "jsx_self_closing_element" => self.visit_element(node, None),
            "jsx_text" => self.visit_text(node),
            "ternary_expression" => self.visit_ternary(node),
            "binary_expression" => self.visit_guard(node),
            _ => {}
        }

        for child in node.children() {
            self.walk(&child);
        }
    }

    fn finish(mut self) -> ComponentMetadata {
        self.meta.has_loading_state = self
            .meta
            .state
            .iter()
            .any(|s| super::patterns::is_loading_state(&s.name));
        self.meta.has_error_state = self
            .meta
            .state
            .iter()
            .any(|s| super::patterns::is_error_state(&s.name));
        self.meta
    }
}

#[cfg(test)]
mod tests;
