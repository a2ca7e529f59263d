use ast_grep_language::{LanguageExt, SupportLang};

use super::*;
use crate::extractors::locator::locate_components;
use crate::types::ComponentMetadata;

mod fixture;
mod hooks;

/// Every located component, before the rendered-surface filter.
fn extract_all(source: &str) -> Vec<ComponentMetadata> {
    extract_all_with(source, &ExtractOptions::default())
}

fn extract_all_with(source: &str, options: &ExtractOptions) -> Vec<ComponentMetadata> {
    let root = SupportLang::Tsx.ast_grep(source);
    let node = root.root();
    let index = TypeIndex::build(&node);
    locate_components(&node)
        .iter()
        .map(|candidate| extract_component(candidate, &index, options))
        .collect()
}

fn extract_one(source: &str) -> ComponentMetadata {
    let mut all = extract_all(source);
    assert_eq!(all.len(), 1, "expected exactly one component");
    all.remove(0)
}

fn find_by_name<'a>(components: &'a [ComponentMetadata], name: &str) -> &'a ComponentMetadata {
    components.iter().find(|c| c.name == name).unwrap_or_else(|| {
        let names: Vec<_> = components.iter().map(|c| c.name.as_str()).collect();
        panic!("should find component named '{name}', available: {names:?}")
    })
}
