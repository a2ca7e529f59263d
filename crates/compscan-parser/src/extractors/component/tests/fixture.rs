use pretty_assertions::assert_eq;

use super::*;
use crate::types::{FileAnalysis, Wrapper};

const SAMPLE: &str = include_str!("../../../../tests/fixtures/sample.tsx");

fn analyze() -> FileAnalysis {
    crate::analyze_source(SAMPLE, "sample.tsx").expect("sample fixture should parse")
}

// ── File level ─────────────────────────────────────────────────────

#[test]
fn directive_and_imports() {
    let analysis = analyze();
    assert_eq!(analysis.directive.as_deref(), Some("use client"));
    let sources: Vec<_> = analysis.imports.iter().map(|i| i.source.as_str()).collect();
    assert_eq!(
        sources,
        vec!["react", "react-router-dom", "../api/client", "react-hook-form", "./theme"]
    );
}

#[test]
fn text_only_component_is_dropped() {
    let analysis = analyze();
    let names: Vec<_> = analysis.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["UserCard", "TextField", "TodoList", "SearchBox"]);

    let unfiltered = extract_all(SAMPLE);
    let banner = find_by_name(&unfiltered, "Banner");
    assert_eq!(banner.texts, vec!["Welcome back to the dashboard"]);
    assert!(!banner.has_rendered_surface());
}

#[test]
fn primary_is_first_exported() {
    let analysis = analyze();
    assert_eq!(analysis.primary().map(|c| c.name.as_str()), Some("UserCard"));
}

// ── UserCard ───────────────────────────────────────────────────────

#[test]
fn user_card_identity() {
    let analysis = analyze();
    let card = find_by_name(&analysis.components, "UserCard");
    assert_eq!(card.wrapper, Wrapper::None);
    assert!(card.is_exported);
    assert!(!card.is_default);
    assert_eq!(card.props_type.as_deref(), Some("UserCardProps"));
    assert_eq!((card.start_line, card.end_line), (28, 69));
}

#[test]
fn user_card_props_include_inherited_members() {
    let analysis = analyze();
    let card = find_by_name(&analysis.components, "UserCard");
    let names: Vec<_> = card.props.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["userId", "title", "isCompact", "onSelect", "className", "testId"]
    );

    let compact = card.prop("isCompact").expect("isCompact");
    assert_eq!(compact.prop_type, "boolean");
    assert_eq!(compact.default_value.as_deref(), Some("false"));
    assert!(!compact.required);

    let on_select = card.prop("onSelect").expect("onSelect");
    assert_eq!(on_select.prop_type, "(id: string) => void");
    assert!(on_select.is_callback);
    assert!(on_select.required);
}

#[test]
fn user_card_behaviour() {
    let analysis = analyze();
    let card = find_by_name(&analysis.components, "UserCard");

    let state: Vec<_> = card.state.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(state, vec!["user", "isLoading", "error"]);
    assert!(card.has_loading_state);
    assert!(card.has_error_state);
    assert!(card.uses_router);
    assert!(!card.uses_form);
    assert_eq!(card.contexts, vec!["ThemeContext"]);
    assert!(card.custom_hooks.is_empty());
    assert_eq!(card.api_calls, vec!["api.get", "fetch"]);

    assert_eq!(card.effects.len(), 1);
    assert_eq!(card.effects[0].deps, vec!["userId"]);

    let handlers: Vec<_> = card
        .handlers
        .iter()
        .map(|h| (h.name.as_str(), h.is_async))
        .collect();
    assert_eq!(handlers, vec![("handleSelect", false), ("handleRefresh", true)]);
}

#[test]
fn user_card_markup() {
    let analysis = analyze();
    let card = find_by_name(&analysis.components, "UserCard");

    let buttons: Vec<_> = card.buttons.iter().map(|b| b.text.as_deref()).collect();
    assert_eq!(buttons, vec![Some("Select"), Some("Refresh"), Some("Back")]);
    assert_eq!(card.buttons[0].aria_label.as_deref(), Some("Select user"));
    assert_eq!(card.buttons[1].disabled.as_deref(), Some("isLoading"));

    assert_eq!(card.links.len(), 1);
    assert_eq!(card.links[0].text.as_deref(), Some("Open profile"));
    assert_eq!(card.links[0].href.as_deref(), Some("`/users/${userId}`"));

    assert_eq!(card.images[0].alt.as_deref(), Some("User avatar"));

    let conditions: Vec<_> = card
        .conditionals
        .iter()
        .map(|c| (c.condition.as_str(), c.has_true_branch, c.has_false_branch))
        .collect();
    assert_eq!(conditions, vec![("error", true, false), ("isCompact", true, true)]);

    assert!(card.texts.contains(&"Loading user".to_string()));
    assert!(card.texts.contains(&"Full profile for this user".to_string()));
}

// ── Wrapped components ─────────────────────────────────────────────

#[test]
fn text_field_forward_ref_uses_generic_props() {
    let analysis = analyze();
    let field = find_by_name(&analysis.components, "TextField");
    assert_eq!(field.wrapper, Wrapper::ForwardRef);
    assert_eq!(field.props_type.as_deref(), Some("FieldProps"));

    let names: Vec<_> = field.props.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["label", "placeholder"]);

    assert_eq!(field.inputs.len(), 1);
    assert_eq!(field.inputs[0].name.as_deref(), Some("field"));
    assert_eq!(field.inputs[0].label.as_deref(), Some("props.label"));
    assert!(field.inputs[0].required);
}

#[test]
fn todo_list_memo_renders_list() {
    let analysis = analyze();
    let list = find_by_name(&analysis.components, "TodoList");
    assert_eq!(list.wrapper, Wrapper::Memo);
    assert!(list.is_exported);
    assert!(!list.is_default);
    assert_eq!(list.lists, vec!["items"]);
    assert_eq!(list.refs, vec!["listRef"]);
    assert_eq!(list.inputs[0].input_type.as_deref(), Some("checkbox"));
}

#[test]
fn search_box_memo_forward_ref_is_default() {
    let analysis = analyze();
    let search = find_by_name(&analysis.components, "SearchBox");
    assert_eq!(search.wrapper, Wrapper::MemoForwardRef);
    assert!(search.is_default);
    assert!(search.uses_form);
    assert_eq!(search.forms[0].on_submit.as_deref(), Some("handleSubmit(onSearch)"));

    let types: Vec<_> = search
        .inputs
        .iter()
        .map(|i| i.input_type.as_deref())
        .collect();
    assert_eq!(types, vec![Some("search"), Some("select")]);
    assert!(search.prop("onSearch").is_some_and(|p| p.is_callback));
}

// ── Determinism ────────────────────────────────────────────────────

#[test]
fn repeated_runs_serialize_identically() {
    let first = serde_json::to_string(&analyze()).expect("serialize first run");
    let second = serde_json::to_string(&analyze()).expect("serialize second run");
    assert_eq!(first, second);
}
