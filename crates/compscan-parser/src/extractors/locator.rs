//! Component locator.
//!
//! Recognizes the four declaration shapes of a function component bound at
//! module scope:
//!
//! ```text
//! const Card = (props) => …                      Plain
//! const Card = memo((props) => …)                Memoized
//! const Input = forwardRef((props, ref) => …)    RefForwarding
//! const Input = memo(forwardRef((p, ref) => …))  MemoizedRefForwarding
//! ```
//!
//! An uppercase `function` declaration is `Plain`. Export and default-export
//! status is resolved against every export form in the file.

use std::collections::HashSet;

use ast_grep_core::Node;

use super::helpers::{
    call_arguments, callee_text, first_parameter, is_function_value, last_generic_argument,
    type_annotation_text,
};
use super::patterns::{FORWARD_REF_MARKERS, MEMO_MARKERS, is_component_name};
use crate::types::Wrapper;

/// How a component's function value is wrapped. Each variant holds the
/// innermost function node.
#[derive(Clone)]
pub enum ComponentShape<'r, D: ast_grep_core::Doc> {
    Plain(Node<'r, D>),
    Memoized(Node<'r, D>),
    RefForwarding(Node<'r, D>),
    MemoizedRefForwarding(Node<'r, D>),
}

impl<'r, D: ast_grep_core::Doc> ComponentShape<'r, D> {
    #[must_use]
    pub const fn wrapper(&self) -> Wrapper {
        match self {
            Self::Plain(_) => Wrapper::None,
            Self::Memoized(_) => Wrapper::Memo,
            Self::RefForwarding(_) => Wrapper::ForwardRef,
            Self::MemoizedRefForwarding(_) => Wrapper::MemoForwardRef,
        }
    }

    /// The function whose parameters and body describe the component.
    #[must_use]
    pub const fn function(&self) -> &Node<'r, D> {
        match self {
            Self::Plain(f)
            | Self::Memoized(f)
            | Self::RefForwarding(f)
            | Self::MemoizedRefForwarding(f) => f,
        }
    }
}

/// A confirmed component definition, ready for extraction.
pub struct ComponentCandidate<'r, D: ast_grep_core::Doc> {
    pub name: String,
    pub shape: ComponentShape<'r, D>,
    /// Outermost statement of the declaration; its span is the component's.
    pub anchor: Node<'r, D>,
    pub is_exported: bool,
    pub is_default: bool,
    pub props_type: Option<String>,
    /// Object type literal passed as a generic argument (`FC<{ … }>`,
    /// `forwardRef<R, { … }>`).
    pub inline_props: Option<Node<'r, D>>,
}

/// Classify the initializer of a binding.
///
/// Wrapping calls must take exactly one argument; anything else is not a
/// component shape.
pub fn classify_initializer<'r, D: ast_grep_core::Doc>(
    value: &Node<'r, D>,
) -> Option<ComponentShape<'r, D>> {
    if is_function_value(value) {
        return Some(ComponentShape::Plain(value.clone()));
    }

    let (callee, arg) = single_argument_call(value)?;
    if MEMO_MARKERS.contains(&callee.as_str()) {
        if is_function_value(&arg) {
            return Some(ComponentShape::Memoized(arg));
        }
        let (inner_callee, inner_arg) = single_argument_call(&arg)?;
        if FORWARD_REF_MARKERS.contains(&inner_callee.as_str()) && is_function_value(&inner_arg) {
            return Some(ComponentShape::MemoizedRefForwarding(inner_arg));
        }
        None
    } else if FORWARD_REF_MARKERS.contains(&callee.as_str()) && is_function_value(&arg) {
        Some(ComponentShape::RefForwarding(arg))
    } else {
        None
    }
}

fn single_argument_call<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
) -> Option<(String, Node<'r, D>)> {
    if node.kind().as_ref() != "call_expression" {
        return None;
    }
    let callee = callee_text(node)?;
    let mut args = call_arguments(node);
    if args.len() != 1 {
        return None;
    }
    args.pop().map(|arg| (callee, arg))
}

/// Names exported through forms other than an exported declaration.
#[derive(Default)]
struct ExportNames {
    named: HashSet<String>,
    default: HashSet<String>,
}

impl ExportNames {
    fn collect<D: ast_grep_core::Doc>(root: &Node<D>) -> Self {
        let mut names = Self::default();
        for stmt in root
            .children()
            .filter(|c| c.kind().as_ref() == "export_statement")
        {
            // `export { X } from "./x"` re-exports another module's binding.
            if stmt.field("source").is_some() {
                continue;
            }
            if let Some(value) = stmt.field("value")
                && has_default_keyword(&stmt)
                && let Some(name) = unwrap_exported_value(&value)
            {
                names.default.insert(name);
            }
            for clause in stmt
                .children()
                .filter(|c| c.kind().as_ref() == "export_clause")
            {
                for spec in clause
                    .children()
                    .filter(|c| c.kind().as_ref() == "export_specifier")
                {
                    let Some(local) = spec.field("name").map(|n| n.text().to_string()) else {
                        continue;
                    };
                    let alias = spec.field("alias").map(|a| a.text().to_string());
                    if alias.as_deref() == Some("default") {
                        names.default.insert(local);
                    } else {
                        names.named.insert(local);
                    }
                }
            }
        }
        names
    }
}

/// `Name`, `memo(Name)`, `forwardRef(Name)`, `memo(forwardRef(Name))`.
fn unwrap_exported_value<D: ast_grep_core::Doc>(value: &Node<D>) -> Option<String> {
    if value.kind().as_ref() == "identifier" {
        return Some(value.text().to_string());
    }
    let (callee, arg) = single_argument_call(value)?;
    if MEMO_MARKERS.contains(&callee.as_str()) || FORWARD_REF_MARKERS.contains(&callee.as_str()) {
        unwrap_exported_value(&arg)
    } else {
        None
    }
}

fn has_default_keyword<D: ast_grep_core::Doc>(stmt: &Node<D>) -> bool {
    stmt.children().any(|c| c.kind().as_ref() == "default")
}

fn is_module_scope<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    node.parent()
        .is_some_and(|p| matches!(p.kind().as_ref(), "program" | "export_statement"))
}

/// Find every component candidate in source order.
pub fn locate_components<'r, D: ast_grep_core::Doc>(
    root: &Node<'r, D>,
) -> Vec<ComponentCandidate<'r, D>> {
    let exports = ExportNames::collect(root);
    let mut out = Vec::new();
    collect_candidates(root, &exports, &mut out);
    out
}

fn collect_candidates<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
    exports: &ExportNames,
    out: &mut Vec<ComponentCandidate<'r, D>>,
) {
    match node.kind().as_ref() {
        "function_declaration" if is_module_scope(node) => {
            if let Some(candidate) = function_candidate(node, exports) {
                out.push(candidate);
            }
        }
        "variable_declarator" => {
            if let Some(declaration) = node.parent()
                && matches!(
                    declaration.kind().as_ref(),
                    "lexical_declaration" | "variable_declaration"
                )
                && is_module_scope(&declaration)
                && let Some(candidate) = declarator_candidate(node, &declaration, exports)
            {
                out.push(candidate);
            }
        }
        _ => {}
    }

    for child in node.children() {
        collect_candidates(&child, exports, out);
    }
}

fn function_candidate<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
    exports: &ExportNames,
) -> Option<ComponentCandidate<'r, D>> {
    let name = node.field("name").map(|n| n.text().to_string())?;
    if !is_component_name(&name) {
        return None;
    }
    let anchor = export_anchor(node);
    let props_type = parameter_props_type(node);
    let mut candidate = finish(name, ComponentShape::Plain(node.clone()), anchor, exports);
    candidate.props_type = props_type;
    Some(candidate)
}

fn declarator_candidate<'r, D: ast_grep_core::Doc>(
    declarator: &Node<'r, D>,
    declaration: &Node<'r, D>,
    exports: &ExportNames,
) -> Option<ComponentCandidate<'r, D>> {
    let name_node = declarator.field("name")?;
    if name_node.kind().as_ref() != "identifier" {
        return None;
    }
    let name = name_node.text().to_string();
    if !is_component_name(&name) {
        return None;
    }
    let value = declarator.field("value")?;
    let shape = classify_initializer(&value)?;

    let props_type = parameter_props_type(shape.function())
        .or_else(|| {
            type_annotation_text(declarator)
                .and_then(|ann| last_generic_argument(&ann))
                .filter(|arg| is_type_name(arg))
        })
        .or_else(|| wrapper_generic(&value));
    let inline_props = binding_type_argument(declarator)
        .or_else(|| wrapper_type_argument(&value))
        .filter(|arg| arg.kind().as_ref() == "object_type");

    let anchor = export_anchor(declaration);
    let mut candidate = finish(name, shape, anchor, exports);
    candidate.props_type = props_type;
    candidate.inline_props = inline_props;
    Some(candidate)
}

fn finish<'r, D: ast_grep_core::Doc>(
    name: String,
    shape: ComponentShape<'r, D>,
    anchor: Node<'r, D>,
    exports: &ExportNames,
) -> ComponentCandidate<'r, D> {
    let in_export = anchor.kind().as_ref() == "export_statement";
    let is_default =
        (in_export && has_default_keyword(&anchor)) || exports.default.contains(&name);
    let is_exported = in_export || is_default || exports.named.contains(&name);
    ComponentCandidate {
        name,
        shape,
        anchor,
        is_exported,
        is_default,
        props_type: None,
        inline_props: None,
    }
}

/// The enclosing `export` statement when there is one, else the node.
fn export_anchor<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Node<'r, D> {
    node.parent()
        .filter(|p| p.kind().as_ref() == "export_statement")
        .unwrap_or_else(|| node.clone())
}

/// Named type on the first parameter. Inline object types are not names.
fn parameter_props_type<D: ast_grep_core::Doc>(function: &Node<D>) -> Option<String> {
    let param = first_parameter(function)?;
    let annotation = type_annotation_text(&param)?;
    is_type_name(&annotation).then_some(annotation)
}

/// Inline object types are not names.
fn is_type_name(text: &str) -> bool {
    !text.starts_with('{')
}

/// `forwardRef<Ref, Props>(…)` or `memo<Props>(…)`; the innermost named
/// argument wins.
fn wrapper_generic<D: ast_grep_core::Doc>(value: &Node<D>) -> Option<String> {
    if value.kind().as_ref() != "call_expression" {
        return None;
    }
    let inner = call_arguments(value)
        .first()
        .and_then(|arg| wrapper_generic(arg));
    inner.or_else(|| {
        call_type_arguments(value)
            .and_then(|ta| last_generic_argument(&ta.text()))
            .filter(|arg| is_type_name(arg))
    })
}

fn call_type_arguments<'r, D: ast_grep_core::Doc>(call: &Node<'r, D>) -> Option<Node<'r, D>> {
    call.field("type_arguments").or_else(|| {
        call.children()
            .find(|c| c.kind().as_ref() == "type_arguments")
    })
}

/// Last argument of the outermost generic in the binding's annotation.
fn binding_type_argument<'r, D: ast_grep_core::Doc>(
    declarator: &Node<'r, D>,
) -> Option<Node<'r, D>> {
    let annotation = declarator
        .children()
        .find(|c| c.kind().as_ref() == "type_annotation")?;
    last_type_argument(&first_type_arguments(&annotation)?)
}

/// Last generic argument of the innermost wrapping call that has one.
fn wrapper_type_argument<'r, D: ast_grep_core::Doc>(value: &Node<'r, D>) -> Option<Node<'r, D>> {
    if value.kind().as_ref() != "call_expression" {
        return None;
    }
    call_arguments(value)
        .first()
        .and_then(|arg| wrapper_type_argument(arg))
        .or_else(|| last_type_argument(&call_type_arguments(value)?))
}

/// Pre-order search, so the outermost `type_arguments` is found first.
fn first_type_arguments<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    if node.kind().as_ref() == "type_arguments" {
        return Some(node.clone());
    }
    node.children().find_map(|child| first_type_arguments(&child))
}

fn last_type_argument<'r, D: ast_grep_core::Doc>(type_arguments: &Node<'r, D>) -> Option<Node<'r, D>> {
    type_arguments
        .children()
        .filter(|c| !matches!(c.kind().as_ref(), "<" | ">" | "," | "comment"))
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast_grep_language::{LanguageExt, SupportLang};
    use pretty_assertions::assert_eq;

    struct Found {
        name: String,
        wrapper: Wrapper,
        is_exported: bool,
        is_default: bool,
        props_type: Option<String>,
        inline_props: Option<String>,
    }

    fn locate(source: &str) -> Vec<Found> {
        let root = SupportLang::Tsx.ast_grep(source);
        locate_components(&root.root())
            .into_iter()
            .map(|c| Found {
                wrapper: c.shape.wrapper(),
                name: c.name,
                is_exported: c.is_exported,
                is_default: c.is_default,
                props_type: c.props_type,
                inline_props: c.inline_props.map(|n| n.text().to_string()),
            })
            .collect()
    }

    fn single(source: &str) -> Found {
        let mut found = locate(source);
        assert_eq!(found.len(), 1, "expected exactly one candidate");
        found.remove(0)
    }

    #[test]
    fn plain_arrow() {
        let c = single("const Card = ({ title }) => <div>{title}</div>;");
        assert_eq!(c.name, "Card");
        assert_eq!(c.wrapper, Wrapper::None);
        assert!(!c.is_exported);
    }

    #[test]
    fn memoized_arrow() {
        let c = single("const Row = memo(({ item }) => <li>{item}</li>);");
        assert_eq!(c.wrapper, Wrapper::Memo);
    }

    #[test]
    fn ref_forwarding_arrow() {
        let c = single("const Field = React.forwardRef((props, ref) => <input ref={ref} />);");
        assert_eq!(c.wrapper, Wrapper::ForwardRef);
    }

    #[test]
    fn memoized_ref_forwarding() {
        let c = single(
            "const Field = React.memo(forwardRef(function Field(props, ref) { return <input ref={ref} />; }));",
        );
        assert_eq!(c.wrapper, Wrapper::MemoForwardRef);
    }

    #[test]
    fn function_declaration_is_plain() {
        let c = single("export function Page() { return <main />; }");
        assert_eq!(c.wrapper, Wrapper::None);
        assert!(c.is_exported);
        assert!(!c.is_default);
    }

    #[test]
    fn lowercase_and_non_function_bindings_are_ignored() {
        let found = locate(
            "const helper = () => <div />;\nconst Config = { a: 1 };\nconst Lazy = lazy(() => import('./x'));\nconst Two = memo(a, b);",
        );
        assert!(found.is_empty());
    }

    #[test]
    fn nested_declarations_are_not_module_scope() {
        let found = locate(
            "function Outer() {\n  const Inner = () => <span />;\n  return <Inner />;\n}",
        );
        let names: Vec<_> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Outer"]);
    }

    #[test]
    fn candidates_are_in_source_order() {
        let found = locate(
            "const B = () => <b />;\nfunction A() { return <a />; }\nexport const C = memo(() => <i />);",
        );
        let names: Vec<_> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn export_default_declaration() {
        let c = single("export default function App() { return <div />; }");
        assert!(c.is_default);
        assert!(c.is_exported);
    }

    #[test]
    fn export_default_by_name_and_wrapped_name() {
        let found = locate(
            "const Card = () => <div />;\nconst List = () => <ul />;\nexport default memo(Card);\nexport { List };",
        );
        assert!(found[0].is_default);
        assert!(!found[1].is_default);
        assert!(found[1].is_exported);
    }

    #[test]
    fn export_clause_alias_default() {
        let c = single("const Page = () => <main />;\nexport { Page as default };");
        assert!(c.is_default);
    }

    #[test]
    fn props_type_from_parameter_annotation() {
        let c = single("const Card = ({ title }: CardProps) => <div />;");
        assert_eq!(c.props_type.as_deref(), Some("CardProps"));
    }

    #[test]
    fn props_type_from_binding_generic() {
        let c = single("const Card: React.FC<CardProps> = ({ title }) => <div />;");
        assert_eq!(c.props_type.as_deref(), Some("CardProps"));
    }

    #[test]
    fn props_type_from_wrapper_generic() {
        let c = single(
            "const Field = forwardRef<HTMLInputElement, FieldProps>((props, ref) => <input ref={ref} />);",
        );
        assert_eq!(c.props_type.as_deref(), Some("FieldProps"));
    }

    #[test]
    fn inline_object_annotation_is_not_a_props_type() {
        let c = single("const Tag = ({ label }: { label: string }) => <span />;");
        assert_eq!(c.props_type, None);
    }

    #[test]
    fn inline_generic_on_binding_is_not_a_props_type() {
        let c = single(
            "export const Card: React.FC<{ title: string; onOpen?: () => void }> = ({ title, onOpen }) => <button onClick={onOpen}>{title}</button>;",
        );
        assert_eq!(c.props_type, None);
        assert_eq!(
            c.inline_props.as_deref(),
            Some("{ title: string; onOpen?: () => void }")
        );
    }

    #[test]
    fn inline_generic_on_wrapper_is_not_a_props_type() {
        let c = single(
            "const Field = forwardRef<HTMLInputElement, { label: string }>((props, ref) => <input ref={ref} />);",
        );
        assert_eq!(c.props_type, None);
        assert_eq!(c.inline_props.as_deref(), Some("{ label: string }"));
    }

    #[test]
    fn named_generic_has_no_inline_props() {
        let c = single("const Card: FC<CardProps> = (props) => <div />;");
        assert_eq!(c.props_type.as_deref(), Some("CardProps"));
        assert_eq!(c.inline_props, None);
    }
}
