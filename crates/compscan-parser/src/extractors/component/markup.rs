use ast_grep_core::Node;

use super::Extractor;
use crate::extractors::helpers::{contains_markup, normalize_whitespace, unquote, unwrap_braces};
use crate::extractors::patterns::{TagClass, classify_tag};
use crate::types::{
    ButtonDescriptor, ConditionalDescriptor, FormDescriptor, ImageDescriptor, InputDescriptor,
    LinkDescriptor,
};

/// Attributes of one opening or self-closing tag, in source order.
///
/// A bare attribute (`<input required />`) has no value.
struct Attributes(Vec<(String, Option<String>)>);

impl Attributes {
    fn read<D: ast_grep_core::Doc>(tag: &Node<D>) -> Self {
        Self(
            tag.children()
                .filter(|c| c.kind().as_ref() == "jsx_attribute")
                .filter_map(|attr| {
                    let mut parts = attr.children().filter(|c| c.kind().as_ref() != "=");
                    let name = parts.next()?.text().to_string();
                    let value = parts.next().map(|v| attribute_value(&v));
                    Some((name, value))
                })
                .collect(),
        )
    }

    fn has(&self, name: &str) -> bool {
        self.0.iter().any(|(n, _)| n == name)
    }

    /// Value of `name`; `None` when absent or bare.
    fn get(&self, name: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.clone())
    }
}

fn attribute_value<D: ast_grep_core::Doc>(value: &Node<D>) -> String {
    let text = value.text();
    match value.kind().as_ref() {
        "string" => unquote(&text),
        "jsx_expression" => unwrap_braces(&text),
        _ => normalize_whitespace(&text),
    }
}

fn tag_name<D: ast_grep_core::Doc>(tag: &Node<D>) -> Option<String> {
    tag.field("name")
        .or_else(|| {
            tag.children().find(|c| {
                matches!(
                    c.kind().as_ref(),
                    "identifier" | "member_expression" | "nested_identifier"
                )
            })
        })
        .map(|n| n.text().to_string())
}

/// Whitespace-normalized text of every `jsx_text` below `node`.
fn descendant_text<D: ast_grep_core::Doc>(node: &Node<D>, out: &mut Vec<String>) {
    if node.kind().as_ref() == "jsx_text" {
        let text = normalize_whitespace(&node.text());
        if !text.is_empty() {
            out.push(text);
        }
        return;
    }
    for child in node.children() {
        descendant_text(&child, out);
    }
}

/// Visible label of an element: its text, else its first `{expression}`.
fn element_label<D: ast_grep_core::Doc>(element: Option<&Node<D>>) -> Option<String> {
    let element = element?;
    let mut parts = Vec::new();
    descendant_text(element, &mut parts);
    if !parts.is_empty() {
        return Some(parts.join(" "));
    }
    element
        .children()
        .find(|c| c.kind().as_ref() == "jsx_expression")
        .map(|e| unwrap_braces(&e.text()))
        .filter(|t| !t.is_empty())
}

impl Extractor<'_> {
    /// Classify one element by its tag (and `role`).
    ///
    /// `tag` is the opening or self-closing tag; `element` is the full
    /// element when it has children.
    pub(super) fn visit_element<D: ast_grep_core::Doc>(
        &mut self,
        tag: &Node<D>,
        element: Option<&Node<D>>,
    ) {
        let Some(name) = tag_name(tag) else {
            return;
        };
        let attrs = Attributes::read(tag);
        let class = classify_tag(&name).or_else(|| {
            (attrs.get("role").as_deref() == Some("button")).then_some(TagClass::Button)
        });

        match class {
            Some(TagClass::Button) => self.meta.buttons.push(ButtonDescriptor {
                text: element_label(element),
                button_type: attrs.get("type"),
                aria_label: attrs.get("aria-label"),
                on_click: attrs.get("onClick"),
                disabled: attrs
                    .has("disabled")
                    .then(|| attrs.get("disabled").unwrap_or_else(|| "true".to_string())),
                test_id: attrs.get("data-testid"),
            }),
            Some(kind @ (TagClass::Input | TagClass::TextArea | TagClass::Select)) => {
                let default_type = match kind {
                    TagClass::TextArea => Some("textarea".to_string()),
                    TagClass::Select => Some("select".to_string()),
                    _ => None,
                };
                self.meta.inputs.push(InputDescriptor {
                    input_type: attrs.get("type").or(default_type),
                    name: attrs.get("name"),
                    label: attrs.get("aria-label").or_else(|| attrs.get("label")),
                    placeholder: attrs.get("placeholder"),
                    required: attrs.has("required")
                        && attrs.get("required").as_deref() != Some("false"),
                });
            }
            Some(TagClass::Form) => self.meta.forms.push(FormDescriptor {
                on_submit: attrs.get("onSubmit"),
            }),
            Some(TagClass::Link) => self.meta.links.push(LinkDescriptor {
                text: element_label(element),
                href: attrs.get("href").or_else(|| attrs.get("to")),
            }),
            Some(TagClass::Image) => self.meta.images.push(ImageDescriptor {
                alt: attrs.get("alt"),
                src: attrs.get("src"),
            }),
            None => {}
        }
    }

    /// Free-standing text within the length bounds, first occurrence only.
    pub(super) fn visit_text<D: ast_grep_core::Doc>(&mut self, node: &Node<D>) {
        let text = normalize_whitespace(&node.text());
        let len = text.chars().count();
        if len < self.options.min_text_len || len > self.options.max_text_len {
            return;
        }
        if !self.meta.texts.contains(&text) {
            self.meta.texts.push(text);
        }
    }

    /// `cond ? a : b`; each branch flag says whether that branch renders
    /// markup.
    pub(super) fn visit_ternary<D: ast_grep_core::Doc>(&mut self, node: &Node<D>) {
        let Some(condition) = node.field("condition") else {
            return;
        };
        let has_true_branch = node.field("consequence").is_some_and(|n| contains_markup(&n));
        let has_false_branch = node.field("alternative").is_some_and(|n| contains_markup(&n));
        self.push_conditional(&condition, has_true_branch, has_false_branch);
    }

    /// `guard && <Markup />`.
    pub(super) fn visit_guard<D: ast_grep_core::Doc>(&mut self, node: &Node<D>) {
        let is_and = node
            .field("operator")
            .is_some_and(|op| op.text().as_ref() == "&&");
        if !is_and {
            return;
        }
        if let (Some(left), Some(right)) = (node.field("left"), node.field("right"))
            && contains_markup(&right)
        {
            self.push_conditional(&left, true, false);
        }
    }

    fn push_conditional<D: ast_grep_core::Doc>(
        &mut self,
        condition: &Node<D>,
        has_true_branch: bool,
        has_false_branch: bool,
    ) {
        let condition = normalize_whitespace(&condition.text());
        if condition.chars().count() > self.options.max_condition_len {
            return;
        }
        self.meta.conditionals.push(ConditionalDescriptor {
            condition,
            has_true_branch,
            has_false_branch,
        });
    }
}
