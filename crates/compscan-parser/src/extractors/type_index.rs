//! Type-alias index: named interfaces and object-literal type aliases,
//! flattened to prop descriptors and keyed by type name.
//!
//! Only declarations in the current file are indexed. Imported types are
//! never resolved. Interfaces that `extends` other local interfaces inherit
//! their members after their own.

use std::collections::{HashMap, HashSet};

use ast_grep_core::Node;

use super::helpers::{normalize_whitespace, type_annotation_text, unquote};
use super::patterns::{is_boolean_name, is_callback_name, is_function_type};
use crate::types::{PropDescriptor, PropType};

/// Read-only mapping from declared type name to its flattened members.
#[derive(Debug, Clone, Default)]
pub struct TypeIndex {
    types: HashMap<String, Vec<PropDescriptor>>,
}

/// A declaration before `extends` resolution.
#[derive(Default)]
struct RawType {
    members: Vec<PropDescriptor>,
    bases: Vec<String>,
}

impl TypeIndex {
    /// Walk the whole tree once and index every eligible declaration.
    pub fn build<D: ast_grep_core::Doc>(root: &Node<D>) -> Self {
        let mut raw: HashMap<String, RawType> = HashMap::new();
        collect_declarations(root, &mut raw);

        let types = raw
            .keys()
            .map(|name| {
                let mut visiting = HashSet::new();
                (name.clone(), resolve(name, &raw, &mut visiting))
            })
            .collect();
        Self { types }
    }

    /// Flattened members of `name`, if it was declared in this file.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[PropDescriptor]> {
        self.types.get(name).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn resolve(
    name: &str,
    raw: &HashMap<String, RawType>,
    visiting: &mut HashSet<String>,
) -> Vec<PropDescriptor> {
    let Some(decl) = raw.get(name) else {
        return Vec::new();
    };
    if !visiting.insert(name.to_string()) {
        return Vec::new();
    }

    let mut members = decl.members.clone();
    for base in &decl.bases {
        for inherited in resolve(base, raw, visiting) {
            if !members.iter().any(|m| m.name == inherited.name) {
                members.push(inherited);
            }
        }
    }
    visiting.remove(name);
    members
}

fn collect_declarations<D: ast_grep_core::Doc>(node: &Node<D>, out: &mut HashMap<String, RawType>) {
    match node.kind().as_ref() {
        "interface_declaration" => {
            if let Some(name) = node.field("name").map(|n| n.text().to_string()) {
                let body = node.field("body").or_else(|| {
                    node.children().find(|c| {
                        matches!(c.kind().as_ref(), "interface_body" | "object_type")
                    })
                });
                let entry = out.entry(name).or_default();
                if let Some(body) = body {
                    merge_members(&mut entry.members, flatten_members(&body));
                }
                entry.bases.extend(interface_bases(node));
            }
        }
        "type_alias_declaration" => {
            if let Some(name) = node.field("name").map(|n| n.text().to_string())
                && let Some(value) = node.field("value")
                && value.kind().as_ref() == "object_type"
            {
                let entry = out.entry(name).or_default();
                merge_members(&mut entry.members, flatten_members(&value));
            }
        }
        _ => {}
    }

    for child in node.children() {
        collect_declarations(&child, out);
    }
}

fn merge_members(into: &mut Vec<PropDescriptor>, members: Vec<PropDescriptor>) {
    for member in members {
        if !into.iter().any(|m| m.name == member.name) {
            into.push(member);
        }
    }
}

/// `interface A extends B, C<T>` → `["B", "C"]`.
fn interface_bases<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    node.children()
        .filter(|c| c.kind().as_ref() == "extends_type_clause")
        .flat_map(|clause| {
            clause
                .children()
                .filter(|c| !matches!(c.kind().as_ref(), "extends" | ","))
                .map(|c| {
                    let text = c.text().to_string();
                    text.split('<').next().unwrap_or_default().trim().to_string()
                })
                .collect::<Vec<_>>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Flatten the members of an `interface_body` or `object_type` node.
///
/// Used for named declarations and for inline object types, whether on the
/// parameter (`({ title }: { title: string })`) or as a generic argument
/// (`FC<{ title: string }>`).
pub fn flatten_members<D: ast_grep_core::Doc>(body: &Node<D>) -> Vec<PropDescriptor> {
    let mut members: Vec<PropDescriptor> = Vec::new();
    for member in body.children() {
        if let Some(prop) = member_descriptor(&member)
            && !members.iter().any(|m| m.name == prop.name)
        {
            members.push(prop);
        }
    }
    members
}

fn member_descriptor<D: ast_grep_core::Doc>(member: &Node<D>) -> Option<PropDescriptor> {
    let kind = member.kind();
    let is_method = match kind.as_ref() {
        "property_signature" => false,
        "method_signature" => true,
        _ => return None,
    };

    let name = unquote(&member.field("name")?.text());
    if name.is_empty() {
        return None;
    }
    let optional = member.children().any(|c| c.kind().as_ref() == "?");

    let prop_type = if is_method {
        PropType::Function.to_string()
    } else {
        type_annotation_text(member).map_or_else(
            || PropType::Unknown.to_string(),
            |text| normalize_whitespace(&text),
        )
    };

    Some(PropDescriptor {
        is_callback: is_method || is_callback_name(&name) || is_function_type(&prop_type),
        is_boolean: prop_type == "boolean" || is_boolean_name(&name),
        name,
        prop_type,
        required: !optional,
        default_value: None,
    })
}
