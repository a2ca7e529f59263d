use ast_grep_core::Node;

use super::Extractor;
use crate::extractors::helpers::{first_parameter, unquote};
use crate::extractors::patterns::infer_prop_type;
use crate::extractors::type_index::{TypeIndex, flatten_members};
use crate::types::PropDescriptor;

impl Extractor<'_> {
    /// Local props from the destructured first parameter, then the declared
    /// members merged over them. Declared members come from the named props
    /// type, else an inline object on the parameter, else `inline_props`.
    pub(super) fn collect_props<D: ast_grep_core::Doc>(
        &mut self,
        function: &Node<D>,
        index: &TypeIndex,
        props_type: Option<&str>,
        inline_props: Option<&Node<D>>,
    ) {
        let Some(param) = first_parameter(function) else {
            return;
        };

        if let Some(pattern) = object_pattern(&param) {
            for element in pattern.children() {
                if let Some(prop) = destructured_prop(&element)
                    && self.meta.prop(&prop.name).is_none()
                {
                    self.meta.props.push(prop);
                }
            }
        }

        let declared = props_type
            .and_then(|name| index.get(type_name(name)).map(<[PropDescriptor]>::to_vec))
            .or_else(|| inline_object_type(&param).map(|obj| flatten_members(&obj)))
            .or_else(|| inline_props.map(flatten_members));
        if let Some(declared) = declared {
            merge_declared(&mut self.meta.props, &declared);
        }
    }
}

/// `ListProps<T>` → `ListProps`.
fn type_name(props_type: &str) -> &str {
    props_type.split('<').next().unwrap_or(props_type).trim()
}

/// The object pattern of a parameter, looking through a TypeScript
/// parameter wrapper and a whole-pattern default (`{ a } = {}`).
fn object_pattern<'r, D: ast_grep_core::Doc>(param: &Node<'r, D>) -> Option<Node<'r, D>> {
    let pattern = match param.kind().as_ref() {
        "required_parameter" | "optional_parameter" => param.field("pattern")?,
        _ => param.clone(),
    };
    let pattern = if pattern.kind().as_ref() == "assignment_pattern" {
        pattern.field("left")?
    } else {
        pattern
    };
    (pattern.kind().as_ref() == "object_pattern").then_some(pattern)
}

fn inline_object_type<'r, D: ast_grep_core::Doc>(param: &Node<'r, D>) -> Option<Node<'r, D>> {
    param
        .children()
        .find(|c| c.kind().as_ref() == "type_annotation")?
        .children()
        .find(|c| c.kind().as_ref() == "object_type")
}

/// One element of an object pattern. Rest elements yield nothing.
fn destructured_prop<D: ast_grep_core::Doc>(element: &Node<D>) -> Option<PropDescriptor> {
    let (name, default) = match element.kind().as_ref() {
        "shorthand_property_identifier_pattern" => (element.text().to_string(), None),
        // `key = default`
        "object_assignment_pattern" => {
            let name = element.field("left")?.text().to_string();
            let default = element.field("right").map(|r| r.text().to_string());
            (name, default)
        }
        // `key: alias` and `key: alias = default`
        "pair_pattern" => {
            let key = element.field("key")?;
            let name = unquote(&key.text());
            let default = element
                .field("value")
                .filter(|v| v.kind().as_ref() == "assignment_pattern")
                .and_then(|v| v.field("right"))
                .map(|r| r.text().to_string());
            (name, default)
        }
        _ => return None,
    };

    let prop_type = infer_prop_type(&name, default.as_deref());
    let mut prop = PropDescriptor::inferred(&name, prop_type);
    if default.is_some() {
        prop.required = false;
        prop.default_value = default;
    }
    Some(prop)
}

/// Declared members are authoritative for type text and can only relax
/// `required`; local defaults survive.
fn merge_declared(props: &mut Vec<PropDescriptor>, declared: &[PropDescriptor]) {
    for member in declared {
        if let Some(local) = props.iter_mut().find(|p| p.name == member.name) {
            local.prop_type.clone_from(&member.prop_type);
            local.required = local.required && member.required;
            local.is_callback |= member.is_callback;
            local.is_boolean |= member.is_boolean;
        } else {
            props.push(member.clone());
        }
    }
}
