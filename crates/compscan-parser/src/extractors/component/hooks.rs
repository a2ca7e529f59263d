use ast_grep_core::Node;

use super::Extractor;
use crate::extractors::helpers::{
    array_elements, call_arguments, callee_text, contains_markup, is_async_function,
    is_function_value, normalize_whitespace,
};
use crate::extractors::patterns::{
    CALLBACK_HOOKS, CONTEXT_READ_HOOKS, EFFECT_HOOKS, REF_HOOKS, STATE_HOOKS,
    context_from_hook_name, is_custom_hook, is_form_hook, is_handler_name, is_network_callee,
    is_router_hook, normalize_hook_name,
};
use crate::types::{EffectDescriptor, HandlerDescriptor, StateDescriptor};

impl Extractor<'_> {
    /// Hook calls, network calls, and `.map` render lists.
    pub(super) fn visit_call<D: ast_grep_core::Doc>(&mut self, call: &Node<D>) {
        let Some(callee) = callee_text(call) else {
            return;
        };
        let hook = normalize_hook_name(&callee);

        if EFFECT_HOOKS.contains(&hook) {
            self.meta.effects.push(effect_descriptor(call));
        } else if CONTEXT_READ_HOOKS.contains(&hook) {
            if let Some(context) = call_arguments(call).first() {
                self.meta.contexts.push(context.text().to_string());
            }
        } else if let Some(context) = context_from_hook_name(hook) {
            self.meta.contexts.push(context);
        } else if is_router_hook(hook) {
            self.meta.uses_router = true;
        } else if is_form_hook(hook) {
            self.meta.uses_form = true;
        } else if is_custom_hook(hook) {
            self.meta.custom_hooks.push(hook.to_string());
        }

        if is_network_callee(&callee) {
            self.meta.api_calls.push(normalize_whitespace(&callee));
        }

        if let Some(receiver) = render_list_receiver(call) {
            self.meta.lists.push(receiver);
        }
    }

    /// `const [value, setValue] = useState(…)` and `const ref = useRef(…)`.
    pub(super) fn visit_declarator<D: ast_grep_core::Doc>(&mut self, declarator: &Node<D>) {
        let (Some(name), Some(value)) = (declarator.field("name"), declarator.field("value")) else {
            return;
        };
        if value.kind().as_ref() != "call_expression" {
            return;
        }
        let Some(callee) = callee_text(&value) else {
            return;
        };
        let hook = normalize_hook_name(&callee);

        if STATE_HOOKS.contains(&hook) {
            if let Some((state, setter)) = state_pair(&name) {
                // useReducer(reducer, initial): the initial value is second.
                let position = usize::from(hook == "useReducer");
                let initial_value = call_arguments(&value)
                    .get(position)
                    .map(|arg| arg.text().to_string());
                self.meta.state.push(StateDescriptor {
                    name: state,
                    setter,
                    initial_value,
                });
            }
        } else if REF_HOOKS.contains(&hook) && name.kind().as_ref() == "identifier" {
            self.meta.refs.push(name.text().to_string());
        }
    }

    /// Handler functions declared directly in the body block.
    pub(super) fn collect_handlers<D: ast_grep_core::Doc>(&mut self, body: &Node<D>) {
        if body.kind().as_ref() != "statement_block" {
            return;
        }
        for stmt in body.children() {
            match stmt.kind().as_ref() {
                "lexical_declaration" | "variable_declaration" => {
                    for declarator in stmt
                        .children()
                        .filter(|c| c.kind().as_ref() == "variable_declarator")
                    {
                        if let Some(handler) = bound_handler(&declarator) {
                            self.meta.handlers.push(handler);
                        }
                    }
                }
                "function_declaration" => {
                    if let Some(name) = stmt.field("name").map(|n| n.text().to_string())
                        && is_handler_name(&name)
                    {
                        self.meta.handlers.push(HandlerDescriptor {
                            name,
                            is_async: is_async_function(&stmt),
                        });
                    }
                }
                _ => {}
            }
        }
    }
}

/// Dependencies come from the second argument. Only a literal `[]` is empty.
fn effect_descriptor<D: ast_grep_core::Doc>(call: &Node<D>) -> EffectDescriptor {
    match call_arguments(call).get(1) {
        Some(deps) if deps.kind().as_ref() == "array" => {
            let deps: Vec<String> = array_elements(deps)
                .iter()
                .map(|d| normalize_whitespace(&d.text()))
                .collect();
            EffectDescriptor {
                is_empty: deps.is_empty(),
                deps,
            }
        }
        _ => EffectDescriptor {
            deps: Vec::new(),
            is_empty: false,
        },
    }
}

/// `[value, setValue]` with exactly two identifiers.
fn state_pair<D: ast_grep_core::Doc>(pattern: &Node<D>) -> Option<(String, String)> {
    if pattern.kind().as_ref() != "array_pattern" {
        return None;
    }
    let elements: Vec<_> = pattern
        .children()
        .filter(|c| !matches!(c.kind().as_ref(), "[" | "]" | ","))
        .collect();
    match elements.as_slice() {
        [state, setter]
            if state.kind().as_ref() == "identifier" && setter.kind().as_ref() == "identifier" =>
        {
            Some((state.text().to_string(), setter.text().to_string()))
        }
        _ => None,
    }
}

fn bound_handler<D: ast_grep_core::Doc>(declarator: &Node<D>) -> Option<HandlerDescriptor> {
    let name = declarator.field("name")?;
    if name.kind().as_ref() != "identifier" {
        return None;
    }
    let name = name.text().to_string();
    if !is_handler_name(&name) {
        return None;
    }

    let value = declarator.field("value")?;
    let function = if is_function_value(&value) {
        value
    } else if value.kind().as_ref() == "call_expression" {
        // useCallback(async () => …, [deps])
        let callee = callee_text(&value)?;
        if !CALLBACK_HOOKS.contains(&normalize_hook_name(&callee)) {
            return None;
        }
        call_arguments(&value)
            .into_iter()
            .next()
            .filter(|f| is_function_value(f))?
    } else {
        return None;
    };

    Some(HandlerDescriptor {
        name,
        is_async: is_async_function(&function),
    })
}

/// Receiver of `items.map(item => <li />)`.
fn render_list_receiver<D: ast_grep_core::Doc>(call: &Node<D>) -> Option<String> {
    let callee = call.field("function")?;
    if callee.kind().as_ref() != "member_expression" {
        return None;
    }
    let property = callee.field("property")?;
    if property.text().as_ref() != "map" {
        return None;
    }
    let callback = call_arguments(call).into_iter().next()?;
    if !contains_markup(&callback) {
        return None;
    }
    callee
        .field("object")
        .map(|object| normalize_whitespace(&object.text()))
}
