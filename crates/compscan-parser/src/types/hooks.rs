use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `const [name, setter] = useState(initial)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateDescriptor {
    pub name: String,
    pub setter: String,
    pub initial_value: Option<String>,
}

/// A lifecycle effect and its dependency list.
///
/// `is_empty` is only true for a literal `[]`; a missing dependency list
/// leaves `deps` empty with `is_empty == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EffectDescriptor {
    pub deps: Vec<String>,
    pub is_empty: bool,
}

/// A `handle*` / `on*` function bound at the top of the component body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HandlerDescriptor {
    pub name: String,
    pub is_async: bool,
}
