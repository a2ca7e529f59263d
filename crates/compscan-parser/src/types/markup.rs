use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Attribute values are kept as written: string literals unquoted,
/// `{expr}` values as the inner expression text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ButtonDescriptor {
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub button_type: Option<String>,
    pub aria_label: Option<String>,
    pub on_click: Option<String>,
    pub disabled: Option<String>,
    pub test_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    #[serde(rename = "type")]
    pub input_type: Option<String>,
    pub name: Option<String>,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormDescriptor {
    pub on_submit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkDescriptor {
    pub text: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    pub alt: Option<String>,
    pub src: Option<String>,
}

/// A ternary or `guard && <markup/>` rendering branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalDescriptor {
    pub condition: String,
    pub has_true_branch: bool,
    pub has_false_branch: bool,
}
