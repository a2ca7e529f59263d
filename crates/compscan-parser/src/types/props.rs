use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Inferred shape of a prop when no declared type text is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropType {
    Boolean,
    Number,
    String,
    Array,
    Object,
    Function,
    Unknown,
}

impl PropType {
    /// Return the string stored in [`PropDescriptor::prop_type`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Function => "function",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One component input.
///
/// `prop_type` holds either declared type text (`"string | null"`,
/// `"() => void"`) or one of the [`PropType`] names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub prop_type: String,
    pub required: bool,
    pub default_value: Option<String>,
    pub is_callback: bool,
    pub is_boolean: bool,
}

impl PropDescriptor {
    /// A required prop with an inferred type and no default.
    #[must_use]
    pub fn inferred(name: &str, prop_type: PropType) -> Self {
        Self {
            name: name.to_string(),
            prop_type: prop_type.to_string(),
            required: true,
            default_value: None,
            is_callback: prop_type == PropType::Function,
            is_boolean: prop_type == PropType::Boolean,
        }
    }
}
