use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    ButtonDescriptor, ConditionalDescriptor, EffectDescriptor, FormDescriptor, HandlerDescriptor,
    ImageDescriptor, InputDescriptor, LinkDescriptor, PropDescriptor, StateDescriptor,
};

/// Higher-order wrapper applied around a component's function value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Wrapper {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "memo")]
    Memo,
    #[serde(rename = "forwardRef")]
    ForwardRef,
    #[serde(rename = "memo+forwardRef")]
    MemoForwardRef,
}

impl Wrapper {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Memo => "memo",
            Self::ForwardRef => "forwardRef",
            Self::MemoForwardRef => "memo+forwardRef",
        }
    }
}

impl std::fmt::Display for Wrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything extracted from one component definition.
///
/// Built by a single extraction pass and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    pub name: String,
    pub wrapper: Wrapper,
    pub is_exported: bool,
    pub is_default: bool,
    pub props_type: Option<String>,
    pub start_line: u32,
    pub end_line: u32,

    pub props: Vec<PropDescriptor>,
    pub state: Vec<StateDescriptor>,
    pub effects: Vec<EffectDescriptor>,
    pub refs: Vec<String>,
    pub handlers: Vec<HandlerDescriptor>,
    pub contexts: Vec<String>,
    pub custom_hooks: Vec<String>,
    pub api_calls: Vec<String>,
    pub uses_router: bool,
    pub uses_form: bool,
    pub has_loading_state: bool,
    pub has_error_state: bool,

    pub buttons: Vec<ButtonDescriptor>,
    pub inputs: Vec<InputDescriptor>,
    pub forms: Vec<FormDescriptor>,
    pub links: Vec<LinkDescriptor>,
    pub images: Vec<ImageDescriptor>,
    pub texts: Vec<String>,
    pub conditionals: Vec<ConditionalDescriptor>,
    pub lists: Vec<String>,
}

impl ComponentMetadata {
    #[must_use]
    pub fn new(name: impl Into<String>, wrapper: Wrapper) -> Self {
        Self {
            name: name.into(),
            wrapper,
            ..Self::default()
        }
    }

    /// Whether the component renders anything a test can interact with.
    ///
    /// Free-standing text alone does not count.
    #[must_use]
    pub fn has_rendered_surface(&self) -> bool {
        !(self.buttons.is_empty()
            && self.inputs.is_empty()
            && self.forms.is_empty()
            && self.links.is_empty()
            && self.images.is_empty()
            && self.lists.is_empty())
    }

    #[must_use]
    pub fn prop(&self, name: &str) -> Option<&PropDescriptor> {
        self.props.iter().find(|p| p.name == name)
    }
}
