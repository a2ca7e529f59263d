//! Output contract: the metadata records handed to the formatting layer.
//!
//! Every record serializes with camelCase field names and derives
//! `JsonSchema` so `compscan schema` can publish the contract.

mod analysis;
mod component;
mod hooks;
mod imports;
mod markup;
mod props;

pub use analysis::FileAnalysis;
pub use component::{ComponentMetadata, Wrapper};
pub use hooks::{EffectDescriptor, HandlerDescriptor, StateDescriptor};
pub use imports::{ImportDescriptor, NamedImport};
pub use markup::{
    ButtonDescriptor, ConditionalDescriptor, FormDescriptor, ImageDescriptor, InputDescriptor,
    LinkDescriptor,
};
pub use props::{PropDescriptor, PropType};
