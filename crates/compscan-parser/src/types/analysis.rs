use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ComponentMetadata, ImportDescriptor};

/// Result of analyzing one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileAnalysis {
    /// `"use client"` / `"use server"` when the file opens with one.
    pub directive: Option<String>,
    pub imports: Vec<ImportDescriptor>,
    /// Components with a rendered surface, in source order.
    pub components: Vec<ComponentMetadata>,
}

impl FileAnalysis {
    /// The component a caller should treat as the file's subject: the first
    /// exported or default-exported one, else the first found.
    #[must_use]
    pub fn primary(&self) -> Option<&ComponentMetadata> {
        self.components
            .iter()
            .find(|c| c.is_exported || c.is_default)
            .or_else(|| self.components.first())
    }

    #[must_use]
    pub fn component(&self, name: &str) -> Option<&ComponentMetadata> {
        self.components.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
