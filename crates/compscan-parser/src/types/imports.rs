use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One `import ... from "source"` statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportDescriptor {
    pub source: String,
    pub default_import: Option<String>,
    pub namespace_import: Option<String>,
    pub named: Vec<NamedImport>,
}

/// `{ name as alias }` inside an import clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NamedImport {
    pub name: String,
    pub alias: Option<String>,
}
