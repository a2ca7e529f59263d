use compscan_parser::{ComponentMetadata, FileAnalysis};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaRecord};
use crate::commands::scan::ScanRecord;
use crate::output::output;

/// Handle `compscan schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_value(args.record)?, flags.format)
}

fn schema_value(record: SchemaRecord) -> anyhow::Result<serde_json::Value> {
    let schema = match record {
        SchemaRecord::Component => schema_for!(ComponentMetadata),
        SchemaRecord::Analysis => schema_for!(FileAnalysis),
        SchemaRecord::Line => schema_for!(ScanRecord<'static>),
    };
    Ok(serde_json::to_value(schema)?)
}
