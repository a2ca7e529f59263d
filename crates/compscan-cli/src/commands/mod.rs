pub mod inspect;
pub mod scan;
pub mod schema;

use compscan_config::{CompscanConfig, ExtractConfig};
use compscan_parser::ExtractOptions;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: &Commands,
    flags: &GlobalFlags,
    config: &CompscanConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Scan(args) => scan::handle(args, flags, config),
        Commands::Inspect(args) => inspect::handle(args, flags, config),
        Commands::Schema(args) => schema::handle(args, flags),
    }
}

/// Extraction thresholds as configured.
#[must_use]
pub const fn extract_options(config: &ExtractConfig) -> ExtractOptions {
    ExtractOptions {
        max_condition_len: config.max_condition_len,
        min_text_len: config.min_text_len,
        max_text_len: config.max_text_len,
    }
}
