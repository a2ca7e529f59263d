use anyhow::Context;
use compscan_config::CompscanConfig;
use compscan_parser::{ComponentMetadata, FileAnalysis, analyze_source_with};
use serde::Serialize;

use crate::cli::root_commands::InspectArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::extract_options;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InspectReport<'a> {
    path: String,
    primary: Option<&'a str>,
    #[serde(flatten)]
    analysis: &'a FileAnalysis,
}

/// One table row per component.
#[derive(Debug, Serialize)]
struct ComponentRow {
    component: String,
    wrapper: &'static str,
    lines: String,
    exported: bool,
    default: bool,
    props: usize,
    state: usize,
    handlers: usize,
    controls: usize,
}

impl From<&ComponentMetadata> for ComponentRow {
    fn from(meta: &ComponentMetadata) -> Self {
        Self {
            component: meta.name.clone(),
            wrapper: meta.wrapper.as_str(),
            lines: format!("{}-{}", meta.start_line, meta.end_line),
            exported: meta.is_exported,
            default: meta.is_default,
            props: meta.props.len(),
            state: meta.state.len(),
            handlers: meta.handlers.len(),
            controls: meta.buttons.len()
                + meta.inputs.len()
                + meta.forms.len()
                + meta.links.len()
                + meta.images.len(),
        }
    }
}

/// Handle `compscan inspect`.
pub fn handle(
    args: &InspectArgs,
    flags: &GlobalFlags,
    config: &CompscanConfig,
) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let path = args.file.to_string_lossy().replace('\\', "/");
    let analysis = analyze_source_with(&source, &path, &extract_options(&config.extract))
        .with_context(|| format!("failed to analyze {path}"))?;

    if analysis.is_empty() && !flags.quiet {
        eprintln!("no components found in {path}");
    }

    match flags.format {
        OutputFormat::Table if analysis.is_empty() => Ok(()),
        OutputFormat::Table => output(&component_rows(&analysis), flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&report(path, &analysis), flags.format),
    }
}

fn report(path: String, analysis: &FileAnalysis) -> InspectReport<'_> {
    InspectReport {
        path,
        primary: analysis.primary().map(|c| c.name.as_str()),
        analysis,
    }
}

fn component_rows(analysis: &FileAnalysis) -> Vec<ComponentRow> {
    analysis.components.iter().map(ComponentRow::from).collect()
}
