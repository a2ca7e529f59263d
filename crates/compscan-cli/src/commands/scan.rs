use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use compscan_config::{CompscanConfig, ScanConfig};
use compscan_parser::{ComponentMetadata, ExtractOptions, FileAnalysis, analyze_source_with};
use rayon::prelude::*;
use schemars::JsonSchema;
use serde::Serialize;
use serde_jsonlines::JsonLinesWriter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScanArgs;
use crate::commands::extract_options;
use crate::output::{output, output_stderr};
use crate::progress::Progress;
use crate::walk;

/// One JSONL line: a component paired with the file it came from.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ScanRecord<'a> {
    pub path: &'a str,
    pub component: &'a ComponentMetadata,
    /// Full file text, present with `--include-source`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub files_without_components: usize,
    pub components_found: usize,
    /// Output file, or `None` when records went to stdout.
    pub output: Option<String>,
}

/// Everything `scan` needs once flags and configuration are merged.
#[derive(Debug, Clone)]
struct ScanPlan {
    root: PathBuf,
    scan: ScanConfig,
    options: ExtractOptions,
    include_source: bool,
}

impl ScanPlan {
    fn new(args: &ScanArgs, config: &CompscanConfig) -> Self {
        let mut scan = config.scan.clone();
        if !args.extensions.is_empty() {
            scan.extensions.clone_from(&args.extensions);
        }
        if args.no_skip_tests {
            scan.skip_tests = false;
        }
        Self {
            root: args.path.clone(),
            scan,
            options: extract_options(&config.extract),
            include_source: args.include_source || config.output.include_source,
        }
    }
}

enum FileOutcome {
    Skipped,
    Analyzed {
        path: String,
        analysis: FileAnalysis,
        source: Option<String>,
    },
}

/// Handle `compscan scan`.
pub fn handle(args: &ScanArgs, flags: &GlobalFlags, config: &CompscanConfig) -> anyhow::Result<()> {
    if !args.path.exists() {
        bail!("scan: path does not exist: {}", args.path.display());
    }
    let plan = ScanPlan::new(args, config);

    let summary = if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("failed to create output file {}", path.display()))?;
        let mut summary = execute(&plan, BufWriter::new(file))?;
        summary.output = Some(path.display().to_string());
        summary
    } else {
        execute(&plan, BufWriter::new(std::io::stdout().lock()))?
    };

    tracing::info!(
        files = summary.files_scanned,
        components = summary.components_found,
        "scan complete"
    );

    if flags.quiet {
        return Ok(());
    }
    if summary.output.is_some() {
        output(&summary, flags.format)
    } else {
        output_stderr(&summary, flags.format)
    }
}

/// Discover, analyze, and write records for every file in the plan.
fn execute<W: Write>(plan: &ScanPlan, writer: W) -> anyhow::Result<ScanSummary> {
    let spinner = Progress::spinner("discovering files");
    let files = walk::collect_source_files(&plan.root, &plan.scan);
    spinner.finish_clear();
    tracing::debug!(root = %plan.root.display(), files = files.len(), "discovered source files");

    let progress = Progress::bar(files.len() as u64, "analyzing");
    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|path| {
            let outcome = analyze_file(path, &plan.options, plan.include_source);
            progress.inc(1);
            outcome
        })
        .collect();
    progress.finish_clear();

    write_records(writer, &outcomes)
}

fn analyze_file(path: &Path, options: &ExtractOptions, include_source: bool) -> FileOutcome {
    let display_path = path.to_string_lossy().replace('\\', "/");
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            tracing::warn!(file = %display_path, %error, "skipping unreadable file");
            return FileOutcome::Skipped;
        }
    };

    match analyze_source_with(&source, &display_path, options) {
        Ok(analysis) => FileOutcome::Analyzed {
            path: display_path,
            analysis,
            source: include_source.then_some(source),
        },
        Err(error) => {
            tracing::warn!(file = %display_path, %error, "skipping file");
            FileOutcome::Skipped
        }
    }
}

fn write_records<W: Write>(writer: W, outcomes: &[FileOutcome]) -> anyhow::Result<ScanSummary> {
    let mut writer = JsonLinesWriter::new(writer);
    let mut summary = ScanSummary {
        files_scanned: outcomes.len(),
        ..ScanSummary::default()
    };

    for outcome in outcomes {
        let FileOutcome::Analyzed {
            path,
            analysis,
            source,
        } = outcome
        else {
            summary.files_skipped += 1;
            continue;
        };

        if analysis.is_empty() {
            tracing::debug!(file = %path, "no components found");
            summary.files_without_components += 1;
            continue;
        }

        for component in &analysis.components {
            writer
                .write(&ScanRecord {
                    path,
                    component,
                    source: source.as_deref(),
                })
                .context("failed to write JSONL record")?;
            summary.components_found += 1;
        }
    }

    writer.flush().context("failed to flush JSONL output")?;
    Ok(summary)
}
