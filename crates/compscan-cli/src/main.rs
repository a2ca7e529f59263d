use anyhow::Context;
use clap::Parser;
use compscan_config::CompscanConfig;

mod cli;
mod commands;
mod output;
mod progress;
mod ui;
mod walk;

fn main() {
    if let Err(error) = run() {
        eprintln!("compscan error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    // `schema` needs no configuration.
    if let cli::Commands::Schema(args) = &cli.command {
        ui::init(&flags, true);
        return commands::schema::handle(args, &flags);
    }

    let config = load_config(&flags)?;
    ui::init(&flags, config.output.pretty);

    commands::dispatch(&cli.command, &flags, &config)
}

fn load_config(flags: &cli::GlobalFlags) -> anyhow::Result<CompscanConfig> {
    let _ = dotenvy::dotenv();
    let config = CompscanConfig::load_from(flags.config.as_deref())
        .context("failed to load compscan configuration")?;
    config
        .validate()
        .context("invalid compscan configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("COMPSCAN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
