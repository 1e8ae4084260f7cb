//! # Titan Checkout CLI
//!
//! Command-line front end for `checkout-core`.
//!
//! ## Module Organization
//! ```text
//! checkout_cli/
//! ├── lib.rs             ◄─── You are here (argument model, logging, dispatch)
//! ├── config.rs          ◄─── Environment-driven defaults
//! ├── catalogue_file.rs  ◄─── TOML / JSON catalogue loading
//! ├── interactive.rs     ◄─── Prompted catalogue entry and scanning
//! ├── report.rs          ◄─── Batch pricing of a SKU list
//! └── render.rs          ◄─── Text / JSON summaries
//! ```

pub mod catalogue_file;
pub mod config;
pub mod interactive;
pub mod render;
pub mod report;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use checkout_core::ScanPolicy;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::catalogue_file::load_catalogue;
use crate::config::{CliConfig, OutputFormat};
use crate::interactive::InteractiveSession;
use crate::report::{read_skus, run_report, ReportOptions};

/// Supermarket checkout with bulk "N for P" pricing.
#[derive(Debug, Parser)]
#[command(name = "checkout", version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Enter a catalogue and scan items at the prompt (default).
    Interactive,
    /// Price a list of SKUs against a catalogue file.
    Report(ReportArgs),
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Catalogue file (.toml or .json).
    #[arg(short, long)]
    pub catalogue: PathBuf,

    /// What to do with SKUs missing from the catalogue: skip or abort.
    #[arg(long)]
    pub on_unknown: Option<ScanPolicy>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// SKUs to scan. Read from stdin, one per line, when omitted.
    pub skus: Vec<String>,
}

/// Parses arguments, sets up logging and runs the selected command.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CliConfig::load().context("Failed to load configuration")?;
    info!(?config, "Configuration loaded");

    let ok = match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let stdin = io::stdin();
            InteractiveSession::new(stdin.lock(), io::stdout(), config).run()?
        }
        Command::Report(args) => report(args, config)?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn report(args: ReportArgs, config: CliConfig) -> Result<bool> {
    let catalogue = Arc::new(load_catalogue(&args.catalogue)?);

    let skus = if args.skus.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprintln!("Reading SKUs from stdin, one per line (Ctrl-D to finish)");
        }
        read_skus(stdin.lock()).context("Failed to read SKUs from stdin")?
    } else {
        args.skus
    };

    let options = ReportOptions {
        on_unknown: args.on_unknown.unwrap_or(config.on_unknown),
        format: args.format.unwrap_or(config.format),
        currency_symbol: config.currency_symbol,
    };

    run_report(catalogue, &skus, &options, &mut io::stdout(), &mut io::stderr())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so summaries on stdout stay machine-readable.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
