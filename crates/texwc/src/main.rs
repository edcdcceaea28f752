//! texwc - hierarchical LaTeX word counter
//!
//! Reads one document from a file or stdin, counts its words per section and
//! subsection, and prints the tree (or JSON).

mod config;
mod input;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use config::Config;
use render::OutputFormat;
use std::path::PathBuf;
use texwc_core::{count_document_as, ModeOverride};
use tracing::Level;

const EXAMPLES: &str = "\
Examples:
  - Count words from a file:
    texwc my_paper.tex

  - Count words from pasted text (pipe from stdin):
    cat my_paper.tex | texwc
    (or just run texwc and paste your text, then press Ctrl-D)

  - Machine-readable output:
    texwc my_paper.tex --format json";

/// Verbosity level for log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors (default)
    Normal,
    /// Per-fragment debug output
    Verbose,
}

impl Verbosity {
    /// Create from CLI flags
    const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    const fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "texwc",
    version,
    about = "Count words in a LaTeX file hierarchically.",
    after_help = EXAMPLES
)]
struct Args {
    /// The path to the .tex file. If not provided (or '-'), reads from stdin.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output format (default: text, or from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Compact JSON output (no pretty-printing, only affects JSON format)
    #[arg(long)]
    compact: bool,

    /// Counting mode: auto, latex or plain (default: auto, or from config)
    #[arg(short, long, value_name = "MODE")]
    mode: Option<ModeOverride>,

    /// Config file to use instead of ~/.texwc.toml and ./.texwc.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,

    /// Show per-section debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
}

fn init_tracing(verbosity: Verbosity) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(verbosity.level().into()),
        )
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = Config::resolve(args.config.as_deref())?;
    let settings = config.settings(args.format, args.mode, args.compact);
    tracing::debug!(?settings, "resolved settings");

    let document = input::read_document(args.file.as_deref())?;
    let count = count_document_as(&document, settings.mode)?;

    let mut stdout = std::io::stdout().lock();
    render::write_report(&mut stdout, &count, settings.format, settings.compact)
        .context("Failed to write report")?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing(Verbosity::from_flags(args.quiet, args.verbose));

    if let Err(e) = run(args) {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}
