//! bark CLI tool.
//!
//! Usage:
//! ```bash
//! bark scan [OPTIONS] [PATH]
//! bark languages
//! bark init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Finds marker comments (BARK by default) across 18 languages
#[derive(Parser)]
#[command(name = "bark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan files for marker comments
    Scan {
        /// Path to scan (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Marker tag to look for (overrides config)
        #[arg(short, long, env = "BARK_MARKER")]
        marker: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Exit with status 0 even when findings exist
        #[arg(long)]
        no_fail: bool,
    },

    /// List supported languages
    Languages,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for scan results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-finding compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scan {
            path,
            format,
            marker,
            exclude,
            no_fail,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            let options = commands::scan::ScanOptions {
                format,
                marker,
                exclude,
                fail_on_findings: !no_fail,
            };
            commands::scan::run(&path, &options, &source)
        }
        Commands::Languages => {
            commands::languages::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
