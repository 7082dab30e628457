//! SEO-Lens main entry point
//!
//! This is the command-line interface for the single-page SEO auditor.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use seo_lens::config::{load_config, validate, Config};
use seo_lens::output::{render_report, write_report, ReportFormat};
use seo_lens::run_audit;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// SEO-Lens: a single-page SEO auditor
///
/// Fetches a page, extracts its SEO metadata, checks a bounded number of its
/// links, reads robots.txt, and prints recommendations.
#[derive(Parser, Debug)]
#[command(name = "seo-lens")]
#[command(version)]
#[command(about = "Audit one web page for common SEO issues", long_about = None)]
struct Cli {
    /// URL of the page to audit
    #[arg(value_name = "URL")]
    url: String,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Override the number of links probed
    #[arg(long, value_name = "N")]
    probe_limit: Option<usize>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Markdown => ReportFormat::Markdown,
            Format::Json => ReportFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(limit) = cli.probe_limit {
        config.audit.probe_limit = limit;
        validate(&config).context("Invalid --probe-limit")?;
    }

    let report = match run_audit(&config, &cli.url).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Audit failed: {}", e);
            return Err(e).with_context(|| format!("Could not audit {}", cli.url));
        }
    };

    let rendered = render_report(&report, cli.format.into())?;
    write_report(&rendered, cli.output.as_deref())?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so the report on stdout stays clean.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seo_lens=info,warn"),
            1 => EnvFilter::new("seo_lens=debug,info"),
            2 => EnvFilter::new("seo_lens=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
