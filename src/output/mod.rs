//! Output module for rendering audit reports
//!
//! This module handles:
//! - Rendering reports as markdown or JSON
//! - Writing reports to a file or standard output

mod markdown;

pub use markdown::format_markdown_report;

use crate::audit::AuditReport;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to format output: {0}")]
    Format(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

/// Renders a report in the requested format
pub fn render_report(report: &AuditReport, format: ReportFormat) -> OutputResult<String> {
    match format {
        ReportFormat::Markdown => Ok(format_markdown_report(report)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Writes a rendered report to `path`, or to stdout when `path` is None
pub fn write_report(contents: &str, path: Option<&Path>) -> OutputResult<()> {
    match path {
        Some(path) => {
            std::fs::write(path, contents)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            if !contents.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}
