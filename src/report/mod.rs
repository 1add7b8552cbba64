//! Report serialization.
//!
//! Each report format is a pure string generator plus a thin file writer
//! that resolves the target path, creates the report directory if
//! missing, and creates or truncates the output file.

mod csv;
mod html;

pub use csv::generate_csv_string;
pub use html::generate_html_string;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use crate::model::PackageGroup;

/// Report formats the tool can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Headerless comma-separated lines for spreadsheet import.
    Csv,
    /// Self-contained HTML document with a linked package table.
    Html,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Html => "html",
        }
    }

    /// Fixed output file name for this format.
    pub fn file_name(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "packages.csv",
            ReportFormat::Html => "packages.html",
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "html" => Ok(ReportFormat::Html),
            _ => Err(format!(
                "Invalid report type '{}'. Valid values are 'csv' and 'html'.",
                s
            )),
        }
    }
}

/// Resolves the output path for a format.
///
/// With a report directory set, the file lands inside it; otherwise it is
/// written to the current working directory.
pub fn report_path(format: ReportFormat, report_directory: Option<&Path>) -> PathBuf {
    match report_directory {
        Some(dir) => dir.join(format.file_name()),
        None => PathBuf::from(format.file_name()),
    }
}

/// Serializes the groups and writes the report file, creating the report
/// directory if missing. Returns the path written.
pub fn write_report(
    format: ReportFormat,
    groups: &[PackageGroup],
    exclude_prefixes: &[String],
    report_directory: Option<&Path>,
) -> Result<PathBuf> {
    let path = report_path(format, report_directory);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create report directory {}", parent.display())
            })?;
        }
    }

    let content = match format {
        ReportFormat::Csv => generate_csv_string(groups, exclude_prefixes),
        ReportFormat::Html => generate_html_string(groups, exclude_prefixes, Local::now()),
    };

    fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Exclusion-prefix check, applied independently by every writer.
pub(crate) fn is_excluded(name: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| name.starts_with(prefix.as_str()))
}
