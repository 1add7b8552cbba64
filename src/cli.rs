//! Command-line token parsing.
//!
//! The grammar is positional: leading bare tokens are scan directories,
//! and each `--` flag consumes the non-flag tokens that follow it. No
//! input is fatal here; malformed tokens degrade to a warning plus a sane
//! default so a scan always proceeds.

use std::path::PathBuf;

use crate::report::ReportFormat;

/// Structured form of the raw command-line tokens.
///
/// Built once by [`parse_parameters`] and immutable thereafter.
#[derive(Debug, Clone)]
pub struct ParsedArguments {
    /// Directories to scan, in command-line order.
    pub directories: Vec<String>,
    /// Requested report formats, duplicate-free, in first-mention order.
    pub report_types: Vec<ReportFormat>,
    /// Target directory for report files; unset means the working directory.
    pub report_directory: Option<PathBuf>,
}

/// Parses raw command-line tokens into [`ParsedArguments`].
///
/// `default_directories` is the configured fallback used when the command
/// line names no directories at all. The second return value is the
/// ordered list of usage warnings produced while parsing; the caller is
/// responsible for printing them.
///
/// Recognized flags:
///
/// - `--report-type` - one or more of `csv`, `html` (case-insensitive)
/// - `--report-directory` - exactly one following path
///
/// Unknown flags warn and are skipped without consuming a value.
pub fn parse_parameters(
    args: &[String],
    default_directories: &[String],
) -> (ParsedArguments, Vec<String>) {
    let default_report_types = [ReportFormat::Csv, ReportFormat::Html];

    let mut warnings = Vec::new();

    if args.is_empty() {
        return (
            ParsedArguments {
                directories: default_directories.to_vec(),
                report_types: default_report_types.to_vec(),
                report_directory: None,
            },
            warnings,
        );
    }

    let mut directories = Vec::new();
    let mut report_types: Vec<ReportFormat> = Vec::new();
    let mut report_directory = None;

    let mut i = 0;

    // Leading tokens up to the first flag are scan directories.
    while i < args.len() && !args[i].starts_with("--") {
        directories.push(args[i].clone());
        i += 1;
    }

    if directories.is_empty() {
        directories.extend_from_slice(default_directories);
    }

    while i < args.len() {
        match args[i].as_str() {
            "--report-type" => {
                i += 1;
                while i < args.len() && !args[i].starts_with("--") {
                    match args[i].parse::<ReportFormat>() {
                        Ok(format) => {
                            if !report_types.contains(&format) {
                                report_types.push(format);
                            }
                        }
                        Err(warning) => warnings.push(warning),
                    }
                    i += 1;
                }
            }
            "--report-directory" => {
                i += 1;
                if i < args.len() && !args[i].starts_with("--") {
                    report_directory = Some(PathBuf::from(&args[i]));
                    i += 1;
                } else {
                    warnings.push("--report-directory parameter requires a value.".to_string());
                }
            }
            other => {
                warnings.push(format!("Unknown parameter '{}' ignored.", other));
                i += 1;
            }
        }
    }

    if report_types.is_empty() {
        report_types.extend_from_slice(&default_report_types);
    }

    (
        ParsedArguments {
            directories,
            report_types,
            report_directory,
        },
        warnings,
    )
}
