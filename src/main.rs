use std::env;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use nugetscan::aggregate::group_packages;
use nugetscan::cli::parse_parameters;
use nugetscan::config::Config;
use nugetscan::model::PackageReference;
use nugetscan::report::write_report;
use nugetscan::scanner::all_scanners;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    // Default to `warn` so usage warnings are always visible.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let config = Config::load().unwrap_or_default();

    let args: Vec<String> = env::args().skip(1).collect();
    let (parsed, warnings) = parse_parameters(&args, &config.scan_directories);
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let references = scan_directories(&parsed.directories)?;
    let groups = group_packages(&references);

    for format in &parsed.report_types {
        let path = write_report(
            *format,
            &groups,
            &config.exclude_prefixes,
            parsed.report_directory.as_deref(),
        )?;
        println!("Report written to: {}", path.display());
    }

    Ok(())
}

/// Scan the directories sequentially, both scanners per directory.
fn scan_directories(directories: &[String]) -> Result<Vec<PackageReference>> {
    let progress = ProgressBar::new(directories.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    progress.enable_steady_tick(Duration::from_millis(100));

    let mut references = Vec::new();
    for directory in directories {
        for scanner in all_scanners() {
            progress.set_message(format!("Scanning {} for {}...", directory, scanner.name()));
            references.extend(scanner.scan(Path::new(directory))?);
        }

        progress.inc(1);
    }

    progress.finish_with_message(format!("Found {} package references", references.len()));
    Ok(references)
}
