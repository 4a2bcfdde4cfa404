//! Rename command implementation.
//!
//! Runs the batch driver over a path list and prints a summary.

use crate::core::batch::{BatchConfig, BatchDriver};
use crate::models::config::Config;
use crate::models::report::BatchReport;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Rename every sidecar listed in `list_file`.
pub fn rename(list_file: &Path, config: &Config, dry_run: bool) -> Result<BatchReport> {
    tracing::debug!("Reading path list: {}", list_file.display());

    let driver = BatchDriver::with_config(BatchConfig {
        output_dir: config.output.dir.clone(),
        dry_run,
        progress: config.console.progress,
    });
    let report = driver.run(list_file)?;

    print_summary(&report, dry_run);
    Ok(report)
}

/// Print the closing summary, listing failed items by cause.
fn print_summary(report: &BatchReport, dry_run: bool) {
    println!();
    let label = if dry_run { "[DRY RUN]" } else { "[DONE]" };
    println!(
        "{} {} ok, {} failed",
        label.bold(),
        report.success_count().to_string().green(),
        report.error_count().to_string().red()
    );

    for item in &report.items {
        if let Some(e) = item.error() {
            println!(
                "  {} #{} {} ({})",
                "[FAIL]".red(),
                item.index + 1,
                item.source.display(),
                e.kind()
            );
        }
    }
}

/// Print usage when no list file was given.
pub fn print_usage() {
    println!("{}", "No arguments were provided.".red().bold());
    println!("Pass one text file with a list of file paths to parse.");
    println!("USAGE: tnt [OPTIONS] <LIST_FILE>");
    println!();
    println!("Run `tnt --help` for all options.");
}
