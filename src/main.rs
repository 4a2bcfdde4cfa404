//! tnt CLI
//!
//! Renames media metadata sidecar files listed in a text file.

use clap::Parser;
use std::process::ExitCode;
use tnt_renamer::cli::{args::Cli, commands::rename};
use tnt_renamer::models::config;

/// Exit status when the batch ran but some items failed.
const EXIT_PARTIAL_FAILURE: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let Some(list_file) = cli.list_file.as_deref() else {
        rename::print_usage();
        return Ok(ExitCode::SUCCESS);
    };

    let mut config = config::load_config(cli.config.as_deref())?;
    if let Some(dir) = cli.output_dir {
        config.output.dir = dir;
    }
    if cli.quiet {
        config.console.progress = false;
    }
    if cli.no_color || !config.console.color {
        colored::control::set_override(false);
    }

    let report = rename::rename(list_file, &config, cli.dry_run)?;

    if report.all_succeeded() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_PARTIAL_FAILURE))
    }
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("tnt_renamer=debug")
    } else {
        EnvFilter::new("tnt_renamer=info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
