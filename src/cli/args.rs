//! Command line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// tnt - Rename media metadata sidecar files by project, season and episode
#[derive(Parser, Debug)]
#[command(name = "tnt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text file listing the JSON files to rename, one path per line
    #[arg(value_name = "LIST_FILE")]
    pub list_file: Option<PathBuf>,

    /// Directory to write renamed files to (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Show the new names without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Do not print per-file progress
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a config.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
