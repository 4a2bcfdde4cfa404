//! Console progress for a batch run.

use crate::error::ItemError;
use colored::Colorize;

/// Prints `index/total name > new_name` lines.
///
/// The index is zero-padded to the width of `total`, fixed once per batch.
#[derive(Debug, Clone)]
pub struct Reporter {
    total: usize,
    width: usize,
    enabled: bool,
}

impl Reporter {
    pub fn new(total: usize, enabled: bool) -> Self {
        Self {
            total,
            width: index_width(total),
            enabled,
        }
    }

    /// Announce the item about to be processed. `index` is 0-based.
    pub fn start(&self, index: usize, file_name: &str) {
        if !self.enabled {
            return;
        }
        print!(
            "{:0width$}/{} {}",
            index + 1,
            self.total,
            file_name.yellow().bold(),
            width = self.width
        );
    }

    pub fn renamed(&self, new_name: &str, dry_run: bool) {
        if !self.enabled {
            return;
        }
        if dry_run {
            println!(" > {} {}", new_name.green().bold(), "(dry run)".dimmed());
        } else {
            println!(" > {}", new_name.green().bold());
        }
    }

    pub fn failed(&self, err: &ItemError) {
        if !self.enabled {
            return;
        }
        println!("   {}", err.to_string().red().bold());
    }
}

/// Number of decimal digits in `total` (at least one).
pub fn index_width(total: usize) -> usize {
    total.max(1).to_string().len()
}
