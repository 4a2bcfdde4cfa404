//! Batch driver.
//!
//! Processes a path list one item at a time:
//! - read and parse the sidecar JSON
//! - validate project, season and episode
//! - derive the canonical filename
//! - write the re-indented JSON under that name
//!
//! A failing item is recorded and skipped; only an unusable path list stops the run.

use crate::core::metadata;
use crate::core::progress::Reporter;
use crate::error::ItemError;
use crate::generators::filename::{build_filename, split_file_name};
use crate::models::report::{BatchItem, BatchReport, ItemOutcome};
use crate::utils::fs::read_path_list;
use crate::utils::translit::{capitalize_first, transliterate};
use crate::Result;
use std::path::{Path, PathBuf};

/// Batch driver configuration.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory the renamed files are written to.
    pub output_dir: PathBuf,
    /// Compute names but write nothing.
    pub dry_run: bool,
    /// Print per-item progress lines.
    pub progress: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            dry_run: false,
            progress: true,
        }
    }
}

/// Sequential batch driver.
pub struct BatchDriver {
    config: BatchConfig,
}

impl BatchDriver {
    /// Create a new driver with default configuration.
    pub fn new() -> Self {
        Self {
            config: BatchConfig::default(),
        }
    }

    /// Create a new driver with custom configuration.
    pub fn with_config(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Run every path listed in `list_file`, in order.
    pub fn run(&self, list_file: &Path) -> Result<BatchReport> {
        let paths = read_path_list(list_file)?;
        let total = paths.len();
        tracing::debug!("Loaded {} paths from {}", total, list_file.display());

        let reporter = Reporter::new(total, self.config.progress);
        let mut report = BatchReport::default();

        for (index, source) in paths.into_iter().enumerate() {
            let outcome = self.process_item(&source, index, &reporter);
            if let ItemOutcome::Failed(ref e) = outcome {
                tracing::warn!(
                    "Item {} failed ({}): {} - {}",
                    index + 1,
                    e.kind(),
                    source.display(),
                    e
                );
            }
            report.items.push(BatchItem {
                index,
                source,
                outcome,
            });
        }

        tracing::info!(
            "Processed {} items: {} ok, {} failed",
            total,
            report.success_count(),
            report.error_count()
        );
        Ok(report)
    }

    fn process_item(&self, source: &Path, index: usize, reporter: &Reporter) -> ItemOutcome {
        let source_str = source.to_string_lossy();
        let (stem, ext) = split_file_name(&source_str);
        reporter.start(index, &format!("{}{}", stem, ext));

        match self.rename(source, stem, ext) {
            Ok(target) => {
                let new_name = target
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                reporter.renamed(&new_name, self.config.dry_run);
                if self.config.dry_run {
                    ItemOutcome::Planned(target)
                } else {
                    ItemOutcome::Written(target)
                }
            }
            Err(e) => {
                reporter.failed(&e);
                ItemOutcome::Failed(e)
            }
        }
    }

    /// Derive the new name for `source` and write it, returning the target path.
    fn rename(&self, source: &Path, stem: &str, ext: &str) -> std::result::Result<PathBuf, ItemError> {
        let bytes = std::fs::read(source).map_err(ItemError::Read)?;
        let record = metadata::parse(&bytes)?;
        let key = metadata::validate(&record)?;

        let project = capitalize_first(&transliterate(&key.project)?);
        let new_name = build_filename(&project, key.season, key.episode, stem, ext);
        let target = self.config.output_dir.join(&new_name);
        tracing::debug!("{} -> {}", source.display(), target.display());

        if !self.config.dry_run {
            let output = metadata::serialize(&record).map_err(ItemError::Encode)?;
            std::fs::write(&target, output).map_err(|err| ItemError::Write {
                path: target.clone(),
                source: err,
            })?;
        }

        Ok(target)
    }
}

impl Default for BatchDriver {
    fn default() -> Self {
        Self::new()
    }
}
