//! Batch report data model.

use crate::error::ItemError;
use std::path::PathBuf;

/// Outcome of one batch item.
#[derive(Debug)]
pub enum ItemOutcome {
    /// Output file was written.
    Written(PathBuf),
    /// Dry run: the file would have been written here.
    Planned(PathBuf),
    Failed(ItemError),
}

/// One entry of the path list and what happened to it.
#[derive(Debug)]
pub struct BatchItem {
    /// 0-based position in the path list (blank lines excluded).
    pub index: usize,
    /// Path as listed.
    pub source: PathBuf,
    pub outcome: ItemOutcome,
}

impl BatchItem {
    pub fn is_success(&self) -> bool {
        !matches!(self.outcome, ItemOutcome::Failed(_))
    }

    pub fn error(&self) -> Option<&ItemError> {
        match &self.outcome {
            ItemOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Where the output went (or would go).
    pub fn output(&self) -> Option<&PathBuf> {
        match &self.outcome {
            ItemOutcome::Written(p) | ItemOutcome::Planned(p) => Some(p),
            ItemOutcome::Failed(_) => None,
        }
    }
}

/// Result of a whole batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub items: Vec<BatchItem>,
}

impl BatchReport {
    pub fn success_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_success()).count()
    }

    pub fn error_count(&self) -> usize {
        self.items.len() - self.success_count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.items.iter().all(BatchItem::is_success)
    }
}
