//! Error types for the renamer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. Any of these aborts the whole run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot read path list {path}: {source}")]
    ListFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path list is empty: {0}")]
    EmptyPathList(PathBuf),

    #[error("Invalid config: {0}")]
    Config(String),
}

/// Errors scoped to a single batch item. The item is skipped, the batch goes on.
#[derive(Error, Debug)]
pub enum ItemError {
    #[error("Read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Translit(#[from] TranslitError),

    #[error("Encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Write failed for {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ItemError {
    /// Short name of the failure class, used in summaries and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ItemError::Read(_) => "read",
            ItemError::Parse(_) => "parse",
            ItemError::Validation(_) => "validation",
            ItemError::Translit(_) => "translit",
            ItemError::Encode(_) => "encode",
            ItemError::Write { .. } => "write",
        }
    }
}

/// Metadata document could not be decoded.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A required metadata field is missing or out of range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("JSON: project is null")]
    MissingProject,

    #[error("JSON: season is null or invalid ({0})")]
    InvalidSeason(i64),

    #[error("JSON: episode is null or invalid ({0})")]
    InvalidEpisode(i64),
}

/// Project name cannot be rendered as a Latin identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslitError {
    #[error("Unsupported character {ch:?} at position {position}")]
    UnsupportedCharacter { ch: char, position: usize },

    #[error("Transliteration produced an empty name")]
    Empty,
}
