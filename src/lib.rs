//! tnt renamer library
//!
//! Renames media metadata sidecar files to `Project_sSSeEE_stem.ext`, where the
//! project name is transliterated to Latin.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
