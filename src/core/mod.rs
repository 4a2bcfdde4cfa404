//! Core business logic modules.

pub mod batch;
pub mod metadata;
pub mod progress;
