//! Data models.

pub mod config;
pub mod metadata;
pub mod report;
