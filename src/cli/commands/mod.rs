//! CLI command implementations.

pub mod rename;
