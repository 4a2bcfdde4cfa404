//! File system utilities.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Read a newline-delimited path list, skipping blank lines.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; the
/// affected entry then fails on its own when it is read.
pub fn read_path_list(path: &Path) -> Result<Vec<PathBuf>> {
    let bytes = std::fs::read(path).map_err(|source| Error::ListFile {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let paths: Vec<PathBuf> = content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(PathBuf::from)
        .collect();

    if paths.is_empty() {
        return Err(Error::EmptyPathList(path.to_path_buf()));
    }
    Ok(paths)
}
