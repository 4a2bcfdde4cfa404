//! Canonical filename generator.

/// Build the canonical sidecar filename.
///
/// Format: `${project}_s${season2}e${episode2}_${stem}${ext}`
///
/// Season and episode are padded to two digits and grow wider when needed.
/// `project` is expected to be transliterated and capitalized already, and
/// `ext` carries its leading dot (or is empty).
pub fn build_filename(project: &str, season: u32, episode: u32, stem: &str, ext: &str) -> String {
    format!("{}_s{:02}e{:02}_{}{}", project, season, episode, stem, ext)
}

/// Split the final path component into stem and extension.
///
/// Both `/` and `\` are treated as separators so lists produced on Windows
/// work too. The extension starts at the last dot and keeps it.
pub fn split_file_name(path: &str) -> (&str, &str) {
    let trimmed = path.trim_end_matches(['/', '\\']);
    let name = match trimmed.rfind(['/', '\\']) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    };

    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}
