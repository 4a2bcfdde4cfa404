//! Sidecar metadata decoding, encoding and validation.

use crate::error::{ParseError, ValidationError};
use crate::models::metadata::{MetadataRecord, RenameKey};

/// Decode a sidecar JSON document.
pub fn parse(bytes: &[u8]) -> Result<MetadataRecord, ParseError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode a record as 2-space indented JSON in schema order.
pub fn serialize(record: &MetadataRecord) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec_pretty(record)
}

/// Check the fields the filename is derived from.
///
/// Project is checked first, then season, then episode.
pub fn validate(record: &MetadataRecord) -> Result<RenameKey, ValidationError> {
    if record.project.is_empty() {
        return Err(ValidationError::MissingProject);
    }
    let season = positive(record.season).ok_or(ValidationError::InvalidSeason(record.season))?;
    let episode =
        positive(record.episode).ok_or(ValidationError::InvalidEpisode(record.episode))?;

    Ok(RenameKey {
        project: record.project.clone(),
        season,
        episode,
    })
}

fn positive(n: i64) -> Option<u32> {
    u32::try_from(n).ok().filter(|&n| n >= 1)
}
