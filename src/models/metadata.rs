//! Sidecar metadata data model.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One media item's sidecar metadata.
///
/// Field order here is the output order. Fields outside the schema land in
/// `extra` and are written back after the known ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub project: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub season: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub season_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub episode: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub episode_global: i64,
    /// Plain string in some sources, a localized object in others.
    #[serde(default)]
    pub title: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pg: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: MediaFiles,
    #[serde(default, deserialize_with = "null_as_default")]
    pub provider_id: ProviderIds,
    #[serde(default, deserialize_with = "null_as_default")]
    pub efir_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub countries: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub generation_date: String,
    /// Fields not covered by the schema.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Media file references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaFiles {
    /// A single filename or a list of renditions.
    #[serde(default)]
    pub mp4: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub md5: String,
    #[serde(default)]
    pub mxf: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Identifiers assigned by the content provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderIds {
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub season_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub program_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The validated subset needed to derive a filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameKey {
    pub project: String,
    pub season: u32,
    pub episode: u32,
}

/// Treat an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
