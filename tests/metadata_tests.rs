//! Integration tests for sidecar metadata parsing and serialization.
//!
//! Tests cover:
//! - Schema-ordered, indented output
//! - Flexible fields kept verbatim
//! - Unknown fields preserved
//! - Re-serialization idempotence

use serde_json::json;
use tnt_renamer::core::metadata::{parse, serialize};

const SAMPLE: &str = r#"{
  "generation_date": "2019-03-01T10:00:00",
  "episode": 3,
  "project": "Кот",
  "season": 1,
  "title": {"ru": "Серия 3", "en": "Episode 3"},
  "files": {"mp4": ["a.mp4", "b.mp4"], "md5": "abc", "mxf": "a.mxf", "srt": "a.srt"},
  "provider_id": {"project_id": 12, "season_id": 34, "program_id": "p", "content_id": "c"},
  "countries": ["RU", "BY"],
  "rating": 7.5
}"#;

// ========== ORDERING AND FORMAT TESTS ==========

#[test]
fn test_serialize_uses_schema_order() {
    let record = parse(SAMPLE.as_bytes()).unwrap();
    let out = String::from_utf8(serialize(&record).unwrap()).unwrap();

    let keys = [
        "\"project\"",
        "\"project_en\"",
        "\"season\"",
        "\"season_title\"",
        "\"episode\"",
        "\"episode_global\"",
        "\"title\"",
        "\"description\"",
        "\"pg\"",
        "\"duration\"",
        "\"files\"",
        "\"provider_id\"",
        "\"efir_date\"",
        "\"start_date\"",
        "\"end_date\"",
        "\"countries\"",
        "\"generation_date\"",
        "\"rating\"",
    ];
    let positions: Vec<usize> = keys
        .iter()
        .map(|k| out.find(k).unwrap_or_else(|| panic!("missing {}", k)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", out);
}

#[test]
fn test_serialize_two_space_indent() {
    let record = parse(br#"{"project": "Kot", "season": 1, "episode": 2}"#).unwrap();
    let out = String::from_utf8(serialize(&record).unwrap()).unwrap();

    assert!(out.starts_with("{\n  \"project\": \"Kot\",\n  \"project_en\": \"\",\n"));
    assert!(out.contains("\n  \"files\": {\n    \"mp4\": null,\n"));
    assert!(out.ends_with('}'));
}

// ========== PRESERVATION TESTS ==========

#[test]
fn test_flexible_fields_preserved() {
    let record = parse(SAMPLE.as_bytes()).unwrap();
    assert_eq!(record.title, json!({"ru": "Серия 3", "en": "Episode 3"}));
    assert_eq!(record.files.mp4, json!(["a.mp4", "b.mp4"]));
    assert_eq!(record.files.mxf, json!("a.mxf"));

    let reparsed = parse(&serialize(&record).unwrap()).unwrap();
    assert_eq!(reparsed, record);
}

#[test]
fn test_unknown_fields_preserved() {
    let record = parse(SAMPLE.as_bytes()).unwrap();
    assert_eq!(record.extra.get("rating"), Some(&json!(7.5)));
    assert_eq!(record.files.extra.get("srt"), Some(&json!("a.srt")));

    let value: serde_json::Value = serde_json::from_slice(&serialize(&record).unwrap()).unwrap();
    assert_eq!(value["rating"], json!(7.5));
    assert_eq!(value["files"]["srt"], json!("a.srt"));
    assert_eq!(value["provider_id"]["season_id"], json!(34));
    assert_eq!(value["countries"], json!(["RU", "BY"]));
}

#[test]
fn test_missing_known_fields_emitted_with_zero_values() {
    let record = parse(br#"{"project": "Kot"}"#).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&serialize(&record).unwrap()).unwrap();

    assert_eq!(value["season"], json!(0));
    assert_eq!(value["title"], json!(null));
    assert_eq!(value["countries"], json!([]));
    assert_eq!(value["provider_id"]["program_id"], json!(""));
}

// ========== ROUND TRIP TESTS ==========

#[test]
fn test_reserialization_is_idempotent() {
    let first = serialize(&parse(SAMPLE.as_bytes()).unwrap()).unwrap();
    let second = serialize(&parse(&first).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parse_rejects_non_json() {
    assert!(parse(b"not json at all").is_err());
    assert!(parse(b"").is_err());
    assert!(parse(br#"{"project": "Kot",}"#).is_err());
}
