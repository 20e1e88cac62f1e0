//! Exam service - Loading exam documents from disk
//!
//! JSON documents load into an insertion-ordered `serde_json::Value`,
//! YAML documents into `serde_yaml::Value`; both keep field order.

use crate::models::ExamError;
use crate::services::file_service;
use crate::Result;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;
use std::path::Path;

/// Read and parse a JSON exam document
pub fn load_json_document(path: &Path) -> Result<JsonValue> {
    file_service::ensure_exists(path, "JSON")?;
    let content = file_service::read_text(path)?;
    let document = parse_json_document(&content)
        .map_err(|e| ExamError::transform(format!("Invalid JSON in {}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "loaded JSON exam document");
    Ok(document)
}

/// Read and parse a YAML exam document
pub fn load_yaml_document(path: &Path) -> Result<YamlValue> {
    file_service::ensure_exists(path, "YAML")?;
    let content = file_service::read_text(path)?;
    let document = parse_yaml_document(&content)
        .map_err(|e| ExamError::transform(format!("Invalid YAML in {}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "loaded YAML exam document");
    Ok(document)
}

pub fn parse_json_document(content: &str) -> std::result::Result<JsonValue, serde_json::Error> {
    serde_json::from_str(strip_bom(content))
}

pub fn parse_yaml_document(content: &str) -> std::result::Result<YamlValue, serde_yaml::Error> {
    serde_yaml::from_str(strip_bom(content))
}

fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{FEFF}').unwrap_or(content)
}
