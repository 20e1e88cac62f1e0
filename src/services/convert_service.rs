//! Convert service - Moving exam documents between YAML and JSON
//!
//! The YAML authoring format keys the answer key by question number; the
//! JSON runtime format stores it as an array. Every other field is carried
//! across unchanged and in its original position.

use crate::models::exam::{AUTHORING_FIELDS, CORRECT_ANSWERS};
use crate::models::{expand_answers, number_answers, ConvertConfig, ExamError};
use crate::parser::to_pretty_json;
use crate::services::{exam_service, file_service};
use crate::validator::{answer_mapping, validate_required_fields};
use crate::Result;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;
use std::path::{Path, PathBuf};

/// Result of converting one file
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Length of the answer key, when the document has one in array form
    pub question_count: Option<usize>,
    /// Question numbers that received the default answer
    pub filled: Vec<u64>,
}

/// Convert a JSON exam document into its YAML authoring form
///
/// An array answer key becomes `{1: .., 2: ..}`; a document without one
/// is written as-is.
pub fn json_document_to_yaml(document: &JsonValue) -> Result<String> {
    let mut yaml: YamlValue = serde_yaml::to_value(document)
        .map_err(|e| ExamError::transform(format!("Failed to convert document to YAML: {}", e)))?;

    let answers = yaml
        .get(CORRECT_ANSWERS)
        .and_then(YamlValue::as_sequence)
        .map(|seq| number_answers(seq));
    if let (Some(numbered), Some(root)) = (answers, yaml.as_mapping_mut()) {
        // Existing key: position in the mapping is kept
        root.insert(YamlValue::from(CORRECT_ANSWERS), YamlValue::Mapping(numbered));
    }

    serde_yaml::to_string(&yaml)
        .map_err(|e| ExamError::transform(format!("Failed to serialize YAML: {}", e)).into())
}

/// Convert a YAML authoring document into its JSON runtime form
///
/// Returns the JSON text and the question numbers that were filled with
/// `config.default_answer`.
pub fn yaml_document_to_json(
    mut document: YamlValue,
    config: &ConvertConfig,
) -> Result<(String, Vec<u64>)> {
    validate_required_fields(&document, AUTHORING_FIELDS)?;
    let expanded = expand_answers(answer_mapping(&document)?, &config.default_answer)?;

    if let Some(root) = document.as_mapping_mut() {
        root.insert(
            YamlValue::from(CORRECT_ANSWERS),
            YamlValue::Sequence(expanded.answers),
        );
    }

    let json: JsonValue = serde_json::to_value(&document)
        .map_err(|e| ExamError::transform(format!("Failed to convert document to JSON: {}", e)))?;
    let text = to_pretty_json(&json, config.json_indent)?;
    Ok((text, expanded.filled))
}

/// `json-to-yaml`: write `<base>.yaml` next to `json_path`
pub fn convert_json_to_yaml(json_path: &Path) -> Result<ConversionOutcome> {
    let document = exam_service::load_json_document(json_path)?;
    let question_count = document
        .get(CORRECT_ANSWERS)
        .and_then(JsonValue::as_array)
        .map(Vec::len);

    let yaml = json_document_to_yaml(&document)?;
    let destination = file_service::sibling_with_extension(json_path, "yaml");
    file_service::write_text(&destination, &yaml)?;

    tracing::info!(
        source = %json_path.display(),
        destination = %destination.display(),
        questions = ?question_count,
        "converted JSON to YAML"
    );

    Ok(ConversionOutcome {
        source: json_path.to_path_buf(),
        destination,
        question_count,
        filled: Vec::new(),
    })
}

/// `yaml-to-json`: write `<base>.json` next to `yaml_path`
pub fn convert_yaml_to_json(yaml_path: &Path, config: &ConvertConfig) -> Result<ConversionOutcome> {
    let document = exam_service::load_yaml_document(yaml_path)?;
    let (json, filled) = yaml_document_to_json(document, config)?;

    if !filled.is_empty() {
        tracing::warn!(
            questions = ?filled,
            default = %config.default_answer,
            "answer key has gaps; missing questions were given the default answer"
        );
    }

    let destination = file_service::sibling_with_extension(yaml_path, "json");
    file_service::write_text(&destination, &json)?;

    let question_count = serde_json::from_str::<JsonValue>(&json)
        .ok()
        .and_then(|doc| doc.get(CORRECT_ANSWERS).and_then(JsonValue::as_array).map(Vec::len));

    tracing::info!(
        source = %yaml_path.display(),
        destination = %destination.display(),
        questions = ?question_count,
        "converted YAML to JSON"
    );

    Ok(ConversionOutcome {
        source: yaml_path.to_path_buf(),
        destination,
        question_count,
        filled,
    })
}
