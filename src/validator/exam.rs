//! Schema checks for exam documents
//!
//! Only structure is checked here. Whether an answer is right, or a
//! question makes sense, is not this crate's business.

use crate::models::exam::{CORRECT_ANSWERS, NUMBER_OF_QUESTIONS};
use crate::models::ExamError;
use anyhow::Result;
use serde_json::Value as JsonValue;
use serde_yaml::{Mapping, Value as YamlValue};

/// Read access to the top-level fields of a loaded document
pub trait ExamSource {
    /// Whether the document root is a key/value object
    fn is_object(&self) -> bool;

    /// Whether the root object carries `field`
    fn has_field(&self, field: &str) -> bool;
}

impl ExamSource for JsonValue {
    fn is_object(&self) -> bool {
        self.is_object()
    }

    fn has_field(&self, field: &str) -> bool {
        self.get(field).is_some()
    }
}

impl ExamSource for YamlValue {
    fn is_object(&self) -> bool {
        self.is_mapping()
    }

    fn has_field(&self, field: &str) -> bool {
        self.get(field).is_some()
    }
}

/// Fail on the first of `fields` the document lacks
pub fn validate_required_fields<D: ExamSource + ?Sized>(document: &D, fields: &[&str]) -> Result<()> {
    if !document.is_object() {
        return Err(ExamError::validation("Exam document must be an object").into());
    }

    for field in fields {
        if !document.has_field(field) {
            return Err(ExamError::validation(format!("Missing required field: {}", field)).into());
        }
    }
    Ok(())
}

/// The answer key of a JSON document, which must be in array form
pub fn answer_array(document: &JsonValue) -> Result<&Vec<JsonValue>> {
    document
        .get(CORRECT_ANSWERS)
        .and_then(JsonValue::as_array)
        .ok_or_else(|| ExamError::validation("correctAnswers must be an array").into())
}

/// The answer key of a YAML document, which must be in mapping form
pub fn answer_mapping(document: &YamlValue) -> Result<&Mapping> {
    let mapping = document
        .get(CORRECT_ANSWERS)
        .and_then(YamlValue::as_mapping)
        .ok_or_else(|| {
            ExamError::validation("correctAnswers must be a dictionary with question numbers as keys")
        })?;

    if mapping.is_empty() {
        return Err(ExamError::validation("correctAnswers cannot be empty").into());
    }
    Ok(mapping)
}

/// A stated `numberOfQuestions` must agree with the answer key length
pub fn check_question_count(document: &JsonValue, answer_count: usize) -> Result<()> {
    let Some(stated) = document.get(NUMBER_OF_QUESTIONS) else {
        return Ok(());
    };

    if stated.as_u64() != Some(answer_count as u64) {
        return Err(ExamError::validation(format!(
            "Provided numberOfQuestions ({}) does not match correctAnswers length ({})",
            stated, answer_count
        ))
        .into());
    }
    Ok(())
}

/// Checks a JSON document must pass before a page may load it
///
/// Returns the number of questions in the answer key.
pub fn validate_runtime_document(document: &JsonValue, fields: &[&str]) -> Result<usize> {
    validate_required_fields(document, fields)?;
    let answers = answer_array(document)?;
    check_question_count(document, answers.len())?;
    Ok(answers.len())
}
