//! Embed service - Connecting exam data to HTML pages
//!
//! A page either references an external JSON file (checked, never
//! modified) or carries the data inline as `const examData = {...};`,
//! which `embed_exam_data` rewrites and `extract_exam_data` reads back.

use crate::models::exam::{EMBED_FIELDS, REFERENCE_FIELDS};
use crate::models::{EmbedConfig, EmbeddedExam, ExamError};
use crate::parser::{render_exam_literal, DataBlock};
use crate::services::{exam_service, file_service};
use crate::validator::{answer_array, validate_required_fields, validate_runtime_document};
use crate::Result;
use serde_json::Value as JsonValue;
use std::path::Path;

/// Outcome of checking a page that loads its data from a JSON file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceReport {
    pub json_name: String,
    pub question_count: usize,
}

/// Outcome of embedding data into a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOutcome {
    /// False when the page had no data block and was left untouched
    pub replaced: bool,
    pub question_count: usize,
}

/// `reference-linker`: validate the JSON a page will load; the page is not modified
pub fn link_reference(json_path: &Path, html_path: &Path) -> Result<ReferenceReport> {
    file_service::ensure_exists(json_path, "JSON")?;
    file_service::ensure_exists(html_path, "HTML")?;

    let document = exam_service::load_json_document(json_path)?;
    let question_count = validate_runtime_document(&document, REFERENCE_FIELDS)?;

    // The page only has to be readable
    file_service::read_text(html_path)?;

    tracing::debug!(
        json = %json_path.display(),
        html = %html_path.display(),
        questions = question_count,
        "validated referenced exam data"
    );

    Ok(ReferenceReport {
        json_name: file_service::display_name(json_path),
        question_count,
    })
}

/// Answer tokens as JSON strings; numbers and booleans are stringified
pub fn answer_tokens(answers: &[JsonValue]) -> Result<Vec<JsonValue>> {
    answers
        .iter()
        .enumerate()
        .map(|(idx, answer)| match answer {
            JsonValue::String(_) => Ok(answer.clone()),
            JsonValue::Number(n) => Ok(JsonValue::String(n.to_string())),
            JsonValue::Bool(b) => Ok(JsonValue::String(b.to_string())),
            _ => Err(anyhow::Error::from(ExamError::validation(format!(
                "correctAnswers entry for question {} is not an answer token: {}",
                idx + 1,
                answer
            )))),
        })
        .collect()
}

/// Build the object literal embedded for `document`
///
/// Returns the literal and the recomputed question count.
pub fn build_exam_literal(document: &JsonValue, indent: usize) -> Result<(String, usize)> {
    validate_required_fields(document, EMBED_FIELDS)?;
    let answers = answer_tokens(answer_array(document)?)?;

    let exam = EmbeddedExam::project(document, &answers)
        .ok_or_else(|| ExamError::transform("Failed to project exam data"))?;
    let literal = render_exam_literal(&exam, indent)?;
    Ok((literal, exam.number_of_questions))
}

/// Rewrite the data block of `html`; `None` when the page has no block
pub fn embed_into_html(
    html: &str,
    document: &JsonValue,
    config: &EmbedConfig,
) -> Result<(Option<String>, usize)> {
    let block = DataBlock::new(&config.variable)?;
    let (literal, question_count) = build_exam_literal(document, config.indent)?;
    Ok((block.replace(html, &literal), question_count))
}

/// `embed-data`: replace the page's data block with the JSON document
pub fn embed_exam_data(json_path: &Path, html_path: &Path, config: &EmbedConfig) -> Result<EmbedOutcome> {
    file_service::ensure_exists(json_path, "JSON")?;
    file_service::ensure_exists(html_path, "HTML")?;

    let document = exam_service::load_json_document(json_path)?;
    let html = file_service::read_text(html_path)?;

    let (rewritten, question_count) = embed_into_html(&html, &document, config)?;
    let Some(rewritten) = rewritten else {
        tracing::warn!(
            html = %html_path.display(),
            variable = %config.variable,
            "no data block found; page left unchanged"
        );
        return Ok(EmbedOutcome {
            replaced: false,
            question_count,
        });
    };

    file_service::write_text(html_path, &rewritten)?;
    tracing::info!(
        html = %html_path.display(),
        questions = question_count,
        "embedded exam data"
    );

    Ok(EmbedOutcome {
        replaced: true,
        question_count,
    })
}

/// Parse the data block of `html` back into a JSON document
pub fn extract_from_html(html: &str, config: &EmbedConfig) -> Result<JsonValue> {
    let block = DataBlock::new(&config.variable)?;
    let literal = block.literal(html).ok_or_else(|| {
        ExamError::validation(format!("No `const {} = {{ ... }};` block found", block.variable()))
    })?;

    let document = exam_service::parse_json_document(literal).map_err(|e| {
        ExamError::validation(format!("Embedded {} is not valid JSON: {}", block.variable(), e))
    })?;
    validate_runtime_document(&document, REFERENCE_FIELDS)?;
    Ok(document)
}

/// `extract-data`: read the embedded document out of a page
pub fn extract_exam_data(html_path: &Path, config: &EmbedConfig) -> Result<JsonValue> {
    file_service::ensure_exists(html_path, "HTML")?;
    let html = file_service::read_text(html_path)?;
    let document = extract_from_html(&html, config)?;
    tracing::debug!(html = %html_path.display(), "extracted embedded exam data");
    Ok(document)
}
