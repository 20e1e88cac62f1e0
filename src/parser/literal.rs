//! Rendering of the embedded exam literal

use crate::models::exam::CORRECT_ANSWERS;
use crate::models::EmbeddedExam;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value as JsonValue;

/// Pretty-print the exam object, then put its answer key on one line
pub fn render_exam_literal(exam: &EmbeddedExam<'_>, indent: usize) -> Result<String> {
    let pretty = to_pretty_json(exam, indent)?;
    collapse_answer_array(&pretty, exam.correct_answers, indent)
}

/// Serialize `value` with `indent` spaces per level; non-ASCII stays verbatim
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize exam data")?;
    String::from_utf8(buf).context("Serialized exam data is not UTF-8")
}

/// Render answers as `["A", "B", ...]`
pub fn single_line_answers(answers: &[JsonValue]) -> String {
    let tokens: Vec<String> = answers.iter().map(JsonValue::to_string).collect();
    format!("[{}]", tokens.join(", "))
}

/// Replace the multi-line top-level `correctAnswers` array with one line
///
/// Entries are answer tokens, so no raw newline or nested array can sit
/// between the opening marker and the first closing bracket at `indent`.
pub fn collapse_answer_array(pretty: &str, answers: &[JsonValue], indent: usize) -> Result<String> {
    let pad = " ".repeat(indent);
    let start_marker = format!("\n{}\"{}\": [\n", pad, CORRECT_ANSWERS);
    let end_marker = format!("\n{}]", pad);

    let Some(start) = pretty.find(&start_marker) else {
        // Empty arrays already render as `[]`
        return Ok(pretty.to_string());
    };
    let body_start = start + start_marker.len() - 1;
    let end = pretty[body_start..]
        .find(&end_marker)
        .map(|offset| body_start + offset + end_marker.len())
        .context("Unterminated correctAnswers array in serialized exam data")?;

    let mut collapsed = String::with_capacity(pretty.len());
    collapsed.push_str(&pretty[..start]);
    collapsed.push_str(&format!(
        "\n{}\"{}\": {}",
        pad,
        CORRECT_ANSWERS,
        single_line_answers(answers)
    ));
    collapsed.push_str(&pretty[end..]);
    Ok(collapsed)
}
