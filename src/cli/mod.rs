pub mod convert;
pub mod embed;
pub mod extract;
pub mod reference;

use crate::models::{exam_error, ExamError};
use colored::Colorize;

/// Print a failed command the way every examkit command reports failures
///
/// Missing inputs get a plain `Error:` line; everything else is marked ❌
/// with its context chain.
pub fn report_failure(err: &anyhow::Error) {
    tracing::debug!(
        kind = exam_error(err).map(ExamError::label).unwrap_or("internal error"),
        error = ?err,
        "command failed"
    );
    println!("{}", failure_line(err).red());
}

pub fn failure_line(err: &anyhow::Error) -> String {
    match exam_error(err) {
        Some(not_found @ ExamError::NotFound { .. }) => format!("Error: {}", not_found),
        _ => format!("❌ {:#}", err),
    }
}
