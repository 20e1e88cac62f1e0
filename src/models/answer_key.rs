//! Answer key representations
//!
//! The authoring format keys answers by question number (`1: A`), the
//! runtime format stores them positionally (`["A", ...]`). Position `i`
//! of the array always holds the answer to question `i + 1`.

use crate::models::ExamError;
use serde_yaml::{Mapping, Value};

/// Default token for question numbers absent from a mapping
pub const DEFAULT_ANSWER: &str = "A";

/// Upper bound on question numbers accepted from a mapping
pub const MAX_QUESTION_NUMBER: u64 = 10_000;

/// Answer array rebuilt from a numbered mapping
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedAnswers {
    /// Answers in question order, length == highest question number
    pub answers: Vec<Value>,
    /// Question numbers that had no entry and received the default token
    pub filled: Vec<u64>,
}

/// Convert the array form into a 1-indexed mapping
pub fn number_answers(answers: &[Value]) -> Mapping {
    answers
        .iter()
        .enumerate()
        .map(|(idx, answer)| (Value::Number((idx as u64 + 1).into()), answer.clone()))
        .collect()
}

/// Convert a numbered mapping back into the array form
///
/// Every number in `1..=max_key` gets the mapped answer, or
/// `default_answer` when the mapping skips it.
pub fn expand_answers(numbered: &Mapping, default_answer: &str) -> anyhow::Result<ExpandedAnswers> {
    if numbered.is_empty() {
        return Err(ExamError::validation("correctAnswers cannot be empty").into());
    }

    let mut by_number: Vec<(u64, &Value)> = Vec::with_capacity(numbered.len());
    for (key, answer) in numbered {
        let number = question_number(key)?;
        if by_number.iter().any(|(seen, _)| *seen == number) {
            return Err(ExamError::validation(format!(
                "Question {} appears more than once in correctAnswers",
                number
            ))
            .into());
        }
        by_number.push((number, answer));
    }

    let max_key = by_number.iter().map(|(n, _)| *n).max().unwrap_or(0);
    let mut slots: Vec<Option<&Value>> = vec![None; max_key as usize];
    for (number, answer) in by_number {
        slots[(number - 1) as usize] = Some(answer);
    }

    let mut filled = Vec::new();
    let answers = slots
        .into_iter()
        .enumerate()
        .map(|(idx, slot)| match slot {
            Some(answer) => answer.clone(),
            None => {
                filled.push(idx as u64 + 1);
                Value::String(default_answer.to_string())
            }
        })
        .collect();

    Ok(ExpandedAnswers { answers, filled })
}

/// Read a mapping key as a positive question number
///
/// Accepts integer scalars and digit-only strings (`"12"`).
fn question_number(key: &Value) -> anyhow::Result<u64> {
    let number = match key {
        Value::Number(n) => n.as_u64(),
        Value::String(s) if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) => {
            s.parse::<u64>().ok()
        }
        _ => None,
    };

    match number {
        Some(n) if (1..=MAX_QUESTION_NUMBER).contains(&n) => Ok(n),
        Some(n) if n > MAX_QUESTION_NUMBER => Err(ExamError::validation(format!(
            "Question number {} exceeds the limit of {}",
            n, MAX_QUESTION_NUMBER
        ))
        .into()),
        _ => Err(ExamError::validation(format!(
            "correctAnswers keys must be positive question numbers, got {}",
            describe_key(key)
        ))
        .into()),
    }
}

fn describe_key(key: &Value) -> String {
    match serde_yaml::to_string(key) {
        Ok(s) => s.trim_end().to_string(),
        Err(_) => format!("{:?}", key),
    }
}
