use serde::Serialize;
use serde_json::Value as JsonValue;

pub const TITLE: &str = "title";
pub const NUMBER_OF_OPTIONS: &str = "numberOfOptions";
pub const SECTIONS: &str = "sections";
pub const CORRECT_ANSWERS: &str = "correctAnswers";
pub const NUMBER_OF_QUESTIONS: &str = "numberOfQuestions";

/// Fields a page needs before it can load exam data from a JSON file
pub const REFERENCE_FIELDS: &[&str] = &[TITLE, NUMBER_OF_OPTIONS, CORRECT_ANSWERS];

/// Fields the embedded data object is built from
pub const EMBED_FIELDS: &[&str] = &[TITLE, NUMBER_OF_OPTIONS, SECTIONS, CORRECT_ANSWERS];

/// Fields an authored YAML exam must carry
pub const AUTHORING_FIELDS: &[&str] = &[TITLE, NUMBER_OF_OPTIONS, SECTIONS, CORRECT_ANSWERS];

/// The exam data object as it is embedded into a page
///
/// Field order here is the order of the rendered literal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedExam<'a> {
    pub title: &'a JsonValue,
    pub number_of_options: &'a JsonValue,
    pub sections: &'a JsonValue,
    pub correct_answers: &'a [JsonValue],
    pub number_of_questions: usize,
}

impl<'a> EmbeddedExam<'a> {
    /// Project a validated JSON exam document; `numberOfQuestions` is recomputed
    pub fn project(
        document: &'a JsonValue,
        correct_answers: &'a [JsonValue],
    ) -> Option<EmbeddedExam<'a>> {
        Some(EmbeddedExam {
            title: document.get(TITLE)?,
            number_of_options: document.get(NUMBER_OF_OPTIONS)?,
            sections: document.get(SECTIONS)?,
            correct_answers,
            number_of_questions: correct_answers.len(),
        })
    }
}
