pub mod exam;

pub use exam::{
    answer_array, answer_mapping, check_question_count, validate_required_fields,
    validate_runtime_document, ExamSource,
};
