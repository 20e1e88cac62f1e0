pub mod answer_key;
pub mod config;
pub mod error;
pub mod exam;

pub use answer_key::{expand_answers, number_answers, ExpandedAnswers, DEFAULT_ANSWER};
pub use config::{ConvertConfig, EmbedConfig, ExamkitConfig, CONFIG_FILE_NAME};
pub use error::{exam_error, ExamError};
pub use exam::EmbeddedExam;
