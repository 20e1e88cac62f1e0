pub mod html;
pub mod literal;

pub use html::DataBlock;
pub use literal::{collapse_answer_array, render_exam_literal, single_line_answers, to_pretty_json};
