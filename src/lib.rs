// Examkit - exam answer-key conversion tools
// Moves exam data between YAML authoring files, JSON runtime files and HTML pages

pub mod cli;
pub mod logging;
pub mod models;
pub mod parser;
pub mod services;
pub mod validator;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{ExamError, ExamkitConfig};
