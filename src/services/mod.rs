//! Service layer for examkit
//!
//! Business logic behind the CLI commands. Each command handler is a
//! thin wrapper that prints status around one of these calls.

pub mod convert_service;
pub mod embed_service;
pub mod exam_service;
pub mod file_service;

// Re-export commonly used types
pub use convert_service::{
    convert_json_to_yaml, convert_yaml_to_json, json_document_to_yaml, yaml_document_to_json,
    ConversionOutcome,
};
pub use embed_service::{
    embed_exam_data, embed_into_html, extract_exam_data, extract_from_html, link_reference,
    EmbedOutcome, ReferenceReport,
};
pub use exam_service::{load_json_document, load_yaml_document};
