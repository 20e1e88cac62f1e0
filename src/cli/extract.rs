use crate::models::EmbedConfig;
use crate::parser::to_pretty_json;
use crate::services::{embed_service, file_service};
use crate::Result;
use anyhow::Context;
use colored::Colorize;
use std::path::Path;

/// Print the embedded document, or write it to `output`
pub fn run(html_file: &Path, output: Option<&Path>, config: &EmbedConfig, json_indent: usize) -> Result<()> {
    let document = embed_service::extract_exam_data(html_file, config)
        .with_context(|| format!("Error extracting exam data from {}", html_file.display()))?;
    let json = to_pretty_json(&document, json_indent)?;

    match output {
        Some(path) => {
            file_service::write_text(path, &json)?;
            println!(
                "{}",
                format!(
                    "✅ Extracted {} data from {} to {}",
                    config.variable,
                    html_file.display(),
                    path.display()
                )
                .green()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}
