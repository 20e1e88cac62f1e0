use crate::models::EmbedConfig;
use crate::services::{embed_service, file_service};
use crate::Result;
use anyhow::Context;
use colored::Colorize;
use std::path::Path;

pub fn run(json_file: &Path, html_file: &Path, config: &EmbedConfig) -> Result<()> {
    let outcome = embed_service::embed_exam_data(json_file, html_file, config)
        .context("Error embedding exam data")?;

    let html_name = file_service::display_name(html_file);
    if outcome.replaced {
        println!(
            "{}",
            format!(
                "✅ Embedded {} into {} ({} questions)",
                file_service::display_name(json_file),
                html_name,
                outcome.question_count
            )
            .green()
        );
    } else {
        println!(
            "{}",
            format!(
                "⚠ No `const {} = {{ ... }};` block in {}; file left unchanged",
                config.variable, html_name
            )
            .yellow()
        );
    }
    Ok(())
}
