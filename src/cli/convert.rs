use crate::models::ConvertConfig;
use crate::services::convert_service;
use crate::Result;
use anyhow::Context;
use colored::Colorize;
use std::path::Path;

pub fn run_json_to_yaml(json_file: &Path) -> Result<()> {
    let outcome = convert_service::convert_json_to_yaml(json_file)
        .with_context(|| format!("Error converting {}", json_file.display()))?;

    println!(
        "{}",
        format!(
            "✅ Converted {} to {}",
            outcome.source.display(),
            outcome.destination.display()
        )
        .green()
    );
    Ok(())
}

pub fn run_yaml_to_json(yaml_file: &Path, config: &ConvertConfig) -> Result<()> {
    let outcome = convert_service::convert_yaml_to_json(yaml_file, config)
        .with_context(|| format!("Error converting {}", yaml_file.display()))?;

    println!(
        "{}",
        format!(
            "✅ Converted {} to {}",
            outcome.source.display(),
            outcome.destination.display()
        )
        .green()
    );
    if !outcome.filled.is_empty() {
        let numbers: Vec<String> = outcome.filled.iter().map(u64::to_string).collect();
        println!(
            "   {} Questions without an answer were set to \"{}\": {}",
            "⚠".yellow(),
            config.default_answer,
            numbers.join(", ")
        );
    }
    Ok(())
}
