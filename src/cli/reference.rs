use crate::services::embed_service;
use crate::Result;
use anyhow::Context;
use colored::Colorize;
use std::path::Path;

pub fn run(json_file: &Path, html_file: &Path) -> Result<()> {
    let report = embed_service::link_reference(json_file, html_file)
        .context("Error creating exam data reference")?;

    println!(
        "{}",
        format!("✅ Exam data reference created for {}", report.json_name).green()
    );
    println!("   HTML file will load data from: {}", report.json_name);
    println!(
        "   {}",
        format!("{} questions in answer key", report.question_count).bright_black()
    );
    Ok(())
}
