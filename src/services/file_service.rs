//! File service - Reading, writing and locating exam files

use crate::models::ExamError;
use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Fail with `NotFound` unless `path` exists
pub fn ensure_exists(path: &Path, kind: &'static str) -> Result<()> {
    if !path.exists() {
        return Err(ExamError::not_found(kind, path).into());
    }
    Ok(())
}

/// Same directory and base name, different extension (`exam.json` -> `exam.yaml`)
pub fn sibling_with_extension(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}

/// Display name of a file for status messages
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Write `content`, replacing whatever is at `path`
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sibling_replaces_last_extension() {
        assert_eq!(
            sibling_with_extension(Path::new("exams/unit.1.json"), "yaml"),
            PathBuf::from("exams/unit.1.yaml")
        );
        assert_eq!(
            sibling_with_extension(Path::new("exams/final"), "json"),
            PathBuf::from("exams/final.json")
        );
    }

    #[test]
    fn test_ensure_exists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("exam.json");

        let err = ensure_exists(&path, "JSON").unwrap_err();
        assert!(matches!(
            crate::models::exam_error(&err),
            Some(ExamError::NotFound { kind: "JSON", .. })
        ));

        std::fs::write(&path, "{}").unwrap();
        ensure_exists(&path, "JSON").unwrap();
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("page.html");
        write_text(&path, "first version, longer").unwrap();
        write_text(&path, "second").unwrap();
        assert_eq!(read_text(&path).unwrap(), "second");
        assert_eq!(display_name(&path), "page.html");
    }
}
