//! Integration tests for the examkit binary
//!
//! Covers the shared failure contract (exit status 1 for usage, missing
//! files and validation), the JSON/YAML round trip and in-place embedding.

use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Simulacro</title></head>
<body>
<script type="module">
    import { examService } from './src/examService.js';
    const examData = {
      "title": "placeholder",
      "correctAnswers": []
    };
    examService.setExamData(examData);
</script>
</body>
</html>
"#;

fn examkit(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_examkit"))
        .args(args)
        .current_dir(dir)
        .env_remove("EXAMKIT_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_exam_json(dir: &Path, name: &str) {
    fs::write(
        dir.join(name),
        r#"{"title":"Examen de Admisión","numberOfOptions":4,"sections":[{"title":"Matemáticas","start":1,"end":2},{"title":"Lenguaje","start":3,"end":3}],"correctAnswers":["A","C","B"]}"#,
    )
    .unwrap();
}

// =========================================================================
// Argument handling
// =========================================================================

#[test]
fn test_wrong_argument_count_exits_one_with_usage() {
    let temp_dir = TempDir::new().unwrap();

    for args in [
        vec!["json-to-yaml"],
        vec!["json-to-yaml", "a.json", "b", "c"],
        vec!["yaml-to-json"],
        vec!["embed-data", "exam.json"],
        vec!["reference-linker", "a", "b", "c", "d"],
    ] {
        let output = examkit(temp_dir.path(), &args);
        assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Usage"), "args: {:?}, stderr: {}", args, stderr);
    }

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_help_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let output = examkit(temp_dir.path(), &["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("yaml-to-json"));
}

#[test]
fn test_missing_input_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let output = examkit(temp_dir.path(), &["json-to-yaml", "missing.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Error: JSON file missing.json not found"));
    assert!(!temp_dir.path().join("missing.yaml").exists());
}

// =========================================================================
// JSON <-> YAML
// =========================================================================

#[test]
fn test_json_yaml_json_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    write_exam_json(temp_dir.path(), "exam.json");

    let output = examkit(temp_dir.path(), &["json-to-yaml", "exam.json"]);
    assert_eq!(output.status.code(), Some(0), "{}", stdout(&output));
    assert!(stdout(&output).contains("✅ Converted exam.json to exam.yaml"));

    let yaml = fs::read_to_string(temp_dir.path().join("exam.yaml")).unwrap();
    assert!(yaml.contains("correctAnswers:\n  1: A\n  2: C\n  3: B\n"));
    let title_at = yaml.find("title:").unwrap();
    let answers_at = yaml.find("correctAnswers:").unwrap();
    assert!(title_at < answers_at);

    fs::remove_file(temp_dir.path().join("exam.json")).unwrap();
    let output = examkit(temp_dir.path(), &["yaml-to-json", "exam.yaml"]);
    assert_eq!(output.status.code(), Some(0), "{}", stdout(&output));

    let json = fs::read_to_string(temp_dir.path().join("exam.json")).unwrap();
    assert!(json.starts_with("{\n    \"title\": \"Examen de Admisión\",\n"));
    let doc: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(doc["correctAnswers"], json!(["A", "C", "B"]));
    assert_eq!(doc["sections"][1]["title"], "Lenguaje");
}

#[test]
fn test_yaml_gap_is_filled_and_reported() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("gaps.yaml"),
        "title: T\nnumberOfOptions: 4\nsections: []\ncorrectAnswers:\n  1: B\n  3: C\n",
    )
    .unwrap();

    let output = examkit(temp_dir.path(), &["yaml-to-json", "gaps.yaml"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("set to \"A\": 2"));

    let doc: Value =
        serde_json::from_str(&fs::read_to_string(temp_dir.path().join("gaps.json")).unwrap()).unwrap();
    assert_eq!(doc["correctAnswers"], json!(["B", "A", "C"]));
}

#[test]
fn test_yaml_validation_failures_exit_one() {
    let temp_dir = TempDir::new().unwrap();
    let cases = [
        (
            "no_sections.yaml",
            "title: T\nnumberOfOptions: 4\ncorrectAnswers:\n  1: A\n",
            "Missing required field: sections",
        ),
        (
            "list.yaml",
            "title: T\nnumberOfOptions: 4\nsections: []\ncorrectAnswers:\n  - A\n",
            "correctAnswers must be a dictionary",
        ),
        (
            "empty.yaml",
            "title: T\nnumberOfOptions: 4\nsections: []\ncorrectAnswers: {}\n",
            "correctAnswers cannot be empty",
        ),
    ];

    for (name, content, message) in cases {
        fs::write(temp_dir.path().join(name), content).unwrap();
        let output = examkit(temp_dir.path(), &["yaml-to-json", name]);
        assert_eq!(output.status.code(), Some(1), "{}", name);
        let out = stdout(&output);
        assert!(out.contains("❌ Error converting"), "{}", out);
        assert!(out.contains(message), "{}", out);
        assert!(!temp_dir
            .path()
            .join(Path::new(name).with_extension("json"))
            .exists());
    }
}

#[test]
fn test_config_changes_default_answer() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("examkit.toml"),
        "[convert]\ndefault_answer = \"E\"\njson_indent = 2\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("exam.yaml"),
        "title: T\nnumberOfOptions: 5\nsections: []\ncorrectAnswers:\n  2: D\n",
    )
    .unwrap();

    let output = examkit(temp_dir.path(), &["yaml-to-json", "exam.yaml"]);
    assert_eq!(output.status.code(), Some(0));
    let json = fs::read_to_string(temp_dir.path().join("exam.json")).unwrap();
    assert!(json.contains("\n  \"correctAnswers\": [\n    \"E\",\n    \"D\"\n  ]"));
}

// =========================================================================
// HTML
// =========================================================================

#[test]
fn test_reference_linker_validates_without_touching_page() {
    let temp_dir = TempDir::new().unwrap();
    write_exam_json(temp_dir.path(), "exam.json");
    fs::write(temp_dir.path().join("exam.html"), PAGE).unwrap();

    let output = examkit(temp_dir.path(), &["reference-linker", "exam.json", "exam.html"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("HTML file will load data from: exam.json"));
    assert_eq!(fs::read_to_string(temp_dir.path().join("exam.html")).unwrap(), PAGE);

    fs::write(
        temp_dir.path().join("bad.json"),
        r#"{"title":"T","numberOfOptions":4,"correctAnswers":{"1":"A"}}"#,
    )
    .unwrap();
    let output = examkit(temp_dir.path(), &["reference-linker", "bad.json", "exam.html"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("correctAnswers must be an array"));

    let output = examkit(temp_dir.path(), &["reference-linker", "exam.json", "nope.html"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Error: HTML file nope.html not found"));
}

#[test]
fn test_embed_then_extract() {
    let temp_dir = TempDir::new().unwrap();
    write_exam_json(temp_dir.path(), "exam.json");
    fs::write(temp_dir.path().join("exam.html"), PAGE).unwrap();

    let output = examkit(temp_dir.path(), &["embed-data", "exam.json", "exam.html"]);
    assert_eq!(output.status.code(), Some(0), "{}", stdout(&output));

    let first = fs::read_to_string(temp_dir.path().join("exam.html")).unwrap();
    assert!(first.contains("  \"correctAnswers\": [\"A\", \"C\", \"B\"],\n  \"numberOfQuestions\": 3\n};"));
    assert!(first.contains("\"title\": \"Examen de Admisión\""));
    assert!(first.contains("examService.setExamData(examData);"));

    let output = examkit(temp_dir.path(), &["embed-data", "exam.json", "exam.html"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(fs::read_to_string(temp_dir.path().join("exam.html")).unwrap(), first);

    let output = examkit(
        temp_dir.path(),
        &["extract-data", "exam.html", "-o", "extracted.json"],
    );
    assert_eq!(output.status.code(), Some(0), "{}", stdout(&output));
    let doc: Value = serde_json::from_str(
        &fs::read_to_string(temp_dir.path().join("extracted.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(doc["correctAnswers"], json!(["A", "C", "B"]));
    assert_eq!(doc["numberOfQuestions"], 3);
}

#[test]
fn test_embed_without_block_leaves_page_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    write_exam_json(temp_dir.path(), "exam.json");
    let page = "<html><script>loadExam('exam.json');</script></html>";
    fs::write(temp_dir.path().join("exam.html"), page).unwrap();

    let output = examkit(temp_dir.path(), &["embed-data", "exam.json", "exam.html"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("file left unchanged"));
    assert_eq!(fs::read_to_string(temp_dir.path().join("exam.html")).unwrap(), page);
}

#[test]
fn test_embed_malformed_json_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("exam.json"), "{\"title\": ").unwrap();
    fs::write(temp_dir.path().join("exam.html"), PAGE).unwrap();

    let output = examkit(temp_dir.path(), &["embed-data", "exam.json", "exam.html"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("❌ Error embedding exam data"));
    assert_eq!(fs::read_to_string(temp_dir.path().join("exam.html")).unwrap(), PAGE);
}
