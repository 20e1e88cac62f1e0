use crate::models::{ExamError, DEFAULT_ANSWER};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File looked up in the working directory when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "examkit.toml";

// =============================================================================
// Examkit Configuration
// =============================================================================

/// Settings for the YAML/JSON converters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Token used for question numbers missing from an answer-key mapping
    pub default_answer: String,

    /// Indentation width of the JSON written by `yaml-to-json`
    pub json_indent: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            default_answer: DEFAULT_ANSWER.to_string(),
            json_indent: 4,
        }
    }
}

/// Settings for embedding data into (and extracting it from) HTML pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    /// Name of the `const` the page assigns its exam data to
    pub variable: String,

    /// Indentation width of the embedded literal
    pub indent: usize,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            variable: "examData".to_string(),
            indent: 2,
        }
    }
}

/// Examkit configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamkitConfig {
    #[serde(default)]
    pub convert: ConvertConfig,

    #[serde(default)]
    pub embed: EmbedConfig,
}

impl ExamkitConfig {
    /// Load `examkit.toml` from the project root, falling back to defaults
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = project_root.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Load an explicitly named config file; it must exist
    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            return Err(ExamError::not_found("Config", config_path).into());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: ExamkitConfig = toml::from_str(&content).map_err(|e| {
            ExamError::validation(format!("Invalid config {}: {}", config_path.display(), e))
        })?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.convert.default_answer.is_empty() {
            return Err(ExamError::validation("convert.default_answer cannot be empty").into());
        }
        if self.embed.variable.is_empty()
            || !self
                .embed
                .variable
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        {
            return Err(ExamError::validation(format!(
                "embed.variable must be a JavaScript identifier, got '{}'",
                self.embed.variable
            ))
            .into());
        }
        Ok(())
    }
}
