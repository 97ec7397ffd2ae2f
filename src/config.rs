//! Configuration management for jobfit

use crate::error::{Result, JobFitError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub skills: SkillsConfig,
    pub scoring: ScoringConfig,
    pub inference: InferenceSettings,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Optional path to a skills database JSON file (category -> phrases).
    /// When absent, the built-in dictionary is used.
    pub db_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub skill_weight: f64,
    pub experience_weight: f64,
    pub compensation_weight: f64,
    /// A skill is mandatory only when the classifier confidence strictly
    /// exceeds this value.
    pub mandatory_confidence: f64,
    /// QA answers below this confidence are treated as "unknown".
    pub experience_confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceSettings {
    pub endpoint: String,
    pub classifier_model: String,
    pub qa_model: String,
    pub api_token: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skills: SkillsConfig { db_path: None },
            scoring: ScoringConfig {
                skill_weight: 0.50,
                experience_weight: 0.30,
                compensation_weight: 0.20,
                mandatory_confidence: 0.70,
                experience_confidence: 0.30,
            },
            inference: InferenceSettings {
                endpoint: "https://api-inference.huggingface.co".to_string(),
                classifier_model: "facebook/bart-large-mnli".to_string(),
                qa_model: "distilbert-base-cased-distilled-squad".to_string(),
                api_token: None,
                timeout_secs: 60,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load from an explicit path, or from the default location, creating a
    /// default config file there when none exists yet.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| JobFitError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else if path.is_some() {
            Err(JobFitError::Configuration(format!(
                "Config file not found: {}",
                config_path.display()
            )))
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| JobFitError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("jobfit")
            .join("config.toml")
    }
}

impl InferenceSettings {
    /// API token from the config file, or the JOBFIT_API_TOKEN environment
    /// variable as a fallback.
    pub fn token(&self) -> Option<String> {
        self.api_token
            .clone()
            .or_else(|| std::env::var("JOBFIT_API_TOKEN").ok())
    }
}
