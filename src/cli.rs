//! CLI interface for jobfit

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobfit")]
#[command(about = "Score a candidate profile against a job description")]
#[command(long_about = "Analyze candidate fit for a job description using dictionary skill matching, mandatory-skill classification, and weighted scoring")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze candidate fit against a job description
    Analyze {
        /// Path to job description file (TXT, MD)
        #[arg(short, long, conflicts_with = "jd_url")]
        jd: Option<PathBuf>,

        /// Fetch the job description from a URL instead of a file
        #[arg(long)]
        jd_url: Option<String>,

        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Skills database JSON file (category -> list of phrases)
        #[arg(long)]
        skills_db: Option<PathBuf>,

        /// Fallback mandatory skills, used when classification is
        /// unavailable (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        mandatory: Vec<String>,

        /// Minimum years of experience, used when extraction is unconfident
        #[arg(long, default_value_t = 0.0)]
        min_experience: f64,

        /// Maximum compensation budget for the role
        #[arg(long, default_value_t = 0.0)]
        max_compensation: f64,

        /// Candidate's total years of experience
        #[arg(short, long, default_value_t = 0.0)]
        experience: f64,

        /// Candidate's expected compensation
        #[arg(long, default_value_t = 0.0)]
        expected_compensation: f64,

        /// Job title
        #[arg(long, default_value = "")]
        title: String,

        /// Candidate name
        #[arg(long, default_value = "")]
        name: String,

        /// Skip classifier/QA inference and use the fallback values directly
        #[arg(long)]
        no_llm: bool,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save the rendered report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Do not persist the analysis record
        #[arg(long)]
        no_store: bool,
    },

    /// Fetch a job posting and print its extracted text
    Fetch {
        /// Job posting URL
        url: String,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
