use clap::Parser;
use jobfit::analysis::analyzer::{AnalysisFacts, FitAnalyzer};
use jobfit::cli::{parse_output_format, validate_file_extension, Cli, Commands, ConfigAction};
use jobfit::config::{Config, OutputFormat};
use jobfit::error::{JobFitError, Result};
use jobfit::fetch::{is_fetch_error, JobPostingFetcher};
use jobfit::input::file_detector::SUPPORTED_EXTENSIONS;
use jobfit::input::manager::DocumentReader;
use jobfit::llm::inference::InferenceClient;
use jobfit::output::formatter::ReportGenerator;
use jobfit::skills::dictionary::SkillDictionary;
use jobfit::storage::{save_or_warn, AnalysisRecord, JsonlStore};
use log::{error, info};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_secs()
        .init();

    let config = match Config::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli, config).await {
        error!("{}", e);
        process::exit(1);
    }
}

async fn run_command(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            jd,
            jd_url,
            resume,
            skills_db,
            mandatory,
            min_experience,
            max_compensation,
            experience,
            expected_compensation,
            title,
            name,
            no_llm,
            output,
            save,
            no_store,
        } => {
            let format = parse_output_format(&output).map_err(JobFitError::InvalidInput)?;

            validate_file_extension(&resume, SUPPORTED_EXTENSIONS)
                .map_err(JobFitError::InvalidInput)?;
            if let Some(path) = &jd {
                validate_file_extension(path, &["txt", "md", "markdown"])
                    .map_err(JobFitError::InvalidInput)?;
            }

            let mut reader = DocumentReader::new();

            let jd_text = match (&jd, &jd_url) {
                (Some(path), None) => reader.read(path).await?,
                (None, Some(url)) => {
                    let fetcher = JobPostingFetcher::new()?;
                    let text = fetcher.fetch_text(url).await;
                    if is_fetch_error(&text) {
                        return Err(JobFitError::Network(text));
                    }
                    text
                }
                _ => {
                    return Err(JobFitError::InvalidInput(
                        "Provide exactly one of --jd or --jd-url".to_string(),
                    ));
                }
            };

            let resume_text = reader.read(&resume).await?;

            let dictionary = load_dictionary(skills_db, &config)?;
            info!("Skill dictionary loaded with {} entries", dictionary.len());

            let client = InferenceClient::from_settings(&config.inference)?;
            let analyzer = FitAnalyzer::new(&dictionary, client.clone(), client, &config)?;

            let facts = AnalysisFacts {
                title,
                candidate_name: name,
                fallback_mandatory: mandatory,
                fallback_min_experience: min_experience,
                max_compensation,
                candidate_experience: experience,
                expected_compensation,
                skip_inference: no_llm,
            };

            let outcome = analyzer.analyze_fit(&jd_text, &resume_text, &facts).await?;

            let use_colors = config.output.color_output && format == OutputFormat::Console;
            let generator = ReportGenerator::new(use_colors, config.output.detailed);
            let report = generator.render(&outcome, &format)?;

            if let Some(path) = save {
                std::fs::write(&path, &report)?;
                info!("Report saved to {}", path.display());
            }
            println!("{}", report);

            if !no_store {
                let store = JsonlStore::new(JsonlStore::default_path());
                let record = AnalysisRecord::new(
                    outcome.requirement.clone(),
                    outcome.candidate.clone(),
                    outcome.result.clone(),
                );
                save_or_warn(&store, &record);
            }

            Ok(())
        }

        Commands::Fetch { url } => {
            let fetcher = JobPostingFetcher::new()?;
            let text = fetcher.fetch_text(&url).await;
            println!("{}", text);
            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    JobFitError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                Config::default().save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", Config::config_path().display());
                Ok(())
            }
        },
    }
}

fn load_dictionary(cli_path: Option<PathBuf>, config: &Config) -> Result<SkillDictionary> {
    let path = cli_path.or_else(|| config.skills.db_path.clone());
    match path {
        Some(path) => SkillDictionary::load(&path),
        None => Ok(SkillDictionary::default_db()),
    }
}
