//! Output formatters for fit analysis reports

use crate::analysis::analyzer::FitOutcome;
use crate::analysis::types::{FitStatus, SkillSet};
use crate::config::OutputFormat;
use crate::error::Result;
use colored::Colorize;

/// Trait for rendering a fit outcome in one output format
pub trait ReportFormatter {
    fn format_report(&self, outcome: &FitOutcome) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured consumption
pub struct JsonFormatter;

/// Markdown formatter for saved reports
pub struct MarkdownFormatter;

/// Coordinates the format-specific formatters
pub struct ReportGenerator {
    console: ConsoleFormatter,
    json: JsonFormatter,
    markdown: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn paint(&self, text: &str, good: bool) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        if good {
            text.green().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }

    fn skill_list(skills: &SkillSet) -> String {
        if skills.is_empty() {
            "(none)".to_string()
        } else {
            skills.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format_report(&self, outcome: &FitOutcome) -> Result<String> {
        let details = &outcome.result.details;
        let fit = details.fit_status == FitStatus::Fit;

        let mut out = String::new();
        out.push_str(&format!(
            "\nCandidate Fit Score: {}\n",
            self.paint(&format!("{}%", outcome.result.final_score), fit)
        ));
        out.push_str(&format!(
            "Status: {}\n",
            self.paint(&details.fit_status.to_string(), fit)
        ));
        out.push_str(&format!("{}\n", outcome.result.explanation));

        out.push_str(&format!(
            "\nMatched mandatory:     {}\n",
            Self::skill_list(&details.matched_mandatory)
        ));
        out.push_str(&format!(
            "Missing mandatory:     {}\n",
            Self::skill_list(&details.missing_mandatory)
        ));
        out.push_str(&format!(
            "Matched optional:      {}\n",
            Self::skill_list(&details.matched_non_mandatory)
        ));
        out.push_str(&format!(
            "Missing optional:      {}\n",
            Self::skill_list(&details.missing_non_mandatory)
        ));
        out.push_str(&format!(
            "Bonus skills:          {}\n",
            Self::skill_list(&details.bonus_skills)
        ));

        if self.detailed && !outcome.classifications.is_empty() {
            out.push_str("\nSkill classification details:\n");
            for c in &outcome.classifications {
                out.push_str(&format!(
                    "  {} -> {} ({:.2}) [{}]\n",
                    c.skill, c.label, c.confidence, c.evidence_text
                ));
            }
        }

        if let Some(years) = outcome.inferred_min_experience {
            out.push_str(&format!(
                "\nExperience requirement inferred from JD: {} year(s)\n",
                years
            ));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, outcome: &FitOutcome) -> Result<String> {
        Ok(serde_json::to_string_pretty(outcome)?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_report(&self, outcome: &FitOutcome) -> Result<String> {
        let details = &outcome.result.details;

        let mut out = String::new();
        out.push_str("# Fit Analysis Report\n\n");
        if !outcome.requirement.title.is_empty() {
            out.push_str(&format!("**Role:** {}\n\n", outcome.requirement.title));
        }
        if !outcome.candidate.name.is_empty() {
            out.push_str(&format!("**Candidate:** {}\n\n", outcome.candidate.name));
        }
        out.push_str(&format!(
            "## Score: {}% ({})\n\n{}\n\n",
            outcome.result.final_score, details.fit_status, outcome.result.explanation
        ));

        out.push_str("## Skill breakdown\n\n");
        let sections = [
            ("Matched mandatory", &details.matched_mandatory),
            ("Missing mandatory", &details.missing_mandatory),
            ("Matched optional", &details.matched_non_mandatory),
            ("Missing optional", &details.missing_non_mandatory),
            ("Bonus skills", &details.bonus_skills),
        ];
        for (heading, skills) in sections {
            out.push_str(&format!("### {}\n\n", heading));
            if skills.is_empty() {
                out.push_str("_none_\n\n");
            } else {
                for skill in skills.iter() {
                    out.push_str(&format!("- {}\n", skill));
                }
                out.push('\n');
            }
        }

        if !outcome.classifications.is_empty() {
            out.push_str("## Classification details\n\n");
            out.push_str("| Skill | Label | Confidence | Evidence |\n");
            out.push_str("|-------|-------|------------|----------|\n");
            for c in &outcome.classifications {
                out.push_str(&format!(
                    "| {} | {} | {:.2} | {} |\n",
                    c.skill, c.label, c.confidence, c.evidence_text
                ));
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console: ConsoleFormatter::new(use_colors, detailed),
            json: JsonFormatter,
            markdown: MarkdownFormatter,
        }
    }

    pub fn render(&self, outcome: &FitOutcome, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console.format_report(outcome),
            OutputFormat::Json => self.json.format_report(outcome),
            OutputFormat::Markdown => self.markdown.format_report(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::{
        CandidateProfile, FinalFitResult, JobRequirement, SkillAnalysisResult,
    };

    fn outcome() -> FitOutcome {
        let details = SkillAnalysisResult {
            fit_status: FitStatus::NotFit,
            reason: "Missing 1 mandatory skill(s).".to_string(),
            skill_fit_percent: 0.0,
            matched_mandatory: ["python".to_string()].into_iter().collect(),
            missing_mandatory: ["aws".to_string()].into_iter().collect(),
            matched_non_mandatory: SkillSet::new(),
            missing_non_mandatory: ["docker".to_string()].into_iter().collect(),
            bonus_skills: ["java".to_string()].into_iter().collect(),
        };

        FitOutcome {
            requirement: JobRequirement {
                title: "Senior Python Developer".to_string(),
                required_skills: SkillSet::new(),
                mandatory_skills: SkillSet::new(),
                min_experience_years: 5.0,
                max_compensation: 150_000.0,
            },
            candidate: CandidateProfile {
                name: "John Doe".to_string(),
                skills: SkillSet::new(),
                total_experience_years: 4.0,
                expected_compensation: 140_000.0,
            },
            classifications: Vec::new(),
            inferred_min_experience: Some(5),
            result: FinalFitResult {
                final_score: 0.0,
                explanation: "Missing 1 mandatory skill(s).".to_string(),
                details,
            },
        }
    }

    #[test]
    fn test_console_report_itemizes_missing_mandatory() {
        let formatter = ConsoleFormatter::new(false, false);
        let report = formatter.format_report(&outcome()).unwrap();

        assert!(report.contains("Not Fit"));
        assert!(report.contains("Missing 1 mandatory skill(s)."));
        assert!(report.contains("Missing mandatory:     aws"));
        assert!(report.contains("Bonus skills:          java"));
    }

    #[test]
    fn test_json_report_is_valid() {
        let report = JsonFormatter.format_report(&outcome()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["result"]["final_score"], 0.0);
        assert_eq!(value["requirement"]["title"], "Senior Python Developer");
    }

    #[test]
    fn test_markdown_report_structure() {
        let report = MarkdownFormatter.format_report(&outcome()).unwrap();
        assert!(report.contains("# Fit Analysis Report"));
        assert!(report.contains("### Missing mandatory"));
        assert!(report.contains("- aws"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::new(false, false);
        assert!(generator
            .render(&outcome(), &OutputFormat::Json)
            .unwrap()
            .starts_with('{'));
    }
}
