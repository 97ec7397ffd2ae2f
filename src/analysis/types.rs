//! Data model for skill analysis and fit scoring

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Set of normalized skills. A BTreeSet keeps iteration order deterministic
/// across runs.
pub type SkillSet = BTreeSet<String>;

/// Canonical skill normalization: trimmed and lowercased. Equality between
/// skills is exact string equality after this.
pub fn normalize_skill(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize an arbitrary collection of skill strings into a SkillSet,
/// dropping entries that normalize to empty.
pub fn normalize_set<I, S>(skills: I) -> SkillSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    skills
        .into_iter()
        .map(|s| normalize_skill(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitStatus {
    Fit,
    NotFit,
}

impl fmt::Display for FitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitStatus::Fit => write!(f, "Fit"),
            FitStatus::NotFit => write!(f, "Not Fit"),
        }
    }
}

/// Structured requirements derived from a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirement {
    pub title: String,
    pub required_skills: SkillSet,
    /// Expected to be a subset of required_skills, but not enforced.
    pub mandatory_skills: SkillSet,
    pub min_experience_years: f64,
    pub max_compensation: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub skills: SkillSet,
    pub total_experience_years: f64,
    pub expected_compensation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLabel {
    Required,
    Optional,
}

impl fmt::Display for SkillLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillLabel::Required => write!(f, "required"),
            SkillLabel::Optional => write!(f, "optional"),
        }
    }
}

/// Per-skill classifier verdict, kept for transparency and audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillClassification {
    pub skill: String,
    pub label: SkillLabel,
    pub confidence: f64,
    /// The context line the label was derived from.
    pub evidence_text: String,
}

/// Categorized skill match report with the fit gate decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAnalysisResult {
    pub fit_status: FitStatus,
    pub reason: String,
    pub skill_fit_percent: f64,
    pub matched_mandatory: SkillSet,
    pub missing_mandatory: SkillSet,
    pub matched_non_mandatory: SkillSet,
    pub missing_non_mandatory: SkillSet,
    /// Candidate skills absent from the JD's skill set entirely.
    pub bonus_skills: SkillSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalFitResult {
    pub final_score: f64,
    pub explanation: String,
    pub details: SkillAnalysisResult,
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_skill() {
        assert_eq!(normalize_skill("  Python "), "python");
        assert_eq!(normalize_skill("AWS"), "aws");
    }

    #[test]
    fn test_normalize_set_drops_empty_entries() {
        let set = normalize_set(vec!["Python", "  ", "AWS", "python"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("python"));
        assert!(set.contains("aws"));
    }

    #[test]
    fn test_round2() {
        assert!((round2(83.33333) - 83.33).abs() < 1e-9);
        assert!((round2(84.666) - 84.67).abs() < 1e-9);
        assert!((round2(100.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_status_display() {
        assert_eq!(FitStatus::Fit.to_string(), "Fit");
        assert_eq!(FitStatus::NotFit.to_string(), "Not Fit");
    }
}
