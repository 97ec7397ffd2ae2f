//! End-to-end fit analysis tests with fake model collaborators

use jobfit::analysis::analyzer::{AnalysisFacts, FitAnalyzer};
use jobfit::analysis::mandatory::{OPTIONAL_LABEL, REQUIRED_LABEL};
use jobfit::analysis::types::FitStatus;
use jobfit::config::Config;
use jobfit::error::Result;
use jobfit::llm::{ClassificationOutcome, QaOutcome, QuestionAnswerer, ZeroShotClassifier};
use jobfit::skills::dictionary::SkillDictionary;
use std::collections::BTreeMap;

/// Classifier that marks a sequence mandatory when it mentions one of the
/// configured skills.
struct ScriptedClassifier {
    required: Vec<&'static str>,
}

impl ZeroShotClassifier for ScriptedClassifier {
    async fn classify(
        &self,
        sequences: &[String],
        _labels: &[&str],
    ) -> Result<Vec<ClassificationOutcome>> {
        Ok(sequences
            .iter()
            .map(|sequence| {
                let lower = sequence.to_lowercase();
                let required = self.required.iter().any(|s| lower.contains(s));
                ClassificationOutcome {
                    label: if required {
                        REQUIRED_LABEL.to_string()
                    } else {
                        OPTIONAL_LABEL.to_string()
                    },
                    confidence: if required { 0.92 } else { 0.88 },
                    sequence: sequence.clone(),
                }
            })
            .collect())
    }
}

struct ScriptedQa {
    answer: String,
    confidence: f64,
}

impl QuestionAnswerer for ScriptedQa {
    async fn answer(&self, _question: &str, _context: &str) -> Result<QaOutcome> {
        Ok(QaOutcome {
            answer: self.answer.clone(),
            confidence: self.confidence,
        })
    }
}

fn dictionary() -> SkillDictionary {
    let mut categories = BTreeMap::new();
    categories.insert(
        "skills".to_string(),
        vec![
            "Python".to_string(),
            "AWS".to_string(),
            "Docker".to_string(),
            "PostgreSQL".to_string(),
            "Kubernetes".to_string(),
        ],
    );
    SkillDictionary::from_categories(categories).unwrap()
}

const JD: &str = "Senior Python Developer\n\
    Python is required for this role.\n\
    AWS is required for our cloud infrastructure.\n\
    Experience with Docker is nice to have.\n\
    Familiarity with PostgreSQL is a plus.\n\
    5 years of experience are required.";

const RESUME: &str = "Jane Smith, engineer.\n\
    Python services on AWS with Docker, Kubernetes and PostgreSQL.";

fn analyzer(
    required: Vec<&'static str>,
    qa_answer: &str,
    qa_confidence: f64,
) -> FitAnalyzer<ScriptedClassifier, ScriptedQa> {
    FitAnalyzer::new(
        &dictionary(),
        ScriptedClassifier { required },
        ScriptedQa {
            answer: qa_answer.to_string(),
            confidence: qa_confidence,
        },
        &Config::default(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_full_pipeline_weighted_score() {
    // Candidate has every JD skill, 3 of 5 years of experience, and asks
    // 120k against a 100k budget. Expected score:
    // 0.5 * 100 + 0.3 * 60 + 0.2 * (100/120 * 100) = 84.67
    let analyzer = analyzer(vec!["python", "aws"], "5 years", 0.95);

    let facts = AnalysisFacts {
        title: "Senior Python Developer".to_string(),
        candidate_name: "Jane Smith".to_string(),
        candidate_experience: 3.0,
        max_compensation: 100_000.0,
        expected_compensation: 120_000.0,
        ..Default::default()
    };

    let outcome = analyzer.analyze_fit(JD, RESUME, &facts).await.unwrap();

    assert_eq!(outcome.result.details.fit_status, FitStatus::Fit);
    assert_eq!(outcome.inferred_min_experience, Some(5));
    assert!((outcome.result.final_score - 84.67).abs() < 1e-9);
    assert_eq!(
        outcome.result.explanation,
        "Skill Fit: 100%, Experience Fit: 60%, Compensation Fit: 83.33%"
    );
}

#[tokio::test]
async fn test_full_pipeline_mandatory_gate() {
    // AWS is classified mandatory but the candidate lacks it
    let analyzer = analyzer(vec!["python", "aws"], "5 years", 0.95);

    let facts = AnalysisFacts {
        candidate_experience: 10.0,
        max_compensation: 200_000.0,
        expected_compensation: 100_000.0,
        ..Default::default()
    };

    let resume = "Python and Docker developer, PostgreSQL on the side.";
    let outcome = analyzer.analyze_fit(JD, resume, &facts).await.unwrap();

    assert_eq!(outcome.result.details.fit_status, FitStatus::NotFit);
    assert_eq!(outcome.result.details.reason, "Missing 1 mandatory skill(s).");
    assert!((outcome.result.final_score - 0.0).abs() < 1e-9);
    assert!(outcome.result.details.missing_mandatory.contains("aws"));
    // Non-mandatory sets are still reported alongside the gate
    assert!(outcome.result.details.matched_non_mandatory.contains("docker"));
}

#[tokio::test]
async fn test_full_pipeline_bonus_and_missing_optional() {
    let analyzer = analyzer(vec!["python"], "5 years", 0.95);

    let facts = AnalysisFacts {
        candidate_experience: 5.0,
        ..Default::default()
    };

    let resume = "Python developer, runs everything on Kubernetes.";
    let outcome = analyzer.analyze_fit(JD, resume, &facts).await.unwrap();

    // Kubernetes appears only in the resume
    assert!(outcome.result.details.bonus_skills.contains("kubernetes"));
    // PostgreSQL appears only in the JD, and is not mandatory
    assert!(outcome
        .result
        .details
        .missing_non_mandatory
        .contains("postgresql"));
}

#[tokio::test]
async fn test_pipeline_is_deterministic() {
    let analyzer = analyzer(vec!["python", "aws"], "5 years", 0.95);

    let facts = AnalysisFacts {
        candidate_experience: 3.0,
        max_compensation: 100_000.0,
        expected_compensation: 120_000.0,
        ..Default::default()
    };

    let first = analyzer.analyze_fit(JD, RESUME, &facts).await.unwrap();
    let second = analyzer.analyze_fit(JD, RESUME, &facts).await.unwrap();

    assert_eq!(first.result.final_score, second.result.final_score);
    assert_eq!(first.result.explanation, second.result.explanation);
    assert_eq!(
        first.requirement.mandatory_skills,
        second.requirement.mandatory_skills
    );
    assert_eq!(
        serde_json::to_string(&first.result.details).unwrap(),
        serde_json::to_string(&second.result.details).unwrap()
    );
}

#[tokio::test]
async fn test_zero_expected_compensation_scores_full() {
    let analyzer = analyzer(vec!["python"], "2", 0.95);

    let facts = AnalysisFacts {
        candidate_experience: 2.0,
        max_compensation: 100_000.0,
        expected_compensation: 0.0,
        ..Default::default()
    };

    let outcome = analyzer.analyze_fit(JD, RESUME, &facts).await.unwrap();
    assert!(outcome
        .result
        .explanation
        .contains("Compensation Fit: 100%"));
}
