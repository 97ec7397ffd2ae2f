//! Mandatory skill classification from job description context

use crate::analysis::types::{normalize_skill, SkillClassification, SkillLabel, SkillSet};
use crate::error::{Result, JobFitError};
use crate::llm::ZeroShotClassifier;
use log::debug;
use regex::Regex;

pub const REQUIRED_LABEL: &str = "this is a required skill";
pub const OPTIONAL_LABEL: &str = "this is an optional skill";

/// Labels each JD-mentioned skill as required or optional by running a
/// zero-shot judgment over the line where the skill is mentioned, keeping
/// the classification local to its context.
pub struct MandatorySkillClassifier<C> {
    classifier: C,
    confidence_threshold: f64,
}

impl<C: ZeroShotClassifier> MandatorySkillClassifier<C> {
    pub fn new(classifier: C, confidence_threshold: f64) -> Self {
        Self {
            classifier,
            confidence_threshold,
        }
    }

    /// Classify the given skills against the JD text.
    ///
    /// Skills with no locatable context line are skipped from both outputs:
    /// a skill the text never mentions on its own line cannot be classified.
    /// A classifier failure fails the whole batch; callers must treat that
    /// as "cannot determine mandatory skills", not a partial result.
    pub async fn classify_mandatory(
        &self,
        jd_text: &str,
        skills: &[String],
    ) -> Result<(SkillSet, Vec<SkillClassification>)> {
        if skills.is_empty() {
            return Ok((SkillSet::new(), Vec::new()));
        }

        let mut contexts = Vec::new();
        let mut skills_in_batch = Vec::new();
        for skill in skills {
            match context_line(jd_text, skill) {
                Some(context) => {
                    contexts.push(context);
                    skills_in_batch.push(skill.clone());
                }
                None => {
                    debug!("No context line found for skill '{}', skipping", skill);
                }
            }
        }

        if contexts.is_empty() {
            return Ok((SkillSet::new(), Vec::new()));
        }

        let labels = [REQUIRED_LABEL, OPTIONAL_LABEL];
        let outcomes = self.classifier.classify(&contexts, &labels).await?;

        if outcomes.len() != skills_in_batch.len() {
            return Err(JobFitError::Classification(format!(
                "Expected {} classification results, got {}",
                skills_in_batch.len(),
                outcomes.len()
            )));
        }

        let mut mandatory = SkillSet::new();
        let mut details = Vec::new();

        for (skill, outcome) in skills_in_batch.iter().zip(outcomes) {
            let label = if outcome.label == REQUIRED_LABEL {
                SkillLabel::Required
            } else {
                SkillLabel::Optional
            };

            let is_mandatory =
                label == SkillLabel::Required && outcome.confidence > self.confidence_threshold;

            details.push(SkillClassification {
                skill: normalize_skill(skill),
                label,
                confidence: outcome.confidence,
                evidence_text: outcome.sequence,
            });

            if is_mandatory {
                mandatory.insert(normalize_skill(skill));
            }
        }

        Ok((mandatory, details))
    }
}

/// The first line of `text` containing `entity` as a whole-word,
/// case-insensitive match.
pub fn context_line(text: &str, entity: &str) -> Option<String> {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(entity.trim()));
    let re = Regex::new(&pattern).ok()?;

    text.lines()
        .find(|line| re.is_match(line))
        .map(|line| line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ClassificationOutcome;
    use std::collections::HashMap;

    /// Scripted classifier keyed by a substring of the input sequence.
    struct FakeClassifier {
        verdicts: HashMap<String, (String, f64)>,
        fail: bool,
    }

    impl FakeClassifier {
        fn new(verdicts: &[(&str, &str, f64)]) -> Self {
            Self {
                verdicts: verdicts
                    .iter()
                    .map(|(key, label, score)| {
                        (key.to_lowercase(), (label.to_string(), *score))
                    })
                    .collect(),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                verdicts: HashMap::new(),
                fail: true,
            }
        }
    }

    impl ZeroShotClassifier for FakeClassifier {
        async fn classify(
            &self,
            sequences: &[String],
            _labels: &[&str],
        ) -> Result<Vec<ClassificationOutcome>> {
            if self.fail {
                return Err(JobFitError::Classification("model unavailable".to_string()));
            }

            Ok(sequences
                .iter()
                .map(|sequence| {
                    let lower = sequence.to_lowercase();
                    let (label, confidence) = self
                        .verdicts
                        .iter()
                        .find(|(key, _)| lower.contains(key.as_str()))
                        .map(|(_, v)| v.clone())
                        .unwrap_or((OPTIONAL_LABEL.to_string(), 0.5));
                    ClassificationOutcome {
                        label,
                        confidence,
                        sequence: sequence.clone(),
                    }
                })
                .collect())
        }
    }

    const JD: &str = "Senior Developer\n\
        Python experience is required.\n\
        AWS knowledge is a must.\n\
        Docker is nice to have.";

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_required_above_threshold_is_mandatory() {
        let classifier = MandatorySkillClassifier::new(
            FakeClassifier::new(&[
                ("python", REQUIRED_LABEL, 0.92),
                ("aws", REQUIRED_LABEL, 0.88),
                ("docker", OPTIONAL_LABEL, 0.80),
            ]),
            0.70,
        );

        let (mandatory, details) = classifier
            .classify_mandatory(JD, &skills(&["Python", "AWS", "Docker"]))
            .await
            .unwrap();

        assert!(mandatory.contains("python"));
        assert!(mandatory.contains("aws"));
        assert!(!mandatory.contains("docker"));
        // All classified skills appear in details regardless of label
        assert_eq!(details.len(), 3);
    }

    #[tokio::test]
    async fn test_threshold_is_strict() {
        let classifier = MandatorySkillClassifier::new(
            FakeClassifier::new(&[("python", REQUIRED_LABEL, 0.70)]),
            0.70,
        );

        let (mandatory, details) = classifier
            .classify_mandatory(JD, &skills(&["Python"]))
            .await
            .unwrap();

        assert!(mandatory.is_empty());
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].label, SkillLabel::Required);
    }

    #[tokio::test]
    async fn test_required_label_below_threshold_not_mandatory() {
        let classifier = MandatorySkillClassifier::new(
            FakeClassifier::new(&[("python", REQUIRED_LABEL, 0.55)]),
            0.70,
        );

        let (mandatory, _) = classifier
            .classify_mandatory(JD, &skills(&["Python"]))
            .await
            .unwrap();

        assert!(mandatory.is_empty());
    }

    #[tokio::test]
    async fn test_skill_without_context_is_skipped_entirely() {
        let classifier = MandatorySkillClassifier::new(
            FakeClassifier::new(&[("python", REQUIRED_LABEL, 0.9)]),
            0.70,
        );

        let (mandatory, details) = classifier
            .classify_mandatory(JD, &skills(&["Python", "Kubernetes"]))
            .await
            .unwrap();

        assert_eq!(mandatory.len(), 1);
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].skill, "python");
    }

    #[tokio::test]
    async fn test_classifier_failure_fails_whole_batch() {
        let classifier = MandatorySkillClassifier::new(FakeClassifier::failing(), 0.70);

        let result = classifier.classify_mandatory(JD, &skills(&["Python"])).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_empty_skill_list() {
        let classifier = MandatorySkillClassifier::new(FakeClassifier::new(&[]), 0.70);

        let (mandatory, details) = classifier.classify_mandatory(JD, &[]).await.unwrap();
        assert!(mandatory.is_empty());
        assert!(details.is_empty());
    }

    #[test]
    fn test_context_line_finds_first_whole_word_match() {
        let line = context_line(JD, "python").unwrap();
        assert_eq!(line, "Python experience is required.");
    }

    #[test]
    fn test_context_line_rejects_partial_word() {
        let text = "JavaScript developers wanted";
        assert!(context_line(text, "Java").is_none());
    }

    #[test]
    fn test_context_line_none_when_absent() {
        assert!(context_line(JD, "Kubernetes").is_none());
    }
}
