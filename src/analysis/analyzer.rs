//! Fit analysis orchestration

use crate::analysis::engine;
use crate::analysis::experience::ExperienceExtractor;
use crate::analysis::mandatory::MandatorySkillClassifier;
use crate::analysis::scorer::FitScorer;
use crate::analysis::types::{
    normalize_set, CandidateProfile, FinalFitResult, JobRequirement, SkillClassification,
};
use crate::config::Config;
use crate::error::{Result, JobFitError};
use crate::llm::{QuestionAnswerer, ZeroShotClassifier};
use crate::skills::dictionary::SkillDictionary;
use crate::skills::matcher::SkillMatcher;
use log::{info, warn};
use serde::Serialize;

/// Caller-supplied facts the JD and resume text cannot provide: numeric
/// inputs and the fallbacks used when the model collaborators cannot
/// determine a value.
#[derive(Debug, Clone, Default)]
pub struct AnalysisFacts {
    pub title: String,
    pub candidate_name: String,
    /// Used when mandatory-skill classification is unavailable.
    pub fallback_mandatory: Vec<String>,
    /// Used when experience extraction is unconfident or fails.
    pub fallback_min_experience: f64,
    pub max_compensation: f64,
    pub candidate_experience: f64,
    pub expected_compensation: f64,
    /// Skip classifier/QA calls entirely and use the fallbacks directly.
    pub skip_inference: bool,
}

/// Complete analysis output: the derived requirement and profile, the
/// classification audit trail, and the scored result.
#[derive(Debug, Clone, Serialize)]
pub struct FitOutcome {
    pub requirement: JobRequirement,
    pub candidate: CandidateProfile,
    pub classifications: Vec<SkillClassification>,
    pub inferred_min_experience: Option<u32>,
    pub result: FinalFitResult,
}

/// Coordinates the skill matcher, mandatory classifier, experience
/// extractor, analysis engine, and fit scorer over one JD/resume pair.
pub struct FitAnalyzer<C, Q> {
    matcher: SkillMatcher,
    mandatory: MandatorySkillClassifier<C>,
    experience: ExperienceExtractor<Q>,
    scorer: FitScorer,
}

impl<C: ZeroShotClassifier, Q: QuestionAnswerer> FitAnalyzer<C, Q> {
    pub fn new(
        dictionary: &SkillDictionary,
        classifier: C,
        qa: Q,
        config: &Config,
    ) -> Result<Self> {
        Ok(Self {
            matcher: SkillMatcher::new(dictionary)?,
            mandatory: MandatorySkillClassifier::new(
                classifier,
                config.scoring.mandatory_confidence,
            ),
            experience: ExperienceExtractor::new(qa, config.scoring.experience_confidence),
            scorer: FitScorer::new(config.scoring.clone()),
        })
    }

    pub async fn analyze_fit(
        &self,
        jd_text: &str,
        resume_text: &str,
        facts: &AnalysisFacts,
    ) -> Result<FitOutcome> {
        if jd_text.trim().is_empty() {
            return Err(JobFitError::InsufficientInput(
                "Job description text is empty".to_string(),
            ));
        }
        if resume_text.trim().is_empty() {
            return Err(JobFitError::InsufficientInput(
                "Resume text is empty".to_string(),
            ));
        }

        let jd_skills = self.matcher.extract_skills(jd_text);
        let candidate_skills = self.matcher.extract_skills(resume_text);
        info!(
            "Extracted {} JD skill(s), {} candidate skill(s)",
            jd_skills.len(),
            candidate_skills.len()
        );

        let jd_skill_list: Vec<String> = jd_skills.iter().cloned().collect();

        let (mandatory_skills, classifications) = if facts.skip_inference {
            (normalize_set(&facts.fallback_mandatory), Vec::new())
        } else {
            match self
                .mandatory
                .classify_mandatory(jd_text, &jd_skill_list)
                .await
            {
                Ok(pair) => pair,
                Err(e) => {
                    // Cannot determine mandatory skills; use the fallback
                    // set rather than guessing
                    warn!(
                        "Mandatory skill classification failed ({}); using {} fallback skill(s)",
                        e,
                        facts.fallback_mandatory.len()
                    );
                    (normalize_set(&facts.fallback_mandatory), Vec::new())
                }
            }
        };

        let inferred_min_experience = if facts.skip_inference {
            None
        } else {
            self.experience.extract_min_experience(jd_text).await
        };

        let min_experience_years = inferred_min_experience
            .map(f64::from)
            .unwrap_or(facts.fallback_min_experience);

        let requirement = JobRequirement {
            title: facts.title.clone(),
            required_skills: normalize_set(&jd_skills),
            mandatory_skills: mandatory_skills.clone(),
            min_experience_years,
            max_compensation: facts.max_compensation,
        };

        let candidate = CandidateProfile {
            name: facts.candidate_name.clone(),
            skills: normalize_set(&candidate_skills),
            total_experience_years: facts.candidate_experience,
            expected_compensation: facts.expected_compensation,
        };

        let analysis = engine::analyze(
            &requirement.required_skills,
            &candidate.skills,
            &requirement.mandatory_skills,
        );

        let result = self.scorer.final_fit(&analysis, &requirement, &candidate);

        Ok(FitOutcome {
            requirement,
            candidate,
            classifications,
            inferred_min_experience,
            result,
        })
    }
}
