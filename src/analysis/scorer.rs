//! Final weighted fit scoring

use crate::analysis::types::{
    round2, CandidateProfile, FinalFitResult, FitStatus, JobRequirement, SkillAnalysisResult,
};
use crate::config::ScoringConfig;

/// Combines skill, experience, and compensation sub-scores into the final
/// weighted score with a human-readable explanation.
pub struct FitScorer {
    weights: ScoringConfig,
}

impl FitScorer {
    pub fn new(weights: ScoringConfig) -> Self {
        Self { weights }
    }

    pub fn final_fit(
        &self,
        analysis: &SkillAnalysisResult,
        requirement: &JobRequirement,
        candidate: &CandidateProfile,
    ) -> FinalFitResult {
        // A failed mandatory gate short-circuits: no experience or
        // compensation sub-score is computed for a disqualified candidate.
        if analysis.fit_status == FitStatus::NotFit {
            return FinalFitResult {
                final_score: 0.0,
                explanation: analysis.reason.clone(),
                details: analysis.clone(),
            };
        }

        let skill_fit = analysis.skill_fit_percent;
        let experience_fit = experience_fit_percent(
            requirement.min_experience_years,
            candidate.total_experience_years,
        );
        let compensation_fit = compensation_fit_percent(
            requirement.max_compensation,
            candidate.expected_compensation,
        );

        let final_score = round2(
            skill_fit * self.weights.skill_weight
                + experience_fit * self.weights.experience_weight
                + compensation_fit * self.weights.compensation_weight,
        );

        let explanation = format!(
            "Skill Fit: {}%, Experience Fit: {}%, Compensation Fit: {}%",
            skill_fit,
            round2(experience_fit),
            round2(compensation_fit)
        );

        FinalFitResult {
            final_score,
            explanation,
            details: analysis.clone(),
        }
    }
}

fn experience_fit_percent(min_required: f64, candidate_years: f64) -> f64 {
    if min_required == 0.0 || candidate_years >= min_required {
        100.0
    } else {
        candidate_years / min_required * 100.0
    }
}

fn compensation_fit_percent(max_budget: f64, expected: f64) -> f64 {
    // A candidate expecting nothing is trivially within any budget
    if expected == 0.0 || expected <= max_budget {
        100.0
    } else {
        max_budget / expected * 100.0
    }
}
