//! Skill analysis engine: categorized match report and fit gating

use crate::analysis::types::{
    normalize_set, round2, FitStatus, SkillAnalysisResult, SkillSet,
};

/// Categorize candidate skills against the JD's skills under set semantics
/// and apply the mandatory-skill gate.
///
/// A single missing mandatory skill disqualifies the candidate: the skill
/// fit percent is fixed at 0 and no partial credit is given. All six set
/// fields are populated regardless of the gate outcome.
pub fn analyze(
    jd_skills: &SkillSet,
    candidate_skills: &SkillSet,
    mandatory_skills: &SkillSet,
) -> SkillAnalysisResult {
    let jd = normalize_set(jd_skills);
    let candidate = normalize_set(candidate_skills);
    let mandatory = normalize_set(mandatory_skills);

    let matched_mandatory: SkillSet = mandatory.intersection(&candidate).cloned().collect();
    let missing_mandatory: SkillSet = mandatory.difference(&candidate).cloned().collect();

    let non_mandatory: SkillSet = jd.difference(&mandatory).cloned().collect();
    let matched_non_mandatory: SkillSet =
        non_mandatory.intersection(&candidate).cloned().collect();
    let missing_non_mandatory: SkillSet =
        non_mandatory.difference(&candidate).cloned().collect();

    let bonus_skills: SkillSet = candidate.difference(&jd).cloned().collect();

    if !missing_mandatory.is_empty() {
        return SkillAnalysisResult {
            fit_status: FitStatus::NotFit,
            reason: format!("Missing {} mandatory skill(s).", missing_mandatory.len()),
            skill_fit_percent: 0.0,
            matched_mandatory,
            missing_mandatory,
            matched_non_mandatory,
            missing_non_mandatory,
            bonus_skills,
        };
    }

    // No optional skills to score against is a vacuous perfect score
    let skill_fit_percent = if non_mandatory.is_empty() {
        100.0
    } else {
        round2(matched_non_mandatory.len() as f64 / non_mandatory.len() as f64 * 100.0)
    };

    SkillAnalysisResult {
        fit_status: FitStatus::Fit,
        reason: "All mandatory skills are present.".to_string(),
        skill_fit_percent,
        matched_mandatory,
        missing_mandatory,
        matched_non_mandatory,
        missing_non_mandatory,
        bonus_skills,
    }
}
