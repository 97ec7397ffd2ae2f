//! Experience requirement extraction via question answering

use crate::llm::QuestionAnswerer;
use log::{debug, warn};
use regex::Regex;

const EXPERIENCE_QUESTION: &str = "How many years of experience are required?";

/// Infers the minimum years of experience a JD asks for. Degrades to `None`
/// on low confidence, digit-free answers, or any model failure; callers
/// must fall back to their own default rather than treat `None` as zero.
pub struct ExperienceExtractor<Q> {
    qa: Q,
    confidence_threshold: f64,
}

impl<Q: QuestionAnswerer> ExperienceExtractor<Q> {
    pub fn new(qa: Q, confidence_threshold: f64) -> Self {
        Self {
            qa,
            confidence_threshold,
        }
    }

    pub async fn extract_min_experience(&self, jd_text: &str) -> Option<u32> {
        let outcome = match self.qa.answer(EXPERIENCE_QUESTION, jd_text).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Experience extraction failed: {}", e);
                return None;
            }
        };

        debug!(
            "Experience answer '{}' with confidence {:.2}",
            outcome.answer, outcome.confidence
        );

        // An unconfident answer would be misleading; report "unknown"
        if outcome.confidence < self.confidence_threshold {
            return None;
        }

        first_number(&outcome.answer)
    }
}

/// The first contiguous run of decimal digits, so "5-7 years" yields 5.
fn first_number(answer: &str) -> Option<u32> {
    let re = Regex::new(r"\d+").expect("valid digit regex");
    re.find(answer)?.as_str().parse().ok()
}
