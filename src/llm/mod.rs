//! Model collaborator seams
//!
//! The classifier and QA models are injected collaborators, not ambient
//! globals, so the analysis components stay testable with substitutable
//! fakes.

pub mod inference;

use crate::error::Result;

/// One zero-shot classification verdict: the winning label, its confidence,
/// and the sequence the verdict was made over.
#[derive(Debug, Clone)]
pub struct ClassificationOutcome {
    pub label: String,
    pub confidence: f64,
    pub sequence: String,
}

/// One extractive question-answering result.
#[derive(Debug, Clone)]
pub struct QaOutcome {
    pub answer: String,
    pub confidence: f64,
}

/// Batch zero-shot classification of text sequences against candidate
/// labels. Implementations must return one outcome per input sequence, in
/// order, or fail the whole batch.
pub trait ZeroShotClassifier {
    fn classify(
        &self,
        sequences: &[String],
        labels: &[&str],
    ) -> impl std::future::Future<Output = Result<Vec<ClassificationOutcome>>> + Send;
}

/// Extractive question answering over a context document.
pub trait QuestionAnswerer {
    fn answer(
        &self,
        question: &str,
        context: &str,
    ) -> impl std::future::Future<Output = Result<QaOutcome>> + Send;
}
