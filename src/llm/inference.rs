//! Hosted-inference HTTP client implementing the model collaborator traits

use crate::config::InferenceSettings;
use crate::error::{Result, JobFitError};
use crate::llm::{ClassificationOutcome, QaOutcome, QuestionAnswerer, ZeroShotClassifier};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for a hosted-inference endpoint exposing zero-shot classification
/// and extractive QA models. A request timeout or HTTP failure surfaces as an
/// error for the whole call.
#[derive(Clone)]
pub struct InferenceClient {
    http: reqwest::Client,
    endpoint: String,
    classifier_model: String,
    qa_model: String,
    token: Option<String>,
}

#[derive(Debug, Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a [String],
    parameters: ZeroShotParameters<'a>,
}

#[derive(Debug, Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [&'a str],
    multi_label: bool,
}

#[derive(Debug, Deserialize)]
struct ZeroShotResponse {
    sequence: String,
    labels: Vec<String>,
    scores: Vec<f64>,
}

/// The endpoint answers with a bare object for a single sequence and an
/// array for a batch.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ZeroShotPayload {
    Batch(Vec<ZeroShotResponse>),
    Single(ZeroShotResponse),
}

#[derive(Debug, Serialize)]
struct QaRequest<'a> {
    inputs: QaInputs<'a>,
}

#[derive(Debug, Serialize)]
struct QaInputs<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Debug, Deserialize)]
struct QaResponse {
    answer: String,
    score: f64,
}

impl InferenceClient {
    pub fn from_settings(settings: &InferenceSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| JobFitError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            classifier_model: settings.classifier_model.clone(),
            qa_model: settings.qa_model.clone(),
            token: settings.token(),
        })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.endpoint, model)
    }

    async fn post_json<T: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<R> {
        let mut request = self.http.post(url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.json::<R>().await?)
    }
}

impl ZeroShotClassifier for InferenceClient {
    async fn classify(
        &self,
        sequences: &[String],
        labels: &[&str],
    ) -> Result<Vec<ClassificationOutcome>> {
        if sequences.is_empty() {
            return Ok(Vec::new());
        }

        let request = ZeroShotRequest {
            inputs: sequences,
            parameters: ZeroShotParameters {
                candidate_labels: labels,
                multi_label: false,
            },
        };

        let url = self.model_url(&self.classifier_model);
        let payload: ZeroShotPayload = self.post_json(&url, &request).await?;

        let responses = match payload {
            ZeroShotPayload::Batch(items) => items,
            ZeroShotPayload::Single(item) => vec![item],
        };

        if responses.len() != sequences.len() {
            return Err(JobFitError::Classification(format!(
                "Classifier returned {} results for {} sequences",
                responses.len(),
                sequences.len()
            )));
        }

        responses
            .into_iter()
            .map(|r| {
                let label = r.labels.first().cloned().ok_or_else(|| {
                    JobFitError::Classification("Classifier returned no labels".to_string())
                })?;
                let confidence = r.scores.first().copied().ok_or_else(|| {
                    JobFitError::Classification("Classifier returned no scores".to_string())
                })?;
                Ok(ClassificationOutcome {
                    label,
                    confidence,
                    sequence: r.sequence,
                })
            })
            .collect()
    }
}

impl QuestionAnswerer for InferenceClient {
    async fn answer(&self, question: &str, context: &str) -> Result<QaOutcome> {
        let request = QaRequest {
            inputs: QaInputs { question, context },
        };

        let url = self.model_url(&self.qa_model);
        let response: QaResponse = self.post_json(&url, &request).await?;

        Ok(QaOutcome {
            answer: response.answer,
            confidence: response.score,
        })
    }
}
