//! Resume evaluation — upload handling, prompt construction and the pluggable
//! evaluator that turns resume text into an `EvaluationResult`.
//!
//! `AppState` holds an `Option<Arc<dyn EvaluationClient>>`; `None` means the
//! process started without a usable LLM credential.

pub mod gemini;
pub mod handlers;
pub mod prompts;
pub mod service;
pub mod upload;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::llm_client::LlmError;

pub const MIN_MATCH_PERCENTAGE: i64 = 0;
pub const MAX_MATCH_PERCENTAGE: i64 = 100;

/// Structured evaluation returned by the model and sent back verbatim.
///
/// Every field is required: a payload missing any of them is a failed
/// evaluation, not a partial one. Keys outside this shape are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: Vec<String>,
    pub skills: Vec<String>,
    #[serde(deserialize_with = "deserialize_percentage")]
    pub match_percentage: i64,
    pub detected_role: String,
    pub missing_keywords: Vec<String>,
    pub profile_summary: String,
    pub scoring_reasoning: String,
}

impl EvaluationResult {
    /// Whether `match_percentage` lies outside 0–100.
    pub fn score_out_of_range(&self) -> bool {
        !(MIN_MATCH_PERCENTAGE..=MAX_MATCH_PERCENTAGE).contains(&self.match_percentage)
    }

    pub fn clamp_score(mut self) -> Self {
        self.match_percentage = self
            .match_percentage
            .clamp(MIN_MATCH_PERCENTAGE, MAX_MATCH_PERCENTAGE);
        self
    }
}

/// Accepts integral JSON numbers and floats (rounded); rejects anything else.
fn deserialize_percentage<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    match number.as_f64() {
        Some(f) if f.is_finite() => Ok(f.round() as i64),
        _ => Err(serde::de::Error::custom(format!(
            "match_percentage is not a usable number: {number}"
        ))),
    }
}

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("no evaluation client is configured")]
    NotConfigured,

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// The evaluator trait. Implement this to swap LLM backends (or test
/// doubles) without touching the handler.
#[async_trait]
pub trait EvaluationClient: Send + Sync {
    /// Evaluates `resume_text` following `instructions`. Implementations
    /// must request deterministic output.
    async fn evaluate(
        &self,
        resume_text: &str,
        instructions: &str,
    ) -> Result<EvaluationResult, EvaluationError>;
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Hand-rolled test doubles for the two request collaborators.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use bytes::Bytes;
    use serde_json::json;

    use super::{EvaluationClient, EvaluationError, EvaluationResult};
    use crate::extraction::{DocumentTextExtractor, ExtractionError};
    use crate::llm_client::{parse_json_text, LlmError};

    pub fn sample_payload() -> serde_json::Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "Not Found",
            "education": ["B.Tech CS, 2024"],
            "skills": ["Rust", "SQL", "Kubernetes"],
            "match_percentage": 65,
            "detected_role": "Backend Engineer",
            "missing_keywords": ["gRPC"],
            "profile_summary": "Backend engineer focused on Rust services.",
            "scoring_reasoning": "Started at 100. Deducted 25 for missing gRPC. Deducted 10 for vague metrics. Final: 65."
        })
    }

    pub fn sample_result() -> EvaluationResult {
        serde_json::from_value(sample_payload()).unwrap()
    }

    /// Extractor that ignores the bytes and returns a fixed outcome.
    pub enum StubExtractor {
        Text(String),
        Fail,
        /// The blocking extraction task was cancelled before finishing.
        Cancelled,
    }

    #[async_trait]
    impl DocumentTextExtractor for StubExtractor {
        async fn extract(&self, _document: Bytes) -> Result<String, ExtractionError> {
            match self {
                StubExtractor::Text(text) => Ok(text.clone()),
                StubExtractor::Fail => Err(ExtractionError::NoText),
                StubExtractor::Cancelled => {
                    Err(ExtractionError::Task("task was cancelled".to_string()))
                }
            }
        }
    }

    /// What the mock evaluator answers with.
    pub enum MockReply {
        /// Raw model text, parsed exactly like a real response.
        Raw(String),
        /// Transport-level failure.
        Unavailable,
    }

    /// Evaluator double that counts calls and records every prompt it sees.
    pub struct MockEvaluator {
        reply: MockReply,
        call_count: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl MockEvaluator {
        pub fn new(reply: MockReply) -> Self {
            Self {
                reply,
                call_count: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn returning(payload: &serde_json::Value) -> Self {
            Self::new(MockReply::Raw(payload.to_string()))
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }

        pub fn last_prompt(&self) -> Option<String> {
            self.prompts.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl EvaluationClient for MockEvaluator {
        async fn evaluate(
            &self,
            _resume_text: &str,
            instructions: &str,
        ) -> Result<EvaluationResult, EvaluationError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(instructions.to_string());
            match &self.reply {
                MockReply::Raw(text) => Ok(parse_json_text(text)?),
                MockReply::Unavailable => Err(EvaluationError::Llm(LlmError::Api {
                    status: 503,
                    message: "model overloaded".to_string(),
                })),
            }
        }
    }
}
