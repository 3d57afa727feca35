use async_trait::async_trait;
use tracing::warn;

use crate::evaluation::prompts::{build_user_prompt, EVALUATION_ROLE};
use crate::evaluation::{EvaluationClient, EvaluationError, EvaluationResult};
use crate::llm_client::prompts::json_only_system;
use crate::llm_client::LlmClient;

/// Production evaluator: one deterministic Gemini call per resume.
pub struct GeminiEvaluator(pub LlmClient);

#[async_trait]
impl EvaluationClient for GeminiEvaluator {
    async fn evaluate(
        &self,
        resume_text: &str,
        instructions: &str,
    ) -> Result<EvaluationResult, EvaluationError> {
        let prompt = build_user_prompt(instructions, resume_text);
        let result: EvaluationResult = self
            .0
            .call_json(&prompt, &json_only_system(EVALUATION_ROLE))
            .await?;

        if result.score_out_of_range() {
            warn!(
                "Model returned match_percentage={} outside 0-100; clamping",
                result.match_percentage
            );
        }
        Ok(result.clamp_score())
    }
}
