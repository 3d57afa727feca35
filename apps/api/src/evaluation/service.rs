use tracing::info;

use crate::errors::AppError;
use crate::evaluation::prompts::build_instruction_prompt;
use crate::evaluation::upload::EvaluationRequest;
use crate::evaluation::{EvaluationClient, EvaluationError, EvaluationResult};
use crate::extraction::{DocumentTextExtractor, ExtractionError};

/// Runs one evaluation: extract → build prompt → evaluate.
///
/// Extraction failure returns before the evaluator is touched. A missing
/// evaluator is only reported after extraction succeeds.
pub async fn evaluate_resume(
    request: EvaluationRequest,
    extractor: &dyn DocumentTextExtractor,
    evaluator: Option<&dyn EvaluationClient>,
) -> Result<EvaluationResult, AppError> {
    let EvaluationRequest {
        filename,
        document,
        job_description,
    } = request;

    let resume_text = extractor.extract(document).await?;
    if resume_text.trim().is_empty() {
        return Err(ExtractionError::NoText.into());
    }

    let instructions = build_instruction_prompt(&job_description);
    let evaluator = evaluator.ok_or(EvaluationError::NotConfigured)?;
    let result = evaluator.evaluate(&resume_text, &instructions).await?;

    info!(
        "Evaluated '{}': role='{}' match={}%",
        filename, result.detected_role, result.match_percentage
    );
    Ok(result)
}
