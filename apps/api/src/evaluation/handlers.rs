//! Axum route handlers for the Evaluation API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::evaluation::service::evaluate_resume;
use crate::evaluation::upload::parse_evaluation_form;
use crate::evaluation::EvaluationResult;
use crate::state::AppState;

/// POST /parse
///
/// Multipart form with a `resume` file and an optional `job_description`.
/// Returns the model's evaluation verbatim.
pub async fn handle_parse(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<EvaluationResult>, AppError> {
    // A body that is not multipart at all carries no file either.
    let multipart = multipart.map_err(|rejection| {
        debug!("Rejected non-multipart body: {rejection}");
        AppError::NoFileProvided
    })?;

    let request = parse_evaluation_form(multipart).await?;
    let result = evaluate_resume(
        request,
        state.extractor.as_ref(),
        state.evaluator.as_deref(),
    )
    .await?;

    Ok(Json(result))
}
