use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::evaluation::EvaluationError;
use crate::extraction::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The `Display` text of each variant is the exact message sent to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No resume file provided")]
    NoFileProvided,

    #[error("No selected file")]
    NoFileSelected,

    #[error("Failed to read PDF")]
    DocumentUnreadable(#[source] ExtractionError),

    #[error("File too large")]
    PayloadTooLarge,

    #[error("AI failed to process resume")]
    Evaluation(#[source] EvaluationError),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoFileProvided | AppError::NoFileSelected | AppError::DocumentUnreadable(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Evaluation(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ExtractionError> for AppError {
    fn from(e: ExtractionError) -> Self {
        match e {
            // A cancelled extraction task says nothing about the document.
            ExtractionError::Task(msg) => {
                AppError::Internal(anyhow::anyhow!("extraction task failed: {msg}"))
            }
            other => AppError::DocumentUnreadable(other),
        }
    }
}

impl From<EvaluationError> for AppError {
    fn from(e: EvaluationError) -> Self {
        AppError::Evaluation(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Underlying causes stay server-side; the client only sees the message.
        match &self {
            AppError::NoFileProvided | AppError::NoFileSelected | AppError::PayloadTooLarge => {
                tracing::info!("Rejected upload: {self}");
            }
            AppError::DocumentUnreadable(e) => tracing::error!("PDF extraction failed: {e}"),
            AppError::Evaluation(e) => tracing::error!("Resume evaluation failed: {e}"),
            AppError::Internal(e) => tracing::error!("Server error: {e:?}"),
        }

        error_response(self.status(), &self.to_string())
    }
}

/// Builds the `{"error": "..."}` body shared by every failure path.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_bad_request() {
        assert_eq!(AppError::NoFileProvided.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NoFileSelected.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::DocumentUnreadable(ExtractionError::NoText).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_evaluation_error_hides_cause() {
        let err = AppError::Evaluation(EvaluationError::NotConfigured);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "AI failed to process resume");
    }

    #[test]
    fn test_cancelled_extraction_is_internal_error() {
        let err = AppError::from(ExtractionError::Task("task was cancelled".to_string()));
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal Server Error");
    }

    #[test]
    fn test_unparseable_pdf_is_client_error() {
        let err = AppError::from(ExtractionError::Pdf("bad xref".to_string()));
        assert!(matches!(err, AppError::DocumentUnreadable(_)));
        assert_eq!(err.to_string(), "Failed to read PDF");
    }

    #[test]
    fn test_internal_error_message_is_generic() {
        let err = AppError::Internal(anyhow::anyhow!("disk on fire"));
        assert_eq!(err.to_string(), "Internal Server Error");
    }
}
