use axum::{
    extract::multipart::{Multipart, MultipartError},
    http::StatusCode,
};
use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// One evaluation request, built from the multipart form and dropped once
/// the response is sent.
#[derive(Debug)]
pub struct EvaluationRequest {
    pub filename: String,
    pub document: Bytes,
    /// Empty when the form carried no `job_description` field.
    pub job_description: String,
}

/// Parses the multipart form into an `EvaluationRequest`.
///
/// A `resume` part without a filename is a plain form value, not a file, and
/// does not count as an upload. Only the first occurrence of each field is used.
pub async fn parse_evaluation_form(mut multipart: Multipart) -> Result<EvaluationRequest, AppError> {
    let mut resume: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            RESUME_FIELD if resume.is_none() && field.file_name().is_some() => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(upload_error)?;
                debug!("Received resume upload '{}' ({} bytes)", filename, data.len());
                resume = Some((filename, data));
            }
            JOB_DESCRIPTION_FIELD if job_description.is_none() => {
                job_description = Some(field.text().await.map_err(upload_error)?);
            }
            _ => {
                // Drain fields we don't use so the stream can advance.
                let _ = field.bytes().await.map_err(upload_error)?;
            }
        }
    }

    let (filename, document) = resume.ok_or(AppError::NoFileProvided)?;
    if filename.is_empty() {
        return Err(AppError::NoFileSelected);
    }

    Ok(EvaluationRequest {
        filename,
        document,
        job_description: job_description.unwrap_or_default(),
    })
}

/// Oversized bodies get their own status; any other unreadable body means no
/// file could be obtained from the request.
fn upload_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        warn!("Malformed multipart body: {}", e.body_text());
        AppError::NoFileProvided
    }
}
