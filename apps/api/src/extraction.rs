//! Document text extraction — turns an uploaded resume into plain text.
//!
//! `AppState` holds an `Arc<dyn DocumentTextExtractor>`; production uses
//! `PdfTextExtractor`, tests swap in a fixed-text double.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document is empty")]
    EmptyDocument,

    #[error("PDF parse error: {0}")]
    Pdf(String),

    #[error("PDF parser panicked")]
    Panicked,

    #[error("extraction task failed: {0}")]
    Task(String),

    #[error("document contains no extractable text")]
    NoText,
}

#[async_trait]
pub trait DocumentTextExtractor: Send + Sync {
    /// Returns the document's text. Implementations must not return an
    /// all-whitespace string as success; that is `ExtractionError::NoText`.
    async fn extract(&self, document: Bytes) -> Result<String, ExtractionError>;
}

/// `pdf-extract` backed extractor. Parsing is blocking and CPU-bound, so it
/// runs on Tokio's blocking pool.
pub struct PdfTextExtractor;

#[async_trait]
impl DocumentTextExtractor for PdfTextExtractor {
    async fn extract(&self, document: Bytes) -> Result<String, ExtractionError> {
        if document.is_empty() {
            return Err(ExtractionError::EmptyDocument);
        }

        let size = document.len();
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&document))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    ExtractionError::Panicked
                } else {
                    ExtractionError::Task(e.to_string())
                }
            })?
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

        let text = normalize_text(&text).ok_or(ExtractionError::NoText)?;
        debug!("Extracted {} chars from {} byte document", text.len(), size);
        Ok(text)
    }
}

/// Drops blank lines and trailing whitespace. `None` when nothing is left.
pub fn normalize_text(raw: &str) -> Option<String> {
    let text = raw
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
