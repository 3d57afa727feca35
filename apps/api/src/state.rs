use std::sync::Arc;

use crate::config::Config;
use crate::evaluation::EvaluationClient;
use crate::extraction::DocumentTextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn DocumentTextExtractor>,
    /// `None` when startup found no usable LLM credential; every evaluation
    /// then fails at the LLM step.
    pub evaluator: Option<Arc<dyn EvaluationClient>>,
}
