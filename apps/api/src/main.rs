mod config;
mod errors;
mod evaluation;
mod extraction;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::evaluation::gemini::GeminiEvaluator;
use crate::evaluation::EvaluationClient;
use crate::extraction::PdfTextExtractor;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Screener v{}", env!("CARGO_PKG_VERSION"));

    let evaluator = build_evaluator(&config);

    let state = AppState {
        config: config.clone(),
        extractor: Arc::new(PdfTextExtractor),
        evaluator,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the Gemini-backed evaluator. Startup continues without one when the
/// credential is missing or the client can't be built; evaluations then fail.
fn build_evaluator(config: &Config) -> Option<Arc<dyn EvaluationClient>> {
    let Some(api_key) = config.gemini_api_key.clone() else {
        error!("FATAL: GEMINI_API_KEY is not set; resume evaluation is disabled");
        return None;
    };

    match LlmClient::new(
        api_key,
        config.gemini_model.clone(),
        &config.gemini_api_base,
        Duration::from_secs(config.llm_timeout_secs),
    ) {
        Ok(llm) => {
            info!("LLM client initialized (model: {})", llm.model());
            Some(Arc::new(GeminiEvaluator(llm)))
        }
        Err(e) => {
            error!("FATAL: failed to initialize the LLM client: {e}; resume evaluation is disabled");
            None
        }
    }
}
