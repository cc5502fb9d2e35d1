//! doclens-server - REST API server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use doclens_core::{
    DocumentPipeline, KeywordExtractor, LexicalEngine, NlpEngine, PipelineConfig,
};
use doclens_extractors::ExtractionPipeline;
use doclens_server::{create_server, AppState};
use tokio::signal;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Build the NLP engine once. A construction failure flips the process
/// into permanent degraded mode rather than aborting startup.
fn load_nlp_engine() -> Option<Arc<dyn NlpEngine>> {
    match LexicalEngine::new() {
        Ok(engine) => {
            info!("NLP engine loaded");
            Some(Arc::new(engine))
        }
        Err(err) => {
            warn!("NLP engine unavailable, keyword extraction disabled: {err}");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("doclens_server=debug".parse().unwrap()),
        )
        .init();

    // Get configuration from environment
    let host = std::env::var("DOCLENS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("DOCLENS_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("DOCLENS_PORT must be a valid port number");

    // Assemble the pipeline: extraction dispatch plus keyword extraction
    // with startup-decided NLP availability.
    let keywords = KeywordExtractor::from_engine(load_nlp_engine());
    let pipeline = DocumentPipeline::new(ExtractionPipeline::with_defaults(), keywords);
    let state = AppState::new(pipeline, PipelineConfig::default());

    let app = create_server(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting doclens-server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped cleanly");
    Ok(())
}
