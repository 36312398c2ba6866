//! Gyan HTTP Server
//!
//! Main entry point for the question page and the ask API.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use infrastructure::{
    AppConfig, EnvCredentialSource, ServerConfig, TemplateEngine, build_orchestrator, init_logging,
};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_logging(config.server.log_format)?;

    info!("🧠 Gyan v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        log_format = %config.server.log_format,
        translate_before_speech = config.pipeline.translate_before_speech,
        "Configuration loaded"
    );

    let env_credentials = EnvCredentialSource::new().load();
    if env_credentials.is_empty() {
        warn!("No provider keys in the environment; keys must be entered on the page");
    } else {
        info!(providers = ?env_credentials.configured(), "Provider keys found in environment");
    }

    let orchestrator =
        build_orchestrator(&config).context("Failed to initialize answer pipeline")?;
    let templates = TemplateEngine::new().context("Failed to compile templates")?;

    let state = AppState {
        orchestrator: Arc::new(orchestrator),
        env_credentials: Arc::new(env_credentials),
        templates,
        config: Arc::new(config.clone()),
    };

    // Add middleware (order matters: last added = outermost)
    let app = routes::create_router(state)
        .layer(RequestBodyLimitLayer::new(config.server.max_body_size_bytes))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if !server.cors_enabled {
        return CorsLayer::new();
    }

    if server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
}
