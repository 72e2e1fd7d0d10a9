//! HTTP server for mediqd

use crate::config::Config;
use crate::engine::TriageEngine;
use crate::knowledge::KnowledgeBase;
use crate::routes;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Chat bodies are small; anything bigger is not a patient message
const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Application state shared across handlers
pub struct AppState {
    pub engine: TriageEngine,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(engine: TriageEngine) -> Self {
        Self {
            engine,
            start_time: Instant::now(),
        }
    }
}

/// Assemble the router (separate from `run` so tests can drive it directly)
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::chat_routes())
        .merge(routes::health_routes())
        .merge(routes::department_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
}

/// Run the HTTP server
pub async fn run(config: Config) -> Result<()> {
    let kb = KnowledgeBase::new();
    kb.validate()?;

    let engine = TriageEngine::new(kb, &config);
    let state = Arc::new(AppState::new(engine));

    // Periodic session sweep
    let prune_state = state.clone();
    let prune_interval = Duration::from_secs(config.sessions.prune_interval_secs);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(prune_interval);
        loop {
            ticker.tick().await;
            prune_state.engine.prune_expired_sessions().await;
        }
    });

    let app = app(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!("  Listening on http://{}", config.server.bind);

    axum::serve(listener, app).await?;
    Ok(())
}
