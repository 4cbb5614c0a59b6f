use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::{error, info};

use crate::dispatch::DispatchReport;
use crate::pipeline;
use crate::sources::http_client;
use crate::state::AppState;

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(trigger))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

pub async fn serve(bind: &str) -> Result<()> {
    let state = AppState::new(http_client()?);
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .await
        .context("HTTP server error")
}

async fn trigger(State(state): State<Arc<AppState>>) -> Response {
    let _guard = state.run_lock.lock().await;
    render(pipeline::run_once(&state.http).await)
}

fn render(result: Result<DispatchReport>) -> Response {
    match result {
        Ok(_) => (StatusCode::OK, "Messages sent successfully").into_response(),
        Err(e) => {
            error!("Relay run failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("=== Exception === \n{:?}", e),
            )
                .into_response()
        }
    }
}
