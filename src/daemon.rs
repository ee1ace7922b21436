use std::future::Future;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::domains::conversation::Conversation;
use crate::error::{RecipeBotError, Result};
use crate::services::chat::ChatService;

#[derive(Clone)]
pub struct AppState {
    pub chat: ChatService,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Conversation,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub messages: Conversation,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/chat", post(chat))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn chat(State(state): State<AppState>, Json(payload): Json<ChatRequest>) -> Response {
    match state.chat.respond(payload.messages).await {
        Ok(messages) => (StatusCode::OK, Json(ChatResponse { messages })).into_response(),
        Err(err) => {
            let status = if err.is_provider_failure() {
                StatusCode::BAD_GATEWAY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            tracing::warn!(%status, "Chat turn failed: {err}");
            (
                status,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Serves until ctrl-c.
pub async fn run(host: &str, port: u16, state: AppState) -> Result<()> {
    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!("Could not listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutting down");
    };
    run_with_shutdown(host, port, state, shutdown).await
}

pub async fn run_with_shutdown<F>(
    host: &str,
    port: u16,
    state: AppState,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!(
        model = state.chat.persona().model(),
        "Serving recipe assistant"
    );
    let app = build_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| RecipeBotError::Runtime(e.to_string()))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| RecipeBotError::Runtime(e.to_string()))?;

    Ok(())
}
