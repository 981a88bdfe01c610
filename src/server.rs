//! Chat HTTP server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/ask` | Answer one question |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! `POST /ask` takes `{"question": "..."}` and always answers
//! `{"response": ...}`. Not-found keys, missing slots and unrecognised
//! questions are ordinary `200` answers. Only a failure inside request
//! handling produces an error status:
//!
//! ```json
//! { "response": "Server error. Please try again later." }
//! ```
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so the chat page can be
//! served from anywhere.

use std::any::Any;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use campus_assist_core::format::{self, OutputMode};
use campus_assist_core::router::Router as ChatRouter;
use serde::{Deserialize, Serialize};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};

use crate::config::Config;

pub const SERVER_ERROR: &str = "Server error. Please try again later.";

/// Shared application state passed to all route handlers.
#[derive(Clone)]
struct AppState {
    /// Question router over the read-only catalog (cheap to clone).
    router: ChatRouter,
    output_mode: OutputMode,
}

#[derive(Deserialize)]
struct AskRequest {
    #[serde(default)]
    question: String,
}

#[derive(Serialize)]
struct AskResponse {
    response: serde_json::Value,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Turns a handler panic into a logged `500` answer.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(%detail, "request handling failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(AskResponse {
            response: serde_json::Value::String(SERVER_ERROR.to_string()),
        }),
    )
        .into_response()
}

/// Wrap routes with the CORS and error-boundary layers every route shares.
pub fn with_layers(app: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);
    app.layer(CatchPanicLayer::custom(handle_panic)).layer(cors)
}

/// Build the application router. Exposed for in-process tests.
pub fn app(router: ChatRouter, output_mode: OutputMode) -> Router {
    let state = AppState {
        router,
        output_mode,
    };
    with_layers(
        Router::new()
            .route("/ask", post(handle_ask))
            .route("/health", get(handle_health))
            .with_state(state),
    )
}

/// Serve on `[server].bind` until the process is terminated.
pub async fn run_server(config: &Config, router: ChatRouter) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();
    let app = app(router, config.chat.output_mode);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", bind_addr, e))?;
    tracing::info!("campus-assist listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn handle_ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Json<AskResponse> {
    let (intent, slots) = state.router.classify(&req.question);
    let answer = state.router.dispatch(intent, &slots);
    tracing::debug!(
        ?intent,
        rrn = slots.rrn.as_deref().unwrap_or("-"),
        kind = answer.kind_label(),
        "answered question"
    );
    Json(AskResponse {
        response: format::render(&answer, state.output_mode),
    })
}
