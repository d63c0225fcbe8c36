//! Webhook and health HTTP server.
//!
//! Runs on port 5000 and serves:
//! - `POST /webhook` - Telegram update delivery
//! - `GET /set_webhook` - registers `<WEBHOOK_URL>/webhook` with Telegram
//! - `GET /health` and `GET /` - liveness

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use futures_util::FutureExt;
use serde_json::json;
use std::net::SocketAddr;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::net::TcpListener;
use url::Url;

use crate::core::error::{BotError, BotResult};
use crate::telegram::{ChatClient, Dispatcher, InboundUpdate};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    dispatcher: Arc<Dispatcher>,
    chat: Arc<dyn ChatClient>,
    webhook_base_url: Option<String>,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher>, chat: Arc<dyn ChatClient>, webhook_base_url: Option<String>) -> Self {
        Self {
            dispatcher,
            chat,
            webhook_base_url,
        }
    }
}

/// Builds the router with all endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/webhook", post(webhook_handler))
        .route("/set_webhook", get(set_webhook_handler))
        .route("/health", get(health_handler))
        .with_state(Arc::new(state))
}

/// Start the web server and block until it stops.
pub async fn start_web_server(addr: SocketAddr, state: AppState) -> BotResult<()> {
    let app = router(state);

    log::info!("Starting web server on http://{}", addr);
    log::info!("  /webhook     - Telegram updates (POST)");
    log::info!("  /set_webhook - Register webhook with Telegram");
    log::info!("  /health      - Health check");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET / — plain-text liveness string.
async fn root_handler() -> &'static str {
    "🤖 Telegram Image Generator Bot is running!"
}

/// POST /webhook — decode the update and run it to completion.
async fn webhook_handler(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let update = match InboundUpdate::from_json(&body) {
        Ok(update) => update,
        Err(e) => {
            log::error!("Webhook error: {}", e);
            return error_response(e.to_string());
        }
    };

    let update_id = update.update_id;
    match AssertUnwindSafe(state.dispatcher.dispatch(update)).catch_unwind().await {
        Ok(action) => {
            log::debug!("Update {} handled: {:?}", update_id, action);
            Json(json!({ "status": "ok" })).into_response()
        }
        Err(_) => {
            log::error!("Webhook error: handler panicked on update {}", update_id);
            error_response(format!("internal error while handling update {}", update_id))
        }
    }
}

/// GET /set_webhook — register `<WEBHOOK_URL>/webhook` with Telegram.
async fn set_webhook_handler(State(state): State<Arc<AppState>>) -> Response {
    match register_webhook(&state).await {
        Ok(url) => {
            log::info!("Webhook set to {}", url);
            Json(json!({ "status": "Webhook set successfully", "url": url.as_str() })).into_response()
        }
        Err(e) => {
            log::error!("Set webhook error: {}", e);
            error_response(e.to_string())
        }
    }
}

async fn register_webhook(state: &AppState) -> BotResult<Url> {
    let base = state
        .webhook_base_url
        .as_deref()
        .ok_or_else(|| BotError::Config("WEBHOOK_URL environment variable not set".to_string()))?;
    let url = Url::parse(&format!("{}/webhook", base))?;

    state.chat.set_webhook(url.clone()).await?;
    Ok(url)
}

/// GET /health — health check with a unix timestamp.
async fn health_handler() -> impl IntoResponse {
    let now = chrono::Utc::now();
    let timestamp = now.timestamp_micros() as f64 / 1_000_000.0;

    Json(json!({
        "status": "healthy",
        "bot_info": "Image Generator Bot",
        "timestamp": timestamp,
    }))
}

fn error_response(message: String) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": message }))).into_response()
}
