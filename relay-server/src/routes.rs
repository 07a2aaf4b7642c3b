//! Inbound HTTP surface of the relay
//!
//! One endpoint: POST /api/ask with body `{"prompt": "..."}`. Other
//! methods on the path get 405 from axum's method routing.

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::post;
use relay_core::{AskRequest, AskResponse, Config, RelayError, gemini};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

/// Build the relay router around an immutable config.
///
/// The endpoint is browser-facing, so the router carries a CORS layer
/// for cross-origin POSTs.
pub fn app(config: Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/ask", post(ask))
        .layer(cors)
        .with_state(Arc::new(config))
}

/// POST /api/ask
///
/// The body is read as raw bytes and parsed by hand: a malformed JSON
/// body counts as an unhandled fault and takes the generic 500 path,
/// not an extractor-shaped 4xx.
async fn ask(State(config): State<Arc<Config>>, body: Bytes) -> Response {
    let request: AskRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            error!(error = %err, "Failed to parse request body");
            return internal_server_error();
        }
    };

    match gemini::generate_content(&request.prompt, &config).await {
        Ok(text) => Json(AskResponse { text }).into_response(),
        Err(RelayError::EmptyPrompt) => {
            (StatusCode::BAD_REQUEST, "Bad Request: prompt is required.").into_response()
        }
        Err(RelayError::Upstream { .. }) => {
            // Upstream detail was already logged where the call failed;
            // the caller only gets a fixed message.
            (StatusCode::INTERNAL_SERVER_ERROR, "Error from Gemini API.").into_response()
        }
        Err(err) => {
            error!(error = %err, "Relay invocation failed");
            internal_server_error()
        }
    }
}

fn internal_server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Internal Server Error"})),
    )
        .into_response()
}
