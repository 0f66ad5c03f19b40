use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use colored::Colorize;
use std::sync::Arc;

use crate::relay::ChatRelay;
use crate::web::protocol::{GenerateRequest, FUNCTION_HEADER};

/// Application state shared across routes
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ChatRelay>,
}

/// Create router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/generate",
            post(generate).fallback(method_not_allowed),
        )
        .route("/health", get(health))
        .with_state(state)
}

/// POST /api/generate - Relay a prompt and stream the answer as plain text
async fn generate(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let request: GenerateRequest = serde_json::from_slice(&body)?;

    let relayed = state.relay.run(&request.prompt).await?;

    let mut response = Response::new(Body::from_stream(relayed.tokens));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    if let Some(call) = &relayed.function_call {
        if let Ok(value) = HeaderValue::from_str(&call.name) {
            response.headers_mut().insert(FUNCTION_HEADER, value);
        }
    }

    Ok(response)
}

/// Any verb other than POST on the generate route
async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// GET /health - Liveness probe
async fn health() -> &'static str {
    "ok"
}

// Error handling
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Relay(anyhow::Error),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Relay(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(format!("Invalid request body: {}", err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Relay(err) => {
                eprintln!("{} {}", "❌ Error generating response:".red(), err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let mut response = (status, message).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        response
    }
}
