//! Axum router: each handler delegates to a payload builder in
//! [crate::server::api] and maps its error to a status code.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;

use crate::parallel::WorkerPool;
use crate::server::api::{self, ApiError};

#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    pub pool: WorkerPool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/estimate", post(estimate))
        .route("/api/validate", post(validate))
        .route("/api/evaluate", post(evaluate))
        .route("/api/companions", get(companions))
        .route("/api/set-cards", get(set_cards))
        .fallback(not_found)
        .with_state(state)
}

async fn health() -> Response {
    respond(api::health_payload())
}

async fn estimate(body: String) -> Response {
    respond(api::estimate_payload(&body))
}

async fn validate(body: String) -> Response {
    respond(api::validate_payload(&body))
}

async fn evaluate(State(state): State<AppState>, body: String) -> Response {
    let pool = state.pool;
    match tokio::task::spawn_blocking(move || respond(api::evaluate_payload(&body, &pool))).await {
        Ok(response) => response,
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
    }
}

async fn companions() -> Response {
    respond(api::companions_payload())
}

async fn set_cards() -> Response {
    respond(api::set_cards_payload())
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not Found")
}

fn respond(result: Result<String, ApiError>) -> Response {
    match result {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) if err.is_client_error() => {
            tracing::debug!(error = %err, "rejected request");
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
        Err(err) => {
            tracing::error!(error = %err, "request failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = json!({ "status": "error", "message": message });
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body.to_string(),
    )
        .into_response()
}
