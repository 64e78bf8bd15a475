//! HTTP Handlers

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;

use lex_core::{DialogError, LexEvent, LexResponse};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub intents: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub request_id: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut intents: Vec<String> = state.router.names().into_iter().map(String::from).collect();
    intents.sort();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        intents,
    })
}

/// Lex code hook: one event in, one dialog action out
pub async fn fulfillment_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LexResponse>, ApiError> {
    let request_id = uuid::Uuid::new_v4().to_string();

    let event: LexEvent = serde_json::from_slice(&body)
        .map_err(|e| error_response(DialogError::from(e), &request_id))?;

    tracing::info!(
        %request_id,
        intent = %event.intent_name(),
        source = ?event.invocation_source,
        "code hook invoked"
    );

    let response = state
        .router
        .dispatch(event)
        .map_err(|e| error_response(e, &request_id))?;

    tracing::info!(%request_id, action = response.action_type(), "code hook answered");

    Ok(Json(response))
}

fn error_response(err: DialogError, request_id: &str) -> ApiError {
    let status = if err.is_client_error() {
        tracing::warn!(%request_id, "rejected request: {}", err);
        StatusCode::BAD_REQUEST
    } else {
        tracing::error!(%request_id, "code hook fault: {}", err);
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: err.code().into(),
            request_id: request_id.to_owned(),
        }),
    )
}
