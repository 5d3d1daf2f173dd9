use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::handlers::{AnalyzeError, AnalyzeHandler};
use crate::models::ErrorBody;

pub struct AppState {
    pub analyze_handler: Arc<AnalyzeHandler>,
}

pub fn create_router(analyze_handler: Arc<AnalyzeHandler>, body_limit_bytes: usize) -> Router {
    let state = Arc::new(AppState { analyze_handler });

    Router::new()
        .route("/", get(root_handler))
        .route("/api/analyze", any(analyze_endpoint))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        // Permissive CORS so browser-hosted frontends can call the API directly
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(state)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        match self {
            AnalyzeError::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            AnalyzeError::Internal(msg) => error_response(StatusCode::INTERNAL_SERVER_ERROR, msg),
        }
    }
}

async fn analyze_endpoint(
    method: Method,
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Response {
    match method {
        Method::OPTIONS => StatusCode::OK.into_response(),
        Method::POST => {
            let payload: Value = if body.iter().all(u8::is_ascii_whitespace) {
                Value::Object(Default::default())
            } else {
                match serde_json::from_slice(&body) {
                    Ok(payload) => payload,
                    Err(e) => {
                        log::error!("❌ Failed to parse analyze body: {}", e);
                        return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
                    }
                }
            };

            match state.analyze_handler.analyze(&payload).await {
                Ok(result) => (StatusCode::OK, Json(result)).into_response(),
                Err(e) => e.into_response(),
            }
        }
        _ => {
            log::debug!("🚫 {} /api/analyze rejected", method);
            error_response(StatusCode::METHOD_NOT_ALLOWED, "POST only")
        }
    }
}

async fn root_handler() -> &'static str {
    "Food Calorie API - POST an image data URL to /api/analyze"
}

async fn health_check() -> &'static str {
    "OK"
}
