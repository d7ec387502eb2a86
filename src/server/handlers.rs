use super::types::{AnalysisRequest, ErrorResponse};
use crate::inference::InferenceClient;
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Clone)]
pub struct AppState {
    pub inference: Arc<dyn InferenceClient>,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    // Nothing reaches the upstream unless `text` is present and is a
    // string. Empty strings pass through.
    let request: AnalysisRequest = match serde_json::from_value(payload) {
        Ok(request) => request,
        Err(_) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Missing or invalid \"text\" field".to_string(),
                }),
            ));
        }
    };

    debug!("Received analysis request ({} bytes)", request.text.len());

    match state.inference.predict(&request.text).await {
        Ok(body) => {
            // The classification is relayed exactly as the upstream produced
            // it, so the body skips the usual Json re-serialization.
            Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
        }
        Err(e) => {
            error!("Sentiment analysis failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to analyze sentiment".to_string(),
                }),
            ))
        }
    }
}
