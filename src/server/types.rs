use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
