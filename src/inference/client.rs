use crate::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Capability to run one text through the upstream sentiment model.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Classify `text`, returning the raw JSON body produced by the model
    /// service. Callers relay this body to their own clients untouched, so
    /// implementations must not reshape or re-serialize it.
    async fn predict(&self, text: &str) -> Result<Vec<u8>>;
}

#[derive(Serialize)]
struct PredictRequest {
    text: String,
}

pub struct HttpInferenceClient {
    predict_url: String,
    client: reqwest::Client,
}

impl HttpInferenceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            predict_url: format!("{}/predict", base_url.trim_end_matches('/')),
            client,
        })
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn predict(&self, text: &str) -> Result<Vec<u8>> {
        debug!("Sending prediction request to {}", self.predict_url);

        let request = PredictRequest {
            text: text.to_string(),
        };

        let response = self
            .client
            .post(&self.predict_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::upstream(format!(
                "inference service returned {status}: {body}"
            )));
        }

        let body = response.bytes().await?;

        // Only well-formedness is checked, never the shape: the body goes
        // back to the caller exactly as the model service produced it.
        if let Err(e) = serde_json::from_slice::<serde_json::Value>(&body) {
            return Err(Error::upstream(format!(
                "inference service returned malformed JSON: {e}"
            )));
        }

        debug!("Received {} byte classification", body.len());

        Ok(body.to_vec())
    }
}
