use std::path::Path;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use super::{InferenceBackend, InferenceError};
use crate::config::InferenceConfig;
use crate::models::InferenceResult;

/// Cap on how much of an error body is carried into the error message.
const ERROR_BODY_LIMIT: usize = 200;

/// HTTP client for the remote detection endpoint.
///
/// Posts the raw image bytes to `{endpoint}/{model_id}?api_key={key}` and
/// decodes the JSON predictions document. The per-request timeout comes from
/// the configuration; an unresponsive service fails the call instead of
/// stalling the session.
pub struct HttpInferenceClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl HttpInferenceClient {
    pub fn new(config: &InferenceConfig) -> Result<Self, InferenceError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl InferenceBackend for HttpInferenceClient {
    async fn infer(
        &self,
        image_path: &Path,
        model_id: &str,
    ) -> Result<InferenceResult, InferenceError> {
        let bytes = tokio::fs::read(image_path).await?;
        let url = format!("{}/{}", self.endpoint, model_id);
        debug!("posting {} byte image to {}", bytes.len(), url);

        let response = self
            .http
            .post(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(ERROR_BODY_LIMIT)
                .collect();
            return Err(InferenceError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

/// Decode a predictions document. Every detection must carry all required
/// fields; anything less is a malformed response, not a partial result.
pub(crate) fn parse_response(body: &str) -> Result<InferenceResult, InferenceError> {
    serde_json::from_str(body).map_err(|e| InferenceError::Response(e.to_string()))
}
