mod client;
mod error;

pub use client::HttpInferenceClient;
pub use error::InferenceError;

use std::path::Path;

use async_trait::async_trait;

use crate::models::InferenceResult;

/// Boundary to the remote detection service.
///
/// The production implementation speaks HTTP; test suites substitute canned
/// backends. One call per analysis; no retry, no streaming.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Submit the image at `image_path` to the model identified by
    /// `model_id` and decode the returned detections.
    async fn infer(
        &self,
        image_path: &Path,
        model_id: &str,
    ) -> Result<InferenceResult, InferenceError>;
}
