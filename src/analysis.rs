use std::io::Write;

use anyhow::Result;
use log::{debug, info};

use crate::inference::{InferenceBackend, InferenceError};
use crate::models::{InferenceResult, UploadedImage};
use crate::session::SessionState;

/// What an upload pass did with the submitted image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// A new inference call ran and its result is now in the session.
    Analyzed,
    /// The identical image was already analyzed; no call was issued.
    AlreadyAnalyzed,
}

/// Commit an upload into the session.
///
/// Returns false when the incoming image equals the current one and its
/// analysis already completed: the at-most-once guard that keeps a
/// re-rendered upload view from issuing a duplicate inference call. Any
/// other upload replaces the current image, discarding the previous result
/// before new detections exist (results are never merged).
pub fn accept_upload(session: &mut SessionState, upload: &UploadedImage) -> bool {
    if session.is_analyzed() && session.image() == Some(upload) {
        debug!("{} already analyzed, skipping inference", upload.file_name);
        return false;
    }
    session.set_image(upload.clone());
    true
}

/// Materialize the upload to a scoped temporary file and run one inference
/// call against it. The temporary file is removed when this returns, on
/// success and on failure alike.
pub async fn run_inference(
    backend: &dyn InferenceBackend,
    model_id: &str,
    upload: &UploadedImage,
) -> Result<InferenceResult, InferenceError> {
    let mut tmp = tempfile::Builder::new()
        .prefix("defectlens-")
        .suffix(upload.media_type.suffix())
        .tempfile()?;
    tmp.write_all(&upload.bytes)?;
    tmp.flush()?;

    info!(
        "analyzing {} ({} bytes) with model {}",
        upload.file_name,
        upload.bytes.len(),
        model_id
    );
    backend.infer(tmp.path(), model_id).await
}

/// Full upload-to-result pass: commit the upload, run at most one inference
/// call, and store the result in the session.
///
/// On failure the error propagates and the analysis flag stays false, so
/// re-submitting the same image retries; nothing retries automatically.
pub async fn analyze(
    session: &mut SessionState,
    backend: &dyn InferenceBackend,
    model_id: &str,
    upload: UploadedImage,
) -> Result<UploadOutcome> {
    if !accept_upload(session, &upload) {
        return Ok(UploadOutcome::AlreadyAnalyzed);
    }
    let result = run_inference(backend, model_id, &upload).await?;
    session.set_result(result)?;
    Ok(UploadOutcome::Analyzed)
}
