use thiserror::Error;

use crate::models::{InferenceResult, UploadedImage};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no image has been uploaded in this session")]
    NoImage,
}

/// Per-session state: the uploaded image, the last inference result and the
/// flag marking whether that result belongs to the current image.
///
/// Invariant: `result` is `Some` if and only if `analyzed` is true, and the
/// stored result always corresponds to the stored image. `set_image` clears
/// both result and flag, so a stale result can never be observed.
#[derive(Debug, Default)]
pub struct SessionState {
    image: Option<UploadedImage>,
    result: Option<InferenceResult>,
    analyzed: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    /// The inference result for the current image, if analysis has run.
    pub fn result(&self) -> Option<&InferenceResult> {
        self.result.as_ref()
    }

    pub fn is_analyzed(&self) -> bool {
        self.analyzed
    }

    /// Store a new image, discarding any result for the previous one.
    pub fn set_image(&mut self, image: UploadedImage) {
        self.image = Some(image);
        self.result = None;
        self.analyzed = false;
    }

    /// Commit the inference result for the current image.
    pub fn set_result(&mut self, result: InferenceResult) -> Result<(), SessionError> {
        if self.image.is_none() {
            return Err(SessionError::NoImage);
        }
        self.result = Some(result);
        self.analyzed = true;
        Ok(())
    }

    /// The single named transition clearing all session state. Invoked on
    /// entering Home or Upload, so every upload starts from a clean slate.
    pub fn begin_new_session(&mut self) {
        self.image = None;
        self.result = None;
        self.analyzed = false;
    }
}
