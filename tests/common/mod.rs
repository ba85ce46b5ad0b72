mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from defectlens for tests
pub use defectlens::inference::{InferenceBackend, InferenceError};
pub use defectlens::models::{Detection, InferenceResult, MediaType, UploadedImage};
pub use defectlens::session::{SessionError, SessionState};
pub use defectlens::{UploadOutcome, accept_upload, analyze, run_inference};
