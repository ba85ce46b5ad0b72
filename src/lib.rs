pub mod analysis;
pub mod config;
pub mod inference;
pub mod models;
pub mod render;
pub mod session;

pub use analysis::{UploadOutcome, accept_upload, analyze, run_inference};
pub use config::InferenceConfig;
pub use inference::{HttpInferenceClient, InferenceBackend, InferenceError};
pub use models::{Detection, InferenceResult, MediaType, UploadedImage};
pub use session::{SessionError, SessionState};

#[cfg(feature = "gui")]
pub mod gui;
