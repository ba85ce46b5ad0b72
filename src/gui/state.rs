use std::sync::Arc;

use crate::inference::InferenceBackend;
use crate::session::SessionState;

/// Shared application state passed by `&mut` into every screen update.
/// Session data lives here, never in statics.
pub struct AppState {
    pub session: SessionState,
    pub backend: Arc<dyn InferenceBackend>,
    pub model_id: String,
}
