use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    /// Connectivity failures, including request timeouts.
    #[error("request to inference service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("inference service returned HTTP {code}: {message}")]
    Status { code: u16, message: String },

    /// The service answered, but the payload is not a valid predictions
    /// document (undecodable, or a detection is missing a required field).
    #[error("malformed inference response: {0}")]
    Response(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
