use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;

const DEFAULT_ENDPOINT: &str = "https://detect.roboflow.com";
const DEFAULT_MODEL_ID: &str = "intelligent-defect-detection/2";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    endpoint: Option<String>,
    model_id: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<u64>,
}

/// Connection settings for the remote inference service.
///
/// Resolved from an optional TOML file (path in `DEFECTLENS_CONFIG`) with
/// `DEFECTLENS_*` environment variables taking precedence. The credential is
/// never baked into the source and never logged.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub endpoint: String,
    pub model_id: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl InferenceConfig {
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("DEFECTLENS_CONFIG").ok();
        let file_cfg = match config_path.as_deref() {
            Some(path) => Some(read_config_file(Path::new(path))?),
            None => None,
        };
        let mut cfg = Self::from_file(file_cfg.unwrap_or_default());
        cfg.apply_env()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn from_file(file: ConfigFile) -> Self {
        Self {
            endpoint: file
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model_id: file
                .model_id
                .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            api_key: file.api_key.unwrap_or_default(),
            timeout: Duration::from_secs(file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        }
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(endpoint) = std::env::var("DEFECTLENS_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Ok(model_id) = std::env::var("DEFECTLENS_MODEL_ID") {
            self.model_id = model_id;
        }
        if let Ok(api_key) = std::env::var("DEFECTLENS_API_KEY") {
            self.api_key = api_key;
        }
        if let Ok(secs) = std::env::var("DEFECTLENS_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|e| anyhow!("invalid DEFECTLENS_TIMEOUT_SECS: {}", e))?;
            self.timeout = Duration::from_secs(secs);
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            bail!("endpoint must be an http(s) URL: {}", self.endpoint);
        }
        if self.model_id.is_empty() {
            bail!("model_id must not be empty");
        }
        if self.api_key.is_empty() {
            bail!("api key not configured; set DEFECTLENS_API_KEY or add api_key to the config file");
        }
        if self.timeout.is_zero() {
            bail!("timeout_secs must be greater than zero");
        }
        Ok(())
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("failed to parse config file {}", path.display()))
}
