//! Environment-driven server configuration.

use std::env;
use std::path::PathBuf;

use cardio_model::DEFAULT_ARTIFACT_FILE;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Settings read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `CARDIO_MODEL_PATH`, defaults to `cardio_pipeline.json`.
    pub model_path: PathBuf,
    /// `CARDIO_BIND_ADDR`, defaults to `0.0.0.0:8000`.
    pub bind_addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let model_path = lookup("CARDIO_MODEL_PATH")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ARTIFACT_FILE.into());
        let bind_addr = lookup("CARDIO_BIND_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.into());

        Self {
            model_path: PathBuf::from(model_path),
            bind_addr,
        }
    }
}
