//! Loaded-artifact metadata.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::ServerState;

/// Response for GET /model.
#[derive(Debug, Serialize)]
pub struct ModelInfoResponse {
    pub kind: &'static str,
    pub path: String,
    pub features: Vec<String>,
    pub rounding: Option<u32>,
}

/// GET /model - Describe the artifact this process is serving.
pub async fn info(State(state): State<Arc<ServerState>>) -> Json<ModelInfoResponse> {
    let artifact = &state.artifact;
    Json(ModelInfoResponse {
        kind: artifact.kind(),
        path: state.model_path.display().to_string(),
        features: artifact.features().to_vec(),
        rounding: artifact.rounding(),
    })
}
