//! Prediction endpoint.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use cardio_core::{FeatureRecord, RiskAssessment};
use serde_json::Value;
use tracing::warn;

use crate::error::AppError;
use crate::ServerState;

/// POST /predict - Score one feature record.
pub async fn predict(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RiskAssessment>, AppError> {
    let Json(body) = payload?;

    let record = FeatureRecord::from_json(&body)?;
    let assessment = state.artifact.assess(record).map_err(|e| {
        if !e.is_client_error() {
            warn!("Inference failed: {}", e);
        }
        AppError::from(e)
    })?;

    Ok(Json(assessment))
}
