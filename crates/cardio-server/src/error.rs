//! Application error types and Axum response conversion.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cardio_core::PredictError;
use serde::Serialize;

/// Application-level errors with HTTP status code mapping.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unprocessable(String),
    Internal(String),
}

impl From<PredictError> for AppError {
    fn from(e: PredictError) -> Self {
        match e {
            PredictError::InvalidBody(_) => AppError::BadRequest(e.to_string()),
            PredictError::MissingFeature(_) | PredictError::NonNumeric { .. } => {
                AppError::Unprocessable(e.to_string())
            }
            PredictError::Inference(_) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest(e.body_text())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            AppError::Unprocessable(m) => (StatusCode::UNPROCESSABLE_ENTITY, m),
            AppError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_error_status_mapping() {
        let status = |e: PredictError| AppError::from(e).into_response().status();

        assert_eq!(
            status(PredictError::MissingFeature("age".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status(PredictError::NonNumeric {
                feature: "age".into(),
                found: "string"
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status(PredictError::InvalidBody("[]".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(PredictError::Inference("nan".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
