//! Core domain types and error definitions for cardio-risk.
//!
//! This crate provides the types shared by the model and server crates:
//!
//! - [`FeatureRecord`] — One patient's named numeric features
//! - [`RiskAssessment`] — Positive-class probability plus thresholded risk flag
//! - [`PredictError`] — Request-level failures raised while scoring a record
//!
//! # Example
//!
//! ```rust
//! use cardio_core::{FeatureRecord, RiskAssessment};
//!
//! let record: FeatureRecord = [("age".to_string(), 14600.0), ("ap_hi".to_string(), 120.0)]
//!     .into_iter()
//!     .collect();
//! let record = record.with_age_in_years().unwrap();
//! assert!(record.get("age").is_none());
//!
//! let assessment = RiskAssessment::from_probability(0.5);
//! assert_eq!(assessment.risk, 1);
//! ```

mod record;

pub use record::{age_in_years, FeatureRecord, AGE_FEATURE, AGE_YEARS_FEATURE, DAYS_PER_YEAR};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Probability at or above which a record is flagged as at risk.
pub const RISK_THRESHOLD: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

/// Errors raised while turning a request body into a risk assessment.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The body was not a JSON object of feature values.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// A feature the transform or the model needs is absent.
    #[error("Missing required feature: {0}")]
    MissingFeature(String),

    /// A feature value is not a number.
    #[error("Feature '{feature}' must be numeric, got {found}")]
    NonNumeric { feature: String, found: &'static str },

    /// The model produced an unusable result.
    #[error("Inference failed: {0}")]
    Inference(String),
}

impl PredictError {
    /// True when the failure is caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, PredictError::Inference(_))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Risk Assessment
// ─────────────────────────────────────────────────────────────────────────────

/// Result of scoring one feature record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Probability of the positive class, in `[0, 1]`.
    pub probability: f64,
    /// 1 when `probability >= 0.5`, else 0.
    pub risk: u8,
}

impl RiskAssessment {
    /// Builds an assessment by thresholding `probability` at [`RISK_THRESHOLD`].
    pub fn from_probability(probability: f64) -> Self {
        Self {
            probability,
            risk: u8::from(probability >= RISK_THRESHOLD),
        }
    }

    /// Rounds the reported probability to `decimals` places.
    ///
    /// Rounds the exact binary value (ties to even), so a literal such as
    /// `0.12355`, stored just below the tie, rounds down. The risk flag is left
    /// as computed from the unrounded probability.
    pub fn rounded(self, decimals: u32) -> Self {
        let probability = format!("{:.*}", decimals as usize, self.probability)
            .parse()
            .unwrap_or(self.probability);
        Self {
            probability,
            ..self
        }
    }
}
