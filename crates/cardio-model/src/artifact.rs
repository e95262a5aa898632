//! Model artifact shapes and the scoring path shared by both.

use std::collections::HashSet;

use cardio_core::{FeatureRecord, PredictError, RiskAssessment};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::Classifier;
use crate::frame::Frame;
use crate::scaler::Scaler;
use crate::ArtifactError;

/// Decimal places applied to bundle probabilities.
pub const BUNDLE_PROBABILITY_DECIMALS: u32 = 4;

/// Combined pipeline: owns its column schema, scaling step and classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineArtifact {
    /// Input column schema, in the order the pipeline was fitted on.
    pub features: Vec<String>,
    #[serde(default)]
    pub scaler: Scaler,
    pub classifier: Classifier,
}

impl PipelineArtifact {
    /// Runs the full pipeline on a single-row frame.
    pub fn predict_proba(&self, frame: &Frame) -> Result<[f64; 2], PredictError> {
        let row = frame.select(&self.features)?;
        let scaled = self.scaler.transform(&row);
        Ok(self.classifier.predict_proba(&scaled))
    }
}

/// Decomposed bundle: the caller orders, scales, then infers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleArtifact {
    pub model: Classifier,
    pub scaler: Scaler,
    pub feature_order: Vec<String>,
}

/// A loaded model artifact. Selected by the `kind` tag in the artifact file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Pipeline(PipelineArtifact),
    Bundle(BundleArtifact),
}

impl ModelArtifact {
    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::Pipeline(_) => "pipeline",
            ModelArtifact::Bundle(_) => "bundle",
        }
    }

    /// Feature names the model consumes, after the age transform.
    pub fn features(&self) -> &[String] {
        match self {
            ModelArtifact::Pipeline(p) => &p.features,
            ModelArtifact::Bundle(b) => &b.feature_order,
        }
    }

    /// Decimal places applied to the returned probability, if any.
    pub fn rounding(&self) -> Option<u32> {
        match self {
            ModelArtifact::Pipeline(_) => None,
            ModelArtifact::Bundle(_) => Some(BUNDLE_PROBABILITY_DECIMALS),
        }
    }

    /// Checks that every component agrees on the feature count.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let features = self.features();
        if features.is_empty() {
            return Err(ArtifactError::Shape("artifact lists no features".into()));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = features.iter().find(|f| !seen.insert(f.as_str())) {
            return Err(ArtifactError::Shape(format!("duplicate feature: {}", dup)));
        }

        let (scaler, classifier) = match self {
            ModelArtifact::Pipeline(p) => (&p.scaler, &p.classifier),
            ModelArtifact::Bundle(b) => (&b.scaler, &b.model),
        };
        scaler.validate()?;
        classifier.validate()?;

        let width = features.len();
        if let Some(fitted) = scaler.width().filter(|w| *w != width) {
            return Err(ArtifactError::Shape(format!(
                "scaler fitted on {} features, artifact lists {}",
                fitted, width
            )));
        }
        if classifier.width() != width {
            return Err(ArtifactError::Shape(format!(
                "classifier expects {} features, artifact lists {}",
                classifier.width(),
                width
            )));
        }
        Ok(())
    }

    /// Positive-class probability for an already transformed record.
    pub fn predict_proba(&self, record: &FeatureRecord) -> Result<f64, PredictError> {
        let [_, p] = match self {
            ModelArtifact::Pipeline(pipeline) => {
                pipeline.predict_proba(&Frame::single_row(record))?
            }
            ModelArtifact::Bundle(bundle) => {
                let x = record.to_vector(&bundle.feature_order)?;
                let x_scaled = bundle.scaler.transform(&x);
                bundle.model.predict_proba(&x_scaled)
            }
        };

        if !(0.0..=1.0).contains(&p) {
            return Err(PredictError::Inference(format!(
                "probability out of range: {}",
                p
            )));
        }
        Ok(p)
    }

    /// Scores a raw record: age transform, inference, threshold, rounding.
    pub fn assess(&self, record: FeatureRecord) -> Result<RiskAssessment, PredictError> {
        let record = record.with_age_in_years()?;
        let probability = self.predict_proba(&record)?;

        let assessment = RiskAssessment::from_probability(probability);
        let assessment = match self.rounding() {
            Some(decimals) => assessment.rounded(decimals),
            None => assessment,
        };

        debug!(
            kind = self.kind(),
            probability = assessment.probability,
            risk = assessment.risk,
            "Scored record"
        );
        Ok(assessment)
    }
}
