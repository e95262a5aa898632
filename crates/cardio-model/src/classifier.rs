//! Binary classifiers exposing a two-class probability contract.

use serde::{Deserialize, Serialize};

use crate::ArtifactError;

/// A fitted binary classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Classifier {
    /// `P(1) = sigmoid(coef · x + intercept)`.
    LogisticRegression { coef: Vec<f64>, intercept: f64 },
}

impl Classifier {
    pub fn width(&self) -> usize {
        match self {
            Classifier::LogisticRegression { coef, .. } => coef.len(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ArtifactError> {
        let Classifier::LogisticRegression { coef, intercept } = self;
        if !intercept.is_finite() || coef.iter().any(|c| !c.is_finite()) {
            return Err(ArtifactError::Shape(
                "classifier parameters must be finite".into(),
            ));
        }
        Ok(())
    }

    /// Returns `[P(class=0), P(class=1)]` for one scaled row.
    pub fn predict_proba(&self, x: &[f64]) -> [f64; 2] {
        match self {
            Classifier::LogisticRegression { coef, intercept } => {
                let z = coef.iter().zip(x).map(|(c, v)| c * v).sum::<f64>() + intercept;
                let p = sigmoid(z);
                [1.0 - p, p]
            }
        }
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
