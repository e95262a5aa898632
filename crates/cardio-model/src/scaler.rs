//! Fitted feature scalers.

use serde::{Deserialize, Serialize};

use crate::ArtifactError;

/// A fitted scaler applied to a dense feature vector before inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Scaler {
    /// `(x - mean) / scale`. A zero scale is treated as 1.
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    /// `x * scale + min`.
    MinMax { min: Vec<f64>, scale: Vec<f64> },
    /// Passes values through unchanged.
    #[default]
    Identity,
}

impl Scaler {
    /// Number of features the scaler was fitted on, if it is width-bound.
    pub fn width(&self) -> Option<usize> {
        match self {
            Scaler::Standard { mean, .. } => Some(mean.len()),
            Scaler::MinMax { min, .. } => Some(min.len()),
            Scaler::Identity => None,
        }
    }

    /// Checks the fitted parameters agree with each other and are finite.
    pub(crate) fn validate(&self) -> Result<(), ArtifactError> {
        let (a, b) = match self {
            Scaler::Standard { mean, scale } => (mean, scale),
            Scaler::MinMax { min, scale } => (min, scale),
            Scaler::Identity => return Ok(()),
        };
        if a.len() != b.len() {
            return Err(ArtifactError::Shape(format!(
                "scaler parameter lengths differ: {} vs {}",
                a.len(),
                b.len()
            )));
        }
        if a.iter().chain(b.iter()).any(|v| !v.is_finite()) {
            return Err(ArtifactError::Shape("scaler parameters must be finite".into()));
        }
        Ok(())
    }

    /// Scales `x`. Callers guarantee `x.len()` matches the fitted width.
    pub fn transform(&self, x: &[f64]) -> Vec<f64> {
        match self {
            Scaler::Standard { mean, scale } => x
                .iter()
                .zip(mean.iter().zip(scale))
                .map(|(v, (m, s))| {
                    let s = if *s == 0.0 { 1.0 } else { *s };
                    (v - m) / s
                })
                .collect(),
            Scaler::MinMax { min, scale } => x
                .iter()
                .zip(min.iter().zip(scale))
                .map(|(v, (m, s))| v * s + m)
                .collect(),
            Scaler::Identity => x.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_transform() {
        let scaler = Scaler::Standard {
            mean: vec![10.0, 0.0],
            scale: vec![2.0, 0.0],
        };
        assert_eq!(scaler.transform(&[14.0, 3.0]), vec![2.0, 3.0]);
    }

    #[test]
    fn test_min_max_transform() {
        let scaler = Scaler::MinMax {
            min: vec![-1.0],
            scale: vec![0.5],
        };
        assert_eq!(scaler.transform(&[4.0]), vec![1.0]);
    }

    #[test]
    fn test_validate_parameters() {
        let scaler = Scaler::Standard {
            mean: vec![0.0; 3],
            scale: vec![1.0; 3],
        };
        assert!(scaler.validate().is_ok());
        assert_eq!(scaler.width(), Some(3));

        let ragged = Scaler::MinMax {
            min: vec![0.0; 3],
            scale: vec![1.0; 2],
        };
        assert!(matches!(ragged.validate(), Err(ArtifactError::Shape(_))));

        let non_finite = Scaler::Standard {
            mean: vec![f64::NAN],
            scale: vec![1.0],
        };
        assert!(matches!(non_finite.validate(), Err(ArtifactError::Shape(_))));

        assert!(Scaler::Identity.validate().is_ok());
        assert_eq!(Scaler::Identity.width(), None);
    }

    #[test]
    fn test_deserialize_tagged() {
        let scaler: Scaler =
            serde_json::from_str(r#"{"type":"standard","mean":[1.0],"scale":[2.0]}"#).unwrap();
        assert_eq!(scaler.width(), Some(1));

        let scaler: Scaler = serde_json::from_str(r#"{"type":"identity"}"#).unwrap();
        assert_eq!(scaler, Scaler::Identity);
    }
}
