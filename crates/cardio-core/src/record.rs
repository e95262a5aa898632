//! Feature records and the age normalization applied before inference.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::PredictError;

/// Raw age field, measured in days.
pub const AGE_FEATURE: &str = "age";

/// Derived age field, measured in years.
pub const AGE_YEARS_FEATURE: &str = "age_years";

/// Divisor converting days to years. Must match the training-time definition.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Converts an age in days to an age in years.
pub fn age_in_years(age_days: f64) -> f64 {
    age_days / DAYS_PER_YEAR
}

/// One patient observation: feature name to numeric value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureRecord {
    values: BTreeMap<String, f64>,
}

impl FeatureRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a decoded JSON body.
    ///
    /// The body must be an object. Numbers are taken as-is and booleans map
    /// to 1/0; any other value type is rejected.
    pub fn from_json(value: &Value) -> Result<Self, PredictError> {
        let Value::Object(map) = value else {
            return Err(PredictError::InvalidBody(format!(
                "expected a JSON object of features, got {}",
                json_type_name(value)
            )));
        };
        Self::from_map(map)
    }

    pub fn from_map(map: &Map<String, Value>) -> Result<Self, PredictError> {
        let mut values = BTreeMap::new();
        for (name, value) in map {
            let number = match value {
                Value::Number(n) => n.as_f64(),
                Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
                _ => None,
            };
            let number = number.ok_or_else(|| PredictError::NonNumeric {
                feature: name.clone(),
                found: json_type_name(value),
            })?;
            values.insert(name.clone(), number);
        }
        Ok(Self { values })
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Looks up a feature, failing with [`PredictError::MissingFeature`].
    pub fn require(&self, name: &str) -> Result<f64, PredictError> {
        self.get(name)
            .ok_or_else(|| PredictError::MissingFeature(name.to_string()))
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Replaces `age` (days) with `age_years` (days / 365.25).
    ///
    /// Fails when `age` is absent; no default is filled in.
    pub fn with_age_in_years(mut self) -> Result<Self, PredictError> {
        let age_days = self
            .remove(AGE_FEATURE)
            .ok_or_else(|| PredictError::MissingFeature(AGE_FEATURE.to_string()))?;
        self.insert(AGE_YEARS_FEATURE, age_in_years(age_days));
        Ok(self)
    }

    /// Assembles the values of `order` into a dense vector.
    pub fn to_vector(&self, order: &[String]) -> Result<Vec<f64>, PredictError> {
        order.iter().map(|name| self.require(name)).collect()
    }
}

impl FromIterator<(String, f64)> for FeatureRecord {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
