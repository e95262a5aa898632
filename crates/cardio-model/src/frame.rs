//! Single-row tabular frame consumed by combined pipelines.

use cardio_core::{FeatureRecord, PredictError};

/// One row of named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    row: Vec<f64>,
}

impl Frame {
    /// Builds a one-row frame with one column per record feature.
    pub fn single_row(record: &FeatureRecord) -> Self {
        let (columns, row) = record.iter().map(|(k, v)| (k.to_string(), v)).unzip();
        Self { columns, row }
    }

    pub fn column(&self, name: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|idx| self.row[idx])
    }

    /// Projects the row onto `schema`, in schema order. Extra columns are dropped.
    pub fn select(&self, schema: &[String]) -> Result<Vec<f64>, PredictError> {
        schema
            .iter()
            .map(|name| {
                self.column(name)
                    .ok_or_else(|| PredictError::MissingFeature(name.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_reorders_and_drops_extra() {
        let record: FeatureRecord = [
            ("b".to_string(), 2.0),
            ("a".to_string(), 1.0),
            ("extra".to_string(), 9.0),
        ]
        .into_iter()
        .collect();
        let frame = Frame::single_row(&record);
        assert_eq!(frame.column("extra"), Some(9.0));

        let schema = vec!["b".to_string(), "a".to_string()];
        assert_eq!(frame.select(&schema).unwrap(), vec![2.0, 1.0]);
    }

    #[test]
    fn test_select_missing_column() {
        let frame = Frame::single_row(&FeatureRecord::new());
        let err = frame.select(&["ap_hi".to_string()]).unwrap_err();
        assert_eq!(err, PredictError::MissingFeature("ap_hi".into()));
    }
}
