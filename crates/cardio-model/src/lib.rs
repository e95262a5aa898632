//! Model artifact loading and inference for cardio-risk.
//!
//! An artifact is a JSON document tagged by `kind`:
//!
//! - `pipeline` — a combined pipeline that selects its own columns from a
//!   single-row frame, scales them and classifies.
//! - `bundle` — a decomposed `model` / `scaler` / `feature_order` triple; the
//!   record is ordered into a vector, scaled, then classified. Bundle
//!   probabilities are rounded to four decimals.
//!
//! Artifacts are loaded once with [`load_artifact`] and are immutable after.

mod artifact;
mod classifier;
mod frame;
mod loader;
mod scaler;

pub use artifact::{BundleArtifact, ModelArtifact, PipelineArtifact, BUNDLE_PROBABILITY_DECIMALS};
pub use classifier::Classifier;
pub use frame::Frame;
pub use loader::{load_artifact, parse_artifact, resolve_path, DEFAULT_ARTIFACT_FILE};
pub use scaler::Scaler;

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a model artifact. All are fatal at startup.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model artifact has an invalid shape: {0}")]
    Shape(String),
}
