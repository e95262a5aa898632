use std::path::PathBuf;

use cardio_model::ModelArtifact;

/// Process-wide state. Built once before serving and never mutated.
pub struct ServerState {
    pub artifact: ModelArtifact,
    pub model_path: PathBuf,
}

impl ServerState {
    pub fn new(artifact: ModelArtifact, model_path: PathBuf) -> Self {
        Self {
            artifact,
            model_path,
        }
    }
}
