//! Reads the model artifact from local disk.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{ArtifactError, ModelArtifact};

/// Artifact file name used when no path is configured.
pub const DEFAULT_ARTIFACT_FILE: &str = "cardio_pipeline.json";

/// Resolves a configured artifact path.
///
/// Absolute paths are returned unchanged. Relative paths are tried against the
/// working directory, then against the directory holding the running
/// executable. If neither exists the working-directory form is returned so the
/// load error names it.
pub fn resolve_path(path: &Path) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }

    let beside_exe = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(path)));

    match beside_exe {
        Some(candidate) if candidate.exists() => candidate,
        _ => path.to_path_buf(),
    }
}

/// Parses and validates an artifact from its JSON text.
pub fn parse_artifact(content: &str) -> Result<ModelArtifact, ArtifactError> {
    let artifact: ModelArtifact = serde_json::from_str(content)?;
    artifact.validate()?;
    Ok(artifact)
}

/// Loads the artifact at `path`, resolved with [`resolve_path`].
pub fn load_artifact(path: impl AsRef<Path>) -> Result<ModelArtifact, ArtifactError> {
    let path = resolve_path(path.as_ref());
    let content = fs::read_to_string(&path).map_err(|source| ArtifactError::Io {
        path: path.clone(),
        source,
    })?;
    let artifact = parse_artifact(&content)?;

    info!(
        "Loaded {} artifact from {} ({} features)",
        artifact.kind(),
        path.display(),
        artifact.features().len()
    );
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BUNDLE: &str = r#"{
        "kind": "bundle",
        "feature_order": ["age_years", "ap_hi"],
        "scaler": { "type": "standard", "mean": [50.0, 120.0], "scale": [7.0, 15.0] },
        "model": { "type": "logistic_regression", "coef": [0.4, 0.9], "intercept": -0.1 }
    }"#;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("cardio-model-{}-{}", std::process::id(), name));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_bundle() {
        let artifact = parse_artifact(BUNDLE).unwrap();
        assert_eq!(artifact.kind(), "bundle");
        assert_eq!(artifact.features(), ["age_years", "ap_hi"]);
        assert_eq!(artifact.rounding(), Some(4));
    }

    #[test]
    fn test_parse_pipeline_defaults_to_identity_scaler() {
        let artifact = parse_artifact(
            r#"{
                "kind": "pipeline",
                "features": ["age_years"],
                "classifier": { "type": "logistic_regression", "coef": [0.1], "intercept": 0.0 }
            }"#,
        )
        .unwrap();
        let ModelArtifact::Pipeline(pipeline) = artifact else {
            panic!("expected pipeline artifact");
        };
        assert_eq!(pipeline.scaler, crate::Scaler::Identity);
    }

    #[test]
    fn test_parse_rejects_missing_keys() {
        let err = parse_artifact(r#"{ "kind": "bundle", "feature_order": ["a"] }"#).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let err = parse_artifact(r#"{ "kind": "forest", "trees": [] }"#).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_shape_mismatch() {
        let err = parse_artifact(
            r#"{
                "kind": "bundle",
                "feature_order": ["a", "b", "c"],
                "scaler": { "type": "identity" },
                "model": { "type": "logistic_regression", "coef": [1.0], "intercept": 0.0 }
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ArtifactError::Shape(_)));
    }

    #[test]
    fn test_shipped_demo_artifact_is_valid() {
        let artifact =
            parse_artifact(include_str!("../../../models/cardio_pipeline.json")).unwrap();
        assert_eq!(artifact.kind(), "pipeline");
        assert_eq!(artifact.features().len(), 11);
        assert!(artifact.features().iter().any(|f| f == "age_years"));
        assert!(!artifact.features().iter().any(|f| f == "age"));
    }

    #[test]
    fn test_load_from_disk() {
        let path = temp_file("bundle.json", BUNDLE);
        let artifact = load_artifact(&path).unwrap();
        assert_eq!(artifact.features().len(), 2);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_artifact("definitely/not/here/model.json").unwrap_err();
        match err {
            ArtifactError::Io { path, .. } => {
                assert!(path.ends_with("definitely/not/here/model.json"))
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_prefers_working_directory() {
        // cargo runs unit tests from the package root
        let relative = Path::new("Cargo.toml");
        assert!(relative.exists());
        assert_eq!(resolve_path(relative), relative);
    }

    #[test]
    fn test_resolve_falls_back_to_executable_dir() {
        let exe_dir = env::current_exe().unwrap().parent().unwrap().to_path_buf();
        let name = format!("cardio-model-beside-exe-{}.json", std::process::id());
        let beside_exe = exe_dir.join(&name);
        fs::write(&beside_exe, BUNDLE).unwrap();

        let resolved = resolve_path(Path::new(&name));
        let artifact = load_artifact(&name);
        fs::remove_file(&beside_exe).ok();

        assert_eq!(resolved, beside_exe);
        assert_eq!(artifact.unwrap().kind(), "bundle");
    }

    #[test]
    fn test_resolve_absolute_path_unchanged() {
        let abs = env::temp_dir().join("x.json");
        assert_eq!(resolve_path(&abs), abs);
    }
}
