use crate::domain::errors::ModelError;
use crate::domain::ports::PerformancePredictor;
use crate::domain::types::StudyFeatures;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

type Regressor = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Pre-trained random-forest regressor, deserialized from a JSON artifact.
///
/// The artifact is opaque to the rest of the system: load once, predict,
/// nothing else. Loading is fallible and fatal, there is no neutral
/// fallback when the model cannot be read.
pub struct SmartcoreRegressor {
    model: Regressor,
}

impl SmartcoreRegressor {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::ArtifactMissing {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|source| ModelError::ArtifactRead {
            path: path.to_path_buf(),
            source,
        })?;

        let model = serde_json::from_reader(BufReader::new(file))?;
        info!("Loaded performance model from {:?}", path);
        Ok(Self { model })
    }
}

impl PerformancePredictor for SmartcoreRegressor {
    fn predict(&self, features: &StudyFeatures) -> Result<f64, ModelError> {
        let matrix = DenseMatrix::from_2d_vec(&vec![features.to_row()]).map_err(|e| {
            ModelError::PredictionFailed {
                reason: e.to_string(),
            }
        })?;

        let predictions =
            self.model
                .predict(&matrix)
                .map_err(|e| ModelError::PredictionFailed {
                    reason: e.to_string(),
                })?;

        predictions.first().copied().ok_or(ModelError::EmptyOutput)
    }

    fn name(&self) -> &str {
        "smartcore random forest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = SmartcoreRegressor::load(&path)
            .err()
            .expect("load must fail");
        match err {
            ModelError::ArtifactMissing { path: reported } => assert_eq!(reported, path),
            other => panic!("expected ArtifactMissing, got {other:?}"),
        }
    }

    #[test]
    fn garbage_artifact_fails_to_deserialize() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, b"not a model").unwrap();

        assert!(matches!(
            SmartcoreRegressor::load(&path),
            Err(ModelError::Deserialize(_))
        ));
    }
}
