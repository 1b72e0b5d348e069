use crate::domain::errors::ModelError;
use crate::domain::types::StudyFeatures;

/// Interface for the pre-trained regression model.
///
/// The model is loaded once at startup and shared read-only across
/// requests, so prediction borrows immutably.
pub trait PerformancePredictor: Send + Sync {
    /// Predict a raw performance score for one feature row.
    fn predict(&self, features: &StudyFeatures) -> Result<f64, ModelError>;

    /// Get model name/type
    fn name(&self) -> &str;
}
