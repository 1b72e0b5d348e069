mod artifact;
mod smartcore;

pub use artifact::ensure_artifact;
pub use smartcore::SmartcoreRegressor;
