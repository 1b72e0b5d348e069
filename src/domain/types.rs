use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Study metrics submitted for a single prediction.
///
/// Field order matters: [`StudyFeatures::to_row`] must emit features in the
/// order the regressor was trained on.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyFeatures {
    pub hours: f64,
    pub previous_score: f64,
    pub extracurricular: i64,
    pub sleep_hours: f64,
    pub papers_solved: i64,
}

impl StudyFeatures {
    /// Single feature row in the fixed order the regressor expects.
    pub fn to_row(&self) -> Vec<f64> {
        vec![
            self.hours,
            self.previous_score,
            self.extracurricular as f64,
            self.sleep_hours,
            self.papers_solved as f64,
        ]
    }
}

/// A performance score canonicalized into the displayable range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PerformanceScore(f64);

impl PerformanceScore {
    /// Canonicalize a raw model output: clamp to [0, 100], then round to
    /// two decimal places.
    pub fn from_raw(raw: f64) -> Self {
        let clamped = raw.clamp(0.0, 100.0);
        Self((clamped * 100.0).round() / 100.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for PerformanceScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One persisted score, unique per calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub performance: f64,
}
