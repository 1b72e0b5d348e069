//! Dashboard service: the glue between form input, the regression model
//! and the daily record store.

use crate::domain::ports::PerformancePredictor;
use crate::domain::repositories::PerformanceStore;
use crate::domain::types::{PerformanceScore, StudyFeatures};
use anyhow::{Context, Result};
use chrono::Local;
use std::sync::Arc;
use tracing::debug;

/// View state handed to the template: the score to display (if any) and
/// the parallel date/score series for the history chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub prediction: Option<f64>,
    pub dates: Vec<String>,
    pub scores: Vec<f64>,
}

pub struct DashboardService {
    predictor: Arc<dyn PerformancePredictor>,
    store: PerformanceStore,
}

impl DashboardService {
    pub fn new(predictor: Arc<dyn PerformancePredictor>, store: PerformanceStore) -> Self {
        Self { predictor, store }
    }

    /// Compute today's prediction and persist it.
    ///
    /// Re-submitting on the same day overwrites the stored value. In
    /// degraded mode the score is still computed, just not stored.
    pub async fn submit(&self, features: &StudyFeatures) -> Result<PerformanceScore> {
        let raw = self
            .predictor
            .predict(features)
            .context("Model prediction failed")?;
        let score = PerformanceScore::from_raw(raw);
        let today = Local::now().date_naive();

        match &self.store {
            PerformanceStore::Connected(repo) => {
                repo.upsert(today, score)
                    .await
                    .context("Failed to upsert daily record")?;
            }
            PerformanceStore::Disabled => {
                debug!("Persistence disabled, skipping upsert for {}", today);
            }
        }

        Ok(score)
    }

    /// Rebuild display state for the dashboard page.
    ///
    /// `latest` is the transient score carried through the redirect after a
    /// submission; it takes precedence over stored history so a refresh
    /// does not re-run the model. Without it, the most recent stored score
    /// is shown.
    pub async fn view(&self, latest: Option<f64>) -> Result<DashboardState> {
        let mut records = match &self.store {
            PerformanceStore::Connected(repo) => repo
                .fetch_all()
                .await
                .context("Failed to load daily records")?,
            PerformanceStore::Disabled => Vec::new(),
        };

        // The chart relies on date order; sort here instead of trusting
        // whatever order the store returned.
        records.sort_by(|a, b| a.date.cmp(&b.date));

        let prediction = latest.or_else(|| records.last().map(|r| r.performance));

        let (dates, scores) = records
            .iter()
            .map(|r| (r.date.format("%Y-%m-%d").to_string(), r.performance))
            .unzip();

        Ok(DashboardState {
            prediction,
            dates,
            scores,
        })
    }
}
