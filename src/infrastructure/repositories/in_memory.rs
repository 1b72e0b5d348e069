//! In-Memory Repository Implementation
//!
//! Thread-safe, in-memory implementation of `PerformanceRepository`,
//! used by unit and integration tests. Keying the map by date makes the
//! upsert a plain insert, and `BTreeMap` iteration already yields the
//! date-ascending order the trait promises.

use crate::domain::repositories::PerformanceRepository;
use crate::domain::types::{DailyRecord, PerformanceScore};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of PerformanceRepository
/// Suitable for testing and single-instance deployments
pub struct InMemoryPerformanceRepository {
    records: Arc<RwLock<BTreeMap<NaiveDate, f64>>>,
}

impl InMemoryPerformanceRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl Default for InMemoryPerformanceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PerformanceRepository for InMemoryPerformanceRepository {
    async fn upsert(&self, date: NaiveDate, score: PerformanceScore) -> Result<()> {
        self.records.write().await.insert(date, score.value());
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<DailyRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .map(|(date, performance)| DailyRecord {
                date: *date,
                performance: *performance,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn upsert_overwrites_same_date() {
        let repo = InMemoryPerformanceRepository::new();
        repo.upsert(date("2024-01-01"), PerformanceScore::from_raw(50.0))
            .await
            .unwrap();
        repo.upsert(date("2024-01-01"), PerformanceScore::from_raw(75.0))
            .await
            .unwrap();

        let records = repo.fetch_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].performance, 75.0);
    }

    #[tokio::test]
    async fn fetch_all_is_date_ascending() {
        let repo = InMemoryPerformanceRepository::new();
        repo.upsert(date("2024-01-03"), PerformanceScore::from_raw(30.0))
            .await
            .unwrap();
        repo.upsert(date("2024-01-01"), PerformanceScore::from_raw(10.0))
            .await
            .unwrap();
        repo.upsert(date("2024-01-02"), PerformanceScore::from_raw(20.0))
            .await
            .unwrap();

        let dates: Vec<NaiveDate> = repo
            .fetch_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(
            dates,
            vec![date("2024-01-01"), date("2024-01-02"), date("2024-01-03")]
        );
    }
}
