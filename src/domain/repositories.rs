//! Repository abstraction for daily performance records.
//!
//! The trait keeps the handler logic independent of the storage backend:
//! MongoDB in production, an in-memory map in tests.

use crate::domain::types::{DailyRecord, PerformanceScore};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

/// Repository for persisting and retrieving daily performance records
#[async_trait]
pub trait PerformanceRepository: Send + Sync {
    /// Insert or update the record for `date`
    async fn upsert(&self, date: NaiveDate, score: PerformanceScore) -> Result<()>;

    /// All records, ordered by date ascending
    async fn fetch_all(&self) -> Result<Vec<DailyRecord>>;
}

/// Persistence capability of a running instance.
///
/// Storage is optional: without a reachable database the application keeps
/// serving predictions, it just has no history to chart and stores nothing.
#[derive(Clone)]
pub enum PerformanceStore {
    Connected(Arc<dyn PerformanceRepository>),
    Disabled,
}

impl PerformanceStore {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }
}
