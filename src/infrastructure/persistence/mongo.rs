use crate::domain::repositories::PerformanceRepository;
use crate::domain::types::{DailyRecord, PerformanceScore};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, FindOptions, UpdateOptions};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// Document shape in the performance collection.
#[derive(Debug, Serialize, Deserialize)]
struct DailyRecordDocument {
    date: String,
    performance: f64,
}

pub struct MongoPerformanceRepository {
    collection: Collection<DailyRecordDocument>,
}

impl MongoPerformanceRepository {
    /// Connect, ping, and bind the performance collection.
    ///
    /// The short server-selection timeout keeps an unreachable database
    /// from hanging startup; the ping turns the driver's lazy connection
    /// into a hard check so the caller can degrade immediately.
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let mut options = ClientOptions::parse(uri)
            .await
            .context("Failed to parse MONGO_URI")?;
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options).context("Failed to build MongoDB client")?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .context("MongoDB ping failed")?;
        info!("MongoDB connected successfully");

        Ok(Self {
            collection: client.database(database).collection(collection),
        })
    }
}

#[async_trait]
impl PerformanceRepository for MongoPerformanceRepository {
    async fn upsert(&self, date: NaiveDate, score: PerformanceScore) -> Result<()> {
        let key = date.format("%Y-%m-%d").to_string();
        self.collection
            .update_one(
                doc! { "date": &key },
                doc! { "$set": { "performance": score.value() } },
                UpdateOptions::builder().upsert(true).build(),
            )
            .await
            .with_context(|| format!("Failed to upsert record for {key}"))?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<DailyRecord>> {
        let options = FindOptions::builder().sort(doc! { "date": 1 }).build();
        let mut cursor = self
            .collection
            .find(doc! {}, options)
            .await
            .context("Failed to query daily records")?;

        let mut records = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .context("Failed to read record cursor")?
        {
            let date = NaiveDate::parse_from_str(&document.date, "%Y-%m-%d")
                .with_context(|| format!("Malformed date key: {}", document.date))?;
            records.push(DailyRecord {
                date,
                performance: document.performance,
            });
        }
        Ok(records)
    }
}
