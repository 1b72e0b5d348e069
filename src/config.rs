use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Default download source for the model artifact when none is on disk.
pub const DEFAULT_MODEL_URL: &str = "https://models.studypulse.dev/performance/v1/model.json";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Unset means the instance runs without persistence.
    pub mongo_uri: Option<String>,
    pub mongo_db: String,
    pub mongo_collection: String,
    pub mongo_timeout: Duration,
    pub model_path: PathBuf,
    pub model_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("Failed to parse PORT")?;

        let bind_addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .context("Failed to parse HOST/PORT into a socket address")?;

        let mongo_uri = env::var("MONGO_URI").ok().filter(|uri| !uri.is_empty());

        let mongo_db = env::var("MONGO_DB").unwrap_or_else(|_| "student_performance".to_string());

        let mongo_collection =
            env::var("MONGO_COLLECTION").unwrap_or_else(|_| "daily_performance".to_string());

        let mongo_timeout_secs = env::var("MONGO_TIMEOUT_SECS")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<u64>()
            .context("Failed to parse MONGO_TIMEOUT_SECS")?;

        let model_path =
            PathBuf::from(env::var("MODEL_PATH").unwrap_or_else(|_| "model.json".to_string()));

        let model_url = env::var("MODEL_URL").unwrap_or_else(|_| DEFAULT_MODEL_URL.to_string());

        Ok(Self {
            bind_addr,
            mongo_uri,
            mongo_db,
            mongo_collection,
            mongo_timeout: Duration::from_secs(mongo_timeout_secs),
            model_path,
            model_url,
        })
    }
}
