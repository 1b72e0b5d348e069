use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Make sure the model artifact exists locally, downloading it when missing.
///
/// Runs once at startup, before the model is loaded. A failed download is
/// fatal to the caller since the model is mandatory.
pub async fn ensure_artifact(path: &Path, url: &str) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    info!("Model artifact missing at {:?}, downloading from {}", path, url);

    let bytes = reqwest::get(url)
        .await
        .context("Failed to request model artifact")?
        .error_for_status()
        .context("Model artifact download was rejected")?
        .bytes()
        .await
        .context("Failed to read model artifact body")?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .await
            .context("Failed to create model directory")?;
    }

    fs::write(path, &bytes)
        .await
        .context("Failed to write model artifact")?;

    info!("Model artifact saved to {:?} ({} bytes)", path, bytes.len());
    Ok(())
}
