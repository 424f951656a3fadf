use std::{path::Path, time::Duration};

use anyhow::Context;
use aws_recon_core::AwsReconConfig;

use crate::document::IpRangesDocument;

pub fn http_client(config: &AwsReconConfig) -> anyhow::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(Duration::from_secs(config.timeout_config.connect))
        .timeout(Duration::from_secs(config.timeout_config.operation))
        .build()
        .context("Failed to build HTTP client")?;
    Ok(client)
}

/// Always hits the network; nothing is cached between runs.
pub async fn fetch_document(client: &reqwest::Client, url: &str) -> anyhow::Result<IpRangesDocument> {
    tracing::info!("Fetching IP ranges from {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?
        .error_for_status()
        .with_context(|| format!("Failed to fetch {}", url))?;

    let body = response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))?;

    tracing::debug!("Fetched {} bytes", body.len());

    IpRangesDocument::from_json(&body)
}

pub fn load_document(path: &Path) -> anyhow::Result<IpRangesDocument> {
    tracing::info!("Loading IP ranges from {:?}", path);

    let json = std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    IpRangesDocument::from_json(&json)
}
