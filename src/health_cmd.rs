use anyhow::Result;

use crate::api::{ApiClient, PortfolioApi};
use crate::config::Config;

/// `folio health` — one-shot connectivity check against the API.
pub async fn run_health(config: &Config) -> Result<()> {
    let client = ApiClient::new(config)?;
    match client.health().await {
        Ok(()) => {
            println!("API at {} is reachable.", config.api.base_url);
            Ok(())
        }
        Err(e) => anyhow::bail!("API health check failed: {}", e),
    }
}
