use anyhow::Result;

use crate::api::{ApiClient, PortfolioApi};
use crate::config::Config;

/// `folio skills [--top]` — list skills as plain text.
pub async fn run_skills(config: &Config, top: bool) -> Result<()> {
    let client = ApiClient::new(config)?;
    let skills = if top {
        client.top_skills().await?
    } else {
        client.skills().await?
    };

    if skills.is_empty() {
        println!("No skills found.");
        return Ok(());
    }

    for skill in &skills {
        println!("{} ({})", skill.name, skill.level);
    }
    Ok(())
}
