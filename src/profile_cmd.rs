use anyhow::Result;

use crate::api::{ApiClient, PortfolioApi};
use crate::config::Config;
use crate::models::ProfileUpdate;

/// `folio profile` — print the profile as plain text.
pub async fn run_profile(config: &Config) -> Result<()> {
    let client = ApiClient::new(config)?;
    let profile = client.profile().await?;

    println!("Name:      {}", profile.name);
    println!("Email:     {}", profile.email);
    println!(
        "Education: {}",
        profile.education.as_deref().unwrap_or("Not specified")
    );
    println!(
        "Bio:       {}",
        profile.bio.as_deref().unwrap_or("No bio available")
    );
    if let Some(ref url) = profile.github {
        println!("GitHub:    {}", url);
    }
    if let Some(ref url) = profile.linkedin {
        println!("LinkedIn:  {}", url);
    }
    if let Some(ref url) = profile.portfolio {
        println!("Portfolio: {}", url);
    }
    Ok(())
}

/// `folio profile-set` — authenticated profile update (PUT, carries the
/// pre-shared key).
pub async fn run_profile_set(config: &Config, update: ProfileUpdate) -> Result<()> {
    let client = ApiClient::new(config)?;
    let profile = client.update_profile(&update).await?;
    println!("Profile updated: {} <{}>", profile.name, profile.email);
    Ok(())
}
