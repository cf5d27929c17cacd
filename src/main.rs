//! # Folio CLI
//!
//! Terminal client for the Me-API personal portfolio service.
//!
//! ## Usage
//!
//! ```bash
//! folio --config ./config/folio.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `folio page` | Load every region concurrently and print the page |
//! | `folio profile` | Show the profile |
//! | `folio profile-set` | Update the profile (requires the API key) |
//! | `folio skills [--top]` | List skills, optionally only the top ones |
//! | `folio projects` | Paginated project cards, optionally skill-filtered |
//! | `folio search "<query>"` | One-shot search |
//! | `folio search --follow` | Debounced search over stdin lines |
//! | `folio health` | Connectivity check against the API |

mod api;
mod config;
mod error;
mod health_cmd;
mod models;
mod page;
mod profile_cmd;
mod projects;
mod render;
mod search;
mod skills_cmd;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::models::ProfileUpdate;

/// Folio CLI — a terminal client for the Me-API portfolio service.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/folio.example.toml` for a full example. The API key
/// for authenticated writes is read from the `FOLIO_API_KEY` environment
/// variable first, then from the config file.
#[derive(Parser)]
#[command(
    name = "folio",
    about = "Folio — a terminal client for the Me-API personal portfolio service",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/folio.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Load profile, skills, projects, and the health check concurrently
    /// and print the assembled page.
    Page {
        /// Write the assembled HTML fragment to a file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show the profile.
    Profile,

    /// Update the profile (PUT — requires the API key).
    ProfileSet {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        education: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        github: Option<String>,
        #[arg(long)]
        linkedin: Option<String>,
        #[arg(long)]
        portfolio: Option<String>,
    },

    /// List skills.
    Skills {
        /// Only the top skills (`GET /skills/top`).
        #[arg(long)]
        top: bool,
    },

    /// List projects page by page.
    Projects {
        /// Filter projects by skill name.
        #[arg(long)]
        skill: Option<String>,

        /// Number of pages to load (fresh load plus Load More rounds).
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },

    /// Search projects and skills.
    Search {
        /// The search query. Omit with `--follow` to read from stdin.
        query: Option<String>,

        /// Read queries from stdin, one per line, through the debouncer.
        #[arg(long)]
        follow: bool,
    },

    /// Check connectivity to the API.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Page { out } => {
            page::run_page(&cfg, out).await?;
        }
        Commands::Profile => {
            profile_cmd::run_profile(&cfg).await?;
        }
        Commands::ProfileSet {
            name,
            email,
            education,
            bio,
            github,
            linkedin,
            portfolio,
        } => {
            let update = ProfileUpdate {
                name,
                email,
                education,
                bio,
                github,
                linkedin,
                portfolio,
            };
            profile_cmd::run_profile_set(&cfg, update).await?;
        }
        Commands::Skills { top } => {
            skills_cmd::run_skills(&cfg, top).await?;
        }
        Commands::Projects { skill, pages } => {
            projects::run_projects(&cfg, skill, pages).await?;
        }
        Commands::Search { query, follow } => {
            if follow {
                search::run_follow(&cfg).await?;
            } else {
                let query = query
                    .ok_or_else(|| anyhow::anyhow!("provide a query or use --follow"))?;
                search::run_search(&cfg, &query).await?;
            }
        }
        Commands::Health => {
            health_cmd::run_health(&cfg).await?;
        }
    }

    Ok(())
}
