//! Page surface and startup controller.
//!
//! The page is divided into independent regions, each owned by exactly one
//! loader. A [`Surface`] is the integration point with the surrounding
//! markup: loaders only ever replace the content of their own region, so
//! concurrent loads need no coordination beyond the surface itself.
//!
//! [`load_page`] is the startup flow: profile, top skills, a fresh projects
//! load, and the health check all run concurrently with no ordering
//! guarantee among their completions. A loader failure is rendered inline
//! in its own region and never propagates to or blocks another region.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tracing::warn;

use crate::api::{ApiClient, PortfolioApi};
use crate::config::Config;
use crate::projects::ProjectsPane;
use crate::render;

/// A page region, addressed by its element identifier in the host markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Profile,
    Skills,
    Projects,
    SearchResults,
    /// The advisory strip prepended to the page when the API is unreachable.
    Banner,
}

impl Region {
    pub fn element_id(&self) -> &'static str {
        match self {
            Region::Profile => "profile-content",
            Region::Skills => "skills-content",
            Region::Projects => "projects-content",
            Region::SearchResults => "search-results",
            Region::Banner => "page-banner",
        }
    }
}

/// Where rendered fragments land.
///
/// Implementations use interior mutability so concurrent loaders can write
/// their regions without an outer lock.
pub trait Surface: Send + Sync {
    /// Replace the content of a region.
    fn set(&self, region: Region, html: String);
}

/// In-memory surface backing tests and the CLI `page` command.
#[derive(Default)]
pub struct MemorySurface {
    regions: Mutex<HashMap<Region, String>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of a region, if anything has been rendered into it.
    pub fn get(&self, region: Region) -> Option<String> {
        self.regions.lock().unwrap().get(&region).cloned()
    }

    /// Assemble all populated regions into one document fragment, in a
    /// fixed region order.
    pub fn to_html(&self) -> String {
        const ORDER: [Region; 5] = [
            Region::Banner,
            Region::Profile,
            Region::Skills,
            Region::Projects,
            Region::SearchResults,
        ];

        let regions = self.regions.lock().unwrap();
        let mut out = String::new();
        for region in ORDER {
            if let Some(html) = regions.get(&region) {
                if html.is_empty() {
                    continue;
                }
                out.push_str(&format!(
                    "<section id=\"{}\">{}</section>\n",
                    region.element_id(),
                    html
                ));
            }
        }
        out
    }
}

/// Surface that echoes every region update to stdout. Used by the
/// interactive `search --follow` mode.
pub struct PrintSurface;

impl Surface for PrintSurface {
    fn set(&self, region: Region, html: String) {
        if html.is_empty() {
            println!("[{}] (cleared)", region.element_id());
        } else {
            println!("[{}]\n{}", region.element_id(), html);
        }
    }
}

impl Surface for MemorySurface {
    fn set(&self, region: Region, html: String) {
        self.regions.lock().unwrap().insert(region, html);
    }
}

// ============ Region loaders ============

/// Fetch the profile once and render it, or an inline error.
pub async fn load_profile(api: &dyn PortfolioApi, surface: &dyn Surface) {
    match api.profile().await {
        Ok(profile) => surface.set(Region::Profile, render::profile(&profile)),
        Err(e) => surface.set(
            Region::Profile,
            render::error(&format!("Failed to load profile: {}", e)),
        ),
    }
}

/// Fetch the top skills once and render them, or an inline error.
pub async fn load_skills(api: &dyn PortfolioApi, surface: &dyn Surface) {
    match api.top_skills().await {
        Ok(skills) => surface.set(Region::Skills, render::skills(&skills)),
        Err(e) => surface.set(
            Region::Skills,
            render::error(&format!("Failed to load skills: {}", e)),
        ),
    }
}

/// One-time connectivity check. A failure only produces the advisory
/// banner; it does not block or alter the other loads.
pub async fn check_health(api: &dyn PortfolioApi, surface: &dyn Surface) {
    if let Err(e) = api.health().await {
        warn!(error = %e, "API health check failed");
        surface.set(Region::Banner, render::health_banner());
    }
}

/// Startup flow: run all region loads and the health check concurrently.
///
/// Returns the projects pane so the caller can keep paging with
/// [`ProjectsPane::load_more`].
pub async fn load_page(
    api: &dyn PortfolioApi,
    surface: &dyn Surface,
    config: &Config,
    filter: Option<String>,
) -> ProjectsPane {
    let mut pane = ProjectsPane::new(config.projects.page_size);
    tokio::join!(
        load_profile(api, surface),
        load_skills(api, surface),
        pane.load(api, surface, true, filter),
        check_health(api, surface),
    );
    pane
}

// ============ CLI entry point ============

/// `folio page` — load every region once and print (or write) the
/// assembled fragment.
pub async fn run_page(config: &Config, out: Option<PathBuf>) -> Result<()> {
    let client = ApiClient::new(config)?;
    let surface = MemorySurface::new();
    load_page(&client, &surface, config, None).await;

    let html = surface.to_html();
    match out {
        Some(path) => {
            std::fs::write(&path, html)?;
            println!("Page written to {}", path.display());
        }
        None => print!("{}", html),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{Profile, ProfileUpdate, Project, SearchResult, Skill};
    use async_trait::async_trait;

    /// Scripted API: every endpoint either answers with a fixture or fails.
    struct FakeApi {
        profile: Result<Profile, u16>,
        skills: Vec<Skill>,
        healthy: bool,
    }

    impl FakeApi {
        fn healthy() -> Self {
            Self {
                profile: Ok(Profile {
                    name: "Jane Doe".to_string(),
                    email: "jane@example.com".to_string(),
                    education: None,
                    bio: None,
                    github: None,
                    linkedin: None,
                    portfolio: None,
                }),
                skills: vec![Skill {
                    name: "Rust".to_string(),
                    level: "expert".to_string(),
                }],
                healthy: true,
            }
        }
    }

    #[async_trait]
    impl PortfolioApi for FakeApi {
        async fn profile(&self) -> Result<Profile, ApiError> {
            self.profile.clone().map_err(ApiError::from_status)
        }
        async fn update_profile(&self, _update: &ProfileUpdate) -> Result<Profile, ApiError> {
            Err(ApiError::AuthRequired)
        }
        async fn skills(&self) -> Result<Vec<Skill>, ApiError> {
            Ok(self.skills.clone())
        }
        async fn top_skills(&self) -> Result<Vec<Skill>, ApiError> {
            Ok(self.skills.clone())
        }
        async fn projects(
            &self,
            _limit: usize,
            _offset: usize,
            _skill: Option<&str>,
        ) -> Result<Vec<Project>, ApiError> {
            Ok(Vec::new())
        }
        async fn search(&self, _query: &str) -> Result<Vec<SearchResult>, ApiError> {
            Ok(Vec::new())
        }
        async fn health(&self) -> Result<(), ApiError> {
            if self.healthy {
                Ok(())
            } else {
                Err(ApiError::Network("connection refused".to_string()))
            }
        }
    }

    fn test_config() -> Config {
        crate::config::Config {
            api: crate::config::ApiConfig {
                base_url: "http://localhost:8000".to_string(),
                key: None,
                timeout_secs: 30,
            },
            projects: Default::default(),
            search: Default::default(),
        }
    }

    #[tokio::test]
    async fn test_startup_populates_each_region_independently() {
        let api = FakeApi::healthy();
        let surface = MemorySurface::new();
        load_page(&api, &surface, &test_config(), None).await;

        assert!(surface.get(Region::Profile).unwrap().contains("Jane Doe"));
        assert!(surface.get(Region::Skills).unwrap().contains("Rust"));
        // Fresh load with an empty page renders the projects empty state.
        assert_eq!(
            surface.get(Region::Projects).unwrap(),
            render::projects_empty()
        );
        assert!(surface.get(Region::Banner).is_none());
    }

    #[tokio::test]
    async fn test_profile_failure_stays_in_its_own_region() {
        let mut api = FakeApi::healthy();
        api.profile = Err(500);
        let surface = MemorySurface::new();
        load_page(&api, &surface, &test_config(), None).await;

        let profile = surface.get(Region::Profile).unwrap();
        assert!(profile.contains("Failed to load profile"));
        assert!(profile.contains("500"));
        // The other regions are unaffected.
        assert!(surface.get(Region::Skills).unwrap().contains("Rust"));
    }

    #[tokio::test]
    async fn test_health_failure_only_raises_banner() {
        let mut api = FakeApi::healthy();
        api.healthy = false;
        let surface = MemorySurface::new();
        load_page(&api, &surface, &test_config(), None).await;

        assert!(surface
            .get(Region::Banner)
            .unwrap()
            .contains("Cannot connect to API"));
        // Health is advisory: the data regions still loaded.
        assert!(surface.get(Region::Profile).unwrap().contains("Jane Doe"));
    }

    #[test]
    fn test_assembled_page_orders_regions() {
        let surface = MemorySurface::new();
        surface.set(Region::SearchResults, "<p>s</p>".to_string());
        surface.set(Region::Profile, "<p>p</p>".to_string());
        let html = surface.to_html();
        let profile_at = html.find("profile-content").unwrap();
        let search_at = html.find("search-results").unwrap();
        assert!(profile_at < search_at);
    }
}
