//! Paginated projects pane.
//!
//! Paging state lives in an explicit [`ProjectsPane`] value rather than
//! ambient scope, so multiple instances can coexist and tests can drive
//! the state machine directly.
//!
//! # Paging Invariants
//!
//! - `offset` advances by `page_size` after each successful fetch and
//!   resets to 0 on any fresh (non-load-more) load.
//! - `has_more` flips to false once a page comes back shorter than
//!   `page_size`, and only a fresh load sets it back to true.
//! - A failed fetch leaves offset and the accumulated list exactly as the
//!   preceding reset (if any) left them.
//!
//! Note: the offset advances by the full `page_size` even when the server
//! returned a short page. When a filtered result set shrinks between
//! requests this can skip items; the behavior is kept as-is and pinned by
//! `test_offset_advances_by_page_size_even_on_short_page`.

use anyhow::Result;

use crate::api::{ApiClient, PortfolioApi};
use crate::config::Config;
use crate::models::Project;
use crate::page::{MemorySurface, Region, Surface};
use crate::render;

/// State and behavior of the projects region.
pub struct ProjectsPane {
    page_size: usize,
    offset: usize,
    all: Vec<Project>,
    has_more: bool,
    filter: Option<String>,
}

impl ProjectsPane {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            offset: 0,
            all: Vec::new(),
            has_more: true,
            filter: None,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn loaded(&self) -> &[Project] {
        &self.all
    }

    /// Load one page into the region.
    ///
    /// With `reset`, paging state is cleared first (offset 0, empty list,
    /// more-available true), a loading placeholder is shown, and `filter`
    /// becomes the active skill filter. Without `reset`, the next page is
    /// appended under the active filter ("Load More").
    pub async fn load(
        &mut self,
        api: &dyn PortfolioApi,
        surface: &dyn Surface,
        reset: bool,
        filter: Option<String>,
    ) {
        if reset {
            self.offset = 0;
            self.all.clear();
            self.has_more = true;
            self.filter = filter;
            surface.set(Region::Projects, render::loading("Loading projects..."));
        }

        let page = match api
            .projects(self.page_size, self.offset, self.filter.as_deref())
            .await
        {
            Ok(page) => page,
            Err(e) => {
                surface.set(
                    Region::Projects,
                    render::error(&format!("Failed to load projects: {}", e)),
                );
                return;
            }
        };

        if reset && page.is_empty() {
            surface.set(Region::Projects, render::projects_empty());
            return;
        }

        if page.len() < self.page_size {
            self.has_more = false;
        }

        self.all.extend(page);
        surface.set(
            Region::Projects,
            render::projects(&self.all, self.has_more, self.filter.as_deref()),
        );

        // Fixed-size advance, independent of how many items came back.
        self.offset += self.page_size;
    }

    /// The Load More control: another page under the active filter.
    pub async fn load_more(&mut self, api: &dyn PortfolioApi, surface: &dyn Surface) {
        let filter = self.filter.clone();
        self.load(api, surface, false, filter).await;
    }
}

// ============ CLI entry point ============

/// `folio projects` — fresh load plus up to `pages - 1` Load More rounds,
/// then print the region.
pub async fn run_projects(config: &Config, skill: Option<String>, pages: usize) -> Result<()> {
    let client = ApiClient::new(config)?;
    let surface = MemorySurface::new();

    let mut pane = ProjectsPane::new(config.projects.page_size);
    pane.load(&client, &surface, true, skill).await;

    for _ in 1..pages {
        if !pane.has_more() {
            break;
        }
        pane.load_more(&client, &surface).await;
    }

    if let Some(html) = surface.get(Region::Projects) {
        println!("{}", html);
    }
    Ok(())
}
