//! Debounced search flow.
//!
//! [`run_query`] is the plain query-to-region flow. [`SearchBox`] sits in
//! front of it and models the search input field: each input event cancels
//! the pending delayed task and starts a new one, so only the last value in
//! a quiet window actually reaches the network.
//!
//! Every issued query carries a monotonic sequence number. A response is
//! rendered only while its sequence is still the latest one issued, so a
//! slow early response can never overwrite the results of a later query.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::io::AsyncBufReadExt;
use tokio::task::JoinHandle;

use crate::api::{ApiClient, PortfolioApi};
use crate::config::Config;
use crate::page::{MemorySurface, PrintSurface, Region, Surface};
use crate::render;

/// Run one search query against the results region.
///
/// A trimmed-empty query clears the region without issuing a request.
/// Otherwise: loading placeholder, fetch, then results, empty-state, or an
/// inline error.
pub async fn run_query(api: &dyn PortfolioApi, surface: &dyn Surface, query: &str) {
    let latest = AtomicU64::new(0);
    run_query_tagged(api, surface, query, 0, &latest).await;
}

/// [`run_query`] with staleness guarding: `seq` is the sequence number this
/// query was issued under, `latest` the most recently issued one. Writes to
/// the region are skipped once a newer query exists.
async fn run_query_tagged(
    api: &dyn PortfolioApi,
    surface: &dyn Surface,
    query: &str,
    seq: u64,
    latest: &AtomicU64,
) {
    let still_latest = || latest.load(Ordering::SeqCst) == seq;

    if query.trim().is_empty() {
        if still_latest() {
            surface.set(Region::SearchResults, String::new());
        }
        return;
    }

    if still_latest() {
        surface.set(Region::SearchResults, render::loading("Searching..."));
    }

    let result = api.search(query).await;

    // A newer query was issued while this one was in flight; its result
    // owns the region now.
    if !still_latest() {
        return;
    }

    match result {
        Ok(results) => surface.set(Region::SearchResults, render::search_results(&results)),
        Err(e) => surface.set(
            Region::SearchResults,
            render::error(&format!("Search failed: {}", e)),
        ),
    }
}

/// The search input field: debounces input events before querying.
pub struct SearchBox {
    api: Arc<dyn PortfolioApi>,
    surface: Arc<dyn Surface>,
    debounce: Duration,
    latest: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl SearchBox {
    pub fn new(api: Arc<dyn PortfolioApi>, surface: Arc<dyn Surface>, debounce: Duration) -> Self {
        Self {
            api,
            surface,
            debounce,
            latest: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    /// Register an input event. Cancels any not-yet-fired pending query and
    /// schedules this value to run after the debounce window.
    pub fn input(&mut self, query: &str) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let api = Arc::clone(&self.api);
        let surface = Arc::clone(&self.surface);
        let latest = Arc::clone(&self.latest);
        let debounce = self.debounce;
        let query = query.to_string();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            run_query_tagged(api.as_ref(), surface.as_ref(), &query, seq, &latest).await;
        }));
    }

    /// Wait for the pending query (if any) to finish or be aborted.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }
}

// ============ CLI entry points ============

/// `folio search <query>` — one-shot query, print the region.
pub async fn run_search(config: &Config, query: &str) -> Result<()> {
    let client = ApiClient::new(config)?;
    let surface = MemorySurface::new();
    run_query(&client, &surface, query).await;
    if let Some(html) = surface.get(Region::SearchResults) {
        println!("{}", html);
    }
    Ok(())
}

/// `folio search --follow` — read queries from stdin, one per line, through
/// the debouncer. Region updates are echoed to stdout as they land.
pub async fn run_follow(config: &Config) -> Result<()> {
    let client: Arc<dyn PortfolioApi> = Arc::new(ApiClient::new(config)?);
    let surface: Arc<dyn Surface> = Arc::new(PrintSurface);
    let mut search_box = SearchBox::new(
        client,
        surface,
        Duration::from_millis(config.search.debounce_ms),
    );

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        search_box.input(&line);
    }
    search_box.settle().await;
    Ok(())
}
