//! HTTP access to the Me-API backend.
//!
//! Defines the [`PortfolioApi`] trait (the seam the page controller and
//! panes are written against, so tests can substitute scripted fakes) and
//! [`ApiClient`], the reqwest-backed implementation.
//!
//! # Request Contract
//!
//! - Every request carries `Content-Type: application/json`.
//! - `PUT` requests additionally carry the pre-shared key in `X-API-Key`.
//! - 401/403 → [`ApiError::AuthRequired`]; any other non-2xx →
//!   [`ApiError::Http`] with the status code; transport failures →
//!   [`ApiError::Network`]; undecodable bodies → [`ApiError::Parse`].
//! - Failures are logged and re-raised to the caller. No retries, no
//!   timeout policy beyond the configured client timeout.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::warn;

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{Profile, ProfileUpdate, Project, SearchResult, Skill};

/// Header carrying the pre-shared key on authenticated writes.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// The remote portfolio API as seen by the UI layer.
///
/// [`ApiClient`] is the production implementation; tests drive the page
/// controller and panes with scripted fakes instead.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    /// `GET /profile`
    async fn profile(&self) -> Result<Profile, ApiError>;

    /// `PUT /profile` — requires the API key.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError>;

    /// `GET /skills`
    async fn skills(&self) -> Result<Vec<Skill>, ApiError>;

    /// `GET /skills/top`
    async fn top_skills(&self) -> Result<Vec<Skill>, ApiError>;

    /// `GET /projects?limit=&offset=[&skill=]` — returns at most `limit` items.
    async fn projects(
        &self,
        limit: usize,
        offset: usize,
        skill: Option<&str>,
    ) -> Result<Vec<Project>, ApiError>;

    /// `GET /search?q=`
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ApiError>;

    /// `GET /health` — connectivity check; the body is ignored.
    async fn health(&self) -> Result<(), ApiError>;
}

/// Reqwest-backed client for a configured Me-API deployment.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    /// Build a client from configuration. The API key is resolved from the
    /// environment first, then the config file (see [`Config::resolved_key`]).
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            api_key: config.resolved_key(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Run a GET request and decode the JSON body, applying the error
    /// mapping. Every failure is logged before being returned.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let result = self.try_get_json(path, query).await;
        if let Err(ref e) = result {
            warn!(endpoint = path, error = %e, "API call failed");
        }
        result
    }

    async fn try_get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()));
        }

        response.json::<T>().await.map_err(ApiError::from)
    }
}

#[async_trait]
impl PortfolioApi for ApiClient {
    async fn profile(&self) -> Result<Profile, ApiError> {
        self.get_json("/profile", &[]).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        let mut request = self
            .http
            .put(self.url("/profile"))
            .header(CONTENT_TYPE, "application/json")
            .json(update);

        if let Some(ref key) = self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let result: Result<Profile, ApiError> = async {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::from_status(status.as_u16()));
            }

            response.json::<Profile>().await.map_err(ApiError::from)
        }
        .await;

        if let Err(ref e) = result {
            warn!(endpoint = "/profile", method = "PUT", error = %e, "API call failed");
        }
        result
    }

    async fn skills(&self) -> Result<Vec<Skill>, ApiError> {
        self.get_json("/skills", &[]).await
    }

    async fn top_skills(&self) -> Result<Vec<Skill>, ApiError> {
        self.get_json("/skills/top", &[]).await
    }

    async fn projects(
        &self,
        limit: usize,
        offset: usize,
        skill: Option<&str>,
    ) -> Result<Vec<Project>, ApiError> {
        let mut query = vec![
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        if let Some(skill) = skill {
            query.push(("skill", skill.to_string()));
        }
        self.get_json("/projects", &query).await
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ApiError> {
        self.get_json("/search", &[("q", query.to_string())]).await
    }

    async fn health(&self) -> Result<(), ApiError> {
        // Body is ignored; only the status matters.
        let _: serde_json::Value = self.get_json("/health", &[]).await?;
        Ok(())
    }
}
