//! Core data models for the Me-API portfolio service.
//!
//! These types mirror the JSON bodies served by the remote API. They are
//! read-only on the client side — the single exception is [`ProfileUpdate`],
//! the body of the authenticated `PUT /profile` call.

use serde::{Deserialize, Serialize};

/// The portfolio owner's profile, fetched once per page load.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub education: Option<String>,
    pub bio: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

/// A named skill with an ordinal level (e.g. `"Rust" / "expert"`).
#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: String,
}

/// A portfolio project with its associated skills and optional links.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

/// A single hit from `GET /search`. `kind` tags the entity type
/// (`"project"` or `"skill"` in the current backend).
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
}

/// Request body for `PUT /profile`. Optional fields are omitted from the
/// JSON entirely when unset so the server keeps treating them as absent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}
