//! Error taxonomy for API access.
//!
//! Every failure mode of a remote call collapses into one of four variants.
//! The `Display` strings double as the inline messages rendered into the
//! failing UI region, so they are written for humans:
//!
//! | Variant | Cause |
//! |---------|-------|
//! | [`ApiError::AuthRequired`] | HTTP 401/403 — missing or invalid API key |
//! | [`ApiError::Http`] | any other non-2xx status |
//! | [`ApiError::Network`] | transport failure (unreachable, DNS, timeout) |
//! | [`ApiError::Parse`] | response body is not the expected JSON |
//!
//! Loaders catch at their own boundary and render; nothing here is fatal to
//! the rest of the page and nothing is retried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API key required for this operation")]
    AuthRequired,

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Parse(String),
}

impl ApiError {
    /// Map a non-success HTTP status to the right variant.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ApiError::AuthRequired,
            other => ApiError::Http { status: other },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses_map_to_auth_required() {
        assert!(matches!(ApiError::from_status(401), ApiError::AuthRequired));
        assert!(matches!(ApiError::from_status(403), ApiError::AuthRequired));
    }

    #[test]
    fn test_other_statuses_carry_the_code() {
        match ApiError::from_status(500) {
            ApiError::Http { status } => assert_eq!(status, 500),
            other => panic!("expected Http, got {:?}", other),
        }
    }

    #[test]
    fn test_messages_are_human_readable() {
        assert_eq!(
            ApiError::AuthRequired.to_string(),
            "API key required for this operation"
        );
        // The numeric status must appear in the message (it is what the
        // user sees in the failing region).
        assert!(ApiError::from_status(502).to_string().contains("502"));
    }
}
