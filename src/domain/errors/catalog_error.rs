//! Catalog source error types.

use thiserror::Error;

/// Catalog source error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum CatalogError {
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("catalog returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("failed to decode catalog response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("unexpected catalog error: {message}")]
    Unexpected { message: String },
}

impl CatalogError {
    /// Creates network error.
    #[must_use]
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the resource does not exist upstream.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}
