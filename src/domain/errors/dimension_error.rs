//! Image dimension resolution error types.

use thiserror::Error;

/// Failure to resolve the dimensions of a remote image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum DimensionError {
    /// Connection failed, the server answered with an error status,
    /// or the body ended abnormally before a header could be read.
    #[error("failed to download {url}: {message}")]
    Download { url: String, message: String },

    /// Bytes arrived but did not hold a recognisable, complete image header.
    #[error("unreadable image header for {url}: {message}")]
    HeaderParse { url: String, message: String },
}

impl DimensionError {
    /// Creates download error.
    #[must_use]
    pub fn download(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Download {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates header parse error.
    #[must_use]
    pub fn header_parse(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::HeaderParse {
            url: url.into(),
            message: message.into(),
        }
    }

    /// URL of the image that failed.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Download { url, .. } | Self::HeaderParse { url, .. } => url,
        }
    }

    /// Returns whether error happened at the transport level.
    #[must_use]
    pub const fn is_download_error(&self) -> bool {
        matches!(self, Self::Download { .. })
    }
}
