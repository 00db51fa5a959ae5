//! Bounded retry around an image dimension port.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::domain::entities::ImageDescriptor;
use crate::domain::errors::DimensionError;
use crate::domain::ports::ImageDimensionPort;

/// Total attempts made for one image.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Pause between two attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Attempt ceiling and flat delay between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Creates policy. At least one attempt is always made.
    #[must_use]
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Total attempts allowed.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay slept after each failed attempt except the last.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY)
    }
}

/// Retries a dimension port with a flat delay until it succeeds or attempts run out.
///
/// Only the last attempt's error reaches the caller; earlier ones are logged.
pub struct RetryingDimensionFetcher {
    inner: Arc<dyn ImageDimensionPort>,
    policy: RetryPolicy,
}

impl RetryingDimensionFetcher {
    /// Wraps `inner` with `policy`.
    #[must_use]
    pub fn new(inner: Arc<dyn ImageDimensionPort>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

impl std::fmt::Debug for RetryingDimensionFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryingDimensionFetcher")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ImageDimensionPort for RetryingDimensionFetcher {
    async fn fetch_dimensions(&self, url: &str) -> Result<ImageDescriptor, DimensionError> {
        let max_attempts = self.policy.max_attempts;
        let mut attempt = 1;

        loop {
            match self.inner.fetch_dimensions(url).await {
                Ok(descriptor) => {
                    debug!(url = %url, attempt, dimensions = %descriptor, "Resolved image dimensions");
                    return Ok(descriptor);
                }
                Err(e) if attempt < max_attempts => {
                    warn!(
                        url = %url,
                        attempt,
                        max_attempts,
                        delay_ms = self.policy.delay.as_millis(),
                        error = %e,
                        "Image dimension fetch failed, retrying"
                    );
                    sleep(self.policy.delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    warn!(url = %url, attempts = attempt, error = %e, "Giving up on image dimensions");
                    return Err(e);
                }
            }
        }
    }
}
