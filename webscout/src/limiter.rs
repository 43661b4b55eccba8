//! Shared request rate limiting for web fetches
//!
//! All rate-limited fetches flowing through one [`RateLimiter`] are spaced
//! at least [`MIN_REQUEST_INTERVAL`] apart, regardless of how many callers
//! run concurrently. The limit is global to the limiter instance, not
//! per-URL. Callers can opt out per request, which bypasses the limiter
//! entirely for that call.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Minimum interval between rate-limited requests
pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_secs(3);

/// Enforces a minimum interval between acquisitions
///
/// The last-request timestamp lives behind an async mutex that is held
/// across the in-line wait, so concurrent callers serialize: each computes
/// its delay from the timestamp the previous caller wrote after finishing
/// its own wait. Waiting suspends the task without blocking the runtime.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Creates a limiter enforcing `min_interval` between acquisitions
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// Waits until at least the minimum interval has elapsed since the
    /// previous acquisition, then records the new request timestamp
    pub async fn acquire(&self) {
        let mut last_request = self.last_request.lock().await;

        if let Some(last) = *last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                tracing::debug!("Rate limiting: waiting {:.2}s", wait.as_secs_f64());
                tokio::time::sleep(wait).await;
            }
        }

        *last_request = Some(Instant::now());
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(MIN_REQUEST_INTERVAL)
    }
}
