// Request spacing for the MediaWiki API.
//
// Wikimedia asks API clients to keep request rates modest. Every request the
// client makes goes through `acquire`, which sleeps until at least one
// interval has passed since the previous request.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// Enforces a minimum interval between requests. Cloning shares the schedule.
#[derive(Clone)]
pub struct RateLimiter {
    state: Arc<Mutex<Schedule>>,
}

struct Schedule {
    /// Minimum time between requests (zero means unlimited)
    interval: Duration,
    /// When the previous request was let through
    last_request: Option<Instant>,
}

impl RateLimiter {
    /// Allow at most `requests_per_second`. Zero or negative disables limiting.
    ///
    /// Fails when the rate is so small that the interval can't be represented.
    pub fn new(requests_per_second: f64) -> Result<Self> {
        let interval = if requests_per_second > 0.0 {
            Duration::try_from_secs_f64(1.0 / requests_per_second).with_context(|| {
                format!("Request rate {requests_per_second} per second is too small")
            })?
        } else {
            Duration::ZERO
        };

        Ok(Self {
            state: Arc::new(Mutex::new(Schedule {
                interval,
                last_request: None,
            })),
        })
    }

    /// Wait for the next request slot.
    pub async fn acquire(&self) {
        let mut state = self.state.lock().await;

        if let Some(last) = state.last_request {
            let elapsed = last.elapsed();
            if elapsed < state.interval {
                // Lock stays held across the sleep; concurrent callers queue behind it
                tokio::time::sleep(state.interval - elapsed).await;
            }
        }

        state.last_request = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_request_is_immediate() {
        let limiter = RateLimiter::new(1.0).unwrap();
        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_second_request_waits_for_interval() {
        let limiter = RateLimiter::new(4.0).unwrap(); // 250ms between requests
        limiter.acquire().await;
        let start = Instant::now();
        limiter.acquire().await;
        let elapsed = start.elapsed();
        assert!(
            elapsed >= Duration::from_millis(200),
            "Expected ~250ms delay, got {:?}",
            elapsed
        );
    }

    #[tokio::test]
    async fn test_zero_rate_is_unlimited() {
        let limiter = RateLimiter::new(0.0).unwrap();
        let start = Instant::now();
        for _ in 0..5 {
            limiter.acquire().await;
        }
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn test_unrepresentable_interval_is_an_error() {
        let err = RateLimiter::new(1e-20).err().unwrap();
        assert!(err.to_string().contains("too small"), "got: {err}");
    }
}
