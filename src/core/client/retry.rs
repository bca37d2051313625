use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::core::EdgarError;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
        /// Whether to apply random jitter (+/- 50%) to the delay.
        jitter: bool,
    },
}

impl Backoff {
    /// Delay before retry number `attempt` (zero-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        match self {
            Backoff::Fixed(d) => *d,
            Backoff::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                let exp = i32::try_from(attempt).unwrap_or(i32::MAX);
                let raw = base.as_secs_f64() * factor.powi(exp);
                let mut secs = raw.min(max.as_secs_f64());
                if *jitter {
                    secs *= rand::thread_rng().gen_range(0.5..1.5);
                }
                Duration::from_secs_f64(secs.max(0.0))
            }
        }
    }
}

/// Configuration for the automatic retry mechanism.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries to attempt. The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// A list of HTTP status codes that should trigger a retry.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on connection errors.
    pub retry_on_connect: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 3,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(500),
                factor: 2.0,
                max: Duration::from_secs(5),
                jitter: true,
            },
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}

impl super::EdgarClient {
    /// Sends `req`, waiting on the throttle before every attempt and retrying per policy.
    ///
    /// Non-retryable statuses are returned as-is; callers map them to `EdgarError::Status`.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, EdgarError> {
        let cfg = &self.retry;
        let mut attempt = 0u32;

        loop {
            let Some(this_try) = req.try_clone() else {
                // Streaming bodies cannot be replayed; single shot.
                self.throttle.acquire().await;
                return Ok(req.send().await?);
            };

            self.throttle.acquire().await;
            let can_retry = cfg.enabled && attempt < cfg.max_retries;

            match this_try.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if can_retry && cfg.retry_on_status.contains(&status) {
                        let delay = cfg.backoff.delay(attempt);
                        debug!(status, attempt, ?delay, url = %resp.url(), "retrying after status");
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Ok(resp);
                }
                Err(e) => {
                    let retryable = (cfg.retry_on_timeout && e.is_timeout())
                        || (cfg.retry_on_connect && e.is_connect());
                    if can_retry && retryable {
                        let delay = cfg.backoff.delay(attempt);
                        debug!(error = %e, attempt, ?delay, "retrying after transport error");
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }
}
