//! Outbound request pacing.
//!
//! The client owns one `Throttle` and waits on it before every request,
//! retries included. Swap in [`Unthrottled`] for tests.

use std::fmt;
use std::future::Future;
use std::num::NonZeroU32;
use std::pin::Pin;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

use crate::core::EdgarError;

/// Grants permission for the next outbound request.
pub trait Throttle: Send + Sync + fmt::Debug {
    /// Resolves once a request slot is available.
    fn acquire(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

/// A `governor`-backed limiter allowing a fixed number of requests per interval.
pub struct GovernorThrottle {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    quota: Quota,
}

impl GovernorThrottle {
    /// At most `n` requests per second.
    pub fn per_second(n: NonZeroU32) -> Self {
        Self::from_quota(Quota::per_second(n))
    }

    /// One request per `period`.
    pub fn with_period(period: Duration) -> Result<Self, EdgarError> {
        let quota = Quota::with_period(period)
            .ok_or_else(|| EdgarError::InvalidParams("throttle period must be non-zero".into()))?;
        Ok(Self::from_quota(quota))
    }

    fn from_quota(quota: Quota) -> Self {
        Self {
            limiter: RateLimiter::direct(quota),
            quota,
        }
    }
}

impl fmt::Debug for GovernorThrottle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GovernorThrottle")
            .field("replenish_interval", &self.quota.replenish_interval())
            .field("burst", &self.quota.burst_size())
            .finish()
    }
}

impl Throttle for GovernorThrottle {
    fn acquire(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(async move { self.limiter.until_ready().await })
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unthrottled;

impl Throttle for Unthrottled {
    fn acquire(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(std::future::ready(()))
    }
}
