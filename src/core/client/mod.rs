//! Public client surface + builder.
//! Internals are split into `constants` (UA + defaults), `retry` (policy + send loop)
//! and `throttle` (request pacing).

mod constants;
mod retry;
mod throttle;

pub use retry::{Backoff, RetryConfig};
pub use throttle::{GovernorThrottle, Throttle, Unthrottled};

use crate::core::EdgarError;
use constants::{
    BROWSE_PATH, DEFAULT_BASE_URL, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE,
    DEFAULT_REQUESTS_PER_SECOND, DEFAULT_TIMEOUT_SECS, USER_AGENT,
};
use reqwest::Client;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Holds a configured HTTP client, EDGAR endpoints, and the crawl policy.
///
/// Cloning is cheap; clones share the connection pool and the throttle.
#[derive(Debug, Clone)]
pub struct EdgarClient {
    http: Client,
    base_url: Url,
    browse_url: Url,
    retry: RetryConfig,
    throttle: Arc<dyn Throttle>,
    page_size: u32,
    max_pages: u32,
}

impl Default for EdgarClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl EdgarClient {
    /// Create a new builder.
    pub fn builder() -> EdgarClientBuilder {
        EdgarClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
    pub(crate) fn browse_url(&self) -> &Url {
        &self.browse_url
    }
    pub(crate) fn page_size(&self) -> u32 {
        self.page_size
    }
    pub(crate) fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// The retry policy applied to every request.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct EdgarClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    browse_url: Option<Url>,
    retry: Option<RetryConfig>,
    throttle: Option<Arc<dyn Throttle>>,
    requests_per_second: Option<u32>,
    page_size: Option<u32>,
    max_pages: Option<u32>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl EdgarClientBuilder {
    /// Override the User-Agent. EDGAR expects `"<app> <contact email>"`.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the EDGAR host (e.g., `https://www.sec.gov/`).
    /// The browse endpoint is derived from it unless set explicitly.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the Atom browse endpoint (e.g., `https://www.sec.gov/cgi-bin/browse-edgar`).
    pub fn browse_url(mut self, url: Url) -> Self {
        self.browse_url = Some(url);
        self
    }

    /// Replace the default retry policy.
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Inject a custom throttle. Takes precedence over `requests_per_second`.
    pub fn throttle(mut self, throttle: impl Throttle + 'static) -> Self {
        self.throttle = Some(Arc::new(throttle));
        self
    }

    /// Pace outbound requests with a `governor` quota. Default: 1.
    pub fn requests_per_second(mut self, n: u32) -> Self {
        self.requests_per_second = Some(n);
        self
    }

    /// Entries requested per index page. Default: 100.
    pub fn page_size(mut self, n: u32) -> Self {
        self.page_size = Some(n);
        self
    }

    /// Hard cap on index pages per enumeration. Default: 10.
    pub fn max_pages(mut self, n: u32) -> Self {
        self.max_pages = Some(n);
        self
    }

    /// Set a per-request timeout. Default: 10s.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<EdgarClient, EdgarError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let browse_url = match self.browse_url {
            Some(u) => u,
            None => base_url.join(BROWSE_PATH)?,
        };

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(EdgarError::InvalidParams("page_size must be positive".into()));
        }

        let throttle: Arc<dyn Throttle> = match self.throttle {
            Some(t) => t,
            None => {
                let rps = self
                    .requests_per_second
                    .unwrap_or(DEFAULT_REQUESTS_PER_SECOND);
                let rps = NonZeroU32::new(rps).ok_or_else(|| {
                    EdgarError::InvalidParams("requests_per_second must be positive".into())
                })?;
                Arc::new(GovernorThrottle::per_second(rps))
            }
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            );
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb.build()?;

        Ok(EdgarClient {
            http,
            base_url,
            browse_url,
            retry: self.retry.unwrap_or_default(),
            throttle,
            page_size,
            max_pages: self.max_pages.unwrap_or(DEFAULT_MAX_PAGES),
        })
    }
}
