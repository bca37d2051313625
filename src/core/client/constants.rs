//! Centralized constants for default endpoints, UA and crawl bounds.

/// SEC fair-access policy requires a descriptive UA with contact details.
pub(crate) const USER_AGENT: &str = "edgar-insiders contact@example.com";

/// EDGAR host; detail-page hrefs are resolved against it.
pub(crate) const DEFAULT_BASE_URL: &str = "https://www.sec.gov/";

/// Company browse endpoint that serves the Atom filing feed.
pub(crate) const BROWSE_PATH: &str = "cgi-bin/browse-edgar";

/// Entries requested per index page.
pub(crate) const DEFAULT_PAGE_SIZE: u32 = 100;

/// Hard cap on index pages per enumeration.
pub(crate) const DEFAULT_MAX_PAGES: u32 = 10;

/// Per-request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// EDGAR allows ten requests per second; one is the conservative default.
pub(crate) const DEFAULT_REQUESTS_PER_SECOND: u32 = 1;
