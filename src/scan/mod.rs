//! The scan pipeline: enumerate, resolve, parse, filter, rank.

mod model;
mod rank;

pub use model::{ScanReport, ScanSummary};
pub use rank::rank;

use futures::StreamExt;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::{
    core::{EdgarError, FilingSource},
    filing::{DEFAULT_EXCLUDED_PATTERNS, TradeRecord, resolve_document_url, try_parse_filing},
    index::FilingReference,
};

/// Default lookback window in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Default minimum notional value, in dollars.
pub const DEFAULT_MIN_VALUE: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// A builder for one pass over recent Form 4 filings.
///
/// Filings are processed one at a time in index order; a filing that cannot be
/// fetched or parsed is logged and skipped.
///
/// # Example
///
/// ```no_run
/// # use edgar_insiders::{EdgarClient, ScanBuilder};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EdgarClient::builder()
///     .user_agent("my-app admin@example.com")
///     .build()?;
///
/// let report = ScanBuilder::new(&client).window_days(3).run().await?;
/// for t in report.trades.iter().take(5) {
///     println!("{:?} {} {}", t.ticker, t.direction, t.total_value);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ScanBuilder<'a, S: FilingSource + ?Sized> {
    source: &'a S,
    window_days: u32,
    min_value: Decimal,
    limit: Option<usize>,
    excluded: Vec<String>,
}

impl<'a, S: FilingSource + ?Sized> ScanBuilder<'a, S> {
    /// Creates a new `ScanBuilder` over `source` with the default window and threshold.
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            window_days: DEFAULT_WINDOW_DAYS,
            min_value: DEFAULT_MIN_VALUE,
            limit: None,
            excluded: DEFAULT_EXCLUDED_PATTERNS
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
        }
    }

    /// Sets how many days back to enumerate.
    #[must_use]
    pub const fn window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    /// Sets the inclusive minimum `total_value` for a trade to be kept.
    #[must_use]
    pub const fn min_value(mut self, value: Decimal) -> Self {
        self.min_value = value;
        self
    }

    /// Keeps only the `n` largest trades.
    #[must_use]
    pub const fn limit(mut self, n: Option<usize>) -> Self {
        self.limit = n;
        self
    }

    /// Replaces the href substrings that disqualify a detail-page link.
    #[must_use]
    pub fn excluded_patterns<I, P>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.excluded = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Runs the scan.
    ///
    /// # Errors
    ///
    /// Fails only when the index fails before yielding its first filing.
    /// Per-filing errors are logged and skipped; an empty report is a success.
    #[tracing::instrument(skip(self), fields(window_days = self.window_days, min_value = %self.min_value))]
    pub async fn run(self) -> Result<ScanReport, EdgarError> {
        let mut filings = self.source.list_recent_filings(self.window_days);
        let mut summary = ScanSummary::default();
        let mut extracted = Vec::new();

        while let Some(item) = filings.next().await {
            let reference = match item {
                Ok(r) => r,
                Err(e) if summary.filings_seen == 0 => return Err(e),
                Err(e) => {
                    warn!(error = %e, "index failed mid-enumeration; continuing with what we have");
                    break;
                }
            };

            summary.filings_seen += 1;
            if summary.filings_seen % 10 == 0 {
                info!(processed = summary.filings_seen, "processing filings");
            }

            match self.extract(&reference).await {
                Ok(records) => {
                    summary.filings_parsed += 1;
                    extracted.extend(records);
                }
                Err(e) => {
                    warn!(url = %reference.filing_url, error = %e, "skipping filing");
                }
            }
        }

        summary.trades_extracted = extracted.len();
        let mut trades = rank(extracted, self.min_value);
        summary.trades_retained = trades.len();
        if let Some(n) = self.limit {
            trades.truncate(n);
        }

        info!(
            filings_seen = summary.filings_seen,
            filings_parsed = summary.filings_parsed,
            trades_extracted = summary.trades_extracted,
            trades_retained = summary.trades_retained,
            "scan complete"
        );

        Ok(ScanReport { trades, summary })
    }

    async fn extract(&self, reference: &FilingReference) -> Result<Vec<TradeRecord>, EdgarError> {
        let page = self.source.fetch_document(&reference.filing_url).await?;
        let html = String::from_utf8_lossy(&page);
        let doc_url = resolve_document_url(&html, &reference.filing_url, &self.excluded)?;

        let raw = self.source.fetch_document(&doc_url).await?;
        let filing = try_parse_filing(&raw)?;

        let mut records = filing.into_records(reference.filing_url.as_str());
        for r in &mut records {
            if r.filing_date.is_none() {
                r.filing_date = Some(reference.filing_date);
            }
        }
        Ok(records)
    }
}
