use serde::Serialize;

use crate::filing::TradeRecord;

/// Counters for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// References enumerated from the index.
    pub filings_seen: usize,
    /// Filings whose ownership document was fetched and decoded.
    pub filings_parsed: usize,
    /// Trade records extracted before filtering.
    pub trades_extracted: usize,
    /// Records passing the value and direction filter, before any `limit`.
    pub trades_retained: usize,
}

/// The ranked result of a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Retained trades, largest notional first.
    pub trades: Vec<TradeRecord>,
    pub summary: ScanSummary,
}
