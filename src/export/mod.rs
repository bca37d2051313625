//! CSV report writer.
//!
//! Missing text fields become `N/A` here and nowhere else.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::core::EdgarError;
use crate::filing::TradeRecord;

/// Header row, in output order.
pub const COLUMNS: [&str; 13] = [
    "filing_date",
    "ticker",
    "company_name",
    "officer_name",
    "officer_title",
    "is_director",
    "is_officer",
    "trade_type",
    "shares",
    "price_per_share",
    "total_value",
    "transaction_code",
    "sec_filing_url",
];

const MISSING: &str = "N/A";

/// Writes a header and one row per trade to `out`.
///
/// # Errors
/// Returns `EdgarError::Csv` if a row cannot be written.
pub fn write_csv<W: Write>(out: W, trades: &[TradeRecord]) -> Result<(), EdgarError> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(COLUMNS)?;

    for t in trades {
        writer.write_record([
            t.filing_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            or_missing(t.ticker.as_deref()),
            or_missing(t.company_name.as_deref()),
            or_missing(t.officer_name.as_deref()),
            or_missing(t.officer_title.as_deref()),
            t.is_director.to_string(),
            t.is_officer.to_string(),
            t.direction.to_string(),
            t.shares.to_string(),
            t.price_per_share.to_string(),
            t.total_value.to_string(),
            t.transaction_code.clone(),
            t.source_url.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Creates `path` and writes the report into it.
///
/// # Errors
/// Returns `EdgarError::Io` if the file cannot be created.
pub fn export_csv(path: impl AsRef<Path>, trades: &[TradeRecord]) -> Result<(), EdgarError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(file, trades)?;
    info!(count = trades.len(), path = %path.display(), "exported trades");
    Ok(())
}

fn or_missing(v: Option<&str>) -> String {
    v.unwrap_or(MISSING).to_string()
}
