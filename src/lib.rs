//! edgar-insiders: insider trades from SEC Form 4 filings.
//!
//! A scan walks the EDGAR Atom index for recent Form 4 filings, follows each
//! filing's detail page to its ownership XML, extracts one [`TradeRecord`] per
//! priced transaction, and returns the buys and sells above a notional
//! threshold, largest first.
//!
//! ```no_run
//! use edgar_insiders::{EdgarClient, ScanBuilder, export};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = EdgarClient::builder()
//!     .user_agent("my-app admin@example.com")
//!     .build()?;
//! let report = ScanBuilder::new(&client).window_days(7).run().await?;
//! export::export_csv("insider_trades.csv", &report.trades)?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod export;
pub mod filing;
pub mod index;
pub mod scan;

pub use crate::core::{EdgarClient, EdgarClientBuilder, EdgarError, FilingSource};
pub use crate::core::client::{Backoff, GovernorThrottle, RetryConfig, Throttle, Unthrottled};
pub use filing::{
    Issuer, ParsedFiling, RawTransaction, ReportingOwner, TradeDirection, TradeRecord,
    TransactionEvent, parse_filing, parse_transaction, try_parse_filing,
};
pub use index::FilingReference;
pub use scan::{ScanBuilder, ScanReport, ScanSummary};
