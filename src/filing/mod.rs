//! Form 4 ownership document parsing.
//!
//! [`parse_filing`] never fails: a document that cannot be read yields no
//! records and a warning. Use [`try_parse_filing`] to see why.

mod link;
mod model;
mod transaction;
mod wire;

pub use link::{DEFAULT_EXCLUDED_PATTERNS, resolve_document_url};
pub use model::{
    Issuer, ParsedFiling, RawTransaction, ReportingOwner, TradeDirection, TradeRecord,
    TransactionEvent,
};
pub use transaction::parse_transaction;

use chrono::NaiveDate;
use tracing::warn;

use crate::core::EdgarError;
use wire::{OwnershipDocument, ReportingOwnerNode, TransactionNode};

/// Parses one ownership document into trade records, one per valid transaction.
///
/// Malformed input yields an empty vector plus a `warn!` event.
pub fn parse_filing(raw: &[u8], source_url: &str) -> Vec<TradeRecord> {
    match try_parse_filing(raw) {
        Ok(filing) => filing.into_records(source_url),
        Err(e) => {
            warn!(url = source_url, error = %e, "skipping unparsable filing");
            Vec::new()
        }
    }
}

/// Parses one ownership document, reporting why it could not be read.
///
/// # Errors
///
/// `EdgarError::Xml` for input that is not a decodable ownership document and
/// `EdgarError::Parse` for non-UTF-8 input or a missing reporting owner.
pub fn try_parse_filing(raw: &[u8]) -> Result<ParsedFiling, EdgarError> {
    let text = std::str::from_utf8(raw)
        .map_err(|e| EdgarError::Parse(format!("document is not UTF-8: {e}")))?;
    let doc: OwnershipDocument = quick_xml::de::from_str(text)?;

    let owner = doc
        .reporting_owner
        .first()
        .map(map_owner)
        .ok_or_else(|| EdgarError::Parse("reportingOwner block missing".into()))?;

    let issuer = doc
        .issuer
        .map(|i| Issuer {
            ticker: non_empty(i.issuer_trading_symbol),
            company_name: non_empty(i.issuer_name),
        })
        .unwrap_or_default();

    let non_derivative = doc
        .non_derivative_table
        .map(|t| t.non_derivative_transaction)
        .unwrap_or_default();
    let mut events = collect_events(&non_derivative, false);

    // One table per filing: derivatives count only when no direct trade does.
    if events.is_empty() {
        let derivative = doc
            .derivative_table
            .map(|t| t.derivative_transaction)
            .unwrap_or_default();
        events = collect_events(&derivative, true);
    }

    let period_of_report = doc
        .period_of_report
        .as_deref()
        .and_then(parse_report_date);

    Ok(ParsedFiling {
        issuer,
        owner,
        period_of_report,
        events,
    })
}

fn collect_events(nodes: &[TransactionNode], is_derivative: bool) -> Vec<TransactionEvent> {
    nodes
        .iter()
        .filter_map(|n| parse_transaction(n.as_raw(), is_derivative))
        .collect()
}

fn map_owner(node: &ReportingOwnerNode) -> ReportingOwner {
    let rel = node.reporting_owner_relationship.as_ref();
    ReportingOwner {
        name: non_empty(
            node.reporting_owner_id
                .as_ref()
                .and_then(|id| id.rpt_owner_name.clone()),
        ),
        is_director: flag(rel.and_then(|r| r.is_director.as_deref())),
        is_officer: flag(rel.and_then(|r| r.is_officer.as_deref())),
        officer_title: non_empty(rel.and_then(|r| r.officer_title.clone())),
    }
}

fn flag(text: Option<&str>) -> bool {
    text.is_some_and(|t| t.trim() == "1")
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

// periodOfReport is YYYY-MM-DD; some filers append a timezone offset.
fn parse_report_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let date_part = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
