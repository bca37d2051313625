// src/filing/model.rs

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Direction of an insider trade, derived from the transaction code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TradeDirection {
    /// Codes `P` (open-market purchase) and `A` (grant or award).
    Buy,
    /// Codes `S` (open-market sale) and `D` (disposition to the issuer).
    Sell,
    /// Every other code.
    Other,
}

impl TradeDirection {
    /// Fixed lookup from a Form 4 transaction code. Matching is exact.
    pub fn from_code(code: &str) -> Self {
        match code {
            "P" | "A" => TradeDirection::Buy,
            "S" | "D" => TradeDirection::Sell,
            _ => TradeDirection::Other,
        }
    }

    /// True for `Buy` and `Sell`.
    pub const fn is_directional(self) -> bool {
        matches!(self, TradeDirection::Buy | TradeDirection::Sell)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TradeDirection::Buy => "Buy",
            TradeDirection::Sell => "Sell",
            TradeDirection::Other => "Other",
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The insider who filed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportingOwner {
    /// The owner's name as reported, if present.
    pub name: Option<String>,
    /// Whether the owner is a director of the issuer.
    pub is_director: bool,
    /// Whether the owner is an officer of the issuer.
    pub is_officer: bool,
    /// The officer title, when one is reported.
    pub officer_title: Option<String>,
}

/// The company whose securities were traded. `None` marks an unknown field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Issuer {
    /// The issuer's trading symbol.
    pub ticker: Option<String>,
    /// The issuer's registered name.
    pub company_name: Option<String>,
}

/// Text fields of one transaction node, any of which may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawTransaction<'a> {
    /// The transaction code text (e.g. `"P"`).
    pub code: Option<&'a str>,
    /// The share count text.
    pub shares: Option<&'a str>,
    /// The price-per-share text.
    pub price: Option<&'a str>,
}

/// One economically meaningful transaction: nonzero shares at a nonzero price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionEvent {
    /// The raw transaction code.
    pub transaction_code: String,
    /// Direction looked up from the code.
    pub direction: TradeDirection,
    /// Whole shares traded.
    pub shares: u64,
    /// Price per share, rounded to cents.
    pub price_per_share: Decimal,
    /// Whether the event came from the derivative table.
    pub is_derivative: bool,
}

impl TransactionEvent {
    /// `shares * price_per_share`.
    pub fn notional(&self) -> Decimal {
        Decimal::from(self.shares)
            .checked_mul(self.price_per_share)
            .unwrap_or(Decimal::MAX)
    }
}

/// One parsed ownership document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFiling {
    /// The issuer block.
    pub issuer: Issuer,
    /// The first reporting owner.
    pub owner: ReportingOwner,
    /// `periodOfReport`, when present and well-formed.
    pub period_of_report: Option<NaiveDate>,
    /// Valid events in document order, from one table only.
    pub events: Vec<TransactionEvent>,
}

impl ParsedFiling {
    /// One record per event, stamped with `source_url`.
    pub fn into_records(self, source_url: &str) -> Vec<TradeRecord> {
        let ParsedFiling {
            issuer,
            owner,
            period_of_report,
            events,
        } = self;

        events
            .into_iter()
            .map(|ev| TradeRecord {
                filing_date: period_of_report,
                ticker: issuer.ticker.clone(),
                company_name: issuer.company_name.clone(),
                officer_name: owner.name.clone(),
                officer_title: owner.officer_title.clone(),
                is_director: owner.is_director,
                is_officer: owner.is_officer,
                direction: ev.direction,
                shares: ev.shares,
                price_per_share: ev.price_per_share,
                total_value: ev.notional(),
                transaction_code: ev.transaction_code,
                is_derivative: ev.is_derivative,
                source_url: source_url.to_string(),
            })
            .collect()
    }
}

/// A single insider trade, the unit of the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeRecord {
    /// Reporting period of the filing.
    pub filing_date: Option<NaiveDate>,
    /// Issuer trading symbol.
    pub ticker: Option<String>,
    /// Issuer name.
    pub company_name: Option<String>,
    /// Reporting owner name.
    pub officer_name: Option<String>,
    /// Reporting owner title.
    pub officer_title: Option<String>,
    pub is_director: bool,
    pub is_officer: bool,
    /// Buy, sell or other.
    pub direction: TradeDirection,
    pub shares: u64,
    pub price_per_share: Decimal,
    /// `shares * price_per_share`.
    pub total_value: Decimal,
    pub transaction_code: String,
    pub is_derivative: bool,
    /// The filing URL this record was extracted from.
    pub source_url: String,
}
