use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::model::{RawTransaction, TradeDirection, TransactionEvent};

/// Turns one transaction node into an event, or `None` when it carries no trade.
///
/// Missing or unparsable numbers read as zero, and a zero share count or zero
/// price drops the node: those are grants and awards without a market price.
/// Price is rounded to cents and shares truncated before that check.
pub fn parse_transaction(raw: RawTransaction<'_>, is_derivative: bool) -> Option<TransactionEvent> {
    let code = raw.code.map(str::trim).unwrap_or_default();

    let shares = parse_amount(raw.shares)
        .trunc()
        .to_u64()
        .unwrap_or(0);
    let price = parse_amount(raw.price).round_dp(2);

    if shares == 0 || price.is_zero() {
        return None;
    }
    // Reject sizes whose notional does not fit a Decimal.
    Decimal::from(shares).checked_mul(price)?;

    Some(TransactionEvent {
        transaction_code: code.to_string(),
        direction: TradeDirection::from_code(code),
        shares,
        price_per_share: price,
        is_derivative,
    })
}

/// Non-negative decimal from optional text; anything else is zero.
pub(crate) fn parse_amount(text: Option<&str>) -> Decimal {
    let Some(s) = text.map(str::trim).filter(|s| !s.is_empty()) else {
        return Decimal::ZERO;
    };
    let parsed = Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .unwrap_or(Decimal::ZERO);
    if parsed.is_sign_negative() {
        Decimal::ZERO
    } else {
        parsed
    }
}
