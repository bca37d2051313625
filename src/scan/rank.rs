use rust_decimal::Decimal;

use crate::filing::TradeRecord;

/// Keeps buys and sells worth at least `min_value`, largest first.
///
/// The threshold is inclusive. The sort is stable, so equal values keep their
/// discovery order.
pub fn rank(records: Vec<TradeRecord>, min_value: Decimal) -> Vec<TradeRecord> {
    let mut kept: Vec<TradeRecord> = records
        .into_iter()
        .filter(|r| r.direction.is_directional() && r.total_value >= min_value)
        .collect();
    kept.sort_by(|a, b| b.total_value.cmp(&a.total_value));
    kept
}
