//! Serde shapes for the Form 4 `ownershipDocument`.
//!
//! Every field is optional so that partially populated filings still decode;
//! unknown elements (addresses, footnotes, holdings) are ignored.

use serde::Deserialize;

use super::model::RawTransaction;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OwnershipDocument {
    pub(crate) issuer: Option<IssuerNode>,
    #[serde(default)]
    pub(crate) reporting_owner: Vec<ReportingOwnerNode>,
    pub(crate) period_of_report: Option<String>,
    pub(crate) non_derivative_table: Option<NonDerivativeTable>,
    pub(crate) derivative_table: Option<DerivativeTable>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IssuerNode {
    pub(crate) issuer_name: Option<String>,
    pub(crate) issuer_trading_symbol: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReportingOwnerNode {
    pub(crate) reporting_owner_id: Option<OwnerIdNode>,
    pub(crate) reporting_owner_relationship: Option<RelationshipNode>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OwnerIdNode {
    pub(crate) rpt_owner_name: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RelationshipNode {
    pub(crate) is_director: Option<String>,
    pub(crate) is_officer: Option<String>,
    pub(crate) officer_title: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NonDerivativeTable {
    #[serde(default)]
    pub(crate) non_derivative_transaction: Vec<TransactionNode>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DerivativeTable {
    #[serde(default)]
    pub(crate) derivative_transaction: Vec<TransactionNode>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionNode {
    pub(crate) transaction_coding: Option<CodingNode>,
    pub(crate) transaction_amounts: Option<AmountsNode>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CodingNode {
    pub(crate) transaction_code: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AmountsNode {
    pub(crate) transaction_shares: Option<ValueNode>,
    pub(crate) transaction_price_per_share: Option<ValueNode>,
}

// Form 4 wraps most scalars as <x><value>..</value><footnoteId/></x>.
#[derive(Deserialize, Default)]
pub(crate) struct ValueNode {
    pub(crate) value: Option<String>,
}

impl TransactionNode {
    pub(crate) fn as_raw(&self) -> RawTransaction<'_> {
        let amounts = self.transaction_amounts.as_ref();
        RawTransaction {
            code: self
                .transaction_coding
                .as_ref()
                .and_then(|c| c.transaction_code.as_deref()),
            shares: amounts
                .and_then(|a| a.transaction_shares.as_ref())
                .and_then(|v| v.value.as_deref()),
            price: amounts
                .and_then(|a| a.transaction_price_per_share.as_ref())
                .and_then(|v| v.value.as_deref()),
        }
    }
}
