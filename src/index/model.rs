use chrono::NaiveDate;
use serde::Serialize;
use url::Url;

/// One filing listed in the EDGAR index feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingReference {
    /// Filer name derived from the entry title.
    pub company_name: String,
    /// Date the filing was accepted.
    pub filing_date: NaiveDate,
    /// The filing detail page.
    pub filing_url: Url,
    /// The raw entry title.
    pub title: String,
}
