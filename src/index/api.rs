use chrono::{Days, NaiveDate};
use futures::stream::{self, BoxStream, StreamExt};
use tracing::{info, warn};
use url::Url;

use super::model::FilingReference;
use super::wire::{Entry, Feed};
use crate::core::{EdgarClient, EdgarError, net};

/// References parsed from one feed page, plus the raw entry count.
///
/// The raw count drives pagination: a page whose entries were all skipped is
/// not the same as an empty page.
#[derive(Debug, Clone, Default)]
pub struct IndexPage {
    /// Entries in the feed, valid or not.
    pub entry_count: usize,
    /// Usable references, in feed order.
    pub filings: Vec<FilingReference>,
}

/// Parses one Atom index page. Entries without a link or date are skipped.
///
/// # Errors
///
/// Returns `EdgarError::Parse` for non-UTF-8 input and `EdgarError::Xml` when
/// the feed cannot be decoded.
pub fn parse_index_page(raw: &[u8], base: &Url) -> Result<IndexPage, EdgarError> {
    let text = std::str::from_utf8(raw)
        .map_err(|e| EdgarError::Parse(format!("index page is not UTF-8: {e}")))?;
    let feed: Feed = quick_xml::de::from_str(text)?;

    let entry_count = feed.entry.len();
    let filings = feed
        .entry
        .iter()
        .filter_map(|e| match map_entry(e, base) {
            Ok(r) => Some(r),
            Err(reason) => {
                warn!(title = e.title.as_deref().unwrap_or(""), reason, "skipping index entry");
                None
            }
        })
        .collect();

    Ok(IndexPage {
        entry_count,
        filings,
    })
}

fn map_entry(entry: &Entry, base: &Url) -> Result<FilingReference, &'static str> {
    let title = entry.title.as_deref().unwrap_or("").trim().to_string();

    let href = entry.alternate_href().ok_or("no alternate link")?;
    let filing_url = base.join(href.trim()).map_err(|_| "bad link")?;

    let updated = entry.updated.as_deref().ok_or("no updated timestamp")?;
    let date_part = updated.trim().split('T').next().unwrap_or("");
    let filing_date =
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| "bad updated timestamp")?;

    Ok(FilingReference {
        company_name: company_from_title(&title),
        filing_date,
        filing_url,
        title,
    })
}

/// `"4 - ACME CORP (0000012345) (Issuer)"` becomes `"ACME CORP"`.
pub(crate) fn company_from_title(title: &str) -> String {
    let mut name = match title.split_once(" - ") {
        Some((_, rest)) => rest.trim(),
        None => title.trim(),
    };
    while name.ends_with(')') {
        match name.rfind(" (") {
            Some(i) => name = name[..i].trim_end(),
            None => break,
        }
    }
    name.to_string()
}

fn page_url(
    client: &EdgarClient,
    since: NaiveDate,
    page: u32,
) -> Url {
    let mut url = client.browse_url().clone();
    let page_size = client.page_size();
    url.query_pairs_mut()
        .append_pair("action", "getcompany")
        .append_pair("type", "4")
        .append_pair("dateb", "")
        .append_pair("datea", &since.format("%Y%m%d").to_string())
        .append_pair("count", &page_size.to_string())
        .append_pair("search_text", "")
        .append_pair("output", "atom")
        .append_pair("start", &(u64::from(page) * u64::from(page_size)).to_string());
    url
}

async fn fetch_page(
    client: &EdgarClient,
    since: NaiveDate,
    page: u32,
) -> Result<IndexPage, EdgarError> {
    let url = page_url(client, since, page);
    let body = net::get_bytes(client, url, "index").await?;
    parse_index_page(&body, client.base_url())
}

struct Cursor {
    page: u32,
    yielded: usize,
    done: bool,
}

/// Lazily walks index pages from `today - window_days`, at most `max_pages` of them.
pub(crate) fn recent_filings(
    client: &EdgarClient,
    window_days: u32,
    today: NaiveDate,
) -> BoxStream<'_, Result<FilingReference, EdgarError>> {
    let since = today
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN);
    let max_pages = client.max_pages();

    let start = Cursor {
        page: 0,
        yielded: 0,
        done: false,
    };

    stream::unfold(start, move |mut cur| async move {
        if cur.done || cur.page >= max_pages {
            return None;
        }

        match fetch_page(client, since, cur.page).await {
            Ok(p) if p.entry_count == 0 => None,
            Ok(p) => {
                cur.page += 1;
                cur.yielded += p.filings.len();
                info!(page = cur.page, entries = p.entry_count, "processed index page");
                let items: Vec<_> = p.filings.into_iter().map(Ok).collect();
                Some((stream::iter(items), cur))
            }
            Err(e) if cur.yielded == 0 => {
                cur.done = true;
                Some((stream::iter(vec![Err(e)]), cur))
            }
            Err(e) => {
                warn!(page = cur.page, error = %e, "index page failed; ending enumeration");
                None
            }
        }
    })
    .flatten()
    .boxed()
}
