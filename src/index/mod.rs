//! EDGAR Form 4 index feed.

mod api;
mod model;
mod wire;

pub use api::{IndexPage, parse_index_page};
pub use model::FilingReference;

use chrono::Utc;
use futures::stream::BoxStream;
use url::Url;

use crate::core::{EdgarClient, EdgarError, FilingSource, SourceFuture, net};

impl FilingSource for EdgarClient {
    fn list_recent_filings(
        &self,
        window_days: u32,
    ) -> BoxStream<'_, Result<FilingReference, EdgarError>> {
        api::recent_filings(self, window_days, Utc::now().date_naive())
    }

    fn fetch_document<'a>(&'a self, url: &'a Url) -> SourceFuture<'a, Vec<u8>> {
        Box::pin(net::get_bytes(self, url.clone(), "document"))
    }
}
