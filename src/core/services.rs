use std::future::Future;
use std::pin::Pin;

use futures::stream::BoxStream;
use url::Url;

use crate::core::EdgarError;
use crate::index::FilingReference;

/// A boxed, sendable future returned by [`FilingSource`] methods.
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, EdgarError>> + Send + 'a>>;

/// Where filings come from: an index to enumerate and a way to fetch documents.
///
/// The scan pipeline depends only on this trait, so it can be driven by a
/// canned source in tests. It is implemented by [`EdgarClient`](crate::EdgarClient),
/// which owns pacing and retries.
pub trait FilingSource: Send + Sync {
    /// Lazily enumerates filings from the last `window_days` days.
    ///
    /// Each call starts a fresh enumeration. Implementations must bound the
    /// number of index pages they request so the stream always terminates.
    /// An `Err` item means the index itself failed; callers decide whether that
    /// is fatal based on how many references they have already seen.
    fn list_recent_filings(
        &self,
        window_days: u32,
    ) -> BoxStream<'_, Result<FilingReference, EdgarError>>;

    /// Fetches the raw bytes at `url`.
    fn fetch_document<'a>(&'a self, url: &'a Url) -> SourceFuture<'a, Vec<u8>>;
}
