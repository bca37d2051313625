use tracing::debug;
use url::Url;

use crate::core::{EdgarClient, EdgarError};

/// GET `url` through the client's throttle and retry policy and return the body.
///
/// Any non-2xx status that survives the retry loop becomes `EdgarError::Status`.
pub(crate) async fn get_bytes(
    client: &EdgarClient,
    url: Url,
    endpoint: &str,
) -> Result<Vec<u8>, EdgarError> {
    let req = client.http().get(url.clone());
    let resp = client.send_with_retry(req).await?;

    if !resp.status().is_success() {
        return Err(EdgarError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = resp.bytes().await?;
    debug!(endpoint, url = %url, len = body.len(), "fetched");
    Ok(body.to_vec())
}
