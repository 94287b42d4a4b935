//! Request plumbing shared by the adapters.

use reqwest::RequestBuilder;
use url::Url;

use crate::core::{BriefClient, BriefError, client::PROBE_TIMEOUT};

/// One-shot connectivity check, run once before the first provider call.
///
/// Reachability is all that matters here; any response, whatever its status,
/// means the network is up.
pub(crate) async fn preflight(client: &BriefClient) -> Result<(), BriefError> {
    if !client.preflight_enabled() {
        return Ok(());
    }
    client
        .http()
        .get(client.probe_url().clone())
        .timeout(PROBE_TIMEOUT)
        .send()
        .await
        .map(|_| ())
        .map_err(|e| BriefError::NetworkUnavailable(e.to_string()))
}

/// Send a request and map non-success statuses to `BriefError::Status`.
pub(crate) async fn send(req: RequestBuilder, url: &Url) -> Result<reqwest::Response, BriefError> {
    let resp = req.send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(BriefError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(resp)
}

/// Read the response body as text.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, BriefError> {
    Ok(resp.text().await?)
}
