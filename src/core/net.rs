//! URL building and the single authenticated GET every fetcher goes through.

use crate::core::{ZpClient, ZpError};
use url::Url;

/// `api3.php?do={action}&...` under the site root.
pub(crate) fn api3_url(base: &Url, action: &str, params: &[(&str, &str)]) -> Result<Url, ZpError> {
    let mut url = base.join("api3.php")?;
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("do", action);
        for (k, v) in params {
            qp.append_pair(k, v);
        }
    }
    Ok(url)
}

/// Pre-rendered JSON under `cache3/{section}/{file}`.
pub(crate) fn cache3_url(base: &Url, section: &str, file: &str) -> Result<Url, ZpError> {
    Ok(base.join(&format!("cache3/{section}/{file}"))?)
}

/// Pass a 2xx response through; anything else becomes [`ZpError::Status`].
pub(crate) fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, ZpError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ZpError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp)
}

/// Acquire a session and issue exactly one GET; non-2xx is an error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client, url), err, fields(url = %url)))]
pub(crate) async fn get_text(client: &mut ZpClient, url: Url) -> Result<String, ZpError> {
    let session = client.require_session().await?;
    let resp = session.http().get(url).send().await?;
    #[cfg(feature = "tracing")]
    tracing::debug!(status = resp.status().as_u16(), "response received");
    Ok(ensure_success(resp)?.text().await?)
}

/// Like [`get_text`], returning the body as uninterpreted JSON.
pub(crate) async fn get_json(client: &mut ZpClient, url: Url) -> Result<serde_json::Value, ZpError> {
    let body = get_text(client, url).await?;
    Ok(serde_json::from_str(&body)?)
}
