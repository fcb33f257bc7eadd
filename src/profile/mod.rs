//! Rider profiles: the HTML summary page and the cached race-history JSON.
//!
//! Internals are split into:
//! - `scrape`:  per-field extraction from `profile.php`
//! - `history`: personal bests from `cache3/profile/{zwid}_all.json`

mod history;
mod model;
mod scrape;

pub use model::{PowerBests, ProfileSummary, Standing};
pub use scrape::{
    country, parse_race_ranking, parse_zpoints, profile_name, profile_table, race_ranking,
    scrape_profile, zpoints, zwift_racing_score,
};

use serde_json::Value;

use crate::core::net::{cache3_url, get_json, get_text};
use crate::{ZpClient, ZpError};

/// Loads and scrapes the profile page of a rider.
///
/// A page without the profile table yields an all-`None` summary rather than
/// an error.
///
/// # Errors
///
/// Returns `ZpError` if no session is available or the request fails.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn load_profile(client: &mut ZpClient, zwid: u64) -> Result<ProfileSummary, ZpError> {
    let mut url = client.base_url().join("profile.php")?;
    url.query_pairs_mut().append_pair("z", &zwid.to_string());

    let body = get_text(client, url).await?;
    let summary = scrape_profile(&body);
    #[cfg(feature = "tracing")]
    {
        if summary == ProfileSummary::default() {
            tracing::debug!("profile page had no recognisable fields");
        }
    }
    Ok(summary)
}

/// Loads the full cached race history of a rider, uninterpreted.
///
/// # Errors
///
/// Returns `ZpError` if no session is available, the request fails (404 for
/// riders unknown to the site), or the body is not JSON.
pub async fn load_history(client: &mut ZpClient, zwid: u64) -> Result<Value, ZpError> {
    let url = cache3_url(client.base_url(), "profile", &format!("{zwid}_all.json"))?;
    get_json(client, url).await
}

/// Loads the race history and reduces it to [`PowerBests`].
///
/// `Ok(None)` means the rider has no races.
///
/// # Errors
///
/// Same as [`load_history`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn load_power_bests(
    client: &mut ZpClient,
    zwid: u64,
) -> Result<Option<PowerBests>, ZpError> {
    let history = load_history(client, zwid).await?;
    Ok(PowerBests::from_history(zwid, &history))
}
