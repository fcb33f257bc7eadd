//! Team roster and results endpoints.

use serde_json::Value;

use crate::core::net::{api3_url, get_json};
use crate::{ZpClient, ZpError};

async fn team_action(client: &mut ZpClient, action: &str, team_id: u64) -> Result<Value, ZpError> {
    let id = team_id.to_string();
    let url = api3_url(client.base_url(), action, &[("id", id.as_str())])?;
    get_json(client, url).await
}

/// Fetches the riders currently on a team.
///
/// # Errors
///
/// Returns `ZpError` if no session is available, the request fails, or the
/// body is not JSON.
pub async fn team_riders(client: &mut ZpClient, team_id: u64) -> Result<Value, ZpError> {
    team_action(client, "team_riders", team_id).await
}

/// Fetches riders with pending applications to a team.
///
/// # Errors
///
/// Same as [`team_riders`].
pub async fn team_pending(client: &mut ZpClient, team_id: u64) -> Result<Value, ZpError> {
    team_action(client, "team_pending", team_id).await
}

/// Fetches recent race results of a team's riders.
///
/// # Errors
///
/// Same as [`team_riders`].
pub async fn team_results(client: &mut ZpClient, team_id: u64) -> Result<Value, ZpError> {
    team_action(client, "team_results", team_id).await
}
