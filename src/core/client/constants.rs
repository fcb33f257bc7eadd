//! Centralized constants for default endpoints, markers and UA.

use std::time::Duration;

/// Desktop UA; some `api3.php` actions reject requests without one.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_8) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/116.0.0.0 Safari/537.36"
);

/// Site root. Every endpoint path is joined onto this.
pub(crate) const DEFAULT_BASE_URL: &str = "https://zwiftpower.com/";

/// Host of the external identity provider the SSO flow passes through.
pub(crate) const DEFAULT_IDENTITY_HOST: &str = "secure.zwift.com";

/// Events listing; also where a successful login lands.
pub(crate) const EVENTS_PATH: &str = "events.php";

/// Starts the SSO redirect chain towards the identity provider.
pub(crate) const SSO_LOGIN_PATH: &str =
    "ucp.php?mode=login&login=external&oauth_service=oauthzpsso";

/// Text rendered in place of normal content for unauthenticated sessions.
pub(crate) const LOGIN_WALL_MARKER: &str = "Login Required";

/// Lowercased rejection text shown by the identity provider.
pub(crate) const INVALID_CREDENTIALS_MARKER: &str = "invalid username or password.";

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause between the two session-check requests.
pub(crate) const DEFAULT_VALIDATION_PACING: Duration = Duration::from_secs(1);
