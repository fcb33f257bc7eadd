//! Public client surface + builder.
//! Internals are split into `auth` (session check + SSO login), `session`
//! (cookie jar + HTTP clients) and `constants` (UA + defaults).

mod auth;
mod constants;
mod session;

pub use session::Session;

use crate::core::{Credentials, ZpError};
use constants::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT, DEFAULT_IDENTITY_HOST, DEFAULT_TIMEOUT,
    DEFAULT_VALIDATION_PACING, EVENTS_PATH, SSO_LOGIN_PATH, USER_AGENT,
};
use std::time::Duration;
use url::Url;

/// Lifecycle of the session held by a [`ZpClient`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No login has been attempted yet.
    Uninitialized,
    /// A session is held and passed its last check (or was just created).
    Valid,
    /// The last check or login failed; no session is held.
    Invalid,
}

/// Why the most recent login attempt failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginFailure {
    /// The flow finished but did not land on the events page, or the identity
    /// provider rejected the credentials.
    Rejected,
    /// The identity provider page had no login form.
    FormNotFound,
    /// A request in the flow failed at the transport or URL level.
    Network,
}

impl From<&ZpError> for LoginFailure {
    fn from(e: &ZpError) -> Self {
        match e {
            ZpError::Auth(_) | ZpError::MissingCredential(_) => Self::Rejected,
            ZpError::LoginFormNotFound { .. } => Self::FormNotFound,
            _ => Self::Network,
        }
    }
}

/// Client for the site. Owns the credentials and, once logged in, the
/// authenticated [`Session`].
///
/// All operations take `&mut self`; the session is never shared.
///
/// # Example
///
/// ```no_run
/// # use zwiftpower_rs::{ZpClient, profile};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Reads ZWIFTPOWER_USERNAME / ZWIFTPOWER_PASSWORD.
/// let mut client = ZpClient::new()?;
/// let summary = profile::load_profile(&mut client, 514_502).await?;
/// println!("{:?} has {:?} ZPoints", summary.profile_name, summary.z_points);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ZpClient {
    base_url: Url,
    events_url: Url,
    sso_url: Url,
    identity_host: String,
    credentials: Credentials,

    user_agent: String,
    timeout: Duration,
    connect_timeout: Duration,
    validation_pacing: Duration,

    session: Option<Session>,
    state: SessionState,
    last_login_failure: Option<LoginFailure>,
}

impl ZpClient {
    /// Builds a client with default endpoints and credentials from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ZpError::MissingCredential`] if the credential variables are unset.
    pub fn new() -> Result<Self, ZpError> {
        Self::builder().build()
    }

    /// Create a new builder.
    pub fn builder() -> ZpClientBuilder {
        ZpClientBuilder::default()
    }

    /// Current position in the session lifecycle.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a session is currently held (not re-checked).
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Kind of failure from the most recent login, cleared by a successful one.
    pub fn last_login_failure(&self) -> Option<LoginFailure> {
        self.last_login_failure
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[cfg(test)]
    pub(crate) fn validation_pacing(&self) -> Duration {
        self.validation_pacing
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ZpClientBuilder {
    credentials: Option<Credentials>,
    base_url: Option<Url>,
    identity_host: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    validation_pacing: Option<Duration>,
}

impl ZpClientBuilder {
    /// Use explicit credentials instead of reading the environment.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Override the site root (e.g., `https://zwiftpower.com/`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the identity provider host a failed login gets stuck on.
    pub fn identity_host(mut self, host: impl Into<String>) -> Self {
        self.identity_host = Some(host.into());
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the overall request timeout. Default: 30s.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set the connect timeout. Default: 10s.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Set the pause between the two session-check requests. Default: 1s.
    ///
    /// Only lower this against a test server.
    pub fn validation_pacing(mut self, dur: Duration) -> Self {
        self.validation_pacing = Some(dur);
        self
    }

    /// # Errors
    ///
    /// Fails if credentials are missing (explicit or from the environment) or
    /// the base URL cannot be joined with the endpoint paths.
    pub fn build(self) -> Result<ZpClient, ZpError> {
        let credentials = match self.credentials {
            Some(c) => c,
            None => Credentials::from_env()?,
        };
        credentials.ensure_present()?;

        let base_url = with_trailing_slash(match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        });
        let events_url = base_url.join(EVENTS_PATH)?;
        let sso_url = base_url.join(SSO_LOGIN_PATH)?;

        Ok(ZpClient {
            base_url,
            events_url,
            sso_url,
            identity_host: self
                .identity_host
                .unwrap_or_else(|| DEFAULT_IDENTITY_HOST.to_string()),
            credentials,
            user_agent: self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            validation_pacing: self.validation_pacing.unwrap_or(DEFAULT_VALIDATION_PACING),
            session: None,
            state: SessionState::Uninitialized,
            last_login_failure: None,
        })
    }
}

/// `Url::join` drops the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
