//! Session check and SSO login for the site.

use super::constants::{INVALID_CREDENTIALS_MARKER, LOGIN_WALL_MARKER};
use super::{LoginFailure, Session, SessionState};
use crate::core::ZpError;
use crate::core::net::ensure_success;
use reqwest::StatusCode;
use scraper::{Html, Selector};
use url::Url;

impl super::ZpClient {
    /// Checks whether the held session is still authenticated.
    ///
    /// Returns `false` without any request when no session is held. Otherwise
    /// fetches the site root, waits the pacing delay, then fetches the events
    /// listing; the session is valid only if the root had no login wall and the
    /// listing answered exactly `200`. Failures are logged, never returned, and
    /// a stale session is dropped.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn validate_current(&mut self) -> bool {
        let Some(session) = self.session.as_ref() else {
            #[cfg(feature = "tracing")]
            tracing::debug!("no session held");
            return false;
        };

        match self.check_session(session).await {
            Ok(true) => {
                self.state = SessionState::Valid;
                true
            }
            Ok(false) => {
                #[cfg(feature = "tracing")]
                tracing::info!("session is stale");
                self.invalidate();
                false
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_e, "failed to check session status");
                self.invalidate();
                false
            }
        }
    }

    async fn check_session(&self, session: &Session) -> Result<bool, ZpError> {
        let resp = session
            .http()
            .get(self.base_url.clone())
            .send()
            .await?
            .error_for_status()?;
        let login_required = resp.text().await?.contains(LOGIN_WALL_MARKER);
        #[cfg(feature = "tracing")]
        tracing::debug!(login_required, "site root checked");

        tokio::time::sleep(self.validation_pacing).await;

        let resp = session.http().get(self.events_url.clone()).send().await?;
        #[cfg(feature = "tracing")]
        tracing::debug!(status = resp.status().as_u16(), "events listing checked");
        Ok(resp.status() == StatusCode::OK && !login_required)
    }

    /// Logs in through the SSO flow with a fresh cookie jar.
    ///
    /// On success the new session replaces the held one. On any failure the held
    /// session is dropped and the error returned; [`ZpError::LoginFormNotFound`]
    /// means the login markup changed, [`ZpError::Auth`] that the flow did not
    /// end on the events page.
    ///
    /// # Errors
    ///
    /// See above; transport failures surface as [`ZpError::Http`] and a non-2xx
    /// login page or form response as [`ZpError::Status`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(username = %self.credentials.username()))
    )]
    pub async fn login(&mut self) -> Result<(), ZpError> {
        match self.run_login_flow().await {
            Ok(session) => {
                #[cfg(feature = "tracing")]
                tracing::info!("logged in session created");
                self.session = Some(session);
                self.state = SessionState::Valid;
                self.last_login_failure = None;
                Ok(())
            }
            Err(e) => {
                self.last_login_failure = Some(LoginFailure::from(&e));
                self.invalidate();
                Err(e)
            }
        }
    }

    async fn run_login_flow(&self) -> Result<Session, ZpError> {
        let session = Session::new(&self.user_agent, self.timeout, self.connect_timeout)?;

        let _resp = session.http().get(self.base_url.clone()).send().await?;
        #[cfg(feature = "tracing")]
        tracing::debug!(status = _resp.status().as_u16(), "cookie jar primed");

        let resp = session.following().get(self.sso_url.clone()).send().await?;
        let resp = ensure_success(resp)?;
        let page_url = resp.url().clone();
        let page = resp.text().await?;
        let post_url = login_form_action(&page, &page_url)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(%post_url, "login form located");

        let resp = session
            .following()
            .post(post_url)
            .form(&self.credentials.login_form())
            .send()
            .await?;
        let resp = ensure_success(resp)?;
        let final_url = resp.url().clone();
        #[cfg(feature = "tracing")]
        tracing::debug!(status = resp.status().as_u16(), %final_url, "credentials posted");
        let body = resp.text().await?;

        self.check_landing(&final_url, &body)?;
        Ok(session)
    }

    fn check_landing(&self, final_url: &Url, body: &str) -> Result<(), ZpError> {
        if final_url.host_str() == Some(self.identity_host.as_str()) {
            return Err(ZpError::Auth(format!(
                "still on the identity provider at {final_url}"
            )));
        }
        if !final_url.as_str().contains(self.events_url.as_str()) {
            return Err(ZpError::Auth(format!(
                "landed on {final_url} instead of the events page"
            )));
        }
        if body.to_lowercase().contains(INVALID_CREDENTIALS_MARKER) {
            return Err(ZpError::Auth("invalid username or password".into()));
        }
        Ok(())
    }

    /// Returns a usable session, logging in again if the held one is stale.
    ///
    /// `None` means no session could be obtained; the reason is available from
    /// [`last_login_failure`](Self::last_login_failure).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn session(&mut self) -> Option<&Session> {
        if self.validate_current().await {
            #[cfg(feature = "tracing")]
            tracing::debug!("session is valid");
        } else {
            #[cfg(feature = "tracing")]
            tracing::info!("session is not valid, logging in");
            // login() has already logged and recorded the failure
            let _ = self.login().await;
        }
        self.session.as_ref()
    }

    pub(crate) async fn require_session(&mut self) -> Result<&Session, ZpError> {
        self.session().await.ok_or(ZpError::SessionUnavailable)
    }

    /// Drops the held session.
    pub fn invalidate(&mut self) {
        self.session = None;
        self.state = SessionState::Invalid;
    }
}

/// Submission target of the first `<form>` on the identity provider page,
/// resolved against the page URL.
fn login_form_action(page: &str, page_url: &Url) -> Result<Url, ZpError> {
    let doc = Html::parse_document(page);
    let form = Selector::parse("form").expect("static selector");
    let action = doc
        .select(&form)
        .next()
        .and_then(|f| f.value().attr("action"))
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| ZpError::LoginFormNotFound {
            url: page_url.to_string(),
        })?;
    Ok(page_url.join(action.trim())?)
}
