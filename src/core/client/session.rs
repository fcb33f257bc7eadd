//! Cookie jar + the two HTTP clients that share it.

use crate::core::ZpError;
use reqwest::{Client, cookie::Jar, redirect};
use std::sync::Arc;
use std::time::Duration;

/// An authenticated (or in-progress) session: one cookie jar and the default
/// headers, exposed through a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct Session {
    /// Does not follow redirects, so a bounce to the login page is visible.
    http: Client,
    /// Follows redirects; only the SSO flow needs it.
    following: Client,
}

impl Session {
    pub(crate) fn new(
        user_agent: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, ZpError> {
        let jar = Arc::new(Jar::default());
        let builder = || {
            reqwest::Client::builder()
                .user_agent(user_agent)
                .cookie_provider(Arc::clone(&jar))
                .timeout(timeout)
                .connect_timeout(connect_timeout)
        };

        Ok(Self {
            http: builder().redirect(redirect::Policy::none()).build()?,
            following: builder().build()?,
        })
    }

    /// The client carrying this session's cookies and user agent.
    pub fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn following(&self) -> &Client {
        &self.following
    }
}
