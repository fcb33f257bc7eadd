//! Login credentials, read from the environment (or a `.env` file) once.

use std::{env, fmt};

use crate::core::ZpError;

/// Environment variable holding the Zwift account username / email.
pub const USERNAME_VAR: &str = "ZWIFTPOWER_USERNAME";
/// Environment variable holding the Zwift account password.
pub const PASSWORD_VAR: &str = "ZWIFTPOWER_PASSWORD";

/// Zwift account credentials used for the SSO login.
///
/// `Debug` output never includes the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from explicit values.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Loads credentials from `ZWIFTPOWER_USERNAME` / `ZWIFTPOWER_PASSWORD`.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    ///
    /// # Errors
    ///
    /// Returns [`ZpError::MissingCredential`] naming the first variable that is
    /// unset or empty.
    pub fn from_env() -> Result<Self, ZpError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads credentials through an arbitrary key lookup (env-like source).
    ///
    /// # Errors
    ///
    /// Returns [`ZpError::MissingCredential`] if either key is missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ZpError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ZpError::MissingCredential(key))
        };
        // the password is posted exactly as configured
        Ok(Self {
            username: fetch(USERNAME_VAR)?.trim().to_string(),
            password: fetch(PASSWORD_VAR)?,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn ensure_present(&self) -> Result<(), ZpError> {
        if self.username.trim().is_empty() {
            return Err(ZpError::MissingCredential(USERNAME_VAR));
        }
        if self.password.is_empty() {
            return Err(ZpError::MissingCredential(PASSWORD_VAR));
        }
        Ok(())
    }

    /// Form body posted to the identity provider.
    pub(crate) fn login_form(&self) -> [(&str, &str); 3] {
        [
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("rememberMe", "on"),
        ]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
