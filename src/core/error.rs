use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum ZpError {
    /// An error occurred during an HTTP request (transport, timeout, redirect loop).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A JSON endpoint returned a body that is not JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The login flow completed but did not land on an authenticated page.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// A required credential was not configured.
    #[error("missing credential: {0} is not set")]
    MissingCredential(&'static str),

    /// The identity provider page carried no usable `<form action>`.
    ///
    /// Usually means the site changed its login markup, as opposed to the
    /// credentials being wrong.
    #[error("login form not found on {url}")]
    LoginFormNotFound {
        /// The page that was searched for the form.
        url: String,
    },

    /// No authenticated session could be obtained for a fetch.
    #[error("no authenticated session available")]
    SessionUnavailable,
}
