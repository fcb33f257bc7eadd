//! zwiftpower-rs: session-aware client for ZwiftPower.
//!
//! The site is login-gated behind Zwift's SSO. [`ZpClient`] owns the
//! credentials and the cookie session, re-checking it before each fetch and
//! logging in again when it has gone stale. Fetchers in [`events`], [`teams`]
//! and [`profile`] issue one GET each and return the JSON body as-is, or scrape
//! the rider summary out of the profile page.

pub mod core;
pub mod events;
pub mod profile;
pub mod teams;

pub use crate::core::{
    Credentials, LoginFailure, Session, SessionState, ZpClient, ZpClientBuilder, ZpError,
};
pub use events::{EventBuilder, EventData};
pub use profile::{PowerBests, ProfileSummary, Standing};
