//! Core components of the `zwiftpower-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`ZpClient`], its builder and the session lifecycle.
//! - The primary [`ZpError`] type.
//! - [`Credentials`] loading.
//! - Internal URL building and the authenticated GET.

/// The main client (`ZpClient`), builder, and session handling.
pub mod client;
/// Credential configuration.
pub mod config;
/// The primary error type (`ZpError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::ZpClient`
pub use client::{LoginFailure, Session, SessionState, ZpClient, ZpClientBuilder};
pub use config::Credentials;
pub use error::ZpError;
