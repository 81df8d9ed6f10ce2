//! # Authentication Module
//!
//! Credential collaborator interface for the Trakt API.
//!
//! ## Overview
//!
//! The actual authentication subsystem (device flow, token refresh, secure
//! storage) lives outside this core. What the sync engine needs is a
//! collaborator that can produce a bearer credential on request and turn it
//! into request headers; that seam is the [`TokenProvider`] trait.
//!
//! [`StaticTokenProvider`] is the default implementation: it hands out a
//! token already present in the user's configuration file.

pub mod error;
pub mod provider;
pub mod types;

pub use error::{AuthError, Result};
pub use provider::{StaticTokenProvider, TokenProvider};
pub use types::AccessToken;
