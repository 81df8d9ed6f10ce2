//! # Trakt Provider
//!
//! Read-only client for the Trakt list-tracking API.
//!
//! ## Overview
//!
//! This module provides:
//! - An async `HttpClient` abstraction with a reqwest implementation
//! - Wire types for Trakt list responses
//! - [`TraktClient`], which fetches all lists owned by a user
//!
//! One GET per fetch, no retry: a failed call fails the whole sync attempt
//! and retry policy, if any, belongs to the caller.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{TraktClient, TRAKT_API_BASE};
pub use error::{Result, TraktError};
pub use http::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use types::{ListIds, TraktList};
