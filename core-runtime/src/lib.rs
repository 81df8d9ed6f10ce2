//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the Kometa/Trakt sync
//! tool:
//! - Configuration model with lossless load/save
//! - Kometa output path resolution
//! - Logging and tracing initialization
//!
//! ## Overview
//!
//! This crate contains the runtime utilities that other modules depend on.
//! The configuration document is the user's own YAML file: only the keys
//! this tool understands are modelled as typed fields, everything else is
//! carried through opaquely so a load/save round trip never clobbers
//! user content.

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use config::{AppConfig, OverlaySettings};
pub use error::{Error, Result};
pub use paths::kometa_paths;
