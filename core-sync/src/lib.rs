//! # Episode-Type Sync Module
//!
//! Synchronizes Kometa collection and overlay configuration with a user's
//! Trakt lists.
//!
//! ## Components
//!
//! - **Category table** (`category`): the four fixed classification buckets
//!   and their naming/labeling lookup tables
//! - **Classifier** (`classifier`): buckets fetched lists by the
//!   `{subject}_{episode-type}` naming convention
//! - **Collections document** (`collections`): the persisted file, with
//!   user settings preserved across regeneration
//! - **Sync engine** (`sync`): change detection and merge/rewrite
//! - **Overlay emitter** (`overlays`): idempotent creation of per-category
//!   overlay definition files
//! - **Asset provisioner** (`assets`): one-time poster and font copies
//! - **Setup orchestration** (`setup`): runs everything in order
//!
//! Public operations return a boolean success indicator and log details;
//! typed errors ([`SyncError`]) stay internal to this workspace.

pub mod assets;
pub mod category;
pub mod classifier;
pub mod collections;
pub mod error;
mod fsutil;
pub mod overlays;
pub mod setup;
pub mod sync;

pub use assets::AssetProvisioner;
pub use category::CategoryKind;
pub use classifier::{classify, ClassifiedLists};
pub use collections::{CollectionsFile, COLLECTIONS_FILE_NAME};
pub use error::{Result, SyncError};
pub use overlays::ensure_overlays;
pub use setup::setup_assets;
pub use sync::{EpisodeTypeSync, ListSource, SyncOutcome};
