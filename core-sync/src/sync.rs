//! # Collection Sync Engine
//!
//! Keeps the generated collections file in step with the user's Trakt lists.
//!
//! ## Workflow
//!
//! 1. Resolve output paths and ensure the collections directory exists
//! 2. Fetch all lists for the configured username and classify them
//! 3. Load the previously generated file (malformed content is recovered
//!    as an empty document rather than aborting)
//! 4. Detect changes against the old file, category by category; skipped
//!    entirely when `force` is set
//! 5. When a rewrite is warranted, merge fresh `trakt_list` values with the
//!    user's preserved settings and persist, then ensure overlay files exist
//!
//! Change detection only compares categories that already exist in the old
//! file, stopping at the first mismatch. A category appearing only in the
//! new classification does not trigger a rewrite by itself; in practice all
//! four categories always exist after the first sync, so the gap never
//! manifests, but callers relying on it should pass `force`.

use crate::category::CategoryKind;
use crate::classifier::{classify, ClassifiedLists};
use crate::collections::{entry_urls, merge, CollectionsFile, COLLECTIONS_FILE_NAME};
use crate::error::{Result, SyncError};
use crate::fsutil::ensure_directory;
use crate::overlays::ensure_overlays;
use async_trait::async_trait;
use core_runtime::{kometa_paths, AppConfig};
use provider_trakt::{TraktClient, TraktList};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Source of remote lists; the seam mocked in tests.
#[async_trait]
pub trait ListSource: Send + Sync {
    async fn fetch_lists(&self, username: &str) -> provider_trakt::Result<Vec<TraktList>>;
}

#[async_trait]
impl ListSource for TraktClient {
    async fn fetch_lists(&self, username: &str) -> provider_trakt::Result<Vec<TraktList>> {
        TraktClient::fetch_lists(self, username).await
    }
}

/// What a successful sync did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No rewrite needed, nothing written
    Unchanged,
    /// Collections file regenerated (and overlay files ensured)
    Updated,
}

/// Synchronizes the episode-type collections file with Trakt lists.
pub struct EpisodeTypeSync {
    source: Arc<dyn ListSource>,
}

impl EpisodeTypeSync {
    pub fn new(source: Arc<dyn ListSource>) -> Self {
        Self { source }
    }

    /// Public boundary: run a sync, converting every failure to `false`
    /// plus a log line. "No changes needed" counts as success.
    pub async fn sync_collections(&self, config: &AppConfig, force: bool) -> bool {
        match self.try_sync_collections(config, force).await {
            Ok(SyncOutcome::Unchanged) => {
                info!("no changes detected in episode type collections");
                true
            }
            Ok(SyncOutcome::Updated) => true,
            Err(error) => {
                warn!(%error, "episode type collection sync failed");
                false
            }
        }
    }

    /// Forced rewrite, regardless of detected changes.
    pub async fn update_collections(&self, config: &AppConfig) -> bool {
        self.sync_collections(config, true).await
    }

    /// The sync algorithm with its typed error surface, for callers (and
    /// tests) that need to distinguish failure modes.
    #[instrument(skip(self, config))]
    pub async fn try_sync_collections(
        &self,
        config: &AppConfig,
        force: bool,
    ) -> Result<SyncOutcome> {
        let (_, collections_dir) = kometa_paths(config);
        ensure_directory(Path::new(&collections_dir)).await?;

        let username = config.trakt_username().ok_or(SyncError::MissingUsername)?;

        let lists = self.source.fetch_lists(username).await?;
        let classified = classify(&lists, username);

        let path = Path::new(&collections_dir).join(COLLECTIONS_FILE_NAME);
        let existing = match CollectionsFile::load(&path).await {
            Ok(Some(file)) => file,
            Ok(None) => CollectionsFile::default(),
            Err(error) => {
                warn!(%error, "failed to read existing collections file, treating as empty");
                CollectionsFile::default()
            }
        };

        if !force && !changes_detected(&existing, &classified) {
            return Ok(SyncOutcome::Unchanged);
        }

        let merged = merge(&existing, &classified);
        merged.save(&path).await?;
        info!(
            path = %path.display(),
            lists = classified.len(),
            "regenerated episode type collections"
        );

        // Overlay emission failures are logged where they happen and do not
        // undo a successful collections write.
        ensure_overlays(config).await;

        Ok(SyncOutcome::Updated)
    }
}

/// Compare each category already present in the old file against the fresh
/// classification, stopping at the first mismatch.
fn changes_detected(existing: &CollectionsFile, classified: &ClassifiedLists) -> bool {
    for (name, entry) in &existing.collections {
        let Some(name) = name.as_str() else { continue };
        let Some(kind) = CategoryKind::from_display_name(name) else { continue };
        let Some(entry) = entry.as_mapping() else { continue };

        let old_urls = entry_urls(entry);
        let new_urls: HashSet<&str> = classified.urls(kind).iter().map(String::as_str).collect();
        if old_urls != new_urls {
            info!(category = name, "changes detected in collection");
            return true;
        }
    }
    false
}
