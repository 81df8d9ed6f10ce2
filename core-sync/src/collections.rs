//! The persisted collections document.
//!
//! One YAML file maps category display names to collection entries. The
//! `trakt_list` field of each entry is generated and replaced wholesale on
//! every rewrite; every other field belongs to the user (sync mode, labels,
//! builder settings, anything else they added) and is copied forward
//! untouched. Entries are therefore kept as raw [`serde_yaml::Mapping`]
//! values rather than a closed struct.

use crate::category::CategoryKind;
use crate::classifier::ClassifiedLists;
use crate::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// File name of the generated collections document.
pub const COLLECTIONS_FILE_NAME: &str = "anime_episode_type.yml";

/// Default settings for a freshly created collection entry.
const DEFAULT_SYNC_MODE: &str = "sync";
const DEFAULT_BUILDER_LEVEL: &str = "episode";
const DEFAULT_CACHE_BUILDERS: u64 = 6;

/// On-disk collections document: `collections` → category name → entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionsFile {
    #[serde(default)]
    pub collections: Mapping,
}

impl CollectionsFile {
    /// Read the document from disk.
    ///
    /// `Ok(None)` when the file does not exist. Malformed content is a
    /// [`SyncError::Parse`]; the caller decides whether that aborts or is
    /// recovered as an empty document.
    pub async fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SyncError::Filesystem {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        let file = serde_yaml::from_str(&raw)
            .map_err(|e| SyncError::Parse(format!("{}: {}", path.display(), e)))?;
        Ok(Some(file))
    }

    /// Serialize fully in memory, then write. A successful write is always
    /// a complete, parseable document.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let raw = serde_yaml::to_string(self)
            .map_err(|e| SyncError::Parse(format!("failed to serialize collections: {}", e)))?;
        tokio::fs::write(path, raw)
            .await
            .map_err(|source| SyncError::Filesystem {
                path: path.display().to_string(),
                source,
            })?;
        debug!(path = %path.display(), "wrote collections file");
        Ok(())
    }

    /// The existing entry for a category, if present and map-shaped.
    pub fn entry(&self, kind: CategoryKind) -> Option<&Mapping> {
        self.collections.get(kind.display_name()).and_then(Value::as_mapping)
    }
}

/// The `trakt_list` URLs of an entry, as a set for comparison.
pub fn entry_urls(entry: &Mapping) -> HashSet<&str> {
    entry
        .get("trakt_list")
        .and_then(Value::as_sequence)
        .map(|seq| seq.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

fn url_sequence(urls: &[String]) -> Value {
    Value::Sequence(urls.iter().cloned().map(Value::String).collect())
}

/// Build the regenerated document from the old one and fresh classification.
///
/// Always emits all four categories. An entry that existed before keeps its
/// settings with only `trakt_list` overwritten; a new entry gets the default
/// settings with the freshly classified URLs (possibly empty).
pub fn merge(existing: &CollectionsFile, classified: &ClassifiedLists) -> CollectionsFile {
    let mut collections = Mapping::new();

    for kind in CategoryKind::ALL {
        let urls = classified.urls(kind);
        let entry = match existing.entry(kind) {
            Some(old) => {
                let mut entry = old.clone();
                entry.insert(Value::String("trakt_list".to_string()), url_sequence(urls));
                entry
            }
            None => default_entry(kind, urls),
        };
        collections.insert(
            Value::String(kind.display_name().to_string()),
            Value::Mapping(entry),
        );
    }

    CollectionsFile { collections }
}

fn default_entry(kind: CategoryKind, urls: &[String]) -> Mapping {
    let mut entry = Mapping::new();
    entry.insert(Value::String("trakt_list".to_string()), url_sequence(urls));
    entry.insert(
        Value::String("sync_mode".to_string()),
        Value::String(DEFAULT_SYNC_MODE.to_string()),
    );
    entry.insert(
        Value::String("item_label".to_string()),
        Value::String(kind.item_label().to_string()),
    );
    entry.insert(
        Value::String("builder_level".to_string()),
        Value::String(DEFAULT_BUILDER_LEVEL.to_string()),
    );
    entry.insert(
        Value::String("cache_builders".to_string()),
        Value::Number(DEFAULT_CACHE_BUILDERS.into()),
    );
    entry
}
