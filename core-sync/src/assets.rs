//! Bundled asset provisioning.
//!
//! One-time copies of static assets shipped in the container image into the
//! locations Kometa expects. A missing bundled source is a soft condition:
//! logged and reported as a skip, never an error that stops setup.

use crate::fsutil::{copy_file, ensure_directory};
use core_runtime::{kometa_paths, AppConfig};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Container path holding bundled images.
pub const DEFAULT_ASSETS_DIR: &str = "/app/assets";

/// Container path holding bundled fonts.
pub const DEFAULT_FONTS_DIR: &str = "/app/fonts";

/// Bundled poster source file name.
pub const POSTER_SOURCE_NAME: &str = "next_airing_poster.jpg";

/// Bundled font file name.
pub const FONT_FILE_NAME: &str = "Juventus-Fans-Bold.ttf";

/// Collection asset subdirectory the poster lands in.
const POSTER_COLLECTION: &str = "Next Airing";

/// Fallback Kometa config root when no collections dir is configured.
const DEFAULT_KOMETA_ROOT: &str = "/kometa/config";

/// Copies bundled assets into place.
///
/// Source roots default to the fixed container paths; constructor arguments
/// exist so tests can point them at temporary directories.
pub struct AssetProvisioner {
    assets_dir: PathBuf,
    fonts_dir: PathBuf,
}

impl Default for AssetProvisioner {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            fonts_dir: PathBuf::from(DEFAULT_FONTS_DIR),
        }
    }
}

impl AssetProvisioner {
    pub fn new(assets_dir: impl Into<PathBuf>, fonts_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            fonts_dir: fonts_dir.into(),
        }
    }

    /// Copy the collection poster to
    /// `<collections parent>/assets/Next Airing/poster.jpg`.
    pub async fn setup_poster(&self, config: &AppConfig) -> bool {
        let (_, collections_dir) = kometa_paths(config);
        let kometa_root = Path::new(&collections_dir)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KOMETA_ROOT));

        // The collection asset directory is ensured even when the bundled
        // poster turns out to be missing.
        let asset_dir = kometa_root.join("assets").join(POSTER_COLLECTION);
        if let Err(error) = ensure_directory(&asset_dir).await {
            warn!(%error, "cannot create poster asset directory");
            return false;
        }

        let source = self.assets_dir.join(POSTER_SOURCE_NAME);
        if !source.exists() {
            warn!(source = %source.display(), "poster image not bundled, skipping");
            return false;
        }

        let destination = asset_dir.join("poster.jpg");
        match copy_file(&source, &destination).await {
            Ok(()) => {
                info!(destination = %destination.display(), "collection poster provisioned");
                true
            }
            Err(error) => {
                warn!(%error, "failed to provision collection poster");
                false
            }
        }
    }

    /// Copy the bundled font to `<kometa root>/fonts/` and record the
    /// resulting path back into the configuration.
    ///
    /// The Kometa root is derived from the legacy
    /// `services.tv_status_tracker.collections_dir` setting, falling back to
    /// the fixed default.
    pub async fn setup_font(&self, config: &mut AppConfig) -> bool {
        let kometa_root = config
            .services
            .as_ref()
            .and_then(|s| s.tv_status_tracker.as_ref())
            .and_then(|t| t.collections_dir.as_deref())
            .and_then(|dir| Path::new(dir).parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KOMETA_ROOT));

        let source = self.fonts_dir.join(FONT_FILE_NAME);
        if !source.exists() {
            warn!(source = %source.display(), "font not bundled, skipping");
            return false;
        }

        let destination = kometa_root.join("fonts").join(FONT_FILE_NAME);
        match copy_file(&source, &destination).await {
            Ok(()) => {
                let destination = destination.display().to_string();
                if config.set_font_path(&destination) {
                    info!(font_path = %destination, "recorded font path in configuration");
                } else {
                    info!(font_path = %destination, "font provisioned");
                }
                true
            }
            Err(error) => {
                warn!(%error, "failed to provision font");
                false
            }
        }
    }
}
