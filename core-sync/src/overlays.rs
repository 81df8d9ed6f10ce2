//! Overlay definition emitter.
//!
//! One overlay file per category, created only if absent: once a file
//! exists on disk it is never rewritten by this system, so users are free
//! to edit the generated definitions.

use crate::category::CategoryKind;
use crate::error::{Result, SyncError};
use crate::fsutil::ensure_directory;
use core_runtime::{kometa_paths, AppConfig, OverlaySettings};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::{debug, info, warn};

/// Font reference written into generated overlay definitions, relative to
/// the Kometa config root.
pub const OVERLAY_FONT_PATH: &str = "config/fonts/Juventus-Fans-Bold.ttf";

/// Top-level overlay document: `overlays` → entry name → definition.
#[derive(Debug, Serialize, Deserialize)]
pub struct OverlayFile {
    pub overlays: Mapping,
}

/// A single overlay definition.
#[derive(Debug, Serialize, Deserialize)]
pub struct OverlayDefinition {
    pub builder_level: String,
    pub overlay: OverlayBlock,
    pub plex_search: PlexSearch,
}

/// Visual parameters of the rendered overlay.
#[derive(Debug, Serialize, Deserialize)]
pub struct OverlayBlock {
    pub name: String,
    pub horizontal_offset: i64,
    pub horizontal_align: String,
    pub vertical_offset: i64,
    pub vertical_align: String,
    pub font_size: i64,
    pub font: String,
    pub back_width: i64,
    pub back_height: i64,
    pub back_color: String,
}

/// Filter selecting the episodes this overlay applies to.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlexSearch {
    pub all: EpisodeLabelFilter,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EpisodeLabelFilter {
    pub episode_label: String,
}

fn overlay_document(kind: CategoryKind, settings: &OverlaySettings) -> Result<String> {
    let definition = OverlayDefinition {
        builder_level: "episode".to_string(),
        overlay: OverlayBlock {
            name: format!("text({})", kind.overlay_text()),
            horizontal_offset: settings.horizontal_offset(),
            horizontal_align: settings.horizontal_align().to_string(),
            vertical_offset: settings.vertical_offset(),
            vertical_align: settings.vertical_align().to_string(),
            font_size: settings.font_size(),
            font: OVERLAY_FONT_PATH.to_string(),
            back_width: settings.back_width(),
            back_height: settings.back_height(),
            back_color: settings.back_color().to_string(),
        },
        plex_search: PlexSearch {
            all: EpisodeLabelFilter {
                episode_label: kind.episode_label().to_string(),
            },
        },
    };

    let mut overlays = Mapping::new();
    overlays.insert(
        Value::String(kind.overlay_entry_name().to_string()),
        serde_yaml::to_value(definition)
            .map_err(|e| SyncError::Parse(format!("failed to build overlay document: {}", e)))?,
    );
    serde_yaml::to_string(&OverlayFile { overlays })
        .map_err(|e| SyncError::Parse(format!("failed to serialize overlay document: {}", e)))
}

/// Ensure an overlay definition file exists for each category.
///
/// Existing files are skipped wholesale, with no content comparison.
/// Individual write failures are logged and aggregated into an overall
/// `false`, but do not abort the remaining categories.
pub async fn ensure_overlays(config: &AppConfig) -> bool {
    let (overlay_dir, _) = kometa_paths(config);
    if let Err(error) = ensure_directory(Path::new(&overlay_dir)).await {
        warn!(%error, "cannot create overlay directory");
        return false;
    }

    let settings = config.overlay_settings();
    let mut success = true;

    for kind in CategoryKind::ALL {
        let path = Path::new(&overlay_dir).join(kind.overlay_file_name());
        if matches!(tokio::fs::try_exists(&path).await, Ok(true)) {
            debug!(path = %path.display(), "overlay file already exists, skipping");
            continue;
        }

        let document = match overlay_document(kind, &settings) {
            Ok(document) => document,
            Err(error) => {
                warn!(category = %kind, %error, "failed to build overlay definition");
                success = false;
                continue;
            }
        };

        match tokio::fs::write(&path, document).await {
            Ok(()) => info!(path = %path.display(), "created overlay file"),
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to write overlay file");
                success = false;
            }
        }
    }

    success
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_runtime::config::{
        AnimeEpisodeTypeConfig, KometaConfig, ServicesConfig,
    };
    use tempfile::TempDir;

    fn test_config(dir: &TempDir, overlay: Option<OverlaySettings>) -> AppConfig {
        AppConfig {
            kometa_config: Some(KometaConfig {
                yaml_output_dir: Some(dir.path().join("overlays").display().to_string()),
                collections_dir: Some(dir.path().join("collections").display().to_string()),
                ..Default::default()
            }),
            services: overlay.map(|overlay| ServicesConfig {
                anime_episode_type: Some(AnimeEpisodeTypeConfig {
                    enabled: true,
                    overlay: Some(overlay),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn creates_all_four_overlay_files_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir, None);

        assert!(ensure_overlays(&config).await);

        for kind in CategoryKind::ALL {
            let path = dir.path().join("overlays").join(kind.overlay_file_name());
            let raw = tokio::fs::read_to_string(&path).await.unwrap();
            let file: OverlayFile = serde_yaml::from_str(&raw).unwrap();

            let definition: OverlayDefinition = serde_yaml::from_value(
                file.overlays
                    .get(kind.overlay_entry_name())
                    .cloned()
                    .unwrap(),
            )
            .unwrap();

            assert_eq!(definition.builder_level, "episode");
            assert_eq!(
                definition.overlay.name,
                format!("text({})", kind.overlay_text())
            );
            assert_eq!(definition.overlay.font_size, 75);
            assert_eq!(definition.overlay.font, OVERLAY_FONT_PATH);
            assert_eq!(definition.overlay.back_color, "#262626");
            assert_eq!(definition.plex_search.all.episode_label, kind.episode_label());
        }
    }

    #[tokio::test]
    async fn configured_visual_parameters_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(
            &dir,
            Some(OverlaySettings {
                font_size: Some(50),
                vertical_align: Some("bottom".to_string()),
                back_color: Some("#000000".to_string()),
                ..Default::default()
            }),
        );

        assert!(ensure_overlays(&config).await);

        let raw = tokio::fs::read_to_string(
            dir.path()
                .join("overlays")
                .join(CategoryKind::Fillers.overlay_file_name()),
        )
        .await
        .unwrap();
        let file: OverlayFile = serde_yaml::from_str(&raw).unwrap();
        let definition: OverlayDefinition =
            serde_yaml::from_value(file.overlays.get("filler_overlay").cloned().unwrap()).unwrap();

        assert_eq!(definition.overlay.font_size, 50);
        assert_eq!(definition.overlay.vertical_align, "bottom");
        assert_eq!(definition.overlay.back_color, "#000000");
        // Unspecified parameters still default.
        assert_eq!(definition.overlay.horizontal_align, "center");
    }

    #[tokio::test]
    async fn existing_files_are_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir, None);

        let overlays_dir = dir.path().join("overlays");
        tokio::fs::create_dir_all(&overlays_dir).await.unwrap();
        let custom_path = overlays_dir.join(CategoryKind::Fillers.overlay_file_name());
        tokio::fs::write(&custom_path, "# hand-edited by the user\n")
            .await
            .unwrap();

        assert!(ensure_overlays(&config).await);

        let preserved = tokio::fs::read_to_string(&custom_path).await.unwrap();
        assert_eq!(preserved, "# hand-edited by the user\n");

        // The other three were still created.
        for kind in [
            CategoryKind::MangaCanon,
            CategoryKind::AnimeCanon,
            CategoryKind::MixedCanonFiller,
        ] {
            assert!(overlays_dir.join(kind.overlay_file_name()).exists());
        }
    }

    #[tokio::test]
    async fn write_failure_for_one_category_does_not_stop_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir, None);

        let overlays_dir = dir.path().join("overlays");
        tokio::fs::create_dir_all(&overlays_dir).await.unwrap();
        // A dangling symlink passes the existence check as absent, then
        // makes the write fail for this one category.
        std::os::unix::fs::symlink(
            dir.path().join("missing").join("fillers.yml"),
            overlays_dir.join(CategoryKind::Fillers.overlay_file_name()),
        )
        .unwrap();

        assert!(!ensure_overlays(&config).await);

        // The remaining categories were still written out.
        for kind in [
            CategoryKind::MangaCanon,
            CategoryKind::AnimeCanon,
            CategoryKind::MixedCanonFiller,
        ] {
            assert!(overlays_dir.join(kind.overlay_file_name()).is_file());
        }
    }

    #[tokio::test]
    async fn unusable_overlay_directory_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir, None);

        // A regular file squats on the overlay directory path.
        tokio::fs::write(dir.path().join("overlays"), b"not a directory")
            .await
            .unwrap();

        assert!(!ensure_overlays(&config).await);
    }
}
