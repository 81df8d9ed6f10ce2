//! # Configuration Model
//!
//! Typed view over the user's YAML configuration file.
//!
//! ## Overview
//!
//! The configuration file belongs to the user and contains far more than
//! this tool understands (media server credentials, other service blocks,
//! notification settings). Every struct therefore carries a flattened
//! [`serde_yaml::Mapping`] of unrecognized keys so that `load` followed by
//! `save` round-trips the document without losing anything. This matters
//! because the entry point re-saves the config after font provisioning
//! writes `services.tv_status_tracker.font_path` back.
//!
//! ## Recognized keys
//!
//! - `kometa_config.{yaml_output_dir, collections_dir}` (new format)
//! - `services.tv_status_tracker.{yaml_output_dir, collections_dir, font_path}` (legacy)
//! - `services.anime_episode_type.{enabled, overlay.*}`
//! - `trakt.{username, client_id, access_token}`

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;
use std::path::Path;
use tracing::debug;

/// Root of the user's configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global Kometa output settings (new format)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kometa_config: Option<KometaConfig>,

    /// Per-service settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<ServicesConfig>,

    /// Trakt account settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trakt: Option<TraktConfig>,

    /// Everything this tool does not understand, preserved verbatim
    #[serde(flatten)]
    pub extra: Mapping,
}

/// Global Kometa output directories (new configuration format).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KometaConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaml_output_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collections_dir: Option<String>,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// The `services` block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServicesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tv_status_tracker: Option<TvStatusTrackerConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anime_episode_type: Option<AnimeEpisodeTypeConfig>,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// Legacy per-service output settings, kept for backward compatibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TvStatusTrackerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaml_output_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collections_dir: Option<String>,

    /// Written back after font provisioning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_path: Option<String>,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// Settings for the anime episode type service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimeEpisodeTypeConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<OverlaySettings>,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// Visual parameters for generated overlay definitions.
///
/// Every field is optional; accessors supply the documented defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverlaySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_offset: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_align: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_offset: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_width: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_height: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_color: Option<String>,

    #[serde(flatten)]
    pub extra: Mapping,
}

impl OverlaySettings {
    pub fn horizontal_offset(&self) -> i64 {
        self.horizontal_offset.unwrap_or(0)
    }

    pub fn horizontal_align(&self) -> &str {
        self.horizontal_align.as_deref().unwrap_or("center")
    }

    pub fn vertical_offset(&self) -> i64 {
        self.vertical_offset.unwrap_or(0)
    }

    pub fn vertical_align(&self) -> &str {
        self.vertical_align.as_deref().unwrap_or("top")
    }

    pub fn font_size(&self) -> i64 {
        self.font_size.unwrap_or(75)
    }

    pub fn back_width(&self) -> i64 {
        self.back_width.unwrap_or(1920)
    }

    pub fn back_height(&self) -> i64 {
        self.back_height.unwrap_or(125)
    }

    pub fn back_color(&self) -> &str {
        self.back_color.as_deref().unwrap_or("#262626")
    }
}

/// Trakt account settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraktConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(flatten)]
    pub extra: Mapping,
}

impl AppConfig {
    /// Load the configuration document from a YAML file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = serde_yaml::from_str(&raw)
            .map_err(|e| Error::Config(format!("malformed config file {}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Serialize and write the configuration back to disk.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let raw = serde_yaml::to_string(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        tokio::fs::write(path, raw).await.map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "saved configuration");
        Ok(())
    }

    /// Configured Trakt username, if any.
    pub fn trakt_username(&self) -> Option<&str> {
        self.trakt.as_ref()?.username.as_deref()
    }

    /// Whether the anime episode type service is enabled.
    pub fn anime_episode_type_enabled(&self) -> bool {
        self.services
            .as_ref()
            .and_then(|s| s.anime_episode_type.as_ref())
            .map(|s| s.enabled)
            .unwrap_or(false)
    }

    /// Overlay settings for the anime episode type service, defaulted when absent.
    pub fn overlay_settings(&self) -> OverlaySettings {
        self.services
            .as_ref()
            .and_then(|s| s.anime_episode_type.as_ref())
            .and_then(|s| s.overlay.clone())
            .unwrap_or_default()
    }

    /// Record the provisioned font path, if the legacy service block exists.
    ///
    /// Mirrors the write-back contract of font provisioning: the path is only
    /// persisted when the `tv_status_tracker` block is already present.
    pub fn set_font_path(&mut self, font_path: impl Into<String>) -> bool {
        if let Some(tracker) = self
            .services
            .as_mut()
            .and_then(|s| s.tv_status_tracker.as_mut())
        {
            tracker.font_path = Some(font_path.into());
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
kometa_config:
  yaml_output_dir: /kometa/config/overlays
  collections_dir: /kometa/config/collections
services:
  tv_status_tracker:
    collections_dir: /old/collections
  anime_episode_type:
    enabled: true
    overlay:
      font_size: 90
trakt:
  username: alice
  client_id: abc123
plex:
  url: http://localhost:32400
  token: secret
"#;

    #[test]
    fn parses_recognized_keys() {
        let config: AppConfig = serde_yaml::from_str(SAMPLE).unwrap();

        assert_eq!(config.trakt_username(), Some("alice"));
        assert!(config.anime_episode_type_enabled());
        assert_eq!(config.overlay_settings().font_size(), 90);
        assert_eq!(config.overlay_settings().horizontal_align(), "center");
    }

    #[test]
    fn round_trip_preserves_unknown_keys() {
        let config: AppConfig = serde_yaml::from_str(SAMPLE).unwrap();
        let raw = serde_yaml::to_string(&config).unwrap();
        let reparsed: serde_yaml::Value = serde_yaml::from_str(&raw).unwrap();

        assert_eq!(
            reparsed["plex"]["url"].as_str(),
            Some("http://localhost:32400")
        );
        assert_eq!(reparsed["plex"]["token"].as_str(), Some("secret"));
    }

    #[test]
    fn overlay_settings_default_when_absent() {
        let config = AppConfig::default();
        let overlay = config.overlay_settings();

        assert_eq!(overlay.horizontal_offset(), 0);
        assert_eq!(overlay.vertical_align(), "top");
        assert_eq!(overlay.font_size(), 75);
        assert_eq!(overlay.back_width(), 1920);
        assert_eq!(overlay.back_height(), 125);
        assert_eq!(overlay.back_color(), "#262626");
    }

    #[test]
    fn set_font_path_requires_tracker_block() {
        let mut config = AppConfig::default();
        assert!(!config.set_font_path("/kometa/config/fonts/x.ttf"));

        let mut config: AppConfig = serde_yaml::from_str(SAMPLE).unwrap();
        assert!(config.set_font_path("/kometa/config/fonts/x.ttf"));
        let tracker = config
            .services
            .as_ref()
            .unwrap()
            .tv_status_tracker
            .as_ref()
            .unwrap();
        assert_eq!(
            tracker.font_path.as_deref(),
            Some("/kometa/config/fonts/x.ttf")
        );
    }

    #[tokio::test]
    async fn load_and_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        tokio::fs::write(&path, SAMPLE).await.unwrap();

        let mut config = AppConfig::load(&path).await.unwrap();
        config.set_font_path("/kometa/config/fonts/Juventus-Fans-Bold.ttf");
        config.save(&path).await.unwrap();

        let reloaded = AppConfig::load(&path).await.unwrap();
        assert_eq!(reloaded.trakt_username(), Some("alice"));
        let tracker = reloaded
            .services
            .as_ref()
            .unwrap()
            .tv_status_tracker
            .as_ref()
            .unwrap();
        assert_eq!(
            tracker.font_path.as_deref(),
            Some("/kometa/config/fonts/Juventus-Fans-Bold.ttf")
        );
    }

    #[tokio::test]
    async fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(dir.path().join("nope.yaml")).await;
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
