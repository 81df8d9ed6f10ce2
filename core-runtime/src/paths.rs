//! Kometa output path resolution.

use crate::config::AppConfig;

/// Fallback overlay output directory.
pub const DEFAULT_OVERLAY_DIR: &str = "/kometa/config/overlays";

/// Fallback collections output directory.
pub const DEFAULT_COLLECTIONS_DIR: &str = "/kometa/config/collections";

/// Resolve `(overlay_dir, collections_dir)` from the configuration.
///
/// Each path is resolved independently, in precedence order:
/// 1. the global `kometa_config` block (new format)
/// 2. the legacy `services.tv_status_tracker` block
/// 3. the hard-coded defaults
///
/// Infallible: always returns usable paths.
pub fn kometa_paths(config: &AppConfig) -> (String, String) {
    let tracker = config
        .services
        .as_ref()
        .and_then(|s| s.tv_status_tracker.as_ref());

    let overlay_dir = config
        .kometa_config
        .as_ref()
        .and_then(|k| k.yaml_output_dir.clone())
        .or_else(|| tracker.and_then(|t| t.yaml_output_dir.clone()))
        .unwrap_or_else(|| DEFAULT_OVERLAY_DIR.to_string());

    let collections_dir = config
        .kometa_config
        .as_ref()
        .and_then(|k| k.collections_dir.clone())
        .or_else(|| tracker.and_then(|t| t.collections_dir.clone()))
        .unwrap_or_else(|| DEFAULT_COLLECTIONS_DIR.to_string());

    (overlay_dir, collections_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KometaConfig, ServicesConfig, TvStatusTrackerConfig};

    fn config_with(
        kometa: Option<(&str, &str)>,
        tracker: Option<(&str, &str)>,
    ) -> AppConfig {
        AppConfig {
            kometa_config: kometa.map(|(o, c)| KometaConfig {
                yaml_output_dir: Some(o.to_string()),
                collections_dir: Some(c.to_string()),
                ..Default::default()
            }),
            services: tracker.map(|(o, c)| ServicesConfig {
                tv_status_tracker: Some(TvStatusTrackerConfig {
                    yaml_output_dir: Some(o.to_string()),
                    collections_dir: Some(c.to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn new_format_wins() {
        let config = config_with(Some(("/new/ov", "/new/col")), Some(("/old/ov", "/old/col")));
        assert_eq!(
            kometa_paths(&config),
            ("/new/ov".to_string(), "/new/col".to_string())
        );
    }

    #[test]
    fn legacy_block_used_when_new_format_absent() {
        let config = config_with(None, Some(("/old/ov", "/old/col")));
        assert_eq!(
            kometa_paths(&config),
            ("/old/ov".to_string(), "/old/col".to_string())
        );
    }

    #[test]
    fn defaults_when_nothing_configured() {
        let config = AppConfig::default();
        assert_eq!(
            kometa_paths(&config),
            (
                DEFAULT_OVERLAY_DIR.to_string(),
                DEFAULT_COLLECTIONS_DIR.to_string()
            )
        );
    }

    #[test]
    fn paths_resolve_independently() {
        // Overlay dir from the new block, collections dir from the legacy one.
        let config = AppConfig {
            kometa_config: Some(KometaConfig {
                yaml_output_dir: Some("/new/ov".to_string()),
                ..Default::default()
            }),
            services: Some(ServicesConfig {
                tv_status_tracker: Some(TvStatusTrackerConfig {
                    collections_dir: Some("/old/col".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            kometa_paths(&config),
            ("/new/ov".to_string(), "/old/col".to_string())
        );
    }
}
