//! Setup orchestration.
//!
//! Runs every provisioning step in order, logging each outcome. A failed
//! step never aborts the ones after it: poster and font provisioning and
//! collection sync are independent, and availability of the later steps is
//! preferred over failing fast.

use crate::assets::AssetProvisioner;
use crate::overlays::ensure_overlays;
use crate::sync::EpisodeTypeSync;
use core_runtime::AppConfig;
use tracing::{debug, info, warn};

/// Provision assets and, when the service is enabled, force-sync the
/// episode-type collections and overlay files.
///
/// Always runs to completion; step failures are logged as warnings. The
/// configuration may have been mutated (font path write-back) and should be
/// re-saved by the caller.
pub async fn setup_assets(
    config: &mut AppConfig,
    provisioner: &AssetProvisioner,
    sync: &EpisodeTypeSync,
) -> bool {
    info!("setting up assets");

    if provisioner.setup_poster(config).await {
        info!("collection poster set up");
    } else {
        warn!("collection poster setup failed or skipped");
    }

    if provisioner.setup_font(config).await {
        info!("fonts set up");
    } else {
        warn!("font setup failed or skipped");
    }

    if config.anime_episode_type_enabled() {
        info!("setting up anime episode type collections");
        if sync.update_collections(config).await {
            info!("anime episode collections set up");
        } else {
            warn!("anime episode collections setup failed");
        }

        info!("setting up anime episode type overlays");
        if ensure_overlays(config).await {
            info!("anime episode overlays set up");
        } else {
            warn!("anime episode overlays setup failed");
        }
    } else {
        debug!("anime episode type service disabled, skipping collection sync");
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::COLLECTIONS_FILE_NAME;
    use crate::sync::ListSource;
    use async_trait::async_trait;
    use core_runtime::config::{
        AnimeEpisodeTypeConfig, KometaConfig, ServicesConfig, TraktConfig,
    };
    use mockall::mock;
    use provider_trakt::TraktList;
    use std::sync::Arc;
    use tempfile::TempDir;

    mock! {
        Source {}

        #[async_trait]
        impl ListSource for Source {
            async fn fetch_lists(&self, username: &str) -> provider_trakt::Result<Vec<TraktList>>;
        }
    }

    fn test_config(dir: &TempDir, enabled: bool) -> AppConfig {
        AppConfig {
            kometa_config: Some(KometaConfig {
                yaml_output_dir: Some(dir.path().join("kometa/overlays").display().to_string()),
                collections_dir: Some(
                    dir.path().join("kometa/collections").display().to_string(),
                ),
                ..Default::default()
            }),
            services: Some(ServicesConfig {
                anime_episode_type: Some(AnimeEpisodeTypeConfig {
                    enabled,
                    ..Default::default()
                }),
                ..Default::default()
            }),
            trakt: Some(TraktConfig {
                username: Some("alice".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn disabled_service_skips_collection_sync() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(&dir, false);

        // The fetcher must never be called when the service is disabled.
        let source = MockSource::new();
        let sync = EpisodeTypeSync::new(Arc::new(source));
        let provisioner = AssetProvisioner::new(
            dir.path().join("nothing/assets"),
            dir.path().join("nothing/fonts"),
        );

        assert!(setup_assets(&mut config, &provisioner, &sync).await);
        assert!(!dir
            .path()
            .join("kometa/collections")
            .join(COLLECTIONS_FILE_NAME)
            .exists());
    }

    #[tokio::test]
    async fn enabled_service_syncs_collections_and_overlays() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(&dir, true);

        let mut source = MockSource::new();
        source.expect_fetch_lists().returning(|_| Ok(vec![]));
        let sync = EpisodeTypeSync::new(Arc::new(source));
        let provisioner = AssetProvisioner::new(
            dir.path().join("nothing/assets"),
            dir.path().join("nothing/fonts"),
        );

        assert!(setup_assets(&mut config, &provisioner, &sync).await);
        assert!(dir
            .path()
            .join("kometa/collections")
            .join(COLLECTIONS_FILE_NAME)
            .exists());
        assert!(dir.path().join("kometa/overlays").join("fillers.yml").exists());
    }
}
