//! Directly-invokable setup entry point.
//!
//! Loads the configuration from its fixed container path (overridable with
//! `KTS_CONFIG` for local runs), provisions assets, force-syncs the
//! episode-type collections when enabled, and re-saves the configuration so
//! the provisioned font path persists.

use core_auth::StaticTokenProvider;
use core_runtime::{logging, AppConfig};
use core_sync::{setup_assets, AssetProvisioner, EpisodeTypeSync};
use provider_trakt::{ReqwestHttpClient, TraktClient};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Fixed configuration path inside the container.
const DEFAULT_CONFIG_PATH: &str = "/app/config/config.yaml";

#[tokio::main]
async fn main() {
    if let Err(e) = logging::init_logging("info") {
        eprintln!("failed to initialize logging: {}", e);
    }

    let config_path =
        std::env::var("KTS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut config = match AppConfig::load(&config_path).await {
        Ok(config) => config,
        Err(error) => {
            error!(%error, path = %config_path, "cannot load configuration");
            std::process::exit(1);
        }
    };

    let trakt = config.trakt.clone().unwrap_or_default();
    let tokens = Arc::new(StaticTokenProvider::new(
        trakt.access_token,
        trakt.client_id,
    ));
    let http = Arc::new(ReqwestHttpClient::new());
    let client = TraktClient::new(http, tokens);
    let sync = EpisodeTypeSync::new(Arc::new(client));
    let provisioner = AssetProvisioner::default();

    setup_assets(&mut config, &provisioner, &sync).await;

    // Persist the font path write-back (and nothing else changes).
    match config.save(&config_path).await {
        Ok(()) => info!(path = %config_path, "configuration saved"),
        Err(error) => warn!(%error, "failed to re-save configuration"),
    }
}
