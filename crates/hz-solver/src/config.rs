//! Per-challenge configuration loading.

use hz_dns::DEFAULT_API_URL;
use tracing::debug;

use crate::secrets::{string_from_secret, SecretData};
use crate::types::{ProviderConfig, SolverConfig, SolverError, SolverResult};

/// Decode the controller's inline solver config. Absent config is the base
/// case and yields defaults; malformed config is an error.
pub fn load_config(config_json: Option<&serde_json::Value>) -> SolverResult<SolverConfig> {
    match config_json {
        None => Ok(SolverConfig::default()),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| SolverError::Config(format!("error decoding solver config: {e}"))),
    }
}

/// Merge the inline config with the credentials secret into the per-request
/// provider configuration.
pub fn provider_config(cfg: &SolverConfig, secret: &SecretData) -> SolverResult<ProviderConfig> {
    let api_key = string_from_secret(secret, "api-key")?;

    // Legacy installations carried the zone id in the secret; zone lookup
    // through the API replaced it.
    if secret.contains_key("zone-id") {
        debug!("ignoring legacy `zone-id` secret entry, zone is resolved via the API");
    }

    Ok(ProviderConfig {
        api_key,
        zone_name: cfg.zone_name.clone(),
        api_url: cfg
            .api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
    })
}
