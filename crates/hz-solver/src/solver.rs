//! Present/CleanUp reconciliation for DNS-01 challenges.

use std::sync::Arc;

use async_trait::async_trait;
use hz_dns::{record_name, resolve_zone_id, resolve_zone_name, DnsClient, DnsResult, NewRecord};
use tracing::{debug, error, info, warn};

use crate::config;
use crate::secrets::SecretStore;
use crate::types::{ChallengeRequest, ProviderConfig, SolverError, SolverResult};

/// TTL for challenge TXT records. Short, they live only for one validation.
pub const CHALLENGE_TTL: u32 = 120;

/// Plugin contract consumed by the host controller.
///
/// `present` must fail loudly: a missing record blocks certificate issuance.
/// `cleanup` is best-effort: a stale record must not block issuance that
/// already succeeded.
#[async_trait]
pub trait ChallengeSolver: Send + Sync {
    /// Solver name used for plugin registration.
    fn name(&self) -> &'static str;

    /// One-time setup before the first challenge. Never touches the DNS
    /// provider.
    async fn initialize(&self) -> SolverResult<()>;

    /// Publish the challenge TXT record.
    async fn present(&self, challenge: &ChallengeRequest) -> SolverResult<()>;

    /// Find and remove the challenge TXT record.
    async fn cleanup(&self, challenge: &ChallengeRequest) -> SolverResult<()>;
}

/// DNS-01 solver for the Hetzner DNS API.
///
/// Holds only the injected secret store; every call builds its own provider
/// configuration and client, so concurrent challenges share no mutable
/// state.
pub struct HetznerSolver {
    secrets: Arc<dyn SecretStore>,
}

impl HetznerSolver {
    pub fn new(secrets: Arc<dyn SecretStore>) -> Self {
        Self { secrets }
    }

    /// Build the per-request provider configuration from inline config plus
    /// the credentials secret.
    async fn provider_config(&self, challenge: &ChallengeRequest) -> SolverResult<ProviderConfig> {
        let cfg = config::load_config(challenge.config.as_ref())?;
        let secret = self
            .secrets
            .get_secret(&challenge.resource_namespace, &cfg.secret_name)
            .await
            .map_err(|e| {
                SolverError::SecretLookup(format!(
                    "unable to get secret `{}/{}`: {e}",
                    challenge.resource_namespace, cfg.secret_name
                ))
            })?;
        config::provider_config(&cfg, &secret)
    }

    /// Determine the zone name (explicit or discovered) and its provider id.
    async fn resolve_zone(
        &self,
        client: &DnsClient,
        cfg: &ProviderConfig,
        challenge: &ChallengeRequest,
    ) -> DnsResult<(String, String)> {
        let zone_name = match &cfg.zone_name {
            Some(name) => name.clone(),
            None => resolve_zone_name(client, &challenge.resolved_zone).await?,
        };
        let zone_id = resolve_zone_id(client, &zone_name).await?;
        Ok((zone_name, zone_id))
    }
}

#[async_trait]
impl ChallengeSolver for HetznerSolver {
    fn name(&self) -> &'static str {
        "hetzner"
    }

    async fn initialize(&self) -> SolverResult<()> {
        // The secret store is injected at construction; nothing to build.
        info!("hetzner solver initialized");
        Ok(())
    }

    async fn present(&self, challenge: &ChallengeRequest) -> SolverResult<()> {
        debug!(
            namespace = %challenge.resource_namespace,
            zone = %challenge.resolved_zone,
            fqdn = %challenge.resolved_fqdn,
            "present called"
        );

        let cfg = self.provider_config(challenge).await?;
        let client = DnsClient::new(cfg.api_url.clone(), cfg.api_key.clone());

        let (zone_name, zone_id) = match self.resolve_zone(&client, &cfg, challenge).await {
            Ok(zone) => zone,
            Err(e) => {
                error!(fqdn = %challenge.resolved_fqdn, error = %e, "zone resolution failed");
                return Err(e.into());
            }
        };

        let name = record_name(&challenge.resolved_fqdn, &zone_name)?;

        // At-least-once create: the provider does not deduplicate, so a
        // second present for the same challenge leaves two records.
        let record = NewRecord {
            value: challenge.key.clone(),
            ttl: CHALLENGE_TTL,
            record_type: "TXT".to_string(),
            name: name.clone(),
            zone_id,
        };

        match client.create_record(&record).await {
            Ok(created) => {
                info!(
                    fqdn = %challenge.resolved_fqdn,
                    record_id = %created.id,
                    "presented TXT record"
                );
                Ok(())
            }
            Err(e) => {
                error!(fqdn = %challenge.resolved_fqdn, error = %e, "failed to create TXT record");
                Err(e.into())
            }
        }
    }

    async fn cleanup(&self, challenge: &ChallengeRequest) -> SolverResult<()> {
        debug!(
            namespace = %challenge.resource_namespace,
            fqdn = %challenge.resolved_fqdn,
            "cleanup called"
        );

        let cfg = self.provider_config(challenge).await?;
        let client = DnsClient::new(cfg.api_url.clone(), cfg.api_key.clone());

        // Best-effort: an unresolvable zone means there is nothing we could
        // have created, so log and move on rather than block issuance.
        let (zone_name, zone_id) = match self.resolve_zone(&client, &cfg, challenge).await {
            Ok(zone) => zone,
            Err(e) => {
                warn!(fqdn = %challenge.resolved_fqdn, error = %e, "skipping cleanup, zone resolution failed");
                return Ok(());
            }
        };

        // If listing fails we cannot safely pick a record to delete.
        let response = client.list_records(&zone_id).await?;
        if response.meta.pagination.last_page > 1 {
            // Only the first page is scanned; matches beyond it are missed.
            warn!(
                zone_id = %zone_id,
                last_page = response.meta.pagination.last_page,
                "zone has more record pages than cleanup scans"
            );
        }

        let name = record_name(&challenge.resolved_fqdn, &zone_name)?;

        // Last name-match in returned order wins; with duplicate records
        // this targets the most recently listed one. No match leaves the id
        // empty and the DELETE below hits `…/records/`, which the provider
        // rejects like any other failed delete.
        let mut record_id = String::new();
        for record in response.records.iter().rev() {
            if record.name == name {
                record_id = record.id.clone();
                break;
            }
        }

        match client.delete_record(&record_id).await {
            Ok(result) => {
                info!(
                    fqdn = %challenge.resolved_fqdn,
                    record_id = %record_id,
                    result = %result,
                    "deleted TXT record"
                );
            }
            Err(e) => {
                warn!(fqdn = %challenge.resolved_fqdn, error = %e, "failed to delete TXT record");
            }
        }

        Ok(())
    }
}
