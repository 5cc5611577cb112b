use hz_dns::DnsError;
use serde::Deserialize;
use thiserror::Error;

/// A DNS-01 challenge handed down by the host controller. Read-only here.
#[derive(Debug, Clone)]
pub struct ChallengeRequest {
    /// Fully-qualified challenge domain, trailing-dot form
    /// (e.g. `_acme-challenge.sub.example.com.`).
    pub resolved_fqdn: String,
    /// The controller's zone guess, trailing-dot form (e.g. `example.com.`).
    pub resolved_zone: String,
    /// TXT value to publish for this challenge.
    pub key: String,
    /// Namespace holding the credentials secret.
    pub resource_namespace: String,
    /// Opaque per-request solver config (see [`SolverConfig`]).
    pub config: Option<serde_json::Value>,
}

/// Inline per-challenge solver configuration, supplied by the controller
/// as raw JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverConfig {
    /// Name of the secret holding the `api-key` entry.
    #[serde(default)]
    pub secret_name: String,
    /// Explicit provider zone name. When absent the zone is discovered by
    /// suffix probing.
    #[serde(default)]
    pub zone_name: Option<String>,
    /// Override for the provider API base URL.
    #[serde(default)]
    pub api_url: Option<String>,
}

/// Fully resolved per-request provider configuration: inline config merged
/// with the secret lookup. Built fresh for every call, never persisted.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub zone_name: Option<String>,
    pub api_url: String,
}

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("secret lookup failed: {0}")]
    SecretLookup(String),

    #[error(transparent)]
    Dns(#[from] DnsError),
}

pub type SolverResult<T> = Result<T, SolverError>;
