//! Cluster secret-store boundary.
//!
//! The solver never talks to the cluster directly; it receives an
//! implementation of [`SecretStore`] at construction time. Production
//! bindings wrap their cluster client, tests use [`MemorySecretStore`].

use std::collections::HashMap;

use async_trait::async_trait;

use crate::types::{SolverError, SolverResult};

/// Raw secret contents, keyed entry name to bytes (cluster-secret shape).
pub type SecretData = HashMap<String, Vec<u8>>;

/// Opaque key-value secret lookup in a namespace.
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn get_secret(&self, namespace: &str, name: &str) -> anyhow::Result<SecretData>;
}

/// Extract a UTF-8 string entry from secret data.
pub fn string_from_secret(data: &SecretData, key: &str) -> SolverResult<String> {
    let bytes = data
        .get(key)
        .ok_or_else(|| SolverError::SecretLookup(format!("key `{key}` not found in secret data")))?;
    String::from_utf8(bytes.clone())
        .map_err(|_| SolverError::SecretLookup(format!("key `{key}` is not valid UTF-8")))
}

/// In-memory secret store for tests and local runs.
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    secrets: HashMap<(String, String), SecretData>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_entry(&mut self, namespace: &str, name: &str, key: &str, value: &str) {
        self.secrets
            .entry((namespace.to_string(), name.to_string()))
            .or_default()
            .insert(key.to_string(), value.as_bytes().to_vec());
    }
}

#[async_trait]
impl SecretStore for MemorySecretStore {
    async fn get_secret(&self, namespace: &str, name: &str) -> anyhow::Result<SecretData> {
        self.secrets
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("secret `{namespace}/{name}` not found"))
    }
}
