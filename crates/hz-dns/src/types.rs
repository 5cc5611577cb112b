use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A DNS zone as returned by the provider. Zones are only ever queried,
/// never created or mutated by this crate.
#[derive(Debug, Clone, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

/// A DNS record as returned by the provider. The `name` is relative to its
/// zone (e.g. `_acme-challenge.sub` inside zone `example.com`).
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub value: String,
    pub zone_id: String,
    #[serde(default)]
    pub ttl: u32,
}

/// Body for `POST /records`.
#[derive(Debug, Clone, Serialize)]
pub struct NewRecord {
    pub value: String,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub zone_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub last_page: u32,
    #[serde(default)]
    pub total_entries: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Pagination,
}

/// Response envelope for `GET /zones`.
#[derive(Debug, Deserialize)]
pub struct ZonesResponse {
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub meta: Meta,
}

/// Response envelope for `GET /records`. Pagination metadata is carried but
/// only the first page is ever requested.
#[derive(Debug, Deserialize)]
pub struct RecordsResponse {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub meta: Meta,
}

/// Response envelope for `POST /records`.
#[derive(Debug, Deserialize)]
pub struct RecordEnvelope {
    pub record: Record,
}

#[derive(Error, Debug)]
pub enum DnsError {
    #[error("{method} {url} failed: HTTP {status}: {body}")]
    Api {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[error("network error calling {url}: {detail}")]
    Network { url: String, detail: String },

    #[error("failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("zone lookup for `{name}` matched {matches} zones, expected exactly one")]
    ZoneResolution { name: String, matches: i64 },

    #[error("no zone found for `{domain}` or any parent domain")]
    ZoneNotFound { domain: String },

    #[error("zone `{zone}` is not a suffix of `{fqdn}`")]
    NameDerivation { fqdn: String, zone: String },
}

pub type DnsResult<T> = Result<T, DnsError>;
