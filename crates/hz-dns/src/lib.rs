//! Hetzner DNS API client
//!
//! This crate wraps the Hetzner DNS REST API for ACME DNS-01 challenge
//! management: zone lookup, zone resolution by suffix probing, and TXT
//! record create/list/delete. API documentation: <https://dns.hetzner.com/api-docs>

pub mod client;
pub mod types;
pub mod zone;

pub use client::{DnsClient, DEFAULT_API_URL};
pub use types::{DnsError, DnsResult, NewRecord, Record, Zone};
pub use zone::{record_name, resolve_zone_id, resolve_zone_name};
