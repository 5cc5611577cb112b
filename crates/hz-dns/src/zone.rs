//! Zone resolution and record-name derivation.
//!
//! A challenge arrives with a fully-qualified domain and (optionally) an
//! explicit zone name. When no zone name is configured we probe parent
//! domains of the controller's zone guess until the provider recognizes one,
//! which also covers delegated sub-zones the controller does not know about.

use tracing::{debug, trace};

use crate::client::DnsClient;
use crate::types::{DnsError, DnsResult};

/// Look up the provider's opaque zone id for an exact zone name.
///
/// The lookup must match exactly one zone; zero means the zone is not
/// managed by this account, more than one is ambiguous.
pub async fn resolve_zone_id(client: &DnsClient, zone_name: &str) -> DnsResult<String> {
    let response = client.find_zones(zone_name).await?;
    let matches = response.meta.pagination.total_entries;

    match (matches, response.zones.first()) {
        (1, Some(zone)) => {
            debug!(zone_name = %zone_name, zone_id = %zone.id, "resolved zone");
            Ok(zone.id.clone())
        }
        _ => Err(DnsError::ZoneResolution {
            name: zone_name.to_string(),
            matches,
        }),
    }
}

/// Discover the zone name for a trailing-dot candidate zone by probing
/// progressively shorter suffixes, starting at the second label.
///
/// The first label of the candidate is never probed: the candidate itself is
/// the controller's challenge zone guess, and the challenge record always
/// lives at least one label below the provider zone. The first suffix the
/// provider recognizes wins; individual probe failures are ignored.
pub async fn resolve_zone_name(client: &DnsClient, candidate_zone: &str) -> DnsResult<String> {
    for suffix in candidate_suffixes(candidate_zone) {
        trace!(suffix = %suffix, "probing zone name");
        if resolve_zone_id(client, &suffix).await.is_ok() {
            debug!(candidate = %candidate_zone, zone_name = %suffix, "discovered zone name");
            return Ok(suffix);
        }
    }

    Err(DnsError::ZoneNotFound {
        domain: candidate_zone.to_string(),
    })
}

/// Suffixes of a trailing-dot domain from the second label onward, longest
/// first: `a.b.example.com.` yields `b.example.com`, `example.com`, `com`.
fn candidate_suffixes(candidate_zone: &str) -> Vec<String> {
    let labels: Vec<&str> = candidate_zone.trim_end_matches('.').split('.').collect();
    (1..labels.len()).map(|i| labels[i..].join(".")).collect()
}

/// Derive the zone-relative record name by stripping the zone suffix.
///
/// `fqdn` carries a trailing dot, `zone_name` does not:
/// (`_acme-challenge.sub.example.com.`, `example.com`) → `_acme-challenge.sub`.
pub fn record_name(fqdn: &str, zone_name: &str) -> DnsResult<String> {
    let suffix = format!(".{zone_name}.");
    match fqdn.strip_suffix(&suffix) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(DnsError::NameDerivation {
            fqdn: fqdn.to_string(),
            zone: zone_name.to_string(),
        }),
    }
}
