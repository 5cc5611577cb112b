//! Thin authenticated wrapper over the Hetzner DNS REST API.

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tracing::{debug, error};

use crate::types::{
    DnsError, DnsResult, NewRecord, Record, RecordEnvelope, RecordsResponse, ZonesResponse,
};

/// Production API base URL. Overridable per request config for testing.
pub const DEFAULT_API_URL: &str = "https://dns.hetzner.com/api/v1";

/// Authenticated client for one provider account.
///
/// Holds no state beyond the base URL and the API token; every call is an
/// independent HTTP request. Retries, if any, belong to the caller.
#[derive(Debug, Clone)]
pub struct DnsClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl DnsClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Issue a single authenticated request and return the response body.
    ///
    /// HTTP 200 is the only success status; anything else (including
    /// transport failures and body-read failures) is an error, never a
    /// partial result.
    pub async fn call(&self, method: Method, url: &str, body: Option<String>) -> DnsResult<String> {
        debug!(method = %method, url = %url, "calling DNS API");

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json")
            .header("Auth-API-Token", &self.api_key);

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| DnsError::Network {
            url: url.to_string(),
            detail: e.to_string(),
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| DnsError::Network {
            url: url.to_string(),
            detail: format!("failed to read response body: {e}"),
        })?;

        if status == reqwest::StatusCode::OK {
            return Ok(text);
        }

        error!(method = %method, url = %url, status = %status, "DNS API call failed");
        Err(DnsError::Api {
            method: method.to_string(),
            url: url.to_string(),
            status: status.as_u16(),
            body: text,
        })
    }

    /// `GET /zones?name={name}` — zones whose name matches exactly.
    pub async fn find_zones(&self, name: &str) -> DnsResult<ZonesResponse> {
        let url = format!("{}/zones?name={}", self.api_url, name);
        let body = self.call(Method::GET, &url, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `GET /records?zone_id={zone_id}` — first page of the zone's records.
    pub async fn list_records(&self, zone_id: &str) -> DnsResult<RecordsResponse> {
        let url = format!("{}/records?zone_id={}", self.api_url, zone_id);
        let body = self.call(Method::GET, &url, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `POST /records` — create a record, returning the provider's copy.
    pub async fn create_record(&self, record: &NewRecord) -> DnsResult<Record> {
        let url = format!("{}/records", self.api_url);
        let payload = serde_json::to_string(record)?;
        let body = self.call(Method::POST, &url, Some(payload)).await?;
        let envelope: RecordEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.record)
    }

    /// `DELETE /records/{id}` — returns the provider's confirmation body.
    pub async fn delete_record(&self, record_id: &str) -> DnsResult<String> {
        let url = format!("{}/records/{}", self.api_url, record_id);
        self.call(Method::DELETE, &url, None).await
    }
}
