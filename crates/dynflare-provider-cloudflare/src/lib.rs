// # Cloudflare Zone Client
//
// Implements the `ZoneClient` trait against the Cloudflare API v4.
//
// ## API Reference
//
// - Cloudflare API v4: https://developers.cloudflare.com/api/
// - List DNS Records: GET `/zones/:zone_id/dns_records`
// - Update DNS Record: PUT `/zones/:zone_id/dns_records/:record_id`
//
// ## Error reporting
//
// The API reports application failures (bad token, malformed record)
// inside the JSON envelope as `success: false`, which the engine turns
// into per-record log lines. HTTP status codes are therefore not mapped
// to errors here; only transport failures and unreadable bodies are.
//
// ## Security
//
// The API token never appears in logs or in the `Debug` representation.

use std::time::Duration;

use async_trait::async_trait;
use dynflare_core::traits::{RecordList, RecordUpdate, UpdateOutcome, ZoneClient};
use dynflare_core::{Error, Result};

/// Cloudflare API base URL
const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// HTTP timeout for API requests
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Cloudflare zone client
///
/// Holds the zone and credential for one run. Stateless across calls: one
/// HTTP request per method, no retry, no caching.
///
/// # Dry-Run Mode
///
/// When `dry_run` is true the client performs listing calls normally but
/// skips update PUTs, logging the URL and payload it would have sent and
/// answering with a synthetic successful outcome.
pub struct CloudflareZone {
    /// Cloudflare API token
    /// ⚠️ NEVER log this value
    api_token: String,

    /// Zone whose records are listed and rewritten
    zone_id: String,

    /// HTTP client for API requests
    client: reqwest::Client,

    /// Dry-run mode: list normally, skip update PUTs
    dry_run: bool,
}

// Custom Debug implementation that hides the API token
impl std::fmt::Debug for CloudflareZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareZone")
            .field("api_token", &"<REDACTED>")
            .field("zone_id", &self.zone_id)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl CloudflareZone {
    /// Create a new Cloudflare zone client
    ///
    /// # Parameters
    ///
    /// - `api_token`: Cloudflare API token with Zone:DNS:Edit permissions
    /// - `zone_id`: identifier of the zone to operate on
    /// - `dry_run`: if true, perform listing calls but skip update PUTs
    ///
    /// Fails fast with a configuration error if the token or zone is
    /// empty, so a misconfigured client never reaches the network.
    pub fn new(
        api_token: impl Into<String>,
        zone_id: impl Into<String>,
        dry_run: bool,
    ) -> Result<Self> {
        let api_token = api_token.into();
        let zone_id = zone_id.into();

        if api_token.is_empty() {
            return Err(Error::config("Cloudflare API token cannot be empty"));
        }
        if zone_id.is_empty() {
            return Err(Error::config("Cloudflare zone ID cannot be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::provider("cloudflare", format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_token,
            zone_id,
            client,
            dry_run,
        })
    }

    /// Create a client in live mode
    pub fn new_live(api_token: impl Into<String>, zone_id: impl Into<String>) -> Result<Self> {
        Self::new(api_token, zone_id, false)
    }

    /// Create a client in dry-run mode
    pub fn new_dry_run(api_token: impl Into<String>, zone_id: impl Into<String>) -> Result<Self> {
        Self::new(api_token, zone_id, true)
    }

    fn records_url(&self) -> String {
        format!("{}/zones/{}/dns_records", CLOUDFLARE_API_BASE, self.zone_id)
    }

    fn record_url(&self, record_id: &str) -> String {
        format!(
            "{}/zones/{}/dns_records/{}",
            CLOUDFLARE_API_BASE, self.zone_id, record_id
        )
    }
}

#[async_trait]
impl ZoneClient for CloudflareZone {
    /// List every DNS record in the zone
    ///
    /// ```http
    /// GET /zones/:zone_id/dns_records
    /// Authorization: Bearer <token>
    /// ```
    async fn list_records(&self) -> Result<RecordList> {
        let url = self.records_url();
        tracing::debug!(zone_id = %self.zone_id, "listing zone records");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| Error::transport(format!("list request failed: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("failed to read list response: {e}")))?;

        let listing: RecordList = serde_json::from_str(&body)?;

        tracing::debug!(records = listing.records.len(), "zone listing decoded");
        Ok(listing)
    }

    /// Overwrite a single record
    ///
    /// ```http
    /// PUT /zones/:zone_id/dns_records/:record_id
    /// Authorization: Bearer <token>
    /// {"type": "A", "name": "...", "content": "...", "ttl": 600, "proxied": true}
    /// ```
    async fn update_record(&self, record_id: &str, update: &RecordUpdate) -> Result<UpdateOutcome> {
        let url = self.record_url(record_id);

        if self.dry_run {
            tracing::info!(
                url = %url,
                payload = %serde_json::to_string(update)?,
                "[DRY-RUN] would send PUT request"
            );
            return Ok(UpdateOutcome {
                success: true,
                ..UpdateOutcome::default()
            });
        }

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.api_token)
            .header("Content-Type", "application/json")
            .json(update)
            .send()
            .await
            .map_err(|e| Error::transport(format!("update request failed: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("failed to read update response: {e}")))?;

        // Decode failures propagate as Error::Decode; the engine tolerates
        // them for update responses.
        let outcome: UpdateOutcome = serde_json::from_str(&body)?;
        Ok(outcome)
    }

    fn provider_name(&self) -> &'static str {
        "cloudflare"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_rejected() {
        assert!(CloudflareZone::new("", "abc123", false).is_err());
    }

    #[test]
    fn empty_zone_rejected() {
        assert!(CloudflareZone::new("tok", "", false).is_err());
    }

    #[test]
    fn dry_run_mode() {
        let zone_dry = CloudflareZone::new_dry_run("tok", "abc123").unwrap();
        let zone_live = CloudflareZone::new_live("tok", "abc123").unwrap();

        assert!(zone_dry.dry_run);
        assert!(!zone_live.dry_run);
    }

    #[tokio::test]
    async fn dry_run_update_skips_the_put() {
        let zone = CloudflareZone::new_dry_run("tok", "abc123").unwrap();
        let update = RecordUpdate {
            record_type: "A".to_string(),
            name: "home.example.com".to_string(),
            content: "203.0.113.7".to_string(),
            ttl: 600,
            proxied: true,
        };

        // Never touches the network: a synthetic success comes back.
        let outcome = zone.update_record("r1", &update).await.unwrap();
        assert!(outcome.success);
        assert!(outcome.result.is_none());
    }

    #[test]
    fn urls_address_the_configured_zone() {
        let zone = CloudflareZone::new("tok", "abc123", false).unwrap();

        assert_eq!(
            zone.records_url(),
            "https://api.cloudflare.com/client/v4/zones/abc123/dns_records"
        );
        assert_eq!(
            zone.record_url("r1"),
            "https://api.cloudflare.com/client/v4/zones/abc123/dns_records/r1"
        );
    }

    #[test]
    fn api_token_not_exposed_in_debug() {
        let zone = CloudflareZone::new("secret_token_12345", "abc123", false).unwrap();

        let debug_str = format!("{zone:?}");
        assert!(!debug_str.contains("secret_token_12345"));
        assert!(debug_str.contains("CloudflareZone"));
    }

    #[test]
    fn provider_name() {
        let zone = CloudflareZone::new("tok", "abc123", false).unwrap();
        assert_eq!(zone.provider_name(), "cloudflare");
    }
}
