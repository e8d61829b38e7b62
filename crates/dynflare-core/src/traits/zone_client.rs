// # Zone Client Trait
//
// Defines the interface for listing and updating the DNS records of one
// zone, together with the wire-level data model the provider API speaks.
//
// ## Implementations
//
// - Cloudflare v4 API: `dynflare-provider-cloudflare` crate
//
// ## Decoding
//
// Every response struct decodes leniently: a field the provider omits
// takes its zero value instead of failing the whole envelope. Bookkeeping
// fields on [`DnsRecord`] (zone, timestamps, metadata) are decoded so the
// full payload survives, but only `id`, `record_type` and `name` feed the
// update flow.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One DNS record as returned by the provider's list endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsRecord {
    /// Provider-assigned record identifier
    pub id: String,
    /// Record type tag, e.g. "A"
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record hostname
    pub name: String,
    /// Current record value
    pub content: String,
    /// Time-to-live in seconds
    pub ttl: u32,
    pub proxiable: bool,
    pub proxied: bool,
    pub locked: bool,
    pub zone_id: String,
    pub zone_name: String,
    pub created_on: Option<DateTime<Utc>>,
    pub modified_on: Option<DateTime<Utc>>,
    /// Provider bookkeeping, kept as raw JSON
    pub meta: serde_json::Value,
}

/// Listing of all records in a zone
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordList {
    /// Whether the provider considered the listing call successful
    pub success: bool,
    pub errors: Vec<serde_json::Value>,
    pub messages: Vec<serde_json::Value>,
    /// Records in provider order
    #[serde(rename = "result")]
    pub records: Vec<DnsRecord>,
}

/// Payload for overwriting a single record
///
/// Built fresh per record and discarded after the send. Field order is the
/// serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordUpdate {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub proxied: bool,
}

/// Decoded response to a record update
///
/// Consumed only for the per-record log decision; never retained.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateOutcome {
    /// Whether the provider accepted the update
    pub success: bool,
    /// Provider-reported errors, surfaced in the failure log line
    pub errors: Vec<serde_json::Value>,
    pub messages: Vec<serde_json::Value>,
    /// Echoed snapshot of the record after the update
    pub result: Option<DnsRecord>,
}

/// Trait for zone client implementations
///
/// Implementations perform one HTTP call per method and report transport
/// failures as [`Error::Transport`](crate::Error::Transport) and
/// unreadable bodies as [`Error::Decode`](crate::Error::Decode); whether
/// either is fatal is the engine's decision, not the client's.
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait ZoneClient: Send + Sync {
    /// List every DNS record in the configured zone
    async fn list_records(&self) -> Result<RecordList, crate::Error>;

    /// Overwrite a single record
    ///
    /// # Parameters
    ///
    /// - `record_id`: provider-assigned identifier of the record
    /// - `update`: the replacement payload
    async fn update_record(
        &self,
        record_id: &str,
        update: &RecordUpdate,
    ) -> Result<UpdateOutcome, crate::Error>;

    /// Provider name for logging
    fn provider_name(&self) -> &'static str;
}
