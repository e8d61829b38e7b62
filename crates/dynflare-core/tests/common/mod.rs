//! Test doubles and common utilities for the update-pass tests
//!
//! The doubles record every call through shared handles so a test can
//! inspect what the engine did after it consumed the boxed trait objects.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use dynflare_core::error::{Error, Result};
use dynflare_core::traits::{
    DnsRecord, IpSource, RecordList, RecordUpdate, UpdateOutcome, ZoneClient,
};

/// An IP source that always answers with a fixed body
pub struct FixedIpSource {
    body: String,
}

impl FixedIpSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait::async_trait]
impl IpSource for FixedIpSource {
    async fn current(&self) -> Result<String> {
        Ok(self.body.clone())
    }
}

/// An IP source whose lookup always fails
pub struct FailingIpSource;

#[async_trait::async_trait]
impl IpSource for FailingIpSource {
    async fn current(&self) -> Result<String> {
        Err(Error::transport("ip lookup request failed: connection refused"))
    }
}

/// Scripted reply for one update call, consumed in order
pub enum UpdateReply {
    /// Provider accepts the update
    Accept,
    /// Provider answers with success=false and these errors
    Reject(Vec<serde_json::Value>),
    /// The response body does not decode
    DecodeError,
    /// The request itself fails in transport
    TransportError,
}

/// A zone client double that records calls and plays back scripted replies
///
/// Update calls past the end of the script are accepted.
pub struct ScriptedZoneClient {
    /// Listing to return, or None to fail the listing decode
    listing: Option<RecordList>,
    replies: Mutex<VecDeque<UpdateReply>>,
    list_calls: Arc<AtomicUsize>,
    updates: Arc<Mutex<Vec<(String, RecordUpdate)>>>,
}

/// Shared view of the calls a [`ScriptedZoneClient`] received
pub struct ZoneCalls {
    list_calls: Arc<AtomicUsize>,
    updates: Arc<Mutex<Vec<(String, RecordUpdate)>>>,
}

impl ZoneCalls {
    /// Number of times list_records() was called
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Every (record_id, payload) pair update_record() received, in order
    pub fn updates(&self) -> Vec<(String, RecordUpdate)> {
        self.updates.lock().unwrap().clone()
    }
}

impl ScriptedZoneClient {
    /// A client whose listing succeeds and whose updates are all accepted
    pub fn new(listing: RecordList) -> (Self, ZoneCalls) {
        Self::with_replies(listing, Vec::new())
    }

    /// A client that plays back the given update replies in order
    pub fn with_replies(listing: RecordList, replies: Vec<UpdateReply>) -> (Self, ZoneCalls) {
        let list_calls = Arc::new(AtomicUsize::new(0));
        let updates = Arc::new(Mutex::new(Vec::new()));

        let client = Self {
            listing: Some(listing),
            replies: Mutex::new(replies.into()),
            list_calls: Arc::clone(&list_calls),
            updates: Arc::clone(&updates),
        };

        (client, ZoneCalls { list_calls, updates })
    }

    /// A client whose listing response does not decode
    pub fn failing_listing() -> (Self, ZoneCalls) {
        let list_calls = Arc::new(AtomicUsize::new(0));
        let updates = Arc::new(Mutex::new(Vec::new()));

        let client = Self {
            listing: None,
            replies: Mutex::new(VecDeque::new()),
            list_calls: Arc::clone(&list_calls),
            updates: Arc::clone(&updates),
        };

        (client, ZoneCalls { list_calls, updates })
    }
}

#[async_trait::async_trait]
impl ZoneClient for ScriptedZoneClient {
    async fn list_records(&self) -> Result<RecordList> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match &self.listing {
            Some(listing) => Ok(listing.clone()),
            None => Err(decode_error()),
        }
    }

    async fn update_record(&self, record_id: &str, update: &RecordUpdate) -> Result<UpdateOutcome> {
        self.updates
            .lock()
            .unwrap()
            .push((record_id.to_string(), update.clone()));

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(UpdateReply::Accept);

        match reply {
            UpdateReply::Accept => Ok(UpdateOutcome {
                success: true,
                ..UpdateOutcome::default()
            }),
            UpdateReply::Reject(errors) => Ok(UpdateOutcome {
                success: false,
                errors,
                ..UpdateOutcome::default()
            }),
            UpdateReply::DecodeError => Err(decode_error()),
            UpdateReply::TransportError => {
                Err(Error::transport("update request failed: connection reset"))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

/// Build a record of the given type
pub fn record(id: &str, record_type: &str, name: &str) -> DnsRecord {
    DnsRecord {
        id: id.to_string(),
        record_type: record_type.to_string(),
        name: name.to_string(),
        ..DnsRecord::default()
    }
}

/// Build an A record
pub fn a_record(id: &str, name: &str) -> DnsRecord {
    record(id, "A", name)
}

/// Build a successful listing of the given records
pub fn listing(records: Vec<DnsRecord>) -> RecordList {
    RecordList {
        success: true,
        records,
        ..RecordList::default()
    }
}

/// A real serde_json decode error, as the provider crate would surface it
pub fn decode_error() -> Error {
    serde_json::from_str::<RecordList>("not json").unwrap_err().into()
}
