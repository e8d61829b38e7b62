//! Core traits for the update flow
//!
//! - [`IpSource`]: resolve the caller's current public IP
//! - [`ZoneClient`]: list and update the DNS records of one zone

pub mod ip_source;
pub mod zone_client;

pub use ip_source::IpSource;
pub use zone_client::{DnsRecord, RecordList, RecordUpdate, UpdateOutcome, ZoneClient};
