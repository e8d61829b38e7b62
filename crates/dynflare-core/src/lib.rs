// # dynflare-core
//
// Core library for the one-shot dynamic DNS update flow:
// - **IpSource**: trait for resolving the caller's current public IP
// - **ZoneClient**: trait for listing and updating the records of one zone
// - **UpdateEngine**: drives one resolve → list → update pass
//
// The traits keep the HTTP implementations (`dynflare-ip-http`,
// `dynflare-provider-cloudflare`) out of this crate and let the update
// flow be tested against in-memory doubles.

pub mod config;
pub mod engine;
pub mod error;
pub mod traits;

// Re-export core types for convenience
pub use config::Config;
pub use engine::{RunReport, UpdateEngine};
pub use error::{Error, Result};
pub use traits::{DnsRecord, IpSource, RecordList, RecordUpdate, UpdateOutcome, ZoneClient};
