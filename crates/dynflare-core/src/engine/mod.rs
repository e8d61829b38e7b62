// # Update Engine
//
// Drives one update pass: resolve the public IP, list the zone's records,
// and rewrite every A record to point at the resolved address.
//
// The engine owns all control-flow decisions. Clients only perform calls
// and report what happened; whether a failure aborts the pass is decided
// here.

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::traits::{IpSource, RecordUpdate, ZoneClient};

/// TTL applied to every rewritten record, in seconds.
const UPDATE_TTL: u32 = 600;

/// Rewritten records are always placed behind the provider proxy.
const UPDATE_PROXIED: bool = true;

/// Counters for a completed update pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Raw public-IP text the resolver returned
    pub public_ip: String,
    /// Records returned by the listing call
    pub listed: usize,
    /// Updates the provider acknowledged as successful
    pub updated: usize,
    /// Updates the provider rejected, or whose response did not decode
    pub failed: usize,
    /// Records left untouched because they are not A records
    pub skipped: usize,
}

/// One-shot update engine
///
/// Composed from an [`IpSource`] and a [`ZoneClient`]; see
/// [`UpdateEngine::run`] for the pass semantics.
pub struct UpdateEngine {
    ip_source: Box<dyn IpSource>,
    zone: Box<dyn ZoneClient>,
}

impl UpdateEngine {
    /// Create an engine from its two collaborators
    pub fn new(ip_source: Box<dyn IpSource>, zone: Box<dyn ZoneClient>) -> Self {
        Self { ip_source, zone }
    }

    /// Run one full update pass
    ///
    /// Sequence: resolve the public IP, list the zone's records, then PUT
    /// an update for every record of type `A`, in list order. Records of
    /// any other type are skipped; they are never overwritten.
    ///
    /// # Failure semantics
    ///
    /// - IP resolution failure aborts before the listing call.
    /// - A listing that fails in transport or does not decode aborts.
    /// - A listing the provider marks unsuccessful yields no updates and
    ///   returns normally.
    /// - A transport failure while updating aborts the pass immediately,
    ///   even mid-loop; later records are not attempted.
    /// - An update response that does not decode is logged and counted as
    ///   failed, and the loop continues.
    pub async fn run(&self) -> Result<RunReport> {
        let public_ip = self.ip_source.current().await?;
        info!(ip = %public_ip.trim(), "resolved public ip");

        let listing = self.zone.list_records().await?;

        let mut report = RunReport {
            public_ip: public_ip.clone(),
            listed: listing.records.len(),
            ..RunReport::default()
        };

        if !listing.success {
            warn!(
                provider = self.zone.provider_name(),
                errors = ?listing.errors,
                "provider reported listing failure, nothing to update"
            );
            return Ok(report);
        }

        for record in &listing.records {
            if record.record_type != "A" {
                debug!(
                    name = %record.name,
                    record_type = %record.record_type,
                    "skipping non-A record"
                );
                report.skipped += 1;
                continue;
            }

            info!(name = %record.name, "updating record");

            let update = RecordUpdate {
                record_type: "A".to_string(),
                name: record.name.clone(),
                content: public_ip.clone(),
                ttl: UPDATE_TTL,
                proxied: UPDATE_PROXIED,
            };

            match self.zone.update_record(&record.id, &update).await {
                Ok(outcome) if outcome.success => {
                    info!(name = %record.name, "record updated");
                    report.updated += 1;
                }
                Ok(outcome) => {
                    warn!(
                        name = %record.name,
                        errors = ?outcome.errors,
                        "provider rejected update"
                    );
                    report.failed += 1;
                }
                // The update may or may not have landed; only the response
                // was unreadable. Keep going.
                Err(Error::Decode(e)) => {
                    warn!(name = %record.name, error = %e, "could not decode update response");
                    report.failed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }
}
