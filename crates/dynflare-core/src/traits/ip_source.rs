// # IP Source Trait
//
// Defines the interface for resolving the caller's current public IP.
//
// ## Implementations
//
// - HTTP-based: `dynflare-ip-http` crate

use async_trait::async_trait;

/// Trait for public-IP resolver implementations
///
/// The resolved value is the raw text a remote service returned. It is
/// deliberately not trimmed, parsed, or validated: the update flow forwards
/// it to the DNS provider exactly as received, so whatever the service
/// answers (trailing newline included) becomes the record content.
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Resolve the current public IP
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: the raw response body of the lookup
    /// - `Err(Error)`: if the lookup could not be performed; the caller
    ///   treats this as fatal for the whole run
    async fn current(&self) -> Result<String, crate::Error>;
}
