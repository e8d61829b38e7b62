//! Configuration for a single update run.
//!
//! The binary collects environment values into a [`Config`] once, validates
//! it, and hands it to the component constructors. Nothing else reads the
//! environment.

use serde::{Deserialize, Serialize};

/// Public-IP lookup endpoint used when none is configured.
///
/// Returns the caller's IPv4 address as a plain-text body.
pub const DEFAULT_IP_ENDPOINT: &str = "https://checkip.amazonaws.com";

/// Configuration for one update run
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Identifier of the DNS zone whose records are rewritten
    pub zone_id: String,

    /// Bearer credential for the DNS provider API
    ///
    /// ⚠️ NEVER log this value
    pub api_token: String,

    /// Endpoint returning the caller's public IP as plain text
    #[serde(default = "default_ip_endpoint")]
    pub ip_endpoint: String,

    /// When set, record lookups run but the updates are not sent
    #[serde(default)]
    pub dry_run: bool,
}

// Custom Debug implementation that hides the API token
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("zone_id", &self.zone_id)
            .field("api_token", &"<REDACTED>")
            .field("ip_endpoint", &self.ip_endpoint)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl Config {
    /// Create a configuration with the default IP endpoint
    pub fn new(zone_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
            api_token: api_token.into(),
            ip_endpoint: default_ip_endpoint(),
            dry_run: false,
        }
    }

    /// Override the public-IP lookup endpoint
    pub fn with_ip_endpoint(mut self, ip_endpoint: impl Into<String>) -> Self {
        self.ip_endpoint = ip_endpoint.into();
        self
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Validate the configuration
    ///
    /// Required fields must be present and the IP endpoint must be an
    /// http(s) URL. Runs before any client is constructed so that bad
    /// configuration never reaches the network.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.zone_id.is_empty() {
            return Err(crate::Error::config("zone ID cannot be empty"));
        }
        if self.api_token.is_empty() {
            return Err(crate::Error::config("API token cannot be empty"));
        }
        if self.ip_endpoint.is_empty() {
            return Err(crate::Error::config("IP endpoint cannot be empty"));
        }
        if !self.ip_endpoint.starts_with("https://") && !self.ip_endpoint.starts_with("http://") {
            return Err(crate::Error::config(format!(
                "IP endpoint must use http or https: {}",
                self.ip_endpoint
            )));
        }
        Ok(())
    }
}

fn default_ip_endpoint() -> String {
    DEFAULT_IP_ENDPOINT.to_string()
}
