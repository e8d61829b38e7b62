// # HTTP IP Source
//
// Resolves the caller's public IP by querying an external "what is my IP"
// service (e.g. checkip.amazonaws.com) with a single unauthenticated GET.
//
// The response body is handed back exactly as received. Most services
// terminate the address with a newline; the update flow forwards that text
// untouched, so this crate does not trim or parse it.

use std::time::Duration;

use dynflare_core::{Error, IpSource, Result};

/// Request timeout for the IP lookup.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP-based public-IP resolver
pub struct HttpIpSource {
    /// URL to fetch the IP from
    url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpIpSource {
    /// Create a new HTTP IP source
    ///
    /// # Parameters
    ///
    /// - `url`: endpoint returning the caller's IP as a plain-text body
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::builder()
                .timeout(HTTP_TIMEOUT)
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait::async_trait]
impl IpSource for HttpIpSource {
    async fn current(&self) -> Result<String> {
        tracing::debug!(url = %self.url, "looking up public ip");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::transport(format!("ip lookup request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::ip_source(format!(
                "ip lookup returned {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| Error::transport(format!("failed to read ip lookup response: {e}")))
    }
}
