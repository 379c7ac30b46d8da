//! Host lookup clients.

use log::trace;
use reqwest::Client;
use url::Url;

use super::types::HostLocation;
use crate::error_handling::LookupError;

/// Resolves an IP address to a location.
///
/// Implementations report every failure as an error; deciding what a failed
/// lookup means for the report is left to the caller.
#[allow(async_fn_in_trait)]
pub trait HostLookup {
    async fn lookup(&self, ip: &str) -> Result<HostLocation, LookupError>;

    /// Whether calls reach a remote service (and so need rate limiting).
    fn is_remote(&self) -> bool {
        true
    }
}

/// Client for the Shodan host endpoint (`GET /shodan/host/{ip}?key=...`).
///
/// Not `Debug`: it holds the API key.
#[derive(Clone)]
pub struct ShodanClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl ShodanClient {
    /// Creates a client against `base_url` (e.g. `https://api.shodan.io`).
    ///
    /// # Errors
    ///
    /// Returns `LookupError::InvalidUrl` if `base_url` is not an absolute
    /// hierarchical URL.
    pub fn new(client: Client, base_url: &str, api_key: impl Into<String>) -> Result<Self, LookupError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        Ok(ShodanClient {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    fn host_url(&self, ip: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["shodan", "host", ip]);
        }
        url.query_pairs_mut().append_pair("key", &self.api_key);
        url
    }
}

impl HostLookup for ShodanClient {
    async fn lookup(&self, ip: &str) -> Result<HostLocation, LookupError> {
        // without_url(): the request URL carries the API key
        let response = self
            .client
            .get(self.host_url(ip))
            .send()
            .await
            .map_err(|e| LookupError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Http(e.without_url()))?;
        trace!("Lookup body for {}: {} bytes", ip, body.len());
        Ok(serde_json::from_str(&body)?)
    }
}

/// Stand-in used when no API key is configured: every lookup fails at once.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledLookup;

impl HostLookup for DisabledLookup {
    async fn lookup(&self, _ip: &str) -> Result<HostLocation, LookupError> {
        Err(LookupError::Disabled)
    }

    fn is_remote(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_url_layout() {
        let client = ShodanClient::new(Client::new(), "https://api.shodan.io", "k3y").unwrap();
        assert_eq!(
            client.host_url("1.2.3.4").as_str(),
            "https://api.shodan.io/shodan/host/1.2.3.4?key=k3y"
        );
    }

    #[test]
    fn test_host_url_keeps_base_path() {
        let client = ShodanClient::new(Client::new(), "http://proxy.local/api/", "k").unwrap();
        assert_eq!(
            client.host_url("5.6.7.8").as_str(),
            "http://proxy.local/api/shodan/host/5.6.7.8?key=k"
        );
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        assert!(matches!(
            ShodanClient::new(Client::new(), "not a url", "k"),
            Err(LookupError::InvalidUrl(_))
        ));
        assert!(matches!(
            ShodanClient::new(Client::new(), "mailto:ops@example.com", "k"),
            Err(LookupError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_disabled_lookup_always_fails() {
        assert!(!DisabledLookup.is_remote());
        assert!(matches!(
            DisabledLookup.lookup("1.2.3.4").await,
            Err(LookupError::Disabled)
        ));
    }
}
