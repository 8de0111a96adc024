//! HTTP client for the PokeAPI
//!
//! One fetch is one GET against `{base_url}/pokemon/{identifier}` with a single
//! attempt and no retries. Every failure mode maps to a distinct
//! [`FetchError`] variant carrying the offending identifier.

use url::Url;

use crate::error::{Error, FetchError, Result};
use crate::types::Pokemon;

/// Default PokeAPI base URL
pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Timeout for one fetch request, so a hung connection cannot stall a batch forever
const FETCH_TIMEOUT_SECS: u64 = 30;

/// Client for fetching Pokemon records
///
/// Cheap to clone: the underlying `reqwest::Client` is reference-counted, and
/// every spawned fetch task gets its own clone.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Create a client against the public PokeAPI
    pub fn new() -> Result<Self> {
        Self::with_base_url(POKEAPI_BASE_URL)
    }

    /// Create a client against a custom base URL
    ///
    /// Used by tests to point the client at a mock server; the URL must not end
    /// with a trailing slash segment beyond the API root.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(Error::BaseUrl)?;
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Fetch one Pokemon record by name or index
    ///
    /// # Errors
    ///
    /// - [`FetchError::Transport`] on connection, DNS, or timeout failures
    /// - [`FetchError::NotFound`] when the remote returns a non-200 status
    /// - [`FetchError::Decode`] when the body is not a valid record
    pub async fn fetch(&self, identifier: &str) -> std::result::Result<Pokemon, FetchError> {
        // Url normalizes an empty path to "/", so trim before joining segments
        let url = format!(
            "{}/pokemon/{}",
            self.base_url.as_str().trim_end_matches('/'),
            identifier
        );
        tracing::debug!(identifier, %url, "fetching pokemon");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                identifier: identifier.to_string(),
                source,
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::NotFound {
                identifier: identifier.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                identifier: identifier.to_string(),
                source,
            })?;

        // Decode explicitly so a malformed body is distinguishable from a
        // transport failure.
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            identifier: identifier.to_string(),
            source,
        })
    }
}
