/*
[INPUT]:  HTTP configuration (base URL, timeout, key material)
[OUTPUT]: Configured reqwest client ready for DeversiFi API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::auth::EcdsaSigner;
use crate::http::{DvfError, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Base URL for the DeversiFi REST API
const BASE_URL: &str = "https://api.deversifi.com";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the DeversiFi API
///
/// The service accepts at most 10 requests per second; exceeding that limit
/// produces HTTP 429 responses, surfaced here as an ordinary status error.
/// The limit is not enforced client-side.
pub struct DvfClient {
    http_client: Client,
    base_url: Url,
    private_key: String,
    subaccount: String,
}

impl DvfClient {
    /// Create a new client for the published origin with default configuration
    pub fn new(private_key: &str, subaccount: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), private_key, subaccount)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, private_key: &str, subaccount: &str) -> Result<Self> {
        Self::with_config_and_base_url(config, BASE_URL, private_key, subaccount)
    }

    /// Create a new client against an explicit base URL (mock servers in tests)
    pub fn with_config_and_base_url(
        config: ClientConfig,
        base_url: &str,
        private_key: &str,
        subaccount: &str,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=UTF-8"),
        );

        let http_client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            private_key: private_key.to_string(),
            subaccount: subaccount.to_string(),
        })
    }

    /// Subaccount identifier scoping requests on the exchange
    pub fn subaccount(&self) -> &str {
        &self.subaccount
    }

    /// Build a request for a path relative to the base URL
    ///
    /// Query parameters are URL-encoded in the order given; keys are expected
    /// to be unique.
    fn request(&self, method: Method, path: &str, params: &[(&str, &str)]) -> Result<RequestBuilder> {
        let url = self.base_url.join(path)?;
        debug!(%method, %url, "built request");
        let mut builder = self.http_client.request(method, url);
        if !params.is_empty() {
            builder = builder.query(params);
        }
        Ok(builder)
    }

    /// Dispatch a request and decode the JSON response body
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            // drain and discard; callers only get the status text
            let _ = response.text().await;
            return Err(DvfError::Status { status });
        }
        let body = response.text().await?;
        debug!(%status, body = %body, "received response");
        Ok(serde_json::from_str(&body)?)
    }

    /// GET a path and decode the response into the caller's target shape
    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T> {
        let builder = self.request(Method::GET, path, params)?;
        self.send_json(builder).await
    }

    /// POST a JSON body to a path and decode the response
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self
            .request(Method::POST, path, &[])?
            .body(serde_json::to_vec(body)?);
        self.send_json(builder).await
    }

    /// Sign a message with the client's private key
    ///
    /// Signing is a manual step: the result is not attached to outgoing
    /// requests automatically. See [`EcdsaSigner::sign`] for the format.
    pub fn sign(&self, message: &[u8]) -> Result<String> {
        EcdsaSigner::from_hex_key(&self.private_key)?.sign(message)
    }

    /// Sign a message and also return the derived public key
    pub fn sign_with_public_key(&self, message: &[u8]) -> Result<(String, String)> {
        EcdsaSigner::from_hex_key(&self.private_key)?.sign_with_public_key(message)
    }
}

// key material stays out of debug output
impl fmt::Debug for DvfClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DvfClient")
            .field("base_url", &self.base_url.as_str())
            .field("subaccount", &self.subaccount)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
