use crate::config::JiraConfig;
use crate::error::{Result, TempoError};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde_json::Value;
use tracing::debug;

/// One HTTP exchange as seen by the extension: transport failures are `Err`,
/// every response that made it back is `Ok`, whatever its status. Status
/// interpretation belongs to the caller, never to the transport.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// The minimal capability the worklog extension needs from an issue-tracker
/// client: compose a fully-qualified URL for a versioned REST base, and send
/// a single request. Any pre-authenticated client that can do these two
/// things can host the extension; credentials, TLS policy and connection
/// lifecycle stay on the implementor's side of this seam.
#[allow(async_fn_in_trait)]
pub trait JiraTransport {
    /// Fully-qualified URL for `path` under `{base}{version}` on this host,
    /// honoring the client's own protocol/host/port/prefix configuration.
    /// `path` may carry a query string.
    fn rest_url(&self, base: &str, version: &str, path: &str) -> String;

    /// Sends one request and returns the raw outcome. `body`, when present,
    /// is JSON-encoded onto the wire.
    async fn execute(&self, method: Method, url: &str, body: Option<&Value>) -> Result<RawResponse>;
}

/// Default [`JiraTransport`] implementor: a reqwest client with basic auth,
/// built from a [`JiraConfig`].
#[derive(Clone)]
pub struct JiraClient {
    http: HttpClient,
    config: JiraConfig,
}

impl JiraClient {
    pub fn new(config: JiraConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &JiraConfig {
        &self.config
    }
}

impl JiraTransport for JiraClient {
    fn rest_url(&self, base: &str, version: &str, path: &str) -> String {
        let mut url = self.config.rest_root(base, version);
        url.push_str(path.trim_start_matches('/'));
        url
    }

    async fn execute(&self, method: Method, url: &str, body: Option<&Value>) -> Result<RawResponse> {
        debug!(%method, url, "sending request");
        let mut request = self
            .http
            .request(method, url)
            .basic_auth(&self.config.username, Some(&self.config.secret));
        if let Some(payload) = body {
            request = request.json(payload);
        }
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), "received response");
        Ok(RawResponse { status, body })
    }
}

fn build_http_client(config: &JiraConfig) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, header_value(config.user_agent.clone())?);

    HttpClient::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .danger_accept_invalid_certs(!config.strict_ssl)
        .build()
        .map_err(|err| TempoError::Other(err.to_string()))
}

fn header_value(value: String) -> Result<HeaderValue> {
    HeaderValue::from_str(&value).map_err(|err| TempoError::Other(err.to_string()))
}
