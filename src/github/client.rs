// GitHub Gist HTTP client.
// Performs single-attempt blocking requests and turns transport and status
// failures into plain results instead of errors.

use std::cell::Cell;
use std::time::Duration;

use reqwest::{
    StatusCode, Url,
    blocking::{Client, Response},
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::{debug, warn};

use crate::error::{Result, WinGisterError};

use super::types::RateLimit;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Raw outcome of a gist list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistListResponse {
    pub body: String,
    /// Whether the endpoint answered with HTTP 200.
    pub status_ok: bool,
}

impl GistListResponse {
    fn failed() -> Self {
        Self {
            body: String::new(),
            status_ok: false,
        }
    }
}

/// Remote operations the menu service depends on.
pub trait GistApi {
    /// List a user's public gists. One attempt, no retries.
    fn list_gists(&self, username: &str) -> GistListResponse;

    /// Fetch a raw file. `None` on any non-200 status or transport error.
    fn fetch_raw(&self, url: &str) -> Option<Vec<u8>>;

    /// Rate limit reported by the last list response, if any.
    fn rate_limit(&self) -> Option<RateLimit> {
        None
    }
}

/// Blocking GitHub API client.
pub struct GistClient {
    client: Client,
    api_base: Url,
    rate_limit: Cell<Option<RateLimit>>,
}

impl GistClient {
    /// Create a client for the given API base with a request timeout.
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("wingister/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Self::with_http_client(client, api_base)
    }

    /// Wrap an already configured HTTP client.
    pub fn with_http_client(client: Client, api_base: &str) -> Result<Self> {
        let parsed = Url::parse(api_base)
            .map_err(|_| WinGisterError::InvalidApiBase(api_base.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(WinGisterError::InvalidApiBase(api_base.to_string()));
        }

        Ok(Self {
            client,
            api_base: parsed,
            rate_limit: Cell::new(None),
        })
    }

    /// The API base requests are sent to.
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Build `{api_base}/users/{username}/gists` with the username encoded
    /// as a single path segment.
    fn list_url(&self, username: &str) -> Option<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(["users", username, "gists"]);
        Some(url)
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&self, response: &Response) {
        let header = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
        };

        let mut rate = self.rate_limit.get().unwrap_or_default();
        let mut seen = false;

        if let Some(limit) = header("x-ratelimit-limit") {
            rate.limit = limit;
            seen = true;
        }
        if let Some(remaining) = header("x-ratelimit-remaining") {
            rate.remaining = remaining;
            seen = true;
        }
        if let Some(reset) = header("x-ratelimit-reset") {
            rate.reset = reset;
            seen = true;
        }

        if seen {
            self.rate_limit.set(Some(rate));
        }
    }
}

impl GistApi for GistClient {
    fn list_gists(&self, username: &str) -> GistListResponse {
        let Some(url) = self.list_url(username) else {
            return GistListResponse::failed();
        };

        debug!(%url, "listing gists");
        let response = match self.client.get(url).send() {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "gist list request failed");
                return GistListResponse::failed();
            }
        };

        self.update_rate_limit(&response);
        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "gist list returned non-OK status");
        }

        match response.text() {
            Ok(body) => GistListResponse {
                body,
                status_ok: status == StatusCode::OK,
            },
            Err(e) => {
                warn!(error = %e, "failed to read gist list body");
                GistListResponse::failed()
            }
        }
    }

    fn fetch_raw(&self, url: &str) -> Option<Vec<u8>> {
        debug!(url, "fetching raw file");
        let response = match self.client.get(url).send() {
            Ok(response) => response,
            Err(e) => {
                warn!(url, error = %e, "raw file request failed");
                return None;
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url, %status, "raw file returned non-OK status");
            return None;
        }

        match response.bytes() {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(e) => {
                warn!(url, error = %e, "failed to read raw file body");
                None
            }
        }
    }

    fn rate_limit(&self) -> Option<RateLimit> {
        self.rate_limit.get()
    }
}
