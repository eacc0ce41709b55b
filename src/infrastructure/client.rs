//! API client for the serverless platform
//!
//! Builds request URLs and credentials from [`ClientConfig`], sends them
//! through a [`Transport`] and decodes JSON responses.

use std::fmt;
use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::domain::Collection;
use crate::infrastructure::error::{ClientError, ClientResult};
use crate::infrastructure::traits::{ApiRequest, Credentials, Method, Transport};

/// API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Namespace placeholder resolved by the platform to the caller's default namespace.
pub const DEFAULT_NAMESPACE: &str = "_";

/// Shared handle to the remote API.
///
/// Constructed once during bootstrap and read-only afterwards.
pub struct WhiskClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for WhiskClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhiskClient")
            .field("config", &self.config.masked())
            .finish_non_exhaustive()
    }
}

impl WhiskClient {
    /// Create a client.
    ///
    /// The configuration is not inspected here: missing or malformed host
    /// and credentials surface on the first call that needs them, so
    /// commands that never talk to the platform keep working.
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> ClientResult<Self> {
        debug!("new: {:?}", config.masked());
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Namespace used for entity requests.
    pub fn namespace(&self) -> &str {
        non_empty(self.config.namespace.as_deref()).unwrap_or(DEFAULT_NAMESPACE)
    }

    /// List entities of a collection, newest first, at most `limit`.
    pub fn list(&self, collection: Collection, limit: u32) -> ClientResult<Vec<Value>> {
        let mut url = self.collection_url(collection)?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        self.send_json(Method::Get, url, true)
    }

    /// Fetch a single entity (or activation record by id).
    pub fn get(&self, collection: Collection, name: &str) -> ClientResult<Value> {
        let url = self.entity_url(collection, name)?;
        self.send_json(Method::Get, url, true)
    }

    /// Delete a single entity.
    pub fn delete(&self, collection: Collection, name: &str) -> ClientResult<()> {
        if !collection.is_deletable() {
            return Err(ClientError::NotDeletable(collection));
        }
        let url = self.entity_url(collection, name)?;
        self.send(Method::Delete, url, true).map(|_| ())
    }

    /// Namespaces visible to the configured credentials.
    pub fn namespaces(&self) -> ClientResult<Vec<String>> {
        let url = with_segments(self.base_url()?, ["namespaces"])?;
        self.send_json(Method::Get, url, true)
    }

    /// Platform info document; does not require credentials.
    pub fn info(&self) -> ClientResult<Value> {
        let url = self.base_url()?;
        self.send_json(Method::Get, url, false)
    }

    /// Download a file published next to the API, e.g. an SDK archive.
    pub fn download(&self, file: &str) -> ClientResult<Vec<u8>> {
        let url = with_segments(self.host()?, [file])?;
        self.send(Method::Get, url, false)
    }

    /// Parsed API host. A host without a scheme is taken to be `https://`.
    fn host(&self) -> ClientResult<Url> {
        let raw = non_empty(self.config.api_host.as_deref()).ok_or(ClientError::MissingApiHost)?;
        let candidate = if raw.contains("://") {
            raw.to_string()
        } else {
            format!("https://{raw}")
        };

        let url =
            Url::parse(&candidate).map_err(|_| ClientError::InvalidApiHost(raw.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ClientError::InvalidApiHost(raw.to_string()));
        }
        Ok(url)
    }

    fn base_url(&self) -> ClientResult<Url> {
        let version =
            non_empty(self.config.api_version.as_deref()).unwrap_or(DEFAULT_API_VERSION);
        with_segments(self.host()?, ["api", version])
    }

    fn collection_url(&self, collection: Collection) -> ClientResult<Url> {
        with_segments(
            self.base_url()?,
            ["namespaces", self.namespace(), collection.as_str()],
        )
    }

    /// URL of `name` inside `collection`; `pkg/name` addresses a packaged entity.
    fn entity_url(&self, collection: Collection, name: &str) -> ClientResult<Url> {
        let segments: Vec<&str> = name.split('/').collect();
        let valid = segments.len() <= 2
            && segments
                .iter()
                .all(|s| !s.is_empty() && *s != "." && *s != "..");
        if !valid {
            return Err(ClientError::InvalidEntityName(name.to_string()));
        }
        with_segments(self.collection_url(collection)?, segments)
    }

    /// Split a `user:key` token into basic-auth credentials.
    fn credentials(&self) -> ClientResult<Credentials> {
        let token = non_empty(self.config.auth_token.as_deref()).ok_or(ClientError::MissingAuth)?;
        let credentials = match token.split_once(':') {
            Some((user, key)) => Credentials {
                user: user.to_string(),
                password: Some(key.to_string()),
            },
            None => Credentials {
                user: token.to_string(),
                password: None,
            },
        };
        Ok(credentials)
    }

    fn send(&self, method: Method, url: Url, authenticated: bool) -> ClientResult<Vec<u8>> {
        let credentials = if authenticated {
            Some(self.credentials()?)
        } else {
            None
        };
        let url = String::from(url);
        let request = ApiRequest {
            method,
            url: url.clone(),
            credentials,
        };

        debug!("send: {:?} {}", method, url);
        let response = self
            .transport
            .send(&request)
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;
        debug!("send: {} <- {}", response.status, url);

        if response.is_success() {
            Ok(response.body)
        } else {
            Err(ClientError::Status {
                message: error_message(&response.body),
                status: response.status,
                url,
            })
        }
    }

    fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        authenticated: bool,
    ) -> ClientResult<T> {
        let display = url.to_string();
        let body = self.send(method, url, authenticated)?;
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
            url: display,
            source,
        })
    }
}

/// Append percent-encoded path segments, dropping a trailing empty segment first.
fn with_segments<'a>(
    mut url: Url,
    segments: impl IntoIterator<Item = &'a str>,
) -> ClientResult<Url> {
    let invalid = url.to_string();
    url.path_segments_mut()
        .map_err(|_| ClientError::InvalidApiHost(invalid))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Extract `{"error": "..."}` from an error body, falling back to the raw text.
fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string())
}
