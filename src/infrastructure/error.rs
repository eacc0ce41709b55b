//! Infrastructure-level errors: API client and process bootstrap

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{Collection, DomainError};

/// Errors raised by the API client.
///
/// Missing or malformed host and missing credentials are reported here,
/// on first use, rather than when the client is constructed.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API host is not configured (set APIHOST in the props file or WSK_APIHOST)")]
    MissingApiHost,

    #[error("authorization key is not configured (run `wsk auth <key>` or set WSK_AUTH)")]
    MissingAuth,

    #[error("invalid API host '{0}': expected an http:// or https:// URL")]
    InvalidApiHost(String),

    #[error("invalid entity name '{0}': expected NAME or PACKAGE/NAME")]
    InvalidEntityName(String),

    #[error("{0} cannot be deleted")]
    NotDeletable(Collection),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} returned {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for API client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Startup failures. Any of these stops the process before a command runs.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("{0}")]
    PathExpansion(#[source] DomainError),

    #[error("{0}")]
    Props(#[from] ApplicationError),

    #[error("cannot create HTTP transport: {0}")]
    Transport(#[source] std::io::Error),

    #[error("cannot create API client: {0}")]
    Client(#[from] ClientError),
}
