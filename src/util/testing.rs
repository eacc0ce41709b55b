//! Test support: logging setup and a recording transport

use std::collections::HashMap;
use std::env;
use std::io;
use std::sync::{Mutex, Once};

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::infrastructure::traits::{ApiRequest, ApiResponse, Method, Transport};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Transport answering from canned responses and recording every request.
///
/// Unrouted requests get a 404 with a JSON error body, like the platform does.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(Method, String), ApiResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
    offline: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport whose every request fails at the connection level.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    /// Answer `method url` with `status` and `body`.
    pub fn route(self, method: Method, url: &str, status: u16, body: &str) -> Self {
        self.routes
            .lock()
            .expect("routes lock")
            .insert((method, url.to_string()), ApiResponse::new(status, body));
        self
    }

    /// Requests sent so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &ApiRequest) -> io::Result<ApiResponse> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());

        if self.offline {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            ));
        }

        let response = self
            .routes
            .lock()
            .expect("routes lock")
            .get(&(request.method, request.url.clone()))
            .cloned()
            .unwrap_or_else(|| {
                ApiResponse::new(404, r#"{"error":"The requested resource does not exist."}"#)
            });
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
    }

    #[test]
    fn given_unrouted_request_when_sending_then_404_and_recorded() {
        let transport = MockTransport::new();
        let request = ApiRequest {
            method: Method::Get,
            url: "https://example.test/api/v1".into(),
            credentials: None,
        };

        let response = transport.send(&request).unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(transport.requests(), vec![request]);
    }
}
