//! Process bootstrap
//!
//! Resolves the props file path, reads the props, merges environment
//! overrides and constructs the shared API client. Runs once, before any
//! command is registered. Failures are returned as [`BootstrapError`];
//! deciding to exit is left to `main`.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::application::services::PropsStore;
use crate::config::{
    environment_from, lookup_var, process_vars, ClientConfig, CONFIG_FILE_ENV, DEFAULT_PROPS_FILE,
};
use crate::domain::expand_path;
use crate::infrastructure::client::WhiskClient;
use crate::infrastructure::di::AppContext;
use crate::infrastructure::error::BootstrapError;
use crate::infrastructure::traits::{FileSystem, HttpTransport, RealFileSystem, Transport};

/// Builder for the startup sequence.
///
/// Defaults read the process environment, the real filesystem and talk
/// HTTP; each can be replaced, which is how tests bootstrap in isolation.
#[must_use = "bootstrap does nothing until .run() is called"]
pub struct Bootstrap {
    props_path: Option<String>,
    env: Option<HashMap<String, String>>,
    fs: Arc<dyn FileSystem>,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self {
            props_path: None,
            env: None,
            fs: Arc::new(RealFileSystem),
            transport: None,
        }
    }
}

impl Bootstrap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this props file instead of `$WSK_CONFIG_FILE` / `~/.wskprops`.
    ///
    /// The path is still expanded (`~`, `$VAR`).
    pub fn with_props_path(mut self, path: impl Into<String>) -> Self {
        self.props_path = Some(path.into());
        self
    }

    /// Read environment overrides from `vars` instead of the process environment.
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn with_fs(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Raw (unexpanded) props file path by precedence: explicit, `$WSK_CONFIG_FILE`, default.
    ///
    /// `WSK_CONFIG_FILE` is matched with the same case rule as the other `WSK_*` overrides.
    fn raw_props_path(&self, vars: &HashMap<String, String>) -> String {
        if let Some(path) = &self.props_path {
            return path.clone();
        }
        lookup_var(vars, CONFIG_FILE_ENV)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PROPS_FILE)
            .to_string()
    }

    /// Run the startup sequence and return the application context.
    pub fn run(self) -> Result<AppContext, BootstrapError> {
        let vars = self.env.clone().unwrap_or_else(process_vars);
        let raw = self.raw_props_path(&vars);
        let props_path = expand_path(&raw).map_err(BootstrapError::PathExpansion)?;
        debug!("run: props file {}", props_path.display());

        let props = PropsStore::new(Arc::clone(&self.fs)).read(&props_path)?;

        let config = ClientConfig::resolve(&props, environment_from(vars));

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new().map_err(BootstrapError::Transport)?),
        };
        let client = WhiskClient::new(transport, config)?;

        Ok(AppContext::new(props_path, self.fs, client))
    }
}

/// Bootstrap with process defaults.
pub fn bootstrap() -> Result<AppContext, BootstrapError> {
    Bootstrap::new().run()
}
