//! Client configuration resolution
//!
//! Precedence (lowest to highest):
//! 1. Props file: `~/.wskprops` (or `$WSK_CONFIG_FILE`)
//! 2. Environment variables: `WSK_*` prefix, matched ignoring ASCII case
//!
//! Resolution is total: absent keys leave the field unset, unrecognized
//! keys are ignored.

use std::collections::HashMap;

use config::{Config, Environment};
use serde::Serialize;
use tracing::{debug, warn};

use crate::application::ApplicationError;
use crate::domain::Props;

/// Prefix of environment variables that override props file values.
pub const ENV_PREFIX: &str = "WSK";

/// Environment variable naming an alternative props file.
pub const CONFIG_FILE_ENV: &str = "WSK_CONFIG_FILE";

/// Props file location when no override is given.
pub const DEFAULT_PROPS_FILE: &str = "~/.wskprops";

/// Props keys understood by the client.
pub const NAMESPACE_KEY: &str = "NAMESPACE";
pub const AUTH_KEY: &str = "AUTH";
pub const APIHOST_KEY: &str = "APIHOST";
pub const APIVERSION_KEY: &str = "APIVERSION";

/// Configuration handed to the API client.
///
/// `None` means no source supplied the property; `Some("")` means a source
/// supplied an empty value.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Namespace,
    AuthToken,
    ApiHost,
    ApiVersion,
}

/// Props key → config field. Environment variables use the same names behind `WSK_`.
const RECOGNIZED: [(&str, Field); 4] = [
    (NAMESPACE_KEY, Field::Namespace),
    (AUTH_KEY, Field::AuthToken),
    (APIHOST_KEY, Field::ApiHost),
    (APIVERSION_KEY, Field::ApiVersion),
];

impl ClientConfig {
    /// Merge props file values with environment overrides.
    ///
    /// For every recognized field the environment value wins when present,
    /// even if empty.
    pub fn resolve(props: &Props, env: Environment) -> Self {
        let config = Self::from_props(props);
        config.apply_env_overrides(env)
    }

    /// Build a configuration from props file values only.
    pub fn from_props(props: &Props) -> Self {
        let mut config = Self::default();
        for (key, field) in RECOGNIZED {
            if let Some(value) = props.get(key) {
                *config.slot(field) = Some(value.to_string());
            }
        }
        config
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Namespace => &mut self.namespace,
            Field::AuthToken => &mut self.auth_token,
            Field::ApiHost => &mut self.api_host,
            Field::ApiVersion => &mut self.api_version,
        }
    }

    /// Apply WSK_* environment variables as explicit overrides.
    fn apply_env_overrides(mut self, env: Environment) -> Self {
        let config = match Config::builder().add_source(env).build() {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring environment overrides: {}", e);
                return self;
            }
        };

        for (key, field) in RECOGNIZED {
            if let Ok(value) = config.get_string(&key.to_lowercase()) {
                debug!("apply_env_overrides: {}_{} overrides props file", ENV_PREFIX, key);
                *self.slot(field) = Some(value);
            }
        }

        self
    }

    /// Copy with the auth token masked, for display.
    pub fn masked(&self) -> Self {
        Self {
            auth_token: self.auth_token.as_deref().map(mask_token),
            ..self.clone()
        }
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

/// Snapshot of the process environment.
///
/// Variables whose name or value is not valid UTF-8 are left out; they can
/// never be a `WSK_*` override and must not stop resolution.
pub fn process_vars() -> HashMap<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                debug!("process_vars: skipping non-UTF-8 variable {:?}", key);
                None
            }
        })
        .collect()
}

/// Look up `name` the way the `WSK_*` overrides are matched: an exact match
/// first, otherwise ignoring ASCII case.
pub fn lookup_var<'a>(vars: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    vars.get(name)
        .or_else(|| {
            vars.iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
        .map(String::as_str)
}

/// Environment source reading the given variables instead of the process environment.
pub fn environment_from<I, K, V>(vars: I) -> Environment
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let source: config::Map<String, String> = vars
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    Environment::with_prefix(ENV_PREFIX).source(Some(source))
}

/// Keep the user part of a `user:key` token, hide the rest.
fn mask_token(token: &str) -> String {
    match token.split_once(':') {
        Some((user, _)) => format!("{user}:********"),
        None if token.is_empty() => String::new(),
        None => "********".to_string(),
    }
}
