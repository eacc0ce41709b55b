//! Tests for process bootstrap: props path, props read, env merge, client construction

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use wsk::application::ApplicationError;
use wsk::infrastructure::di::Bootstrap;
use wsk::infrastructure::{BootstrapError, ClientError};
use wsk::util::testing::{init_test_setup, MockTransport};

fn no_env() -> Vec<(String, String)> {
    Vec::new()
}

fn bootstrap_with(path: &std::path::Path, env: Vec<(String, String)>) -> Bootstrap {
    Bootstrap::new()
        .with_props_path(path.to_string_lossy())
        .with_env(env)
        .with_transport(Arc::new(MockTransport::new()))
}

#[test]
fn given_props_file_when_bootstrapping_then_client_uses_file_values() {
    // Arrange
    init_test_setup();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".wskprops");
    fs::write(&path, "NAMESPACE=guest\nAUTH=abc123\n").unwrap();

    // Act
    let ctx = bootstrap_with(&path, no_env()).run().unwrap();

    // Assert
    let config = ctx.client().config();
    assert_eq!(config.namespace.as_deref(), Some("guest"));
    assert_eq!(config.auth_token.as_deref(), Some("abc123"));
    assert_eq!(ctx.props_path(), path.as_path());
}

#[test]
fn given_env_override_when_bootstrapping_then_env_wins() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".wskprops");
    fs::write(&path, "NAMESPACE=guest\nAUTH=from-file\n").unwrap();
    let env = vec![("WSK_AUTH".to_string(), "from-env".to_string())];

    // Act
    let ctx = bootstrap_with(&path, env).run().unwrap();

    // Assert
    let config = ctx.client().config();
    assert_eq!(config.auth_token.as_deref(), Some("from-env"));
    assert_eq!(config.namespace.as_deref(), Some("guest"));
}

#[test]
fn given_missing_props_file_when_bootstrapping_then_succeeds_with_empty_config() {
    let temp = TempDir::new().unwrap();

    let ctx = bootstrap_with(&temp.path().join("absent"), no_env())
        .run()
        .unwrap();

    assert_eq!(ctx.client().config(), &wsk::config::ClientConfig::default());
    assert_eq!(ctx.client().namespace(), "_");
}

#[test]
fn given_unreadable_props_path_when_bootstrapping_then_props_error() {
    // A directory cannot be read as a file
    let temp = TempDir::new().unwrap();

    let result = bootstrap_with(temp.path(), no_env()).run();

    assert!(matches!(
        result,
        Err(BootstrapError::Props(ApplicationError::ConfigRead { .. }))
    ));
}

#[test]
fn given_undefined_variable_in_path_when_bootstrapping_then_path_expansion_error() {
    let result = Bootstrap::new()
        .with_props_path("$WSK_TEST_SURELY_UNDEFINED_VARIABLE/.wskprops")
        .with_env(no_env())
        .with_transport(Arc::new(MockTransport::new()))
        .run();

    let err = result.unwrap_err();
    assert!(matches!(err, BootstrapError::PathExpansion(_)));
    assert!(err.to_string().contains("WSK_TEST_SURELY_UNDEFINED_VARIABLE"));
}

#[test]
fn given_malformed_api_host_when_bootstrapping_then_succeeds_and_fails_on_first_use() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".wskprops");
    fs::write(&path, "APIHOST=ftp://example.test\nAUTH=user:key\n").unwrap();

    // Act
    let ctx = bootstrap_with(&path, no_env()).run().unwrap();

    // Assert
    assert!(matches!(
        ctx.client().namespaces(),
        Err(ClientError::InvalidApiHost(_))
    ));
}

#[test]
fn given_lowercase_config_file_env_when_bootstrapping_then_matched_like_other_overrides() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.props");
    fs::write(&path, "NAMESPACE=from-custom-file\n").unwrap();
    let env = vec![
        (
            "wsk_config_file".to_string(),
            path.to_string_lossy().into_owned(),
        ),
        ("wsk_auth".to_string(), "user:key".to_string()),
    ];

    // Act
    let ctx = Bootstrap::new()
        .with_env(env)
        .with_transport(Arc::new(MockTransport::new()))
        .run()
        .unwrap();

    // Assert
    assert_eq!(ctx.props_path(), path.as_path());
    assert_eq!(ctx.client().namespace(), "from-custom-file");
    assert_eq!(ctx.client().config().auth_token.as_deref(), Some("user:key"));
}

#[test]
fn given_config_file_env_when_bootstrapping_then_reads_that_file() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.props");
    fs::write(&path, "NAMESPACE=from-custom-file\n").unwrap();
    let env = vec![(
        "WSK_CONFIG_FILE".to_string(),
        path.to_string_lossy().into_owned(),
    )];

    // Act
    let ctx = Bootstrap::new()
        .with_env(env)
        .with_transport(Arc::new(MockTransport::new()))
        .run()
        .unwrap();

    // Assert
    assert_eq!(ctx.props_path(), path.as_path());
    assert_eq!(ctx.client().namespace(), "from-custom-file");
}

#[test]
fn given_explicit_path_and_config_file_env_when_bootstrapping_then_explicit_wins() {
    let temp = TempDir::new().unwrap();
    let explicit = temp.path().join("explicit.props");
    fs::write(&explicit, "NAMESPACE=explicit\n").unwrap();
    let env = vec![(
        "WSK_CONFIG_FILE".to_string(),
        temp.path().join("other.props").to_string_lossy().into_owned(),
    )];

    let ctx = bootstrap_with(&explicit, env).run().unwrap();

    assert_eq!(ctx.client().namespace(), "explicit");
}
