//! Tests for ClientConfig resolution: props file values and WSK_* overrides.
//!
//! Environment overrides are injected through `environment_from`, so these
//! tests never touch the process environment.

use rstest::rstest;

use wsk::config::{environment_from, ClientConfig};
use wsk::domain::Props;

fn no_env() -> Vec<(String, String)> {
    Vec::new()
}

#[test]
fn given_namespace_and_auth_in_props_when_resolving_then_both_set() {
    // Arrange
    let props = Props::parse("NAMESPACE=guest\nAUTH=abc123");

    // Act
    let config = ClientConfig::resolve(&props, environment_from(no_env()));

    // Assert
    assert_eq!(config.namespace.as_deref(), Some("guest"));
    assert_eq!(config.auth_token.as_deref(), Some("abc123"));
    assert_eq!(config.api_host, None);
    assert_eq!(config.api_version, None);
}

#[test]
fn given_env_auth_override_when_resolving_then_env_wins() {
    // Arrange
    let props = Props::parse("NAMESPACE=guest\n");
    let env = environment_from([("WSK_AUTH", "env-user:env-key")]);

    // Act
    let config = ClientConfig::resolve(&props, env);

    // Assert
    assert_eq!(config.auth_token.as_deref(), Some("env-user:env-key"));
    assert_eq!(config.namespace.as_deref(), Some("guest"));
}

#[rstest]
#[case::namespace("NAMESPACE", "WSK_NAMESPACE")]
#[case::auth("AUTH", "WSK_AUTH")]
#[case::api_host("APIHOST", "WSK_APIHOST")]
#[case::api_version("APIVERSION", "WSK_APIVERSION")]
fn given_same_field_in_props_and_env_when_resolving_then_env_wins(
    #[case] props_key: &str,
    #[case] env_key: &str,
) {
    // Arrange
    let props: Props = [(props_key, "from-file")].into_iter().collect();
    let env = environment_from([(env_key, "from-env")]);

    // Act
    let config = ClientConfig::resolve(&props, env);

    // Assert
    let fields = [
        config.namespace,
        config.auth_token,
        config.api_host,
        config.api_version,
    ];
    assert_eq!(
        fields.iter().filter(|f| f.as_deref() == Some("from-env")).count(),
        1
    );
    assert!(fields.iter().all(|f| f.as_deref() != Some("from-file")));
}

#[test]
fn given_empty_props_and_env_when_resolving_then_all_fields_absent() {
    let config = ClientConfig::resolve(&Props::default(), environment_from(no_env()));

    assert_eq!(config, ClientConfig::default());
}

#[test]
fn given_env_only_when_resolving_then_fields_come_from_env() {
    let env = environment_from([
        ("WSK_NAMESPACE", "ci"),
        ("WSK_APIHOST", "https://example.test"),
    ]);

    let config = ClientConfig::resolve(&Props::default(), env);

    assert_eq!(config.namespace.as_deref(), Some("ci"));
    assert_eq!(config.api_host.as_deref(), Some("https://example.test"));
    assert_eq!(config.auth_token, None);
}

#[test]
fn given_empty_env_value_when_resolving_then_presence_overrides_file() {
    let props = Props::parse("AUTH=abc123\n");
    let env = environment_from([("WSK_AUTH", "")]);

    let config = ClientConfig::resolve(&props, env);

    assert_eq!(config.auth_token.as_deref(), Some(""));
}

#[test]
fn given_unrecognized_keys_when_resolving_then_ignored() {
    // Arrange
    let props = Props::parse("EDITOR=vim\nNAMESPACE=guest\nauth=lowercase-is-not-auth\n");
    let env = environment_from([("WSK_EDITOR", "emacs"), ("OTHER_AUTH", "nope")]);

    // Act
    let config = ClientConfig::resolve(&props, env);

    // Assert
    assert_eq!(config.namespace.as_deref(), Some("guest"));
    assert_eq!(config.auth_token, None);
}

#[test]
fn given_unprefixed_env_var_when_resolving_then_not_an_override() {
    let props = Props::parse("AUTH=abc123\n");
    let env = environment_from([("AUTH", "unprefixed")]);

    let config = ClientConfig::resolve(&props, env);

    assert_eq!(config.auth_token.as_deref(), Some("abc123"));
}
