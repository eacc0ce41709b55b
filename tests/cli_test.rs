//! Tests running the `wsk` binary: startup failure and help output

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

use wsk::exitcode;

fn wsk(props_path: &std::path::Path, args: &[&str]) -> Output {
    wsk_with_env(props_path, &[], args)
}

fn wsk_with_env(props_path: &std::path::Path, env: &[(&str, &str)], args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wsk"))
        .env_clear()
        .env("WSK_CONFIG_FILE", props_path)
        .env("NO_COLOR", "1")
        .envs(env.iter().copied())
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn given_no_props_file_when_running_version_then_succeeds() {
    let temp = TempDir::new().unwrap();

    let output = wsk(&temp.path().join("absent"), &["version"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn given_unreadable_props_file_when_starting_then_exits_before_any_command() {
    let temp = TempDir::new().unwrap();

    let output = wsk(temp.path(), &["version"]);

    assert_eq!(output.status.code(), Some(exitcode::CONFIG));
    assert!(stderr(&output).contains("cannot read props file"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn given_registered_commands_when_requesting_help_then_hidden_ones_are_not_listed() {
    let temp = TempDir::new().unwrap();

    let output = wsk(&temp.path().join("absent"), &["--help"]);

    let help = stdout(&output);
    assert!(output.status.success());
    assert!(help.lines().any(|l| l.trim_start().starts_with("whoami")));
    assert!(!help.lines().any(|l| l.trim_start().starts_with("props")));
    assert!(!help.lines().any(|l| l.trim_start().starts_with("config")));
}

#[test]
fn given_hidden_command_when_invoking_then_it_runs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".wskprops");
    fs::write(&path, "NAMESPACE=guest\n").unwrap();

    let output = wsk(&path, &["props"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "NAMESPACE=guest\n");
}

#[test]
fn given_namespace_in_file_and_env_when_running_whoami_then_env_wins() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".wskprops");
    fs::write(&path, "NAMESPACE=guest\n").unwrap();

    let from_file = wsk(&path, &["whoami"]);
    let from_env = wsk_with_env(&path, &[("WSK_NAMESPACE", "ci")], &["whoami"]);

    assert_eq!(stdout(&from_file), "guest\n");
    assert_eq!(stdout(&from_env), "ci\n");
}

#[test]
fn given_no_api_host_when_listing_actions_then_config_exit_code() {
    let temp = TempDir::new().unwrap();

    let output = wsk(&temp.path().join("absent"), &["action", "list"]);

    assert_eq!(output.status.code(), Some(exitcode::CONFIG));
    assert!(stderr(&output).contains("API host is not configured"));
}

#[test]
fn given_unknown_command_when_running_then_usage_failure() {
    let temp = TempDir::new().unwrap();

    let output = wsk(&temp.path().join("absent"), &["no-such-command"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn given_host_without_valid_scheme_when_running_local_commands_then_they_still_work() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".wskprops");
    fs::write(&path, "APIHOST=ftp://openwhisk.example.com\n").unwrap();

    // Act
    let version = wsk(&path, &["version"]);
    let help = wsk(&path, &["--help"]);
    let fix = wsk(&path, &["props", "set", "APIHOST", "https://fixed.example"]);

    // Assert
    assert!(version.status.success(), "stderr: {}", stderr(&version));
    assert!(help.status.success(), "stderr: {}", stderr(&help));
    assert!(fix.status.success(), "stderr: {}", stderr(&fix));
    assert_eq!(fs::read_to_string(&path).unwrap(), "APIHOST=https://fixed.example\n");
}

#[test]
fn given_host_with_invalid_scheme_when_listing_then_config_exit_code() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".wskprops");
    fs::write(&path, "APIHOST=ftp://openwhisk.example.com\nAUTH=u:k\n").unwrap();

    let output = wsk(&path, &["action", "list"]);

    assert_eq!(output.status.code(), Some(exitcode::CONFIG));
    assert!(stderr(&output).contains("invalid API host"));
}

#[cfg(unix)]
#[test]
fn given_unrelated_non_utf8_variable_when_starting_then_runs_normally() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".wskprops");
    fs::write(&path, "NAMESPACE=guest\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_wsk"))
        .env_clear()
        .env("WSK_CONFIG_FILE", &path)
        .env("NO_COLOR", "1")
        .env("UNRELATED", OsStr::from_bytes(b"\xff\xfe"))
        .env("WSK_NAMESPACE", "ci")
        .args(["whoami"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "ci\n");
}
