//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use serde_json::Value;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green "ok:" prefix)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", "ok".green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print a `key: value` line with a dimmed key
pub fn field(key: &str, value: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", key.dimmed(), value);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Print a JSON document, pretty-printed
pub fn json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", value),
    }
}

/// One-line summary of an entity as `/namespace/name`, falling back to the activation id.
pub fn entity_line(entity: &Value) -> String {
    let name = entity
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let namespace = entity.get("namespace").and_then(Value::as_str);
    let activation_id = entity.get("activationId").and_then(Value::as_str);

    match (namespace, activation_id) {
        (_, Some(id)) => format!("{} {}", id, name),
        (Some(ns), None) => format!("/{}/{}", ns, name),
        (None, None) => name.to_string(),
    }
}
