//! Domain entities: core data structures

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::domain::DomainError;

/// Key/value mapping parsed from a properties file.
///
/// Keys are case-sensitive. When a key appears more than once the last
/// occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    entries: BTreeMap<String, String>,
}

impl Props {
    /// Parse properties file content.
    ///
    /// Recognizes `KEY=VALUE` lines:
    /// - blank lines and lines starting with `#` are ignored
    /// - the line is split on the first `=`; key and value are trimmed
    /// - lines without `=` or with an empty key are skipped
    ///
    /// Values are kept literally: no quote stripping, no variable expansion.
    pub fn parse(content: &str) -> Self {
        let mut entries = BTreeMap::new();

        for line in content.lines() {
            if let Some((key, value)) = parse_props_line(line) {
                entries.insert(key.to_string(), value.to_string());
            }
        }

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Props {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Parse a single properties line into `(key, value)`.
///
/// Returns `None` for blank lines, comments and malformed lines.
fn parse_props_line(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (key, value) = trimmed.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some((key, value.trim()))
}

/// Check that `key` can be written back as a `KEY=VALUE` line and parsed again.
pub fn validate_props_key(key: &str) -> Result<(), DomainError> {
    let valid = !key.is_empty()
        && !key.starts_with('#')
        && !key.contains('=')
        && !key.chars().any(char::is_whitespace);

    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidKey(key.to_string()))
    }
}

/// Check that `value` fits on a single `KEY=VALUE` line.
pub fn validate_props_value(key: &str, value: &str) -> Result<(), DomainError> {
    if value.contains(['\n', '\r']) {
        return Err(DomainError::InvalidValue {
            key: key.to_string(),
            reason: "line breaks are not allowed".to_string(),
        });
    }
    Ok(())
}

/// Rewrite properties file content with `key` set to `value`, or removed when `value` is `None`.
///
/// Comments and unrelated lines are preserved. Setting a key replaces its
/// last occurrence in place and drops earlier duplicates; a new key is appended.
pub fn update_props_content(content: &str, key: &str, value: Option<&str>) -> String {
    let is_target = |line: &str| matches!(parse_props_line(line), Some((k, _)) if k == key);

    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    let last = lines.iter().rposition(|l| is_target(l.as_str()));

    match (value, last) {
        (Some(value), Some(index)) => {
            lines[index] = format!("{key}={value}");
            let mut current = 0;
            lines.retain(|l| {
                let keep = current == index || !is_target(l.as_str());
                current += 1;
                keep
            });
        }
        (Some(value), None) => lines.push(format!("{key}={value}")),
        (None, _) => lines.retain(|l| !is_target(l.as_str())),
    }

    if lines.is_empty() {
        String::new()
    } else {
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Expand `~`, `$VAR` and `${VAR}` in a path.
///
/// Unlike lenient expansion, this fails when the home directory cannot be
/// determined for a leading `~` or when a referenced variable is undefined.
pub fn expand_path(raw: &str) -> Result<PathBuf, DomainError> {
    let home = directories::BaseDirs::new()
        .and_then(|dirs| dirs.home_dir().to_str().map(str::to_string));

    if raw.starts_with('~') && home.is_none() {
        return Err(DomainError::PathExpansion {
            path: raw.to_string(),
            reason: "home directory is not available or not valid UTF-8".to_string(),
        });
    }

    let expanded =
        shellexpand::full_with_context(raw, || home.as_deref(), |var| std::env::var(var).map(Some))
            .map_err(|e| DomainError::PathExpansion {
                path: raw.to_string(),
                reason: e.to_string(),
            })?;

    Ok(PathBuf::from(expanded.into_owned()))
}

/// Entity collections exposed by the platform API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Actions,
    Triggers,
    Rules,
    Packages,
    Activations,
}

impl Collection {
    /// Every collection, in listing order.
    pub const ALL: [Collection; 5] = [
        Collection::Actions,
        Collection::Triggers,
        Collection::Rules,
        Collection::Packages,
        Collection::Activations,
    ];

    /// Collections whose entities are owned by the user and can be deleted.
    pub const DELETABLE: [Collection; 4] = [
        Collection::Rules,
        Collection::Triggers,
        Collection::Actions,
        Collection::Packages,
    ];

    /// Path segment used by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Actions => "actions",
            Collection::Triggers => "triggers",
            Collection::Rules => "rules",
            Collection::Packages => "packages",
            Collection::Activations => "activations",
        }
    }

    /// Activations are records, not user-managed entities.
    pub fn is_deletable(&self) -> bool {
        !matches!(self, Collection::Activations)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
