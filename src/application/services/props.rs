//! Properties file service
//!
//! Reads the props file into a [`Props`] mapping and writes single keys back.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{update_props_content, validate_props_key, validate_props_value, Props};
use crate::infrastructure::traits::FileSystem;

/// Service for reading and updating the properties file.
pub struct PropsStore {
    fs: Arc<dyn FileSystem>,
}

impl PropsStore {
    /// Create a new props store.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read and parse the props file at `path`.
    ///
    /// A missing file yields an empty mapping: the CLI works with zero
    /// configuration. Any other read failure (directory, permissions,
    /// non-UTF-8 content) is a [`ApplicationError::ConfigRead`].
    pub fn read(&self, path: &Path) -> ApplicationResult<Props> {
        match self.read_content(path)? {
            Some(content) => {
                let props = Props::parse(&content);
                debug!("read: {} keys from {}", props.len(), path.display());
                Ok(props)
            }
            None => {
                debug!("read: no props file at {}", path.display());
                Ok(Props::default())
            }
        }
    }

    /// Set `key` to `value`, creating the file if needed.
    pub fn set(&self, path: &Path, key: &str, value: &str) -> ApplicationResult<()> {
        validate_props_key(key)?;
        validate_props_value(key, value)?;
        let content = self.read_content(path)?.unwrap_or_default();
        let updated = update_props_content(&content, key, Some(value));
        debug!("set: {} in {}", key, path.display());
        self.write_content(path, &updated)
    }

    /// Remove every line for `key`.
    ///
    /// Returns `false` (and leaves the file untouched) when the key was not present.
    pub fn unset(&self, path: &Path, key: &str) -> ApplicationResult<bool> {
        let Some(content) = self.read_content(path)? else {
            return Ok(false);
        };
        if Props::parse(&content).get(key).is_none() {
            return Ok(false);
        }

        let updated = update_props_content(&content, key, None);
        debug!("unset: {} in {}", key, path.display());
        self.write_content(path, &updated)?;
        Ok(true)
    }

    fn read_content(&self, path: &Path) -> ApplicationResult<Option<String>> {
        self.fs
            .read_to_string(path)
            .if_exists()
            .map_err(|source| ApplicationError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })
    }

    fn write_content(&self, path: &Path, content: &str) -> ApplicationResult<()> {
        let write_err = |source| ApplicationError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };
        self.fs.ensure_parent(path).map_err(write_err)?;
        self.fs.write_atomic(path, content).map_err(write_err)
    }
}
