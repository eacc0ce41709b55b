//! Application context handed to every command
//!
//! Holds the shared client handle and the props file it was built from.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::services::PropsStore;
use crate::infrastructure::client::WhiskClient;
use crate::infrastructure::traits::FileSystem;

/// Everything a command needs, constructed once by [`Bootstrap`](super::Bootstrap).
///
/// Commands receive `&AppContext`; nothing hands out mutable access, so the
/// client cannot be replaced after startup.
pub struct AppContext {
    props_path: PathBuf,
    fs: Arc<dyn FileSystem>,
    client: WhiskClient,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("props_path", &self.props_path)
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    pub(crate) fn new(props_path: PathBuf, fs: Arc<dyn FileSystem>, client: WhiskClient) -> Self {
        Self {
            props_path,
            fs,
            client,
        }
    }

    /// Expanded path of the props file.
    pub fn props_path(&self) -> &Path {
        &self.props_path
    }

    pub fn client(&self) -> &WhiskClient {
        &self.client
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    /// Props store over the same filesystem the context was bootstrapped with.
    pub fn props_store(&self) -> PropsStore {
        PropsStore::new(Arc::clone(&self.fs))
    }
}
