//! Reading templates out of a single known directory.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use quire_common::ContentHash;

use crate::error::{LoaderError, TemplateNotFound};

/// File access for templates under one search directory.
///
/// Names passed in are actual file names relative to the directory, as
/// recorded in the [`FileIndex`](crate::FileIndex); no extension is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    /// Creates a loader for `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory this loader reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the full path of `name`, failing if it is not a file under the directory.
    pub fn find(&self, name: &str) -> Result<PathBuf, LoaderError> {
        let path = self.root.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(TemplateNotFound::new(name).into())
        }
    }

    /// Reads the template text of `name`.
    pub fn read_source(&self, name: &str) -> Result<String, LoaderError> {
        let path = self.find(name)?;
        std::fs::read_to_string(&path).map_err(|source| LoaderError::Io { path, source })
    }

    /// Returns the cache key for `name`: the hex XXH3-128 of its full path.
    pub fn cache_key(&self, name: &str) -> Result<String, LoaderError> {
        let path = self.find(name)?;
        Ok(ContentHash::from_bytes(path.to_string_lossy().as_bytes()).to_hex())
    }

    /// Returns `true` if `name` was last modified at or before `time`.
    pub fn is_fresh(&self, name: &str, time: SystemTime) -> Result<bool, LoaderError> {
        let path = self.find(name)?;
        let modified = std::fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .map_err(|source| LoaderError::Io { path, source })?;
        Ok(modified <= time)
    }
}
