//! The flat map from relative file name to owning search directory.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::directory::DirectoryLoader;
use crate::walker::DirectoryWalker;

/// Every file under the search directories, keyed by its path relative to the
/// directory that owns it.
///
/// Directories are scanned in order and the first one holding a relative
/// name claims it; later directories never overwrite a claim. An index is
/// built once and never updated in place.
#[derive(Debug, Default)]
pub struct FileIndex {
    directories: Vec<DirectoryLoader>,
    owners: HashMap<String, usize>,
}

impl FileIndex {
    /// Creates an index with no directories. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scans `directories` in order with `walker`.
    pub fn build<W>(directories: impl IntoIterator<Item = PathBuf>, walker: &W) -> Self
    where
        W: DirectoryWalker + ?Sized,
    {
        let mut index = Self::empty();
        for root in directories {
            let slot = index.directories.len();
            let files = walker.walk(&root);
            let mut claimed = 0usize;
            for name in files {
                if let Entry::Vacant(entry) = index.owners.entry(name) {
                    entry.insert(slot);
                    claimed += 1;
                }
            }
            tracing::debug!(root = %root.display(), claimed, "indexed search directory");
            index.directories.push(DirectoryLoader::new(root));
        }
        index
    }

    /// Returns the directory that owns `relative`, if any.
    pub fn owner(&self, relative: &str) -> Option<&DirectoryLoader> {
        self.owner_slot(relative).map(|slot| &self.directories[slot])
    }

    /// Returns the position of the owning directory in scan order.
    pub fn owner_slot(&self, relative: &str) -> Option<usize> {
        self.owners.get(relative).copied()
    }

    /// Returns the directory at `slot` in scan order.
    pub fn directory(&self, slot: usize) -> Option<&DirectoryLoader> {
        self.directories.get(slot)
    }

    /// Returns the scanned directories in precedence order.
    pub fn directories(&self) -> &[DirectoryLoader] {
        &self.directories
    }

    /// Returns the number of indexed file names.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Returns `true` if no file names are indexed.
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
