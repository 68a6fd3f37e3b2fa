//! Extension-fallback name resolution with memoized hits and misses.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::directory::DirectoryLoader;
use crate::error::TemplateNotFound;
use crate::extension::ExtensionList;
use crate::index::FileIndex;
use crate::walker::{DirectoryWalker, FsWalker};

/// A logical name resolved to a real file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    /// The logical name with the matching suffix appended.
    pub actual_name: String,
    /// The search directory that owns `actual_name`.
    pub directory: &'a DirectoryLoader,
}

/// Resolves logical names against a [`FileIndex`] by trying each suffix of an
/// [`ExtensionList`] in declaration order.
///
/// Results are memoized in two maps, one for names that resolved and one for
/// names that did not. Both are only ever cleared by [`NameResolver::rebuild`],
/// which also replaces the index. A name is never in both maps.
///
/// Lookups take `&self` and memoize through a `RefCell`, so a resolver must
/// stay on one thread.
#[derive(Debug)]
pub struct NameResolver<W = FsWalker> {
    extensions: ExtensionList,
    walker: W,
    index: FileIndex,
    resolved: RefCell<HashMap<String, (String, usize)>>,
    failed: RefCell<HashMap<String, TemplateNotFound>>,
    lookups: Cell<usize>,
    generation: u64,
}

impl NameResolver<FsWalker> {
    /// Creates a resolver that scans the real filesystem.
    pub fn new(extensions: ExtensionList) -> Self {
        Self::with_walker(extensions, FsWalker)
    }
}

impl<W: DirectoryWalker> NameResolver<W> {
    /// Creates a resolver that scans directories with `walker`.
    ///
    /// The index starts empty, so every name fails until the first rebuild.
    pub fn with_walker(extensions: ExtensionList, walker: W) -> Self {
        Self {
            extensions,
            walker,
            index: FileIndex::empty(),
            resolved: RefCell::new(HashMap::new()),
            failed: RefCell::new(HashMap::new()),
            lookups: Cell::new(0),
            generation: 0,
        }
    }

    /// Rescans every search directory and forgets all memoized lookups.
    ///
    /// Paths that are not directories are dropped. `base` directories are
    /// scanned before `extra` ones, so they win when both hold the same
    /// relative name.
    pub fn rebuild<B, E>(&mut self, base: B, extra: E)
    where
        B: IntoIterator<Item = PathBuf>,
        E: IntoIterator<Item = PathBuf>,
    {
        let directories: Vec<PathBuf> = base
            .into_iter()
            .filter(|path| path.is_dir())
            .chain(extra.into_iter().filter(|path| path.is_dir()))
            .collect();

        let index = FileIndex::build(directories, &self.walker);
        self.index = index;
        self.resolved.get_mut().clear();
        self.failed.get_mut().clear();
        self.lookups.set(0);
        self.generation += 1;

        tracing::debug!(
            generation = self.generation,
            directories = self.index.directories().len(),
            files = self.index.len(),
            "rebuilt template index"
        );
    }

    /// Resolves `name` to the first indexed `name + suffix`.
    pub fn resolve(&self, name: &str) -> Result<Resolved<'_>, TemplateNotFound> {
        if let Some((actual_name, slot)) = self.resolved.borrow().get(name) {
            return Ok(self.resolved_at(actual_name.clone(), *slot));
        }
        if let Some(err) = self.failed.borrow().get(name) {
            return Err(err.clone());
        }

        for suffix in self.extensions.suffixes() {
            let actual_name = format!("{name}{suffix}");
            self.lookups.set(self.lookups.get() + 1);
            if let Some(slot) = self.index.owner_slot(&actual_name) {
                self.resolved
                    .borrow_mut()
                    .insert(name.to_string(), (actual_name.clone(), slot));
                return Ok(self.resolved_at(actual_name, slot));
            }
        }

        tracing::debug!(name, "template not found");
        let err = TemplateNotFound::new(name);
        self.failed
            .borrow_mut()
            .insert(name.to_string(), err.clone());
        Err(err)
    }

    fn resolved_at(&self, actual_name: String, slot: usize) -> Resolved<'_> {
        Resolved {
            actual_name,
            directory: &self.index.directories()[slot],
        }
    }

    /// Returns the extension list names are resolved with.
    pub fn extensions(&self) -> &ExtensionList {
        &self.extensions
    }

    /// Returns the current index.
    pub fn index(&self) -> &FileIndex {
        &self.index
    }

    /// Returns the walker used for rebuilds.
    pub fn walker(&self) -> &W {
        &self.walker
    }

    /// Returns how many rebuilds have run.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns how many index lookups have run since the last rebuild.
    ///
    /// Memoized answers do not touch the index and leave this unchanged.
    pub fn index_lookups(&self) -> usize {
        self.lookups.get()
    }

    /// Returns the number of memoized successful lookups.
    pub fn cached_resolutions(&self) -> usize {
        self.resolved.borrow().len()
    }

    /// Returns the number of memoized failed lookups.
    pub fn cached_failures(&self) -> usize {
        self.failed.borrow().len()
    }
}
