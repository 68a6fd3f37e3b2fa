//! A loader whose search directories come from the active theme.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use quire_common::{Lifecycle, LifecycleSubscriber, SourceSet};
use quire_theme::{compose_paths, ThemeRegistry};

use crate::error::{LoaderError, TemplateNotFound};
use crate::extension::ExtensionList;
use crate::flexible::FlexibleLoader;
use crate::loader::TemplateLoader;
use crate::refresh::RefreshState;
use crate::resolver::Resolved;
use crate::walker::{DirectoryWalker, FsWalker};

/// Serves templates from the active theme, then its parent theme.
///
/// On every refresh the registry is asked for the active theme and the
/// search directories are composed again, so a theme switch is picked up by
/// the next refresh. Site source paths, when given, are searched before any
/// theme directory.
#[derive(Debug)]
pub struct ThemeLoader<R, W = FsWalker> {
    registry: R,
    inner: FlexibleLoader<W>,
}

impl<R: ThemeRegistry> ThemeLoader<R, FsWalker> {
    /// Creates a loader that serves theme templates only.
    pub fn new(registry: R, extensions: ExtensionList) -> Self {
        Self::with_site(registry, PathBuf::new(), Vec::new(), extensions)
    }

    /// Creates a loader that searches the site's source paths before the theme's.
    pub fn with_site(
        registry: R,
        source_dir: impl Into<PathBuf>,
        source_paths: Vec<String>,
        extensions: ExtensionList,
    ) -> Self {
        Self::with_walker(registry, source_dir, source_paths, extensions, FsWalker)
    }
}

impl<R: ThemeRegistry, W: DirectoryWalker> ThemeLoader<R, W> {
    /// Creates a loader that scans directories with `walker`.
    pub fn with_walker(
        registry: R,
        source_dir: impl Into<PathBuf>,
        source_paths: Vec<String>,
        extensions: ExtensionList,
        walker: W,
    ) -> Self {
        Self {
            registry,
            inner: FlexibleLoader::with_walker(
                source_dir,
                source_paths,
                Vec::new(),
                extensions,
                walker,
            ),
        }
    }

    /// Recomposes the theme directories and rebuilds the index.
    pub fn refresh(&mut self) {
        let theme = self.registry.find_active_theme();
        let paths = compose_paths(theme.as_ref());
        tracing::debug!(
            theme = theme.as_ref().map(|t| t.name.as_str()),
            paths = paths.len(),
            "refreshing theme loader"
        );
        self.inner.set_paths(paths);
        self.inner.refresh_cache();
    }

    /// Returns the theme directories found by the last refresh.
    pub fn theme_paths(&self) -> &[PathBuf] {
        self.inner.paths()
    }

    /// Returns the directories the current index was built from, in precedence order.
    pub fn search_directories(&self) -> Vec<&Path> {
        self.inner.search_directories()
    }

    /// Resolves a logical name to its actual file name and owning directory.
    pub fn resolve(&self, name: &str) -> Result<Resolved<'_>, TemplateNotFound> {
        self.inner.resolve(name)
    }

    /// Returns the theme registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Returns the theme registry for changing the active theme.
    ///
    /// Changes take effect on the next refresh.
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// Returns the wrapped loader.
    pub fn inner(&self) -> &FlexibleLoader<W> {
        &self.inner
    }

    /// Returns whether the index reflects the latest refresh inputs.
    pub fn state(&self) -> RefreshState {
        self.inner.state()
    }
}

impl<R: ThemeRegistry, W: DirectoryWalker> TemplateLoader for ThemeLoader<R, W> {
    fn source(&self, name: &str) -> Result<String, LoaderError> {
        self.inner.source(name)
    }

    fn cache_key(&self, name: &str) -> Result<String, LoaderError> {
        self.inner.cache_key(name)
    }

    fn is_fresh(&self, name: &str, time: SystemTime) -> Result<bool, LoaderError> {
        self.inner.is_fresh(name, time)
    }

    fn exists(&self, name: &str) -> bool {
        self.inner.exists(name)
    }
}

impl<R: ThemeRegistry, W: DirectoryWalker> LifecycleSubscriber for ThemeLoader<R, W> {
    fn subscribed_events(&self) -> &'static [Lifecycle] {
        self.inner.subscribed_events()
    }

    fn on_event(&mut self, event: Lifecycle, sources: &SourceSet) {
        if self.inner.trigger().should_refresh(event, sources) {
            self.refresh();
        }
    }
}
