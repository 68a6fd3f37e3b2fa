//! A loader over a fixed set of search directories.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use quire_common::{Lifecycle, LifecycleSubscriber, SourceSet};

use crate::error::{LoaderError, TemplateNotFound};
use crate::extension::ExtensionList;
use crate::loader::TemplateLoader;
use crate::refresh::{RefreshState, RefreshTrigger};
use crate::resolver::{NameResolver, Resolved};
use crate::walker::{DirectoryWalker, FsWalker};

/// Serves templates from the site's source paths followed by extra paths.
///
/// Source paths are names under `source_dir` (such as `_views`) and take
/// precedence over the extra paths, which are full directory paths. The
/// index is empty until the first [`refresh_cache`](Self::refresh_cache), either
/// called directly or triggered by [`Lifecycle::BeforeRun`].
#[derive(Debug)]
pub struct FlexibleLoader<W = FsWalker> {
    source_dir: PathBuf,
    source_paths: Vec<String>,
    paths: Vec<PathBuf>,
    resolver: NameResolver<W>,
    trigger: RefreshTrigger,
}

impl FlexibleLoader<FsWalker> {
    /// Creates a loader that scans the real filesystem.
    pub fn new(
        source_dir: impl Into<PathBuf>,
        source_paths: Vec<String>,
        paths: Vec<PathBuf>,
        extensions: ExtensionList,
    ) -> Self {
        Self::with_walker(source_dir, source_paths, paths, extensions, FsWalker)
    }
}

impl<W: DirectoryWalker> FlexibleLoader<W> {
    /// Creates a loader that scans directories with `walker`.
    pub fn with_walker(
        source_dir: impl Into<PathBuf>,
        source_paths: Vec<String>,
        paths: Vec<PathBuf>,
        extensions: ExtensionList,
        walker: W,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            source_paths,
            paths,
            resolver: NameResolver::with_walker(extensions, walker),
            trigger: RefreshTrigger::new(),
        }
    }

    /// Rebuilds the index from the current source and extra paths.
    pub fn refresh_cache(&mut self) {
        let base = self.base_paths();
        self.resolver.rebuild(base, self.paths.iter().cloned());
        self.trigger.mark_current();
    }

    /// Replaces the extra paths. Takes effect on the next refresh.
    pub fn set_paths(&mut self, paths: Vec<PathBuf>) {
        self.paths = paths;
        self.trigger.mark_stale();
    }

    /// Returns the source paths joined onto the source directory.
    ///
    /// An empty source directory leaves the names as they are.
    pub fn base_paths(&self) -> Vec<PathBuf> {
        self.source_paths
            .iter()
            .map(|path| self.source_dir.join(path))
            .collect()
    }

    /// Returns the extra paths searched after the source paths.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Returns the directories the current index was built from, in precedence order.
    pub fn search_directories(&self) -> Vec<&Path> {
        self.resolver
            .index()
            .directories()
            .iter()
            .map(|directory| directory.root())
            .collect()
    }

    /// Resolves a logical name to its actual file name and owning directory.
    pub fn resolve(&self, name: &str) -> Result<Resolved<'_>, TemplateNotFound> {
        self.resolver.resolve(name)
    }

    /// Returns the underlying resolver.
    pub fn resolver(&self) -> &NameResolver<W> {
        &self.resolver
    }

    /// Returns the refresh trigger.
    pub fn trigger(&self) -> &RefreshTrigger {
        &self.trigger
    }

    /// Returns whether the index reflects the current inputs.
    pub fn state(&self) -> RefreshState {
        self.trigger.state()
    }
}

impl<W: DirectoryWalker> TemplateLoader for FlexibleLoader<W> {
    fn source(&self, name: &str) -> Result<String, LoaderError> {
        let resolved = self.resolve(name)?;
        resolved.directory.read_source(&resolved.actual_name)
    }

    fn cache_key(&self, name: &str) -> Result<String, LoaderError> {
        let resolved = self.resolve(name)?;
        resolved.directory.cache_key(&resolved.actual_name)
    }

    fn is_fresh(&self, name: &str, time: SystemTime) -> Result<bool, LoaderError> {
        let resolved = self.resolve(name)?;
        resolved.directory.is_fresh(&resolved.actual_name, time)
    }

    fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }
}

impl<W: DirectoryWalker> LifecycleSubscriber for FlexibleLoader<W> {
    fn subscribed_events(&self) -> &'static [Lifecycle] {
        RefreshTrigger::EVENTS
    }

    fn on_event(&mut self, event: Lifecycle, sources: &SourceSet) {
        if self.trigger.should_refresh(event, sources) {
            self.refresh_cache();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_common::Dispatcher;
    use std::fs;
    use std::time::Duration;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site_loader(root: &Path, paths: Vec<PathBuf>) -> FlexibleLoader {
        FlexibleLoader::new(
            root.join("source"),
            vec!["_views".to_string(), "_layouts".to_string()],
            paths,
            ExtensionList::new(["", "twig", "html.twig"]),
        )
    }

    #[test]
    fn loads_through_source_paths() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("source/_views/index.html.twig"), "index");
        write(&dir.path().join("source/_layouts/default.twig"), "layout");

        let mut loader = site_loader(dir.path(), Vec::new());
        loader.refresh_cache();

        assert_eq!(loader.source("index").unwrap(), "index");
        assert_eq!(loader.source("default").unwrap(), "layout");
        assert_eq!(loader.source("default.twig").unwrap(), "layout");
        assert!(loader.exists("index"));
        assert!(!loader.exists("nope"));
    }

    #[test]
    fn source_paths_win_over_extra_paths() {
        let dir = tempfile::tempdir().unwrap();
        let theme_views = dir.path().join("theme/_views");
        write(&dir.path().join("source/_views/post.twig"), "site");
        write(&theme_views.join("post.twig"), "theme");
        write(&theme_views.join("footer.twig"), "theme footer");

        let mut loader = site_loader(dir.path(), vec![theme_views.clone()]);
        loader.refresh_cache();

        assert_eq!(loader.source("post").unwrap(), "site");
        assert_eq!(loader.source("footer").unwrap(), "theme footer");
        assert_eq!(
            loader.search_directories(),
            vec![dir.path().join("source/_views").as_path(), theme_views.as_path()]
        );
    }

    #[test]
    fn empty_source_dir_uses_paths_as_given() {
        let loader = FlexibleLoader::new(
            "",
            vec!["_views".to_string()],
            Vec::new(),
            ExtensionList::new([""]),
        );
        assert_eq!(loader.base_paths(), vec![PathBuf::from("_views")]);
    }

    #[test]
    fn not_found_propagates_from_every_operation() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("source/_views/index.twig"), "");
        let mut loader = site_loader(dir.path(), Vec::new());
        loader.refresh_cache();

        let expected = TemplateNotFound::new("missing");
        let err = loader.source("missing").unwrap_err();
        assert_eq!(err.not_found(), Some(&expected));
        let err = loader.cache_key("missing").unwrap_err();
        assert_eq!(err.not_found(), Some(&expected));
        let err = loader.is_fresh("missing", SystemTime::now()).unwrap_err();
        assert_eq!(err.not_found(), Some(&expected));
    }

    #[test]
    fn cache_key_stable_between_refreshes() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("source/_views/index.twig"), "");
        let mut loader = site_loader(dir.path(), Vec::new());
        loader.refresh_cache();

        let before = loader.cache_key("index").unwrap();
        assert_eq!(loader.cache_key("index").unwrap(), before);
        assert_eq!(loader.cache_key("index.twig").unwrap(), before);
        loader.refresh_cache();
        assert_eq!(loader.cache_key("index").unwrap(), before);
    }

    #[test]
    fn freshness_uses_resolved_name() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("source/_views/index.html.twig"), "");
        let mut loader = site_loader(dir.path(), Vec::new());
        loader.refresh_cache();

        let later = SystemTime::now() + Duration::from_secs(3600);
        assert!(loader.is_fresh("index", later).unwrap());
        assert!(!loader.is_fresh("index", SystemTime::UNIX_EPOCH).unwrap());
    }

    #[test]
    fn nothing_loads_before_refresh() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("source/_views/index.twig"), "");
        let loader = site_loader(dir.path(), Vec::new());

        assert_eq!(loader.state(), RefreshState::Stale);
        assert!(loader.source("index").is_err());
    }

    #[test]
    fn before_run_with_new_sources_refreshes() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("source/_views/index.twig"), "v1");
        let mut loader = site_loader(dir.path(), Vec::new());
        let mut sources = SourceSet::new();

        {
            let mut dispatcher = Dispatcher::new();
            dispatcher.subscribe(&mut loader);
            dispatcher.dispatch(Lifecycle::BeforeRun, &sources);
        }
        assert_eq!(loader.state(), RefreshState::Stale);
        assert_eq!(loader.resolver().generation(), 0);

        sources.add_source("source/index.md");
        {
            let mut dispatcher = Dispatcher::new();
            dispatcher.subscribe(&mut loader);
            dispatcher.dispatch(Lifecycle::BeforeRun, &sources);
        }
        assert_eq!(loader.state(), RefreshState::Current);
        assert_eq!(loader.source("index").unwrap(), "v1");
    }

    #[test]
    fn run_without_new_sources_keeps_index() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("source/_views/index.twig"), "");
        let mut loader = site_loader(dir.path(), Vec::new());
        let mut sources = SourceSet::new();
        sources.add_source("source/index.md");
        loader.on_event(Lifecycle::BeforeRun, &sources);
        assert_eq!(loader.resolver().generation(), 1);

        write(&dir.path().join("source/_views/about.twig"), "");
        sources.reset_new();
        loader.on_event(Lifecycle::BeforeRun, &sources);
        assert_eq!(loader.resolver().generation(), 1);
        assert!(!loader.exists("about"));

        sources.add_source("source/about.md");
        loader.on_event(Lifecycle::BeforeRun, &sources);
        assert_eq!(loader.resolver().generation(), 2);
        assert!(loader.exists("about"));
    }

    #[test]
    fn set_paths_marks_stale() {
        let dir = tempfile::tempdir().unwrap();
        let mut loader = site_loader(dir.path(), Vec::new());
        loader.refresh_cache();
        assert_eq!(loader.state(), RefreshState::Current);

        loader.set_paths(vec![dir.path().join("theme")]);
        assert_eq!(loader.state(), RefreshState::Stale);
        assert_eq!(loader.paths(), &[dir.path().join("theme")]);
    }
}
