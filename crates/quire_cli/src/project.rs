//! Shared project setup for CLI commands.
//!
//! Finds the project root, loads `quire.toml`, builds the theme-aware loader,
//! and brings its index up to date the way a build run would.

use std::path::{Path, PathBuf};

use quire_common::{Dispatcher, Lifecycle, SourceSet};
use quire_config::{ProjectConfig, CONFIG_FILE_NAME};
use quire_loader::{DirectoryWalker, ExtensionList, FsWalker, RefreshState, ThemeLoader};
use quire_theme::ConfigThemeRegistry;

use crate::GlobalArgs;

/// A loaded project with a ready-to-use template loader.
pub struct Site {
    /// The directory containing `quire.toml`.
    pub project_dir: PathBuf,
    /// The parsed configuration.
    pub config: ProjectConfig,
    /// Loader over the site's source paths and the active theme.
    pub loader: ThemeLoader<ConfigThemeRegistry>,
}

/// Walks up from `start` looking for the nearest directory containing `quire.toml`.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE_NAME).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find {CONFIG_FILE_NAME} in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Resolves the project root directory from global CLI args.
///
/// If `--config` is specified, uses that path (file → parent dir, dir → itself).
/// Otherwise walks up from the current directory looking for `quire.toml`.
pub fn resolve_project_root(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        if p.is_file() {
            Ok(p.parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")))
        } else {
            Ok(p)
        }
    } else {
        find_project_root(&std::env::current_dir()?)
    }
}

/// Shows `path` relative to `base` when it lies under it, in full otherwise.
pub fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Loads the project and refreshes its loader.
pub fn open_site(global: &GlobalArgs) -> Result<Site, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    open_site_at(&project_dir)
}

/// Loads the project rooted at `project_dir` and refreshes its loader.
///
/// Every file under the source directory joins the working set, and
/// [`Lifecycle::BeforeRun`] is fired so the loader indexes as it would at the
/// start of a build. A site with no sources is refreshed directly.
pub fn open_site_at(project_dir: &Path) -> Result<Site, Box<dyn std::error::Error>> {
    let config = quire_config::load_config(project_dir)?;
    let registry = ConfigThemeRegistry::from_config(project_dir, &config);
    let source_dir = project_dir.join(&config.site.source_dir);

    let mut loader = ThemeLoader::with_site(
        registry,
        &source_dir,
        config.site.source_paths.clone(),
        ExtensionList::new(&config.site.extensions),
    );

    let mut sources = SourceSet::new();
    for name in FsWalker.walk(&source_dir) {
        sources.add_source(source_dir.join(name));
    }
    tracing::debug!(sources = sources.sources().len(), "discovered sources");

    {
        let mut dispatcher = Dispatcher::new();
        dispatcher.subscribe(&mut loader);
        dispatcher.dispatch(Lifecycle::BeforeRun, &sources);
    }
    if loader.state() == RefreshState::Stale {
        loader.refresh();
    }

    Ok(Site {
        project_dir: project_dir.to_path_buf(),
        config,
        loader,
    })
}
