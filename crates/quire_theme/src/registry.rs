//! Lookup of the active theme.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use quire_config::{ProjectConfig, ThemeDecl};

use crate::theme::Theme;

/// Source of the currently active theme.
///
/// Loaders query the registry each time they refresh, so switching the
/// active theme takes effect on the next refresh.
pub trait ThemeRegistry {
    /// Returns the active theme with its parent filled in, or `None` when no theme is active.
    fn find_active_theme(&self) -> Option<Theme>;
}

/// A registry backed by the `[theme]` and `[themes]` tables of `quire.toml`.
#[derive(Debug, Clone)]
pub struct ConfigThemeRegistry {
    project_dir: PathBuf,
    active: Option<String>,
    themes: BTreeMap<String, ThemeDecl>,
}

impl ConfigThemeRegistry {
    /// Builds a registry from a loaded configuration.
    ///
    /// Relative theme paths are resolved against `project_dir`.
    pub fn from_config(project_dir: &Path, config: &ProjectConfig) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            active: config.theme.active.clone(),
            themes: config.themes.clone(),
        }
    }

    /// Changes the active theme.
    pub fn set_active(&mut self, name: Option<String>) {
        self.active = name;
    }

    /// Returns the name of the active theme, if any.
    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    fn theme(&self, name: &str) -> Option<Theme> {
        let decl = self.themes.get(name)?;
        Some(Theme::new(name, self.project_dir.join(&decl.path)))
    }
}

impl ThemeRegistry for ConfigThemeRegistry {
    fn find_active_theme(&self) -> Option<Theme> {
        let name = self.active.as_deref()?;
        let Some(mut theme) = self.theme(name) else {
            tracing::warn!(theme = name, "active theme is not declared");
            return None;
        };
        let parent = self.themes[name]
            .parent
            .as_deref()
            .and_then(|parent| self.theme(parent));
        if let Some(parent) = parent {
            theme = theme.with_parent(parent);
        }
        Some(theme)
    }
}

impl<R: ThemeRegistry + ?Sized> ThemeRegistry for &R {
    fn find_active_theme(&self) -> Option<Theme> {
        (**self).find_active_theme()
    }
}
