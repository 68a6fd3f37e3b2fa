//! The theme record read by path composition.

use std::path::{Path, PathBuf};

/// A snapshot of a theme as handed out by a [`ThemeRegistry`](crate::ThemeRegistry).
///
/// The registry owns the real theme definitions; a `Theme` only carries what
/// path composition reads. Composition looks at most one parent deep, so a
/// registry only needs to fill in the direct parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// The theme's name (e.g., "acme/minimal").
    pub name: String,
    /// The theme's root directory.
    pub path: PathBuf,
    /// The theme this one extends, if any.
    pub parent: Option<Box<Theme>>,
}

impl Theme {
    /// Creates a theme without a parent.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            parent: None,
        }
    }

    /// Sets the parent theme.
    pub fn with_parent(mut self, parent: Theme) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Returns the theme's root directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the parent theme, if any.
    pub fn parent(&self) -> Option<&Theme> {
        self.parent.as_deref()
    }
}
