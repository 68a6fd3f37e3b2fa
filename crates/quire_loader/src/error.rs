//! Error types for template loading.

use std::path::PathBuf;

/// No search directory holds any extension variant of a logical name.
///
/// Cloneable so a resolver can memoize the failure and hand the same error
/// back on later lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("the template named \"{name}\" does not exist")]
pub struct TemplateNotFound {
    /// The logical name that was requested.
    pub name: String,
}

impl TemplateNotFound {
    /// Creates a not-found error for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Errors returned by [`TemplateLoader`](crate::TemplateLoader) operations.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The name did not resolve to any file.
    #[error(transparent)]
    NotFound(#[from] TemplateNotFound),

    /// A resolved file could not be read.
    #[error("failed to read template {path}: {source}")]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl LoaderError {
    /// Returns the not-found error if this is one.
    pub fn not_found(&self) -> Option<&TemplateNotFound> {
        match self {
            LoaderError::NotFound(err) => Some(err),
            LoaderError::Io { .. } => None,
        }
    }
}
