//! The interface a template engine loads templates through.

use std::time::SystemTime;

use crate::error::LoaderError;

/// Loads template text by logical name.
///
/// Every operation resolves the name first, so a name that does not resolve
/// fails each of them with [`LoaderError::NotFound`].
pub trait TemplateLoader {
    /// Returns the template text for `name`.
    fn source(&self, name: &str) -> Result<String, LoaderError>;

    /// Returns the key compiled output of `name` is cached under.
    ///
    /// The key stays the same for as long as `name` resolves to the same file.
    fn cache_key(&self, name: &str) -> Result<String, LoaderError>;

    /// Returns `true` if the file behind `name` has not changed since `time`.
    fn is_fresh(&self, name: &str, time: SystemTime) -> Result<bool, LoaderError>;

    /// Returns `true` if `name` resolves.
    fn exists(&self, name: &str) -> bool;
}

impl<L: TemplateLoader + ?Sized> TemplateLoader for &L {
    fn source(&self, name: &str) -> Result<String, LoaderError> {
        (**self).source(name)
    }

    fn cache_key(&self, name: &str) -> Result<String, LoaderError> {
        (**self).cache_key(name)
    }

    fn is_fresh(&self, name: &str, time: SystemTime) -> Result<bool, LoaderError> {
        (**self).is_fresh(name, time)
    }

    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }
}
