//! Template name resolution across layered search directories.
//!
//! A logical template name such as `"post"` is resolved by trying each
//! configured extension in order (`"post"`, `"post.twig"`, `"post.html"`, ...)
//! against a [`FileIndex`] of every file under the search directories. The
//! first directory in precedence order that holds a file claims it, which is
//! how site templates override theme templates and child themes override
//! their parents.
//!
//! Both the index and the per-name results are cached. Successful and failed
//! lookups are memoized until the next refresh, and a refresh always rebuilds
//! everything from scratch. [`FlexibleLoader`] serves a fixed set of
//! directories; [`ThemeLoader`] recomposes its directories from the active
//! theme on every refresh. Both refresh themselves on
//! [`Lifecycle::BeforeRun`](quire_common::Lifecycle::BeforeRun) when new
//! sources have appeared.

#![warn(missing_docs)]

pub mod directory;
pub mod error;
pub mod extension;
pub mod flexible;
pub mod index;
pub mod loader;
pub mod refresh;
pub mod resolver;
pub mod theme_loader;
pub mod walker;

pub use directory::DirectoryLoader;
pub use error::{LoaderError, TemplateNotFound};
pub use extension::ExtensionList;
pub use flexible::FlexibleLoader;
pub use index::FileIndex;
pub use loader::TemplateLoader;
pub use refresh::{RefreshState, RefreshTrigger};
pub use resolver::{NameResolver, Resolved};
pub use theme_loader::ThemeLoader;
pub use walker::{DirectoryWalker, FsWalker, VCS_DIRS};
