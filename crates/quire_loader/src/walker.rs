//! Recursive enumeration of template files under a search directory.

use std::path::{Component, Path};

use walkdir::{DirEntry, WalkDir};

/// Version-control metadata directories that are never descended into.
pub const VCS_DIRS: [&str; 9] = [
    ".git",
    ".svn",
    "_svn",
    ".hg",
    ".bzr",
    "CVS",
    "_darcs",
    ".arch-params",
    ".monotone",
];

/// Lists the files under a search directory.
pub trait DirectoryWalker {
    /// Returns every regular file under `root` as a `/`-separated path relative to `root`.
    fn walk(&self, root: &Path) -> Vec<String>;
}

impl<W: DirectoryWalker + ?Sized> DirectoryWalker for &W {
    fn walk(&self, root: &Path) -> Vec<String> {
        (**self).walk(root)
    }
}

/// Walks the real filesystem, following symbolic links and skipping VCS metadata.
///
/// Entries that cannot be read (permission errors, dangling links, link
/// loops) are logged and skipped so one bad entry never hides the rest of
/// the directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWalker;

impl DirectoryWalker for FsWalker {
    fn walk(&self, root: &Path) -> Vec<String> {
        let mut files = Vec::new();
        let walk = WalkDir::new(root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_vcs_dir(entry));

        for entry in walk {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(root = %root.display(), error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            match relative_name(relative) {
                Some(name) => files.push(name),
                None => {
                    tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 file name")
                }
            }
        }
        files
    }
}

fn is_vcs_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| VCS_DIRS.contains(&name))
}

/// Joins the normal components of `relative` with `/`.
fn relative_name(relative: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            parts.push(part.to_str()?);
        }
    }
    Some(parts.join("/"))
}
