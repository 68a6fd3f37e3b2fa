//! Search path composition from the active theme.

use std::path::PathBuf;

use crate::theme::Theme;

/// Template directories looked for under a theme root, in precedence order.
pub const CONVENTIONAL_SUBDIRS: [&str; 4] = ["_views", "_layouts", "_includes", "_partials"];

/// Returns the template directories contributed by `active`, highest precedence first.
///
/// The active theme's existing conventional subdirectories come first, then
/// its parent's. Directories that do not exist are left out; a theme whose
/// root is missing simply contributes nothing. Returns an empty list when no
/// theme is active.
pub fn compose_paths(active: Option<&Theme>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let Some(theme) = active else {
        return paths;
    };

    push_theme_paths(theme, &mut paths);
    if let Some(parent) = theme.parent() {
        push_theme_paths(parent, &mut paths);
    }

    tracing::debug!(theme = %theme.name, count = paths.len(), "composed theme paths");
    paths
}

fn push_theme_paths(theme: &Theme, paths: &mut Vec<PathBuf>) {
    for subdir in CONVENTIONAL_SUBDIRS {
        let candidate = theme.path.join(subdir);
        if candidate.is_dir() {
            paths.push(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn no_theme_no_paths() {
        assert!(compose_paths(None).is_empty());
    }

    #[test]
    fn only_existing_subdirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("active");
        fs::create_dir_all(root.join("_views")).unwrap();

        let theme = Theme::new("active", &root);
        assert_eq!(compose_paths(Some(&theme)), vec![root.join("_views")]);
    }

    #[test]
    fn active_before_parent() {
        let dir = tempfile::tempdir().unwrap();
        let active = dir.path().join("active");
        let parent = dir.path().join("parent");
        fs::create_dir_all(active.join("_views")).unwrap();
        fs::create_dir_all(parent.join("_layouts")).unwrap();
        fs::create_dir_all(parent.join("_includes")).unwrap();

        let theme = Theme::new("active", &active).with_parent(Theme::new("parent", &parent));
        assert_eq!(
            compose_paths(Some(&theme)),
            vec![
                active.join("_views"),
                parent.join("_layouts"),
                parent.join("_includes"),
            ]
        );
    }

    #[test]
    fn conventional_order_is_fixed() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("theme");
        for subdir in ["_partials", "_includes", "_layouts", "_views"] {
            fs::create_dir_all(root.join(subdir)).unwrap();
        }

        let theme = Theme::new("theme", &root);
        let expected: Vec<PathBuf> = CONVENTIONAL_SUBDIRS.iter().map(|s| root.join(s)).collect();
        assert_eq!(compose_paths(Some(&theme)), expected);
    }

    #[test]
    fn missing_theme_root_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("parent");
        fs::create_dir_all(parent.join("_partials")).unwrap();

        let theme = Theme::new("ghost", dir.path().join("ghost"))
            .with_parent(Theme::new("parent", &parent));
        assert_eq!(compose_paths(Some(&theme)), vec![parent.join("_partials")]);
    }

    #[test]
    fn regular_file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("theme");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("_views"), "not a dir").unwrap();

        let theme = Theme::new("theme", &root);
        assert!(compose_paths(Some(&theme)).is_empty());
    }

    #[test]
    fn grandparent_is_not_traversed() {
        let dir = tempfile::tempdir().unwrap();
        let grand = dir.path().join("grand");
        fs::create_dir_all(grand.join("_views")).unwrap();

        let parent = Theme::new("parent", dir.path().join("parent"))
            .with_parent(Theme::new("grand", &grand));
        let theme = Theme::new("child", dir.path().join("child")).with_parent(parent);
        assert!(compose_paths(Some(&theme)).is_empty());
    }
}
