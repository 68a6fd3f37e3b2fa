//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// File name of the project configuration.
pub const CONFIG_FILE_NAME: &str = "quire.toml";

/// Loads and validates a `quire.toml` configuration from a project directory.
///
/// Reads `<project_dir>/quire.toml`, parses it, and validates theme references.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `quire.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks that the extension list is usable and every theme reference is declared.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.site.extensions.is_empty() {
        return Err(ConfigError::ValidationError(
            "site.extensions must list at least one extension".to_string(),
        ));
    }

    if let Some(active) = &config.theme.active {
        if !config.themes.contains_key(active) {
            return Err(ConfigError::UnknownTheme(active.clone()));
        }
    }

    for (name, decl) in &config.themes {
        if decl.path.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "themes.\"{name}\".path is empty"
            )));
        }
        if let Some(parent) = &decl.parent {
            if parent == name {
                return Err(ConfigError::ValidationError(format!(
                    "theme '{name}' cannot be its own parent"
                )));
            }
            if !config.themes.contains_key(parent) {
                return Err(ConfigError::UnknownTheme(parent.clone()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.site.source_dir, "source");
        assert!(config.themes.is_empty());
        assert!(config.theme.active.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[site]
source_dir = "site"
source_paths = ["_views", "_layouts"]
extensions = ["", "html.twig"]

[theme]
active = "acme/child"

[themes."acme/base"]
path = "themes/acme/base"

[themes."acme/child"]
path = "themes/acme/child"
parent = "acme/base"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.site.source_dir, "site");
        assert_eq!(config.site.source_paths, vec!["_views", "_layouts"]);
        assert_eq!(config.site.extensions, vec!["", "html.twig"]);
        assert_eq!(config.theme.active.as_deref(), Some("acme/child"));
        assert_eq!(config.themes.len(), 2);
    }

    #[test]
    fn unknown_active_theme() {
        let toml = r#"
[theme]
active = "acme/missing"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTheme(ref n) if n == "acme/missing"));
    }

    #[test]
    fn unknown_parent_theme() {
        let toml = r#"
[themes."acme/child"]
path = "themes/acme/child"
parent = "acme/base"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTheme(ref n) if n == "acme/base"));
    }

    #[test]
    fn self_parent_rejected() {
        let toml = r#"
[themes."acme/loop"]
path = "themes/acme/loop"
parent = "acme/loop"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn empty_extensions_rejected() {
        let toml = r#"
[site]
extensions = []
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn invalid_toml() {
        let err = load_config_from_str("[site\nsource_dir = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_project_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[site]\nsource_dir = \"src\"\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.site.source_dir, "src");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
