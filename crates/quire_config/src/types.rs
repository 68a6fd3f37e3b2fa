//! Configuration types deserialized from `quire.toml`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Directory holding the site's own sources when `site.source_dir` is not set.
pub const DEFAULT_SOURCE_DIR: &str = "source";

/// Conventional template directories searched under the source directory.
pub const DEFAULT_SOURCE_PATHS: [&str; 4] = ["_views", "_layouts", "_includes", "_partials"];

/// Extensions tried for every logical template name, in order.
pub const DEFAULT_EXTENSIONS: [&str; 5] = ["", "twig", "html", "html.twig", "twig.html"];

/// The top-level project configuration parsed from `quire.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectConfig {
    /// Where the site's own templates live and how names are suffixed.
    #[serde(default)]
    pub site: SiteConfig,
    /// Which declared theme is active.
    #[serde(default)]
    pub theme: ThemeSelection,
    /// Declared themes keyed by name (e.g., "acme/minimal").
    #[serde(default)]
    pub themes: BTreeMap<String, ThemeDecl>,
}

/// Template search settings for the site itself.
#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    /// Source directory, relative to the project directory.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    /// Template directories under `source_dir`, highest precedence first.
    #[serde(
        default = "default_source_paths",
        deserialize_with = "deserialize_string_or_vec"
    )]
    pub source_paths: Vec<String>,
    /// Extensions tried for each logical name, in declaration order.
    ///
    /// Written without the leading dot; an empty string means the bare name.
    #[serde(
        default = "default_extensions",
        deserialize_with = "deserialize_string_or_vec"
    )]
    pub extensions: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            source_paths: default_source_paths(),
            extensions: default_extensions(),
        }
    }
}

/// The `[theme]` table selecting the active theme.
#[derive(Debug, Default, Deserialize)]
pub struct ThemeSelection {
    /// Name of the active theme, if any.
    #[serde(default)]
    pub active: Option<String>,
}

/// A theme declared under `[themes."<name>"]`.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeDecl {
    /// Theme root directory, relative to the project directory unless absolute.
    pub path: String,
    /// Name of the parent theme, if this theme extends one.
    #[serde(default)]
    pub parent: Option<String>,
}

fn default_source_dir() -> String {
    DEFAULT_SOURCE_DIR.to_string()
}

fn default_source_paths() -> Vec<String> {
    DEFAULT_SOURCE_PATHS.iter().map(|s| s.to_string()).collect()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

/// Deserializes a field that can be either a single string or a list of strings.
///
/// Allows TOML config to accept both `extensions = "twig"` (string) and
/// `extensions = ["", "twig"]` (array of strings).
fn deserialize_string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut vec = Vec::new();
            while let Some(val) = seq.next_element::<String>()? {
                vec.push(val);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}
