use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::content::DATE_DELIMITER_DOUBLE_DASH;

/// The configuration for a site.
///
/// Built once at startup and passed to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub site_title: String,

    /// The absolute URL the site is served from.
    pub site_url: String,

    /// A path prepended to every generated route, e.g. `/blog`.
    pub path_prefix: String,

    /// The delimiter separating the date prefix from the title in content paths.
    pub slug_delimiter: String,

    /// The path segment under which tag pages live.
    pub tags_path: String,

    /// Where "edit this page" redirects point, followed by the content path.
    pub edit_base_path: String,

    pub site_description: Option<String>,
    pub site_language: Option<String>,
    pub author_name: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: String::new(),
            site_url: "http://localhost".to_string(),
            path_prefix: String::new(),
            slug_delimiter: DATE_DELIMITER_DOUBLE_DASH.to_string(),
            tags_path: "tags".to_string(),
            edit_base_path: "/admin/#/collections/blog/entries/".to_string(),
            site_description: None,
            site_language: None,
            author_name: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SiteConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;

        Self::from_toml_str(&contents)
    }

    /// Returns `path` prefixed with the configured path prefix.
    pub fn prefixed(&self, path: &str) -> String {
        let prefix = self.path_prefix.trim_end_matches('/');
        if prefix.is_empty() {
            return path.to_string();
        }

        let prefix = prefix.trim_start_matches('/');
        format!("/{prefix}/{}", path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(SiteConfig::from_toml_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_config_from_toml() {
        let config = SiteConfig::from_toml_str(indoc! {r#"
            site_title = "Boldare tech-blog"
            site_url = "https://tech.boldare.com"
            slug_delimiter = "_"
            author_name = "Boldare"
        "#})
        .unwrap();

        assert_eq!(
            config,
            SiteConfig {
                site_title: "Boldare tech-blog".to_string(),
                site_url: "https://tech.boldare.com".to_string(),
                slug_delimiter: "_".to_string(),
                author_name: Some("Boldare".to_string()),
                ..SiteConfig::default()
            }
        );
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        let result = SiteConfig::from_toml_str("site_titel = \"typo\"");

        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_prefixed() {
        let mut config = SiteConfig::default();
        assert_eq!(config.prefixed("/tags/rust/"), "/tags/rust/");

        config.path_prefix = "/blog/".to_string();
        assert_eq!(config.prefixed("/tags/rust/"), "/blog/tags/rust/");

        config.path_prefix = "blog".to_string();
        assert_eq!(config.prefixed("tags/rust/"), "/blog/tags/rust/");
    }
}
