use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use url::{ParseError, Url};

use crate::SiteConfig;

/// An absolute URL to a page on the site.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Serialize)]
#[serde(transparent)]
pub struct Permalink(Url);

impl Permalink {
    pub fn from_path(config: &SiteConfig, path: &str) -> Result<Self, ParseError> {
        let path = config.prefixed(path);

        let suffix = if path.ends_with('/') || path.is_empty() {
            ""
        } else {
            "/"
        };
        let base_url = config.site_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');

        Ok(Self(Url::from_str(&format!("{base_url}/{path}{suffix}"))?))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn path(&self) -> &str {
        self.0.path()
    }
}

impl fmt::Display for Permalink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_config(site_url: &str) -> SiteConfig {
        SiteConfig {
            site_url: site_url.to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_permalink() {
        assert_eq!(
            Permalink::from_path(&make_config("https://example.com/"), "/").unwrap(),
            Permalink("https://example.com/".parse().unwrap())
        );
        assert_eq!(
            Permalink::from_path(&make_config("https://example.com"), "/").unwrap(),
            Permalink("https://example.com/".parse().unwrap())
        );
        assert_eq!(
            Permalink::from_path(&make_config("https://example.com"), "").unwrap(),
            Permalink("https://example.com/".parse().unwrap())
        );
        assert_eq!(
            Permalink::from_path(&make_config("https://example.com"), "/hello-world").unwrap(),
            Permalink("https://example.com/hello-world/".parse().unwrap())
        );
    }

    #[test]
    fn test_permalink_with_path_prefix() {
        let config = SiteConfig {
            path_prefix: "/blog".to_string(),
            ..make_config("https://example.com")
        };

        let permalink = Permalink::from_path(&config, "/tags/rust/").unwrap();
        assert_eq!(permalink.as_str(), "https://example.com/blog/tags/rust/");
    }

    #[test]
    fn test_permalink_path() {
        let permalink = Permalink("https://example.com/this/is/a/cool/site/".parse().unwrap());
        assert_eq!(permalink.path(), "/this/is/a/cool/site/");
    }

    #[test]
    fn test_permalink_with_invalid_site_url() {
        assert!(Permalink::from_path(&make_config("not a url"), "/").is_err());
    }
}
