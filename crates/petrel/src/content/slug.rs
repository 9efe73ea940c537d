use std::path::{Component, Path};

use chrono::NaiveDate;
use serde::Serialize;

use crate::SiteConfig;

pub const DATE_DELIMITER_DOUBLE_DASH: &str = "--";
pub const DATE_DELIMITER_UNDERSCORE: &str = "_";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The routing fields derived from a content path such as
/// `2020-01-15--hello-world`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default, Serialize)]
pub struct SlugRecord {
    /// The route of the page. Starts with `/` whenever a delimiter was found.
    pub slug: String,

    /// Everything before the delimiter, or empty if there was no delimiter.
    pub date_prefix: String,
}

/// Splits `path` at the first occurrence of `delimiter` into a date prefix and
/// a slug.
///
/// Paths without the delimiter are passed through as the slug with an empty
/// date prefix. An empty delimiter never matches.
pub fn derive_slug_fields(path: &str, delimiter: &str) -> SlugRecord {
    let split = if delimiter.is_empty() {
        None
    } else {
        path.find(delimiter)
    };

    let record = match split {
        Some(index) => SlugRecord {
            slug: format!("/{}", &path[index + delimiter.len()..]),
            date_prefix: path[..index].trim_start_matches('/').to_string(),
        },
        None => SlugRecord {
            slug: path.to_string(),
            date_prefix: String::new(),
        },
    };

    log::trace!("derived {record:?} from {path:?}");

    record
}

impl SlugRecord {
    pub fn has_date(&self) -> bool {
        !self.date_prefix.is_empty()
    }

    /// Returns the date prefix as a calendar date, if it is one.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_prefix, DATE_FORMAT).ok()
    }

    /// Reassembles the content path this record was derived from.
    pub fn edit_path(&self, delimiter: &str) -> String {
        if self.date_prefix.is_empty() {
            return self.slug.trim_start_matches('/').to_string();
        }

        format!(
            "{}{delimiter}{}",
            self.date_prefix,
            self.slug.trim_start_matches('/')
        )
    }

    /// Returns the redirect from `{slug}edit` to the content editor entry.
    pub fn edit_redirect(&self, config: &SiteConfig) -> Redirect {
        let slug = if self.slug.ends_with('/') {
            self.slug.clone()
        } else {
            format!("{}/", self.slug)
        };

        Redirect {
            from: config.prefixed(&format!("{slug}edit")),
            to: format!(
                "{}{}",
                config.edit_base_path,
                self.edit_path(&config.slug_delimiter)
            ),
        }
    }
}

/// A permanent redirect between two site paths.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize)]
pub struct Redirect {
    pub from: String,
    pub to: String,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Post,
    Page,
}

impl ContentKind {
    /// Posts live under a `posts` directory, everything else is a page.
    pub fn from_relative_path(path: impl AsRef<Path>) -> Self {
        let is_post = path
            .as_ref()
            .components()
            .any(|component| matches!(component, Component::Normal(name) if name == "posts"));

        if is_post {
            Self::Post
        } else {
            Self::Page
        }
    }
}
