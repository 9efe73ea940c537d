use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn separator_regex() -> &'static Regex {
    SEPARATOR_REGEX.get_or_init(|| {
        Regex::new(r"[^a-zA-Z0-9]+").expect("failed to compile regex for kebab-case separators")
    })
}

/// Folds `text` into its kebab-case form.
///
/// The text is lowercased, every run of characters that are not ASCII letters
/// or digits becomes a single `-`, and leading and trailing hyphens are
/// stripped.
///
/// ```
/// use petrel::kebab_case;
///
/// assert_eq!(kebab_case("React.js"), "react-js");
/// assert_eq!(kebab_case("  Machine   Learning!"), "machine-learning");
/// ```
pub fn kebab_case(text: &str) -> String {
    let lowercased = text.to_lowercase();

    separator_regex()
        .replace_all(&lowercased, "-")
        .trim_matches('-')
        .to_string()
}

/// The normalized identity of a tag.
///
/// Two tags are the same tag when their keys are equal. The key also names the
/// tag's page, so it is always URL-safe.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Serialize)]
#[serde(transparent)]
pub struct TagKey(String);

impl TagKey {
    pub fn new(name: &str) -> Self {
        Self(kebab_case(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for TagKey {
    /// Folds whatever was read, so a deserialized key always matches
    /// [`TagKey::new`].
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|name| Self::new(&name))
    }
}

impl From<&str> for TagKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
