use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::TagKey;

static YAML_REGEX: OnceLock<Regex> = OnceLock::new();

fn yaml_regex() -> &'static Regex {
    YAML_REGEX.get_or_init(|| {
        let pattern = r"^[[:space:]]*---(\r?\n(?s).*?(?-s))---[[:space:]]*(?:$|(?:\r?\n((?s).*(?-s))$))";
        Regex::new(pattern).expect("failed to compile regex for YAML front matter")
    })
}

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("content does not start with a `---` fenced front matter block")]
    MissingFence,

    #[error("invalid front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Splits `content` into its deserialized front matter and the body after it.
pub fn parse_front_matter<T>(content: &str) -> Result<(T, &str), FrontMatterError>
where
    T: serde::de::DeserializeOwned,
{
    let captures = yaml_regex()
        .captures(content)
        .ok_or(FrontMatterError::MissingFence)?;

    let raw = captures.get(1).map_or("", |m| m.as_str());
    let body = captures.get(2).map_or("", |m| m.as_str());

    let front_matter: T = serde_yaml::from_str(raw)?;

    Ok((front_matter, body))
}

/// The front matter of a blog post or page.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFrontMatter {
    pub title: String,
    pub sub_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    pub cover: Option<String>,
    pub post_author: Option<String>,
    pub category: Option<String>,
}

impl PostFrontMatter {
    /// Returns the normalized key of every tag, in the order written.
    pub fn tag_keys(&self) -> Vec<TagKey> {
        self.tags.iter().map(|tag| TagKey::new(tag)).collect()
    }
}

/// Drops the blank entries the article template leaves behind (`tags: [""]`)
/// and accepts `tags:` with no value.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let tags = Option::<Vec<Option<String>>>::deserialize(deserializer)?;

    Ok(tags
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .filter(|tag| !tag.trim().is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_front_matter() {
        let text = indoc! {"
            ---
            title: Hello, World
            subTitle: A first post
            tags: [React, react.js, Testing]
            cover: cover.jpg
            postAuthor: Jane Doe
            ---

            Some *Markdown* content.
        "};

        let (front_matter, body) = parse_front_matter::<PostFrontMatter>(text).unwrap();

        assert_eq!(
            front_matter,
            PostFrontMatter {
                title: "Hello, World".to_string(),
                sub_title: Some("A first post".to_string()),
                tags: vec!["React".into(), "react.js".into(), "Testing".into()],
                cover: Some("cover.jpg".to_string()),
                post_author: Some("Jane Doe".to_string()),
                category: None,
            }
        );
        assert_eq!(body, "Some *Markdown* content.\n");
    }

    #[test]
    fn test_parse_front_matter_without_body() {
        let text = indoc! {"
            ---
            title: Empty
            ---
        "};

        let (front_matter, body) = parse_front_matter::<PostFrontMatter>(text).unwrap();

        assert_eq!(front_matter.title, "Empty");
        assert!(front_matter.tags.is_empty());
        assert_eq!(body, "");
    }

    #[test]
    fn test_blank_template_tags_are_dropped() {
        let text = indoc! {r#"
            ---
            title: Draft
            subTitle:
            tags: [""]
            cover:
            ---
        "#};

        let (front_matter, _) = parse_front_matter::<PostFrontMatter>(text).unwrap();

        assert_eq!(front_matter.tags, Vec::<String>::new());
        assert_eq!(front_matter.sub_title, None);
        assert_eq!(front_matter.cover, None);
    }

    #[test]
    fn test_missing_fence() {
        let result = parse_front_matter::<PostFrontMatter>("# Just a heading\n");

        assert!(matches!(result, Err(FrontMatterError::MissingFence)));
    }

    #[test]
    fn test_invalid_yaml() {
        let text = indoc! {"
            ---
            tags: [unclosed
            ---
        "};

        let result = parse_front_matter::<PostFrontMatter>(text);

        assert!(matches!(result, Err(FrontMatterError::Yaml(_))));
    }

    #[test]
    fn test_tag_keys() {
        let front_matter = PostFrontMatter {
            title: "Tags".to_string(),
            sub_title: None,
            tags: vec!["Machine Learning".into(), "AI/ML".into()],
            cover: None,
            post_author: None,
            category: None,
        };

        assert_eq!(
            front_matter.tag_keys(),
            vec![TagKey::new("machine-learning"), TagKey::new("ai-ml")]
        );
    }
}
