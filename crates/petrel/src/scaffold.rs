use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use crate::content::{PostFrontMatter, DATE_DELIMITER_DOUBLE_DASH};

const REPLACED_CHARACTERS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '\\', '/', ' ',
];

const ARTICLE_FILENAME: &str = "index.md";

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("an article needs a name")]
    EmptyName,

    #[error("article already exists at '{0}'")]
    AlreadyExists(PathBuf),

    #[error("failed to write article: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Returns the directory name for a new article, e.g.
/// `2020-01-15--my-new-article`.
///
/// Each special character is replaced on its own, so runs are kept.
pub fn article_path_name(date: NaiveDate, name: &str) -> String {
    let folded = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if REPLACED_CHARACTERS.contains(&c) { '-' } else { c })
        .collect::<String>();

    format!(
        "{}{DATE_DELIMITER_DOUBLE_DASH}{folded}",
        date.format("%Y-%m-%d")
    )
}

/// A new, empty article ready to be written to disk.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ArticleScaffold {
    pub directory_name: String,
    pub contents: String,
}

impl ArticleScaffold {
    pub fn new(date: NaiveDate, name: &str) -> Result<Self, ScaffoldError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScaffoldError::EmptyName);
        }

        Ok(Self {
            directory_name: article_path_name(date, name),
            contents: article_template(name)?,
        })
    }

    /// Creates the article directory under `posts_path` and writes the
    /// template into it. Returns the path of the written file.
    pub fn write_to(&self, posts_path: impl AsRef<Path>) -> Result<PathBuf, ScaffoldError> {
        let directory = posts_path.as_ref().join(&self.directory_name);
        if directory.exists() {
            return Err(ScaffoldError::AlreadyExists(directory));
        }

        fs::create_dir_all(&directory)?;

        let path = directory.join(ARTICLE_FILENAME);
        fs::write(&path, &self.contents)?;

        log::info!("created article at '{}'", path.display());

        Ok(path)
    }
}

/// The tag list keeps one blank slot for the author to fill in.
fn article_template(name: &str) -> Result<String, ScaffoldError> {
    let front_matter = PostFrontMatter {
        title: name.to_string(),
        sub_title: None,
        tags: vec![String::new()],
        cover: None,
        post_author: None,
        category: None,
    };
    let yaml = serde_yaml::to_string(&front_matter)?;

    Ok(format!(
        "---\n{}\n---\n\n- [Intro](#intro)\n- ...\n\n## <a name=\"intro\"></a>Intro\n\n",
        yaml.trim_end()
    ))
}
