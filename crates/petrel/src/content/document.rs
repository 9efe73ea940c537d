use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use walkdir::WalkDir;

use crate::content::{
    derive_slug_fields, parse_front_matter, sort_by_date, ContentKind, FileInfo,
    FrontMatterError, PostFrontMatter, SlugRecord,
};
use crate::SiteConfig;

/// A Markdown post or page together with the fields derived from its path.
#[derive(Debug, Clone, Serialize)]
pub struct ContentDocument {
    #[serde(skip)]
    pub file: FileInfo,
    pub kind: ContentKind,
    #[serde(flatten)]
    pub slug: SlugRecord,
    pub meta: PostFrontMatter,
    #[serde(skip)]
    pub raw_content: String,
}

#[derive(Error, Debug)]
pub enum ParseDocumentError {
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid front matter in '{filepath}': {source}")]
    InvalidFrontMatter {
        filepath: PathBuf,
        source: FrontMatterError,
    },

    #[error("'{filepath}' is not inside the content directory")]
    OutsideRoot { filepath: PathBuf },
}

#[derive(Error, Debug)]
pub enum LoadDocumentsError {
    #[error("failed to walk content directory: {0}")]
    Io(#[from] walkdir::Error),

    #[error("failed to parse document: {0}")]
    ParseDocument(#[from] ParseDocumentError),
}

impl ContentDocument {
    pub fn from_path(
        root_path: impl AsRef<Path>,
        path: impl AsRef<Path>,
        config: &SiteConfig,
    ) -> Result<Self, ParseDocumentError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        Self::parse(&contents, root_path, path, config)
    }

    pub fn parse(
        text: &str,
        root_path: impl AsRef<Path>,
        filepath: &Path,
        config: &SiteConfig,
    ) -> Result<Self, ParseDocumentError> {
        let file =
            FileInfo::new(root_path, filepath).ok_or_else(|| ParseDocumentError::OutsideRoot {
                filepath: filepath.to_owned(),
            })?;

        let (meta, content) = parse_front_matter::<PostFrontMatter>(text).map_err(|source| {
            ParseDocumentError::InvalidFrontMatter {
                filepath: filepath.to_owned(),
                source,
            }
        })?;

        let slug = derive_slug_fields(&file.content_path, &config.slug_delimiter);
        if slug.has_date() && slug.date().is_none() {
            log::warn!(
                "date prefix {:?} of '{}' is not a YYYY-MM-DD date",
                slug.date_prefix,
                filepath.display()
            );
        }

        Ok(Self {
            kind: ContentKind::from_relative_path(&file.relative_path),
            file,
            slug,
            meta,
            raw_content: content.to_string(),
        })
    }

    /// The path the "edit this page" link points at.
    pub fn edit_path(&self, config: &SiteConfig) -> String {
        self.slug.edit_path(&config.slug_delimiter)
    }
}

fn is_markdown(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .path()
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension == "md")
            .unwrap_or(false)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|filename| filename.starts_with('.'))
            .unwrap_or(false)
}

/// Loads every Markdown document under `content_path`, newest first.
pub fn load_documents(
    content_path: impl AsRef<Path>,
    config: &SiteConfig,
) -> Result<Vec<ContentDocument>, LoadDocumentsError> {
    let content_path = content_path.as_ref();

    let walker = WalkDir::new(content_path)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));

    let mut documents = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !is_markdown(&entry) {
            continue;
        }

        documents.push(ContentDocument::from_path(content_path, entry.path(), config)?);
    }

    log::info!(
        "loaded {} documents from '{}'",
        documents.len(),
        content_path.display()
    );

    Ok(sort_by_date(&documents).into_iter().cloned().collect())
}
