use std::path::{Path, PathBuf};

const BUNDLE_INDEX_STEM: &str = "index";

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FileInfo {
    pub path: PathBuf,
    pub relative_path: PathBuf,
    pub components: Vec<String>,
    /// The path the slug and date are derived from, e.g. `/2020-01-15--hello/`.
    pub content_path: String,
}

impl FileInfo {
    /// Returns `None` when `path` is not inside `root_path`.
    pub fn new(root_path: impl AsRef<Path>, path: impl AsRef<Path>) -> Option<Self> {
        let root_path = root_path.as_ref();
        let path = path.as_ref();
        let relative_path = path.strip_prefix(root_path).ok()?.to_owned();

        Some(Self {
            path: path.to_owned(),
            components: Self::components(&relative_path),
            content_path: Self::content_path(&relative_path),
            relative_path,
        })
    }

    fn components(relative_path: &Path) -> Vec<String> {
        relative_path
            .parent()
            .map(|parent| {
                parent
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Bundles (`2020-01-15--hello/index.md`) are named after their directory,
    /// single files (`about.md`) after their stem.
    fn content_path(relative_path: &Path) -> String {
        let stem = relative_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();

        let name = if stem == BUNDLE_INDEX_STEM {
            relative_path
                .parent()
                .and_then(|parent| parent.file_name())
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or(stem)
        } else {
            stem
        };

        format!("/{name}/")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_file_info() {
        let file = FileInfo::new("content", "content/about.md").unwrap();
        assert_eq!(
            file,
            FileInfo {
                path: PathBuf::from("content/about.md"),
                relative_path: PathBuf::from("about.md"),
                components: vec![],
                content_path: "/about/".to_string(),
            }
        );

        let file = FileInfo::new("content", "content/posts/2020-01-15--hello/index.md").unwrap();
        assert_eq!(
            file,
            FileInfo {
                path: PathBuf::from("content/posts/2020-01-15--hello/index.md"),
                relative_path: PathBuf::from("posts/2020-01-15--hello/index.md"),
                components: vec!["posts".into(), "2020-01-15--hello".into()],
                content_path: "/2020-01-15--hello/".to_string(),
            }
        );

        let file =
            FileInfo::new("some/other/path", "some/other/path/pages/contact.md").unwrap();
        assert_eq!(
            file,
            FileInfo {
                path: PathBuf::from("some/other/path/pages/contact.md"),
                relative_path: PathBuf::from("pages/contact.md"),
                components: vec!["pages".into()],
                content_path: "/contact/".to_string(),
            }
        );
    }

    #[test]
    fn test_index_at_root_keeps_its_stem() {
        let file = FileInfo::new("content", "content/index.md").unwrap();

        assert_eq!(file.content_path, "/index/");
    }

    #[test]
    fn test_file_outside_root() {
        assert_eq!(FileInfo::new("content", "elsewhere/about.md"), None);
    }
}
