use derive_more::Deref;
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;
use url::ParseError;

use crate::permalink::Permalink;
use crate::{SiteConfig, TagKey};

/// A tag together with the number of times it was used.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct TagEntry<R> {
    /// The tag as written by the author.
    pub name: String,
    pub total_count: u64,

    /// The content tagged with this tag, in the order it was seen.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<R>,
}

impl<R> TagEntry<R> {
    pub fn new(name: impl Into<String>, total_count: u64) -> Self {
        Self {
            name: name.into(),
            total_count,
            references: Vec::new(),
        }
    }

    pub fn with_references(name: impl Into<String>, references: Vec<R>) -> Self {
        Self {
            name: name.into(),
            total_count: references.len() as u64,
            references,
        }
    }

    pub fn key(&self) -> TagKey {
        TagKey::new(&self.name)
    }

    /// Returns the site path of this tag's page, e.g. `/tags/react-js/`.
    pub fn path(&self, config: &SiteConfig) -> String {
        let tags_path = config.tags_path.trim_matches('/');
        config.prefixed(&format!("/{tags_path}/{}/", self.key()))
    }

    pub fn permalink(&self, config: &SiteConfig) -> Result<Permalink, ParseError> {
        let tags_path = config.tags_path.trim_matches('/');
        Permalink::from_path(config, &format!("/{tags_path}/{}/", self.key()))
    }
}

/// Tags in which no two entries share a [`TagKey`].
///
/// Entries keep the order in which their key was first seen.
#[derive(Debug, PartialEq, Eq, Clone, Deref, Serialize)]
#[serde(transparent)]
pub struct MergedTagList<R>(Vec<TagEntry<R>>);

impl<R> MergedTagList<R> {
    pub fn get(&self, key: &TagKey) -> Option<&TagEntry<R>> {
        self.0.iter().find(|entry| &entry.key() == key)
    }

    /// Returns the entries ordered from most to least used.
    ///
    /// Entries with equal counts keep their merged order.
    pub fn by_popularity(&self) -> Vec<&TagEntry<R>> {
        let mut entries = self.0.iter().collect::<Vec<_>>();
        entries.sort_by(|a, b| b.total_count.cmp(&a.total_count));
        entries
    }

    pub fn total_count(&self) -> u64 {
        self.0
            .iter()
            .fold(0, |total: u64, entry| total.saturating_add(entry.total_count))
    }

    pub fn into_inner(self) -> Vec<TagEntry<R>> {
        self.0
    }
}

impl<R> IntoIterator for MergedTagList<R> {
    type Item = TagEntry<R>;
    type IntoIter = std::vec::IntoIter<TagEntry<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a MergedTagList<R> {
    type Item = &'a TagEntry<R>;
    type IntoIter = std::slice::Iter<'a, TagEntry<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Merges tags whose names fold to the same [`TagKey`].
///
/// The first entry seen for a key keeps its name and position. Later entries
/// add their count to it and append their references.
pub fn merge_equivalent_tags<R: Clone>(tags: &[TagEntry<R>]) -> MergedTagList<R> {
    let mut merged: IndexMap<TagKey, TagEntry<R>> = IndexMap::with_capacity(tags.len());

    for tag in tags {
        match merged.entry(tag.key()) {
            Entry::Occupied(mut entry) => {
                log::debug!(
                    "merging tag {:?} into {:?} under key {:?}",
                    tag.name,
                    entry.get().name,
                    entry.key().as_str()
                );

                let survivor = entry.get_mut();
                survivor.total_count = survivor.total_count.saturating_add(tag.total_count);
                survivor.references.extend(tag.references.iter().cloned());
            }
            Entry::Vacant(entry) => {
                entry.insert(tag.clone());
            }
        }
    }

    MergedTagList(merged.into_values().collect())
}

/// Groups tagged content by exact tag name.
///
/// Each distinct name becomes one entry, in order of first use, counting and
/// referencing every item tagged with it. No case folding happens here; pass
/// the result through [`merge_equivalent_tags`] for that.
pub fn group_tags<R, I, T, S>(tagged: I) -> Vec<TagEntry<R>>
where
    R: Clone,
    I: IntoIterator<Item = (R, T)>,
    T: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut groups: IndexMap<String, TagEntry<R>> = IndexMap::new();

    for (reference, tags) in tagged {
        for tag in tags {
            let tag = tag.as_ref();
            let entry = groups
                .entry(tag.to_string())
                .or_insert_with(|| TagEntry::new(tag, 0));

            entry.total_count = entry.total_count.saturating_add(1);
            entry.references.push(reference.clone());
        }
    }

    groups.into_values().collect()
}
