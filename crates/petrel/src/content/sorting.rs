use std::cmp::Ordering;

use crate::content::ContentDocument;

/// Orders documents newest first.
///
/// Documents whose date prefix is not a date come last. Ties are broken by
/// slug.
pub fn sort_by_date(documents: &[ContentDocument]) -> Vec<&ContentDocument> {
    let (mut dated, mut undated): (Vec<&ContentDocument>, Vec<_>) = documents
        .iter()
        .partition(|document| document.slug.date().is_some());

    dated.sort_unstable_by(|a, b| {
        let ord = b.slug.date().cmp(&a.slug.date());

        match ord {
            Ordering::Equal => a.slug.slug.cmp(&b.slug.slug),
            ord => ord,
        }
    });
    undated.sort_unstable_by(|a, b| a.slug.slug.cmp(&b.slug.slug));

    dated.extend(undated);
    dated
}
