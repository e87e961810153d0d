//! Full-text and tag search over catalog subsets.
//!
//! # Invariants
//! - Full-text matching folds case on both the pattern and the haystack.
//! - The haystack is title, description and note tags joined by spaces.
//! - Tag search is exact and case-sensitive.
//! - Results keep input order.

use crate::model::item::{Item, NoteEntry};
use crate::search::kmp::KmpPattern;
use log::debug;

/// Returns items whose folded haystack contains the folded `pattern`.
///
/// An empty pattern matches nothing. An empty result means "not found".
pub fn full_text_search<'a, I>(pattern: &str, items: I) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    let folded = KmpPattern::new(&fold_case(pattern));
    if folded.is_empty() {
        return Vec::new();
    }

    let mut scanned = 0usize;
    let hits = items
        .into_iter()
        .inspect(|_| scanned += 1)
        .filter(|item| folded.is_found_in(&fold_case(&item.search_text())))
        .collect::<Vec<_>>();

    debug!(
        "event=full_text_search module=search status=ok pattern_len={} scanned={} hits={}",
        folded.len(),
        scanned,
        hits.len()
    );
    hits
}

/// Returns notes carrying a tag exactly equal to `tag`.
pub fn notes_with_tag<'a>(tag: &str, notes: &[NoteEntry<'a>]) -> Vec<NoteEntry<'a>> {
    let hits = notes
        .iter()
        .copied()
        .filter(|note| note.fields.has_tag(tag))
        .collect::<Vec<_>>();

    debug!(
        "event=tag_search module=search status=ok scanned={} hits={}",
        notes.len(),
        hits.len()
    );
    hits
}

/// Case folding applied to both sides of a full-text comparison.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}
