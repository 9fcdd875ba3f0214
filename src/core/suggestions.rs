//! Name suggestions built from the icon folder
//!
//! Every icon file stem is normalized into a label (see
//! [`normalize`](crate::core::normalize::normalize)); the label is what the
//! name field suggests while typing, and picking it selects the icon.
//!
//! Labels are unique ignoring case. The registry is a `BTreeMap` keyed by the
//! lowercased label, so iteration order is the case-insensitive sort order
//! and the map is replaced wholesale on every refresh.

use crate::core::durability::{parse_percent_suffix, strip_durability_suffix};
use crate::core::item::Item;
use crate::core::normalize::normalize;
use crate::utils::{eq_ignore_case, path_file_name};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;

/// Number of suggestions shown under the name field
pub const DEFAULT_SUGGESTION_LIMIT: usize = 12;

/// Durability score for items with no wear information at all
const UNWORN_SCORE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSuggestionEntry {
    pub canonical_label: String,
    pub source_path: String,
    /// Cached lowercase label for substring matching
    label_lowercase: String,
}

impl NameSuggestionEntry {
    fn new(canonical_label: String, source_path: String) -> Self {
        Self {
            label_lowercase: canonical_label.to_lowercase(),
            canonical_label,
            source_path,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SuggestionIndex {
    entries: BTreeMap<String, NameSuggestionEntry>,
}

impl SuggestionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from `(filename stem, source path)` pairs.
    ///
    /// Blank labels are skipped. When two stems normalize to the same label
    /// (ignoring case) the first one in listing order wins.
    pub fn from_listing<I, S, P>(listing: I) -> Self
    where
        I: IntoIterator<Item = (S, P)>,
        S: AsRef<str>,
        P: Into<String>,
    {
        let mut entries = BTreeMap::new();

        for (stem, path) in listing {
            let stem = stem.as_ref();
            let label = normalize(stem);
            if label.is_empty() {
                tracing::trace!("Skipping '{stem}': normalizes to a blank label");
                continue;
            }

            match entries.entry(label.to_lowercase()) {
                Entry::Vacant(slot) => {
                    slot.insert(NameSuggestionEntry::new(label, path.into()));
                }
                Entry::Occupied(existing) => {
                    tracing::debug!(
                        "Label '{}' already maps to {}; ignoring {}",
                        label,
                        existing.get().source_path,
                        path.into()
                    );
                }
            }
        }

        tracing::debug!("Suggestion index built: {} labels", entries.len());
        Self { entries }
    }

    /// Builds the index from file paths, using each file stem as the raw name.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self::from_listing(paths.into_iter().filter_map(|path| {
            let path = path.as_ref();
            let stem = path.file_stem()?.to_str()?.to_string();
            Some((stem, path.to_string_lossy().into_owned()))
        }))
    }

    /// Replaces the whole index with one built from a fresh listing.
    pub fn refresh<I, S, P>(&mut self, listing: I)
    where
        I: IntoIterator<Item = (S, P)>,
        S: AsRef<str>,
        P: Into<String>,
    {
        *self = Self::from_listing(listing);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &NameSuggestionEntry> {
        self.entries.values()
    }

    /// All labels, sorted ascending ignoring case.
    pub fn all_labels(&self) -> Vec<&str> {
        self.entries
            .values()
            .map(|e| e.canonical_label.as_str())
            .collect()
    }

    /// Labels containing `text` (ignoring case), in sorted order, at most `limit`.
    pub fn query(&self, text: &str, limit: usize) -> Vec<&str> {
        let needle = text.to_lowercase();
        self.entries
            .values()
            .filter(|e| e.label_lowercase.contains(&needle))
            .map(|e| e.canonical_label.as_str())
            .take(limit)
            .collect()
    }

    /// Fuzzy-ranked labels, best match first.
    ///
    /// Equal scores keep label order. An empty query returns the first
    /// `limit` labels.
    pub fn fuzzy_query(&self, text: &str, limit: usize) -> Vec<&str> {
        if text.is_empty() {
            return self.all_labels().into_iter().take(limit).collect();
        }

        let mut matcher = Matcher::new(Config::DEFAULT);
        let query_lowercase = text.to_lowercase();
        let mut needle_buf = Vec::new();
        let needle = Utf32Str::new(&query_lowercase, &mut needle_buf);

        // Reuse buffer across all labels to reduce allocations
        let mut haystack_buf = Vec::new();

        let mut results: Vec<_> = self
            .entries
            .values()
            .filter_map(|entry| {
                haystack_buf.clear();
                let haystack = Utf32Str::new(&entry.label_lowercase, &mut haystack_buf);
                matcher
                    .fuzzy_match(haystack, needle)
                    .map(|score| (entry.canonical_label.as_str(), score))
            })
            .collect();

        // Stable sort keeps label order for equal scores
        results.sort_by(|a, b| b.1.cmp(&a.1));
        results
            .into_iter()
            .take(limit)
            .map(|(label, _)| label)
            .collect()
    }

    /// Source path for a label, matched exactly but ignoring case.
    pub fn resolve_icon(&self, label: &str) -> Option<&str> {
        self.entries
            .get(&label.to_lowercase())
            .map(|e| e.source_path.as_str())
    }

    /// Picks the catalog item to copy stack size, weight and max durability
    /// from when `label` is chosen, using the label's own icon.
    pub fn template_for<'c>(&self, label: &str, catalog: &'c [Item]) -> Option<&'c Item> {
        best_matching_item(label, catalog, self.resolve_icon(label))
    }
}

/// Wear score used to rank variants of the same item; higher is less worn.
pub fn durability_score(item: &Item) -> u32 {
    item.rounded_durability_percentage()
        .map(u32::from)
        .or_else(|| parse_percent_suffix(&item.name))
        .unwrap_or(UNWORN_SCORE)
}

/// Finds the existing item that best matches a suggestion label.
///
/// 1. An item whose icon file name equals the selected icon's file name.
/// 2. Otherwise items whose name, without durability suffix and normalized,
///    equals the label; the highest [`durability_score`] wins, first in
///    catalog order on ties.
pub fn best_matching_item<'c>(
    label: &str,
    catalog: &'c [Item],
    selected_icon: Option<&str>,
) -> Option<&'c Item> {
    let selected_file = selected_icon.and_then(path_file_name);

    if let Some(file_name) = selected_file
        && let Some(item) = catalog.iter().find(|item| {
            item.icon_file_name()
                .is_some_and(|name| eq_ignore_case(name, file_name))
        })
    {
        return Some(item);
    }

    let wanted = normalize(label);
    if wanted.is_empty() {
        return None;
    }

    let mut best: Option<(&Item, u32)> = None;
    for item in catalog {
        if !eq_ignore_case(&normalize(strip_durability_suffix(&item.name)), &wanted) {
            continue;
        }
        let score = durability_score(item);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((item, score));
        }
    }
    best.map(|(item, _)| item)
}
