//! Catalog-wide checks: name uniqueness, durability filtering, search,
//! and icon-folder verification
//!
//! All functions take a borrowed snapshot of the catalog and return
//! references into it; none of them mutate anything.

use crate::core::durability::parse_percent_suffix;
use crate::core::item::Item;
use crate::utils::{eq_ignore_case, path_file_name};
use std::collections::HashSet;

/// Durability filter offered next to the search box
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum DurabilityRangeBucket {
    #[default]
    #[strum(serialize = "All", serialize = "all")]
    All,
    #[strum(serialize = "1-25")]
    Range1To25,
    #[strum(serialize = "26-50")]
    Range26To50,
    #[strum(serialize = "51-75")]
    Range51To75,
    #[strum(serialize = "76-100")]
    Range76To100,
    #[strum(to_string = "100%", serialize = "100")]
    Exactly100,
}

impl DurabilityRangeBucket {
    /// Inclusive percentage bounds, `None` for [`DurabilityRangeBucket::All`].
    pub const fn bounds(self) -> Option<(u32, u32)> {
        match self {
            DurabilityRangeBucket::All => None,
            DurabilityRangeBucket::Range1To25 => Some((1, 25)),
            DurabilityRangeBucket::Range26To50 => Some((26, 50)),
            DurabilityRangeBucket::Range51To75 => Some((51, 75)),
            DurabilityRangeBucket::Range76To100 => Some((76, 100)),
            DurabilityRangeBucket::Exactly100 => Some((100, 100)),
        }
    }

    pub fn contains(self, percentage: u32) -> bool {
        self.bounds()
            .is_none_or(|(low, high)| (low..=high).contains(&percentage))
    }
}

/// Finds another item whose name equals `candidate_name`, ignoring case.
///
/// `exclude` is the catalog index of the item being edited, so saving an
/// item under its own name is not a conflict.
pub fn find_duplicate<'c>(
    catalog: &'c [Item],
    candidate_name: &str,
    exclude: Option<usize>,
) -> Option<&'c Item> {
    let candidate = candidate_name.trim();
    catalog
        .iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != exclude)
        .map(|(_, item)| item)
        .find(|item| eq_ignore_case(item.name.trim(), candidate))
}

/// Percentage used for bucket filtering: rounded durability, else the
/// name's trailing `"<n>%"`.
pub fn bucket_percentage(item: &Item) -> Option<u32> {
    item.rounded_durability_percentage()
        .map(u32::from)
        .or_else(|| parse_percent_suffix(&item.name))
}

/// Returns `true` if the item belongs in `bucket`.
///
/// Items without any percentage match every bucket.
pub fn matches_bucket(item: &Item, bucket: DurabilityRangeBucket) -> bool {
    if bucket == DurabilityRangeBucket::All {
        return true;
    }
    bucket_percentage(item).is_none_or(|pct| bucket.contains(pct))
}

/// Items whose name contains `search` (ignoring case) and that fall in `bucket`.
///
/// A blank search matches every name.
pub fn filter_items<'c>(
    catalog: &'c [Item],
    search: &str,
    bucket: DurabilityRangeBucket,
) -> Vec<&'c Item> {
    let needle = search.trim().to_lowercase();
    catalog
        .iter()
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .filter(|item| matches_bucket(item, bucket))
        .collect()
}

/// Lists icon files that no catalog item references.
///
/// Entries may be bare file names or paths; only the file name is compared.
/// Results are lowercase and sorted.
pub fn find_unused_icons<I, S>(catalog: &[Item], folder_files: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let used: HashSet<String> = catalog
        .iter()
        .filter_map(Item::icon_file_name)
        .map(str::to_lowercase)
        .collect();

    let mut unused: Vec<String> = folder_files
        .into_iter()
        .filter_map(|entry| path_file_name(entry.as_ref()).map(str::to_lowercase))
        .filter(|name| !used.contains(name))
        .collect();

    unused.sort();
    unused
}

/// Summary line shown above the item table.
pub fn totals_text(total: usize, showing: usize) -> String {
    format!("Total items: {total} (showing {showing})")
}

/// Status line after the search text changes.
pub fn search_status(search: &str, found: usize) -> String {
    let search = search.trim();
    if search.is_empty() {
        "Showing all items".to_string()
    } else {
        format!("Found {found} item(s) matching '{search}'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_helpers::{create_test_item, create_worn_item, with_icon};
    use strum::IntoEnumIterator;

    #[test]
    fn test_find_duplicate_ignores_case() {
        let catalog = vec![create_test_item("Axe", 1.0)];
        let dup = find_duplicate(&catalog, "axe", None);
        assert_eq!(dup.map(|i| i.name.as_str()), Some("Axe"));
    }

    #[test]
    fn test_find_duplicate_excludes_edited_item() {
        let catalog = vec![create_test_item("Axe", 1.0)];
        assert!(find_duplicate(&catalog, "axe", Some(0)).is_none());
    }

    #[test]
    fn test_find_duplicate_other_item_still_conflicts() {
        let catalog = vec![create_test_item("Axe", 1.0), create_test_item("Bow", 1.0)];
        assert!(find_duplicate(&catalog, "AXE ", Some(1)).is_some());
        assert!(find_duplicate(&catalog, "Axes", None).is_none());
    }

    #[test]
    fn test_bucket_bounds() {
        assert!(DurabilityRangeBucket::All.contains(0));
        assert!(DurabilityRangeBucket::Range1To25.contains(1));
        assert!(!DurabilityRangeBucket::Range1To25.contains(0));
        assert!(DurabilityRangeBucket::Range76To100.contains(100));
        assert!(DurabilityRangeBucket::Exactly100.contains(100));
        assert!(!DurabilityRangeBucket::Exactly100.contains(95));
    }

    #[test]
    fn test_bucket_parse_and_display() {
        assert_eq!(
            "76-100".parse::<DurabilityRangeBucket>().unwrap(),
            DurabilityRangeBucket::Range76To100
        );
        assert_eq!(
            "100".parse::<DurabilityRangeBucket>().unwrap(),
            DurabilityRangeBucket::Exactly100
        );
        assert_eq!(DurabilityRangeBucket::Exactly100.to_string(), "100%");
        for bucket in DurabilityRangeBucket::iter() {
            assert_eq!(
                bucket.to_string().parse::<DurabilityRangeBucket>().unwrap(),
                bucket
            );
        }
    }

    #[test]
    fn test_matches_bucket_uses_rounded_durability() {
        // 79/100 rounds to 80
        let item = create_worn_item("Shield", 79, 100);
        assert!(matches_bucket(&item, DurabilityRangeBucket::Range76To100));
        assert!(!matches_bucket(&item, DurabilityRangeBucket::Range51To75));
        assert!(matches_bucket(&item, DurabilityRangeBucket::All));
    }

    #[test]
    fn test_matches_bucket_name_fallback() {
        let item = create_test_item("Shield 40%", 1.0);
        assert!(matches_bucket(&item, DurabilityRangeBucket::Range26To50));
        assert!(!matches_bucket(&item, DurabilityRangeBucket::Range76To100));
    }

    #[test]
    fn test_matches_bucket_fail_open() {
        let item = create_test_item("Shield", 1.0);
        for bucket in DurabilityRangeBucket::iter() {
            assert!(matches_bucket(&item, bucket));
        }
    }

    #[test]
    fn test_zero_percent_only_in_all() {
        let item = create_worn_item("Broken Pick", 0, 50);
        assert!(matches_bucket(&item, DurabilityRangeBucket::All));
        assert!(!matches_bucket(&item, DurabilityRangeBucket::Range1To25));
    }

    #[test]
    fn test_filter_items_search_and_bucket() {
        let catalog = vec![
            create_worn_item("Iron Sword 80%", 80, 100),
            create_worn_item("Iron Sword 30%", 30, 100),
            create_test_item("Wooden Shield", 1.0),
        ];

        let all = filter_items(&catalog, "  ", DurabilityRangeBucket::All);
        assert_eq!(all.len(), 3);

        let swords = filter_items(&catalog, "SWORD", DurabilityRangeBucket::All);
        assert_eq!(swords.len(), 2);

        let fresh = filter_items(&catalog, "", DurabilityRangeBucket::Range76To100);
        let names: Vec<_> = fresh.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Iron Sword 80%", "Wooden Shield"]);
    }

    #[test]
    fn test_find_unused_icons() {
        let catalog = vec![
            with_icon(create_test_item("Axe", 1.0), "/icons/Axe.png"),
            create_test_item("Bow", 1.0),
        ];
        let folder = ["/icons/axe.PNG", "/icons/Bow.png", "/icons/Arrow.png"];
        assert_eq!(
            find_unused_icons(&catalog, folder),
            vec!["arrow.png".to_string(), "bow.png".to_string()]
        );
    }

    #[test]
    fn test_find_unused_icons_windows_paths() {
        let catalog = vec![with_icon(
            create_test_item("Sword", 1.0),
            r"X:\Software\ItemTracker\ItemPNGS\Sword.png",
        )];
        let folder = ["/icons/Sword.png", r"D:\icons\Shield.png"];
        assert_eq!(find_unused_icons(&catalog, folder), vec!["shield.png".to_string()]);
    }

    #[test]
    fn test_totals_and_status_text() {
        assert_eq!(totals_text(5, 2), "Total items: 5 (showing 2)");
        assert_eq!(search_status("", 5), "Showing all items");
        assert_eq!(search_status(" axe ", 1), "Found 1 item(s) matching 'axe'");
    }
}
