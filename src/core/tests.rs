#[cfg(test)]
mod tests_impl {
    use crate::core::catalog::{DurabilityRangeBucket, filter_items, find_duplicate};
    use crate::core::durability::derive;
    use crate::core::item::Item;
    use crate::core::ordering::{SortDirection, SortField, SortSpec, sort_items};
    use crate::core::suggestions::SuggestionIndex;
    use crate::core::test_helpers::{create_worn_item, sample_catalog};

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_sort_sample_catalog_by_name() {
        let mut catalog = sample_catalog();
        sort_items(&mut catalog, SortSpec::default());
        assert_eq!(names(&catalog), vec!["axe", "Iron Axe 55%", "Item 2", "Item 10"]);
    }

    #[test]
    fn test_sort_sample_catalog_by_price_per_kg() {
        let mut catalog = sample_catalog();
        sort_items(
            &mut catalog,
            SortSpec::new(SortField::PricePerKg, SortDirection::Descending),
        );
        // 10.0, 4.0, 2.5, 1.0
        assert_eq!(names(&catalog), vec!["Iron Axe 55%", "Item 10", "Item 2", "axe"]);
    }

    #[test]
    fn test_new_item_flow_from_icon_suggestion() {
        let catalog = sample_catalog();
        let index = SuggestionIndex::from_listing([
            ("Iron_Axe", "/icons/Iron_Axe.png"),
            ("Item10", "/icons/Item10.png"),
        ]);

        let labels = index.query("axe", 12);
        assert_eq!(labels, vec!["Iron Axe"]);

        // No icon match for Iron_Axe.png, falls back to name match
        let axe = index.template_for("Iron Axe", &catalog).unwrap();
        assert_eq!(axe.max_durability, Some(100));

        // Icon match wins for Item10.png
        let bundle = index.template_for("Item 10", &catalog).unwrap();
        assert_eq!(bundle.stack_size, 10);
        assert!(bundle.max_durability.is_none());

        let result = derive(Some(81), axe.max_durability.map(i64::from)).unwrap();
        let name = result.canonical_name("Iron Axe");
        assert_eq!(name, "Iron Axe 80%");
        assert!(find_duplicate(&catalog, &name, None).is_none());
    }

    #[test]
    fn test_renaming_into_existing_name_is_duplicate() {
        let catalog = sample_catalog();
        let result = derive(Some(55), Some(100)).unwrap();
        let name = result.canonical_name("IRON AXE");
        assert!(find_duplicate(&catalog, &name, None).is_some());
        // Editing the item itself is fine
        assert!(find_duplicate(&catalog, &name, Some(2)).is_none());
    }

    #[test]
    fn test_filter_then_sort() {
        let mut catalog = sample_catalog();
        catalog.push(create_worn_item("Iron Axe 20%", 21, 100));

        let mut visible: Vec<Item> = filter_items(&catalog, "iron", DurabilityRangeBucket::All)
            .into_iter()
            .cloned()
            .collect();
        sort_items(&mut visible, SortSpec::default());
        assert_eq!(names(&visible), vec!["Iron Axe 20%", "Iron Axe 55%"]);

        let worn = filter_items(&catalog, "iron", DurabilityRangeBucket::Range1To25);
        assert_eq!(worn.len(), 1);
        assert_eq!(worn[0].name, "Iron Axe 20%");
    }
}
