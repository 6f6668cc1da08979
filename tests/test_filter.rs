//! Search and sort pipeline tests over both derived views.

use vegtrack_sdk::filter::{filter_and_sort_groups, filter_and_sort_vegetables};
use vegtrack_sdk::{
    group_by_date, units, PurchaseRecord, SortField, SortOrder, Unit, VegetableSummary,
};

fn summary(name: &str, current: f64, last: f64, updated: &str) -> VegetableSummary {
    VegetableSummary {
        id: format!("{}-test", name.to_lowercase()),
        name: name.to_string(),
        current_price: current,
        last_price: last,
        last_updated: updated.to_string(),
    }
}

/// Build a stored-shape record. `price` is the total paid for the quantity.
fn record(id: &str, name: &str, quantity: f64, unit: Unit, price: f64, date: &str) -> PurchaseRecord {
    PurchaseRecord {
        id: id.to_string(),
        vegetable_id: format!("{}-test", name.to_lowercase()),
        vegetable_name: name.to_string(),
        quantity,
        unit,
        price,
        date: date.to_string(),
        prices: units::normalize(quantity, unit, price).unwrap(),
    }
}

fn names(items: &[VegetableSummary]) -> Vec<&str> {
    items.iter().map(|v| v.name.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Vegetable summaries: search
// ---------------------------------------------------------------------------

#[test]
fn empty_search_keeps_all_items_sorted_by_name() {
    let items = vec![
        summary("Carrot", 30.0, 30.0, "2024-01-01"),
        summary("Beans", 50.0, 50.0, "2024-01-02"),
    ];

    let result = filter_and_sort_vegetables(&items, "", SortField::Name, SortOrder::Asc);
    assert_eq!(names(&result), vec!["Beans", "Carrot"]);
}

#[test]
fn search_is_case_insensitive_substring_match() {
    let items = vec![
        summary("Tomatoes", 40.0, 30.0, "2024-03-10"),
        summary("Potatoes", 20.0, 20.0, "2024-03-08"),
        summary("Beans", 50.0, 50.0, "2024-03-09"),
    ];

    let result = filter_and_sort_vegetables(&items, "TOES", SortField::Name, SortOrder::Asc);
    assert_eq!(names(&result), vec!["Potatoes", "Tomatoes"]);
}

// ---------------------------------------------------------------------------
// Vegetable summaries: sort fields
// ---------------------------------------------------------------------------

#[test]
fn price_sort_uses_current_per_kilogram_price() {
    let items = vec![
        summary("Beans", 50.0, 50.0, "2024-03-09"),
        summary("Potatoes", 20.0, 20.0, "2024-03-08"),
        summary("Tomatoes", 40.0, 30.0, "2024-03-10"),
    ];

    let asc = filter_and_sort_vegetables(&items, "", SortField::Price, SortOrder::Asc);
    assert_eq!(names(&asc), vec!["Potatoes", "Tomatoes", "Beans"]);

    let desc = filter_and_sort_vegetables(&items, "", SortField::Price, SortOrder::Desc);
    assert_eq!(names(&desc), vec!["Beans", "Tomatoes", "Potatoes"]);
}

#[test]
fn date_sort_uses_last_updated() {
    let items = vec![
        summary("Beans", 50.0, 50.0, "2024-03-09"),
        summary("Tomatoes", 40.0, 30.0, "2024-03-10"),
        summary("Potatoes", 20.0, 20.0, "2024-03-08"),
    ];

    let asc = filter_and_sort_vegetables(&items, "", SortField::Date, SortOrder::Asc);
    assert_eq!(names(&asc), vec!["Potatoes", "Beans", "Tomatoes"]);
}

#[test]
fn descending_keeps_ties_in_original_order() {
    // Both at 30/kg; a post-hoc list reverse would flip them.
    let items = vec![
        summary("Carrot", 30.0, 30.0, "2024-01-01"),
        summary("Radish", 30.0, 30.0, "2024-01-02"),
        summary("Beans", 50.0, 50.0, "2024-01-03"),
    ];

    let asc = filter_and_sort_vegetables(&items, "", SortField::Price, SortOrder::Asc);
    assert_eq!(names(&asc), vec!["Carrot", "Radish", "Beans"]);

    let desc = filter_and_sort_vegetables(&items, "", SortField::Price, SortOrder::Desc);
    assert_eq!(names(&desc), vec!["Beans", "Carrot", "Radish"]);
}

#[test]
fn quantity_sort_leaves_summaries_unchanged() {
    let items = vec![
        summary("Carrot", 30.0, 30.0, "2024-01-01"),
        summary("Beans", 50.0, 50.0, "2024-01-02"),
    ];

    let result = filter_and_sort_vegetables(&items, "", SortField::Quantity, SortOrder::Asc);
    assert_eq!(names(&result), vec!["Carrot", "Beans"]);
}

// ---------------------------------------------------------------------------
// Purchase groups
// ---------------------------------------------------------------------------

#[test]
fn group_search_drops_groups_without_matches_and_recomputes_totals() {
    let records = vec![
        record("p1", "Tomatoes", 1.0, Unit::Kilogram, 40.0, "2024-03-10"),
        record("p2", "Beans", 500.0, Unit::Gram, 25.0, "2024-03-10"),
        record("p3", "Carrot", 1.0, Unit::Kilogram, 30.0, "2024-03-01"),
    ];
    let groups = group_by_date(&records).unwrap();

    let result = filter_and_sort_groups(&groups, "tomato", SortField::Date, SortOrder::Desc);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].date, "2024-03-10");
    assert_eq!(result[0].purchases.len(), 1);
    // Total covers only the surviving member (1 kg at 40/kg)
    assert_eq!(result[0].total_amount, 40.0);
}

#[test]
fn member_sort_by_quantity_normalizes_units() {
    // 750 g sorts below 1 kg even though 750 > 1 numerically
    let records = vec![
        record("p1", "Tomatoes", 1.0, Unit::Kilogram, 40.0, "2024-03-10"),
        record("p2", "Beans", 750.0, Unit::Gram, 30.0, "2024-03-10"),
    ];
    let groups = group_by_date(&records).unwrap();

    let result = filter_and_sort_groups(&groups, "", SortField::Quantity, SortOrder::Asc);
    let members: Vec<&str> = result[0]
        .purchases
        .iter()
        .map(|p| p.vegetable_name.as_str())
        .collect();
    assert_eq!(members, vec!["Beans", "Tomatoes"]);
}

#[test]
fn member_sort_by_price_uses_per_kilogram() {
    // Beans: 500 g for 25 -> 50/kg. Tomatoes: 2 kg for 80 -> 40/kg.
    let records = vec![
        record("p1", "Beans", 500.0, Unit::Gram, 25.0, "2024-03-10"),
        record("p2", "Tomatoes", 2.0, Unit::Kilogram, 80.0, "2024-03-10"),
    ];
    let groups = group_by_date(&records).unwrap();

    let result = filter_and_sort_groups(&groups, "", SortField::Price, SortOrder::Asc);
    let members: Vec<&str> = result[0]
        .purchases
        .iter()
        .map(|p| p.vegetable_name.as_str())
        .collect();
    assert_eq!(members, vec!["Tomatoes", "Beans"]);
}

#[test]
fn date_sort_orders_groups_not_members() {
    let records = vec![
        record("p1", "Tomatoes", 1.0, Unit::Kilogram, 40.0, "2024-03-10"),
        record("p2", "Carrot", 1.0, Unit::Kilogram, 30.0, "2024-03-01"),
        record("p3", "Beans", 500.0, Unit::Gram, 25.0, "2024-03-10"),
    ];
    let groups = group_by_date(&records).unwrap();

    let asc = filter_and_sort_groups(&groups, "", SortField::Date, SortOrder::Asc);
    assert_eq!(asc[0].date, "2024-03-01");
    assert_eq!(asc[1].date, "2024-03-10");
    // Members keep their store order under a group-level sort
    let members: Vec<&str> = asc[1]
        .purchases
        .iter()
        .map(|p| p.vegetable_name.as_str())
        .collect();
    assert_eq!(members, vec!["Tomatoes", "Beans"]);
}

#[test]
fn member_sort_keeps_group_order_intact() {
    let records = vec![
        record("p1", "Tomatoes", 1.0, Unit::Kilogram, 40.0, "2024-03-10"),
        record("p2", "Carrot", 1.0, Unit::Kilogram, 30.0, "2024-03-01"),
    ];
    let groups = group_by_date(&records).unwrap();

    // Sorting members by name must not reorder the date-descending groups.
    let result = filter_and_sort_groups(&groups, "", SortField::Name, SortOrder::Asc);
    assert_eq!(result[0].date, "2024-03-10");
    assert_eq!(result[1].date, "2024-03-01");
}
