//! Search and multi-field sort over the derived views.
//!
//! Search is a case-insensitive substring match on the vegetable name and is
//! applied before sorting; an empty search string keeps every item. Sorts
//! are stable, and descending order reverses the comparator itself rather
//! than the sorted list, so ties stay in their original order either way.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::grouping;
use crate::models::{PurchaseGroup, PurchaseRecord, VegetableSummary};

// ---------------------------------------------------------------------------
// SortField / SortOrder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Lexicographic on the display name (case-folded).
    Name,
    /// Numeric on the per-kilogram normalized price.
    Price,
    /// Chronological; sorts groups themselves in the grouped view.
    Date,
    /// Numeric on the quantity normalized to kilograms.
    Quantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

// ---------------------------------------------------------------------------
// Vegetable summaries
// ---------------------------------------------------------------------------

/// Filter summaries by name search, then sort by the requested field.
///
/// `Quantity` is not defined for summaries and leaves the order unchanged.
pub fn filter_and_sort_vegetables(
    items: &[VegetableSummary],
    search: &str,
    field: SortField,
    order: SortOrder,
) -> Vec<VegetableSummary> {
    let needle = search.to_lowercase();
    let mut result: Vec<VegetableSummary> = items
        .iter()
        .filter(|v| needle.is_empty() || v.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    result.sort_by(|a, b| order.apply(compare_summaries(a, b, field)));
    result
}

fn compare_summaries(a: &VegetableSummary, b: &VegetableSummary, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Price => a.current_price.total_cmp(&b.current_price),
        SortField::Date => a.last_updated.cmp(&b.last_updated),
        SortField::Quantity => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// Purchase groups
// ---------------------------------------------------------------------------

/// Filter and sort the per-date grouped purchase view.
///
/// The search filters member records within each group and drops any group
/// left without a match; each surviving group's total is recomputed over its
/// remaining members. `Name`, `Price` and `Quantity` sort members within
/// their group; `Date` sorts the groups themselves and leaves members in
/// store order. When the groups are not date-sorted explicitly they keep
/// their incoming order (date descending as produced by
/// [`group_by_date`](crate::grouping::group_by_date)).
pub fn filter_and_sort_groups(
    groups: &[PurchaseGroup],
    search: &str,
    field: SortField,
    order: SortOrder,
) -> Vec<PurchaseGroup> {
    let needle = search.to_lowercase();
    let mut result: Vec<PurchaseGroup> = Vec::with_capacity(groups.len());

    for group in groups {
        let mut purchases: Vec<PurchaseRecord> = group
            .purchases
            .iter()
            .filter(|p| needle.is_empty() || p.vegetable_name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        if purchases.is_empty() {
            continue;
        }

        if field != SortField::Date {
            purchases.sort_by(|a, b| order.apply(compare_purchases(a, b, field)));
        }

        let total_amount = grouping::group_total(&purchases);
        result.push(PurchaseGroup {
            date: group.date.clone(),
            purchases,
            total_amount,
        });
    }

    if field == SortField::Date {
        result.sort_by(|a, b| order.apply(a.date.cmp(&b.date)));
    }

    result
}

fn compare_purchases(a: &PurchaseRecord, b: &PurchaseRecord, field: SortField) -> Ordering {
    match field {
        SortField::Name => a
            .vegetable_name
            .to_lowercase()
            .cmp(&b.vegetable_name.to_lowercase()),
        SortField::Price => a.prices.per_kilogram.total_cmp(&b.prices.per_kilogram),
        SortField::Quantity => a
            .quantity_in_kilograms()
            .total_cmp(&b.quantity_in_kilograms()),
        SortField::Date => Ordering::Equal,
    }
}
