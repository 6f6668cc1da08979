//! Grouping of purchase records by calendar date.

use std::collections::HashMap;

use crate::dates;
use crate::error::{Result, VegtrackError};
use crate::models::{PurchaseGroup, PurchaseRecord};
use crate::units;

/// Partition records into per-date groups with recomputed monetary totals.
///
/// The group key is the date string normalized to `YYYY-MM-DD`; two records
/// share a group iff their normalized date strings are identical. Groups are
/// ordered date descending, members keep their arrival order, and
/// `total_amount` is the sum over members of quantity-in-kilograms times
/// per-kilogram price.
///
/// Grouping is idempotent: flattening the result and regrouping reproduces
/// the same groups and totals. A record with an unparsable date fails the
/// whole call with `InvalidRecord`.
pub fn group_by_date(records: &[PurchaseRecord]) -> Result<Vec<PurchaseGroup>> {
    let mut date_order: Vec<String> = Vec::new();
    let mut members: HashMap<String, Vec<PurchaseRecord>> = HashMap::new();

    for record in records {
        let date = dates::normalize(&record.date).ok_or_else(|| VegtrackError::InvalidRecord {
            id: record.id.clone(),
            reason: format!("unparsable date {:?}", record.date),
        })?;
        if !members.contains_key(&date) {
            date_order.push(date.clone());
        }
        members.entry(date).or_default().push(record.clone());
    }

    let mut groups: Vec<PurchaseGroup> = date_order
        .into_iter()
        .map(|date| {
            let purchases = members.remove(&date).unwrap_or_default();
            let total_amount = group_total(&purchases);
            PurchaseGroup {
                date,
                purchases,
                total_amount,
            }
        })
        .collect();

    groups.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(groups)
}

/// Monetary total of a set of purchases, summed in member order.
pub fn group_total(purchases: &[PurchaseRecord]) -> f64 {
    purchases
        .iter()
        .map(|p| units::quantity_in_kilograms(p.quantity, p.unit) * p.prices.per_kilogram)
        .sum()
}
