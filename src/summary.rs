//! Derivation of per-vegetable price summaries from the raw purchase set.
//!
//! Current/last prices are never stored. They are recomputed from the full
//! record set on every read, so edits and deletes cannot leave stale
//! aggregates behind and there is no read-modify-write race to guard.

use std::collections::HashMap;

use crate::dates;
use crate::error::{Result, VegtrackError};
use crate::models::{PurchaseRecord, VegetableSummary};

/// Derive one [`VegetableSummary`] per distinct vegetable name.
///
/// Records are grouped by case-insensitive name (`vegetable_id` may be
/// inconsistent across records of the same vegetable and is never used as
/// the key). Within each group, records are ordered by date descending with
/// the record id as the final tie-break, so the output is deterministic for
/// any input order. The latest record supplies `current_price` and
/// `last_updated`; the second-latest supplies `last_price`, falling back to
/// `current_price` for a single-record group.
///
/// A record whose date does not parse fails the whole derivation with
/// `InvalidRecord` naming the offending id. Partial summaries would mask
/// data corruption, so there is no best-effort mode.
pub fn derive_vegetable_summaries(records: &[PurchaseRecord]) -> Result<Vec<VegetableSummary>> {
    let mut key_order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<(String, &PurchaseRecord)>> = HashMap::new();

    for record in records {
        let date = dates::normalize(&record.date).ok_or_else(|| VegtrackError::InvalidRecord {
            id: record.id.clone(),
            reason: format!("unparsable date {:?}", record.date),
        })?;
        let key = record.vegetable_name.to_lowercase();
        if !groups.contains_key(&key) {
            key_order.push(key.clone());
        }
        groups.entry(key).or_default().push((date, record));
    }

    let mut summaries = Vec::with_capacity(key_order.len());
    for key in key_order {
        let mut group = groups.remove(&key).unwrap_or_default();
        group.sort_by(|(date_a, rec_a), (date_b, rec_b)| {
            date_b.cmp(date_a).then_with(|| rec_a.id.cmp(&rec_b.id))
        });

        let (latest_date, latest) = &group[0];
        let current_price = latest.prices.per_kilogram;
        let last_price = group
            .get(1)
            .map(|(_, prev)| prev.prices.per_kilogram)
            .unwrap_or(current_price);

        summaries.push(VegetableSummary {
            id: latest.vegetable_id.clone(),
            name: latest.vegetable_name.clone(),
            current_price,
            last_price,
            last_updated: latest_date.clone(),
        });
    }

    Ok(summaries)
}
