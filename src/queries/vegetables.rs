//! Derived per-vegetable price views.

use crate::error::Result;
use crate::filter::{self, SortField, SortOrder};
use crate::models::VegetableSummary;
use crate::queries::purchases::PurchaseQuery;
use crate::summary;

// ---------------------------------------------------------------------------
// VegetableQuery
// ---------------------------------------------------------------------------

/// Query interface for the vegetable summary view.
///
/// Summaries are recomputed from the full purchase set on every call; there
/// is no cached state to invalidate after a write.
pub struct VegetableQuery<'a> {
    conn: &'a crate::connection::Connection,
}

impl<'a> VegetableQuery<'a> {
    /// Create a new `VegetableQuery` bound to the given connection.
    pub fn new(conn: &'a crate::connection::Connection) -> Self {
        Self { conn }
    }

    /// One summary per distinct vegetable name, with current/last prices.
    pub fn summaries(&self) -> Result<Vec<VegetableSummary>> {
        let records = PurchaseQuery::new(self.conn).list_all()?;
        summary::derive_vegetable_summaries(&records)
    }

    /// Summaries filtered by a case-insensitive name search and sorted.
    pub fn search(
        &self,
        text: &str,
        field: SortField,
        order: SortOrder,
    ) -> Result<Vec<VegetableSummary>> {
        let summaries = self.summaries()?;
        Ok(filter::filter_and_sort_vegetables(&summaries, text, field, order))
    }
}
