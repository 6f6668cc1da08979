//! Derived per-date purchase group views.

use crate::error::Result;
use crate::filter::{self, SortField, SortOrder};
use crate::grouping;
use crate::models::PurchaseGroup;
use crate::queries::purchases::PurchaseQuery;

// ---------------------------------------------------------------------------
// GroupQuery
// ---------------------------------------------------------------------------

/// Query interface for the per-date grouped purchase view.
pub struct GroupQuery<'a> {
    conn: &'a crate::connection::Connection,
}

impl<'a> GroupQuery<'a> {
    /// Create a new `GroupQuery` bound to the given connection.
    pub fn new(conn: &'a crate::connection::Connection) -> Self {
        Self { conn }
    }

    /// All purchases grouped by date, newest date first.
    pub fn list(&self) -> Result<Vec<PurchaseGroup>> {
        let records = PurchaseQuery::new(self.conn).list_all()?;
        grouping::group_by_date(&records)
    }

    /// Purchases within `start..=end` grouped by date, newest date first.
    pub fn list_by_date_range(&self, start: &str, end: &str) -> Result<Vec<PurchaseGroup>> {
        let records = PurchaseQuery::new(self.conn).list_by_date_range(start, end)?;
        grouping::group_by_date(&records)
    }

    /// Groups filtered by a case-insensitive member-name search and sorted.
    ///
    /// Groups whose members all fail the search are dropped, and each
    /// surviving group's total reflects its remaining members.
    pub fn search(
        &self,
        text: &str,
        field: SortField,
        order: SortOrder,
    ) -> Result<Vec<PurchaseGroup>> {
        let groups = self.list()?;
        Ok(filter::filter_and_sort_groups(&groups, text, field, order))
    }
}
