use serde::{Deserialize, Serialize};

use super::purchase::PurchaseRecord;

// ---------------------------------------------------------------------------
// PurchaseGroup — All purchases sharing one calendar date
// ---------------------------------------------------------------------------

/// Transient view: the purchases of one calendar date plus their monetary
/// total. Derived on demand; `total_amount` is always recomputed from the
/// member records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseGroup {
    /// Group key, `YYYY-MM-DD`.
    pub date: String,
    /// Member records in arrival order.
    pub purchases: Vec<PurchaseRecord>,
    /// Sum over members of quantity-in-kilograms times per-kilogram price.
    pub total_amount: f64,
}
