use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// VegetableSummary — Derived current/last price view for one vegetable
// ---------------------------------------------------------------------------

/// Current and last price for a single vegetable, recomputed from its full
/// purchase history on every read. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VegetableSummary {
    pub id: String,
    pub name: String,
    /// Per-kilogram price of the chronologically latest purchase.
    pub current_price: f64,
    /// Per-kilogram price of the second-latest purchase, or `current_price`
    /// when only one purchase exists.
    pub last_price: f64,
    /// Date of the latest purchase, `YYYY-MM-DD`.
    pub last_updated: String,
}
