use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Unit — The originating unit a purchase was logged in
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kilogram,
    Gram,
}

impl Unit {
    /// The wire/storage spelling of the unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kilogram => "kilogram",
            Unit::Gram => "gram",
        }
    }

    /// Parse the storage spelling back into a `Unit`.
    ///
    /// Returns `None` for anything else; callers at the store boundary map
    /// that to an `InvalidRecord` error instead of guessing a default.
    pub fn parse(s: &str) -> Option<Unit> {
        match s {
            "kilogram" => Some(Unit::Kilogram),
            "gram" => Some(Unit::Gram),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NormalizedPrices — Canonical per-kilogram representation of a raw price
// ---------------------------------------------------------------------------

/// Canonical price derived from a purchase's (quantity, unit, price) triple.
///
/// Recomputed on every write; never edited independently of the purchase
/// fields it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPrices {
    /// Price per kilogram, the unit all comparison and aggregation uses.
    pub per_kilogram: f64,
    /// The unit the purchase was originally logged in.
    pub original_unit: Unit,
    /// The raw price as entered (total paid for the logged quantity).
    pub original_price: f64,
}

impl NormalizedPrices {
    /// Price per gram. Always exactly `per_kilogram / 1000`, so it is an
    /// accessor rather than a stored field.
    pub fn per_gram(&self) -> f64 {
        self.per_kilogram / 1000.0
    }
}

// ---------------------------------------------------------------------------
// NewPurchase — Insert/update payload (purchase without a store id)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPurchase {
    pub vegetable_name: String,
    pub quantity: f64,
    pub unit: Unit,
    /// Total price paid for `quantity` units of `unit`.
    pub price: f64,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
}

// ---------------------------------------------------------------------------
// PurchaseRecord — One logged acquisition event, as stored
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    /// Store-assigned identifier.
    pub id: String,
    /// Stable vegetable handle. Informational only: derived views group by
    /// case-insensitive name, not by this id.
    pub vegetable_id: String,
    pub vegetable_name: String,
    pub quantity: f64,
    pub unit: Unit,
    /// Total price paid for `quantity` units of `unit`.
    pub price: f64,
    /// Calendar date, normalized to `YYYY-MM-DD` at write time.
    pub date: String,
    /// Canonical prices, recomputed from (quantity, unit, price) on write.
    pub prices: NormalizedPrices,
}

impl PurchaseRecord {
    /// The purchased quantity expressed in kilograms.
    pub fn quantity_in_kilograms(&self) -> f64 {
        crate::units::quantity_in_kilograms(self.quantity, self.unit)
    }
}
