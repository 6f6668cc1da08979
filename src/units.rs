//! Conversion between gram/kilogram quantities and canonical per-kilogram
//! prices.
//!
//! The raw `price` of a purchase is uniformly the *total paid* for
//! `quantity` units of `unit`. Both unit branches therefore divide by the
//! quantity, which keeps gram and kilogram entries symmetric:
//! `to_per_kilogram(q, Gram, p) == to_per_kilogram(q / 1000, Kilogram, p)`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VegtrackError};
use crate::models::{NormalizedPrices, Unit};

pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

// ---------------------------------------------------------------------------
// ReferenceWeights — Fixed display denominations of a per-kilogram price
// ---------------------------------------------------------------------------

/// A per-kilogram price expanded to the denominations shown alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceWeights {
    pub per_100g: f64,
    pub per_250g: f64,
    pub per_500g: f64,
    pub per_kilogram: f64,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Convert a raw price (total paid for `quantity` units of `unit`) into a
/// per-kilogram price.
///
/// Fails with `DivisionByZero` for a zero quantity and `InvalidInput` for
/// negative or non-finite quantity/price. Never returns infinity or NaN.
pub fn to_per_kilogram(quantity: f64, unit: Unit, raw_price: f64) -> Result<f64> {
    validate(quantity, raw_price)?;
    let per_kilogram = match unit {
        Unit::Kilogram => raw_price / quantity,
        Unit::Gram => raw_price / quantity * GRAMS_PER_KILOGRAM,
    };
    Ok(per_kilogram)
}

/// Normalize a purchase's (quantity, unit, price) triple into its canonical
/// price representation.
pub fn normalize(quantity: f64, unit: Unit, raw_price: f64) -> Result<NormalizedPrices> {
    Ok(NormalizedPrices {
        per_kilogram: to_per_kilogram(quantity, unit, raw_price)?,
        original_unit: unit,
        original_price: raw_price,
    })
}

/// Express a quantity in kilograms.
pub fn quantity_in_kilograms(quantity: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Kilogram => quantity,
        Unit::Gram => quantity / GRAMS_PER_KILOGRAM,
    }
}

/// Expand a per-kilogram price into the fixed reference denominations.
///
/// Each entry is `per_kilogram * grams / 1000`; output is monotonic in
/// weight for any positive input.
pub fn expand_to_reference_weights(per_kilogram: f64) -> ReferenceWeights {
    let per_gram = per_kilogram / GRAMS_PER_KILOGRAM;
    ReferenceWeights {
        per_100g: per_gram * 100.0,
        per_250g: per_gram * 250.0,
        per_500g: per_gram * 500.0,
        per_kilogram,
    }
}

fn validate(quantity: f64, raw_price: f64) -> Result<()> {
    if !quantity.is_finite() || !raw_price.is_finite() {
        return Err(VegtrackError::InvalidInput(format!(
            "quantity and price must be finite numbers (got quantity={quantity}, price={raw_price})"
        )));
    }
    if quantity == 0.0 {
        return Err(VegtrackError::DivisionByZero(
            "cannot derive a per-kilogram price from a zero quantity".into(),
        ));
    }
    if quantity < 0.0 || raw_price <= 0.0 {
        return Err(VegtrackError::InvalidInput(format!(
            "quantity and price must be positive (got quantity={quantity}, price={raw_price})"
        )));
    }
    Ok(())
}
