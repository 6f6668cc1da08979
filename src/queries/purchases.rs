//! Purchase record CRUD against the DuckDB `purchases` table.
//!
//! This is the store boundary: rows coming back from the database are
//! re-validated into strongly-typed [`PurchaseRecord`]s (tagged unit parse,
//! finite-number checks) instead of trusting the stored shape, and every
//! write recomputes the normalized prices from the raw purchase fields.

use serde::Deserialize;
use tracing::debug;

use crate::dates;
use crate::error::{Result, VegtrackError};
use crate::models::{NewPurchase, NormalizedPrices, PurchaseRecord, Unit};
use crate::sql_builder::SqlBuilder;
use crate::units;

const INSERT_SQL: &str = "\
INSERT INTO purchases (id, vegetableId, vegetableName, quantity, unit, price, date, pricePerKg) \
VALUES (?, ?, ?, CAST(? AS DOUBLE), ?, CAST(? AS DOUBLE), ?, CAST(? AS DOUBLE))";

const UPDATE_SQL: &str = "\
UPDATE purchases \
SET vegetableId = ?, vegetableName = ?, quantity = CAST(? AS DOUBLE), unit = ?, \
    price = CAST(? AS DOUBLE), date = ?, pricePerKg = CAST(? AS DOUBLE) \
WHERE id = ?";

// ---------------------------------------------------------------------------
// PurchaseQuery
// ---------------------------------------------------------------------------

/// Query interface for the durable purchase records.
pub struct PurchaseQuery<'a> {
    conn: &'a crate::connection::Connection,
}

impl<'a> PurchaseQuery<'a> {
    /// Create a new `PurchaseQuery` bound to the given connection.
    pub fn new(conn: &'a crate::connection::Connection) -> Self {
        Self { conn }
    }

    // -- Reads -------------------------------------------------------------

    /// All purchase records, ordered by date descending.
    ///
    /// The record id is the secondary sort key so same-date rows come back
    /// in a deterministic order.
    pub fn list_all(&self) -> Result<Vec<PurchaseRecord>> {
        let (sql, params) = SqlBuilder::new("purchases")
            .order_by(&["date DESC", "id ASC"])
            .build();

        let rows: Vec<PurchaseRow> = self.conn.execute_into(&sql, &params)?;
        rows.into_iter().map(PurchaseRow::into_record).collect()
    }

    /// Purchase records with `start <= date <= end`, ordered date descending.
    pub fn list_by_date_range(&self, start: &str, end: &str) -> Result<Vec<PurchaseRecord>> {
        let start = normalize_date_input(start)?;
        let end = normalize_date_input(end)?;

        let (sql, params) = SqlBuilder::new("purchases")
            .where_gte("date", &start)
            .where_lte("date", &end)
            .order_by(&["date DESC", "id ASC"])
            .build();

        let rows: Vec<PurchaseRow> = self.conn.execute_into(&sql, &params)?;
        rows.into_iter().map(PurchaseRow::into_record).collect()
    }

    /// Retrieve a single record by its store-assigned id.
    pub fn get_by_id(&self, id: &str) -> Result<Option<PurchaseRecord>> {
        let (sql, params) = SqlBuilder::new("purchases")
            .where_eq("id", id)
            .limit(1)
            .build();

        let rows: Vec<PurchaseRow> = self.conn.execute_into(&sql, &params)?;
        rows.into_iter().next().map(PurchaseRow::into_record).transpose()
    }

    /// Number of stored purchase records.
    pub fn count(&self) -> Result<i64> {
        let n = self
            .conn
            .execute_scalar("SELECT COUNT(*) FROM purchases", &[])?
            .and_then(|v| v.as_i64())
            .unwrap_or(0);
        Ok(n)
    }

    // -- Writes ------------------------------------------------------------

    /// Insert a purchase and return the stored record.
    ///
    /// Validates the payload, normalizes the date and prices, resolves the
    /// vegetable id (an existing vegetable matched by case-insensitive name
    /// keeps its id, otherwise a deterministic slug is derived from the
    /// name) and lets the store assign the record id.
    pub fn insert(&self, purchase: &NewPurchase) -> Result<PurchaseRecord> {
        let (prices, date) = validate_payload(purchase)?;
        let vegetable_id = self.resolve_vegetable_id(&purchase.vegetable_name)?;
        let id = self.next_id()?;

        self.conn.execute_write(
            INSERT_SQL,
            &[
                id.clone(),
                vegetable_id.clone(),
                purchase.vegetable_name.clone(),
                purchase.quantity.to_string(),
                purchase.unit.as_str().to_string(),
                purchase.price.to_string(),
                date.clone(),
                prices.per_kilogram.to_string(),
            ],
        )?;
        debug!(%id, vegetable = %purchase.vegetable_name, "inserted purchase");

        Ok(PurchaseRecord {
            id,
            vegetable_id,
            vegetable_name: purchase.vegetable_name.clone(),
            quantity: purchase.quantity,
            unit: purchase.unit,
            price: purchase.price,
            date,
            prices,
        })
    }

    /// Overwrite the record `id` with a new payload and return the stored
    /// record. Normalized prices are recomputed; stale price fields cannot
    /// survive a write.
    pub fn update(&self, id: &str, purchase: &NewPurchase) -> Result<PurchaseRecord> {
        let (prices, date) = validate_payload(purchase)?;
        let vegetable_id = self.resolve_vegetable_id(&purchase.vegetable_name)?;

        let affected = self.conn.execute_write(
            UPDATE_SQL,
            &[
                vegetable_id.clone(),
                purchase.vegetable_name.clone(),
                purchase.quantity.to_string(),
                purchase.unit.as_str().to_string(),
                purchase.price.to_string(),
                date.clone(),
                prices.per_kilogram.to_string(),
                id.to_string(),
            ],
        )?;
        if affected == 0 {
            return Err(VegtrackError::NotFound(format!("purchase {id}")));
        }
        debug!(%id, "updated purchase");

        Ok(PurchaseRecord {
            id: id.to_string(),
            vegetable_id,
            vegetable_name: purchase.vegetable_name.clone(),
            quantity: purchase.quantity,
            unit: purchase.unit,
            price: purchase.price,
            date,
            prices,
        })
    }

    /// Delete the record `id`.
    pub fn delete(&self, id: &str) -> Result<()> {
        let affected = self
            .conn
            .execute_write("DELETE FROM purchases WHERE id = ?", &[id.to_string()])?;
        if affected == 0 {
            return Err(VegtrackError::NotFound(format!("purchase {id}")));
        }
        debug!(%id, "deleted purchase");
        Ok(())
    }

    // -- Helpers -----------------------------------------------------------

    /// Id of the vegetable this name refers to: the id already on file for a
    /// case-insensitive name match, or a fresh deterministic slug.
    fn resolve_vegetable_id(&self, name: &str) -> Result<String> {
        let (sql, params) = SqlBuilder::new("purchases")
            .select(&["vegetableId"])
            .where_clause("LOWER(vegetableName) = LOWER(?)", &[name])
            .limit(1)
            .build();

        if let Some(value) = self.conn.execute_scalar(&sql, &params)? {
            if let Some(existing) = value.as_str() {
                return Ok(existing.to_string());
            }
        }
        Ok(vegetable_id_for(name))
    }

    fn next_id(&self) -> Result<String> {
        let id = self
            .conn
            .execute_scalar("SELECT CAST(uuid() AS VARCHAR)", &[])?
            .and_then(|v| v.as_str().map(str::to_string))
            .ok_or_else(|| VegtrackError::Runtime("store did not produce an id".into()))?;
        Ok(id)
    }
}

// ---------------------------------------------------------------------------
// Payload validation and id derivation
// ---------------------------------------------------------------------------

fn validate_payload(purchase: &NewPurchase) -> Result<(NormalizedPrices, String)> {
    if purchase.vegetable_name.trim().is_empty() {
        return Err(VegtrackError::InvalidInput(
            "vegetable name must not be empty".into(),
        ));
    }
    let date = normalize_date_input(&purchase.date)?;
    let prices = units::normalize(purchase.quantity, purchase.unit, purchase.price)?;
    Ok((prices, date))
}

fn normalize_date_input(input: &str) -> Result<String> {
    dates::normalize(input)
        .ok_or_else(|| VegtrackError::InvalidInput(format!("unparsable date {input:?}")))
}

/// Deterministic vegetable id: the case-folded name as a slug, suffixed with
/// an FNV-1a hash of the folded name. The same vegetable name always maps to
/// the same id, independent of insertion order or clock.
pub fn vegetable_id_for(name: &str) -> String {
    let folded = name.trim().to_lowercase();
    let slug = folded.split_whitespace().collect::<Vec<_>>().join("-");
    format!("{}-{:08x}", slug, fnv1a(folded.as_bytes()) as u32)
}

fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET_BASIS, |hash, b| (hash ^ u64::from(*b)).wrapping_mul(PRIME))
}

// ---------------------------------------------------------------------------
// PurchaseRow — flat row shape as stored
// ---------------------------------------------------------------------------

/// Raw row from the purchases table, before boundary validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PurchaseRow {
    id: String,
    vegetable_id: String,
    vegetable_name: String,
    quantity: f64,
    unit: String,
    price: f64,
    date: String,
    price_per_kg: f64,
}

impl PurchaseRow {
    /// Promote a stored row to a validated [`PurchaseRecord`].
    ///
    /// Unknown unit strings and non-finite numerics fail with
    /// `InvalidRecord` naming the row id, never a silent default.
    fn into_record(self) -> Result<PurchaseRecord> {
        let unit = Unit::parse(&self.unit).ok_or_else(|| VegtrackError::InvalidRecord {
            id: self.id.clone(),
            reason: format!("unknown unit {:?}", self.unit),
        })?;
        if !self.quantity.is_finite() || !self.price.is_finite() || !self.price_per_kg.is_finite() {
            return Err(VegtrackError::InvalidRecord {
                id: self.id,
                reason: "non-finite quantity or price".into(),
            });
        }

        Ok(PurchaseRecord {
            prices: NormalizedPrices {
                per_kilogram: self.price_per_kg,
                original_unit: unit,
                original_price: self.price,
            },
            id: self.id,
            vegetable_id: self.vegetable_id,
            vegetable_name: self.vegetable_name,
            quantity: self.quantity,
            unit,
            price: self.price,
            date: self.date,
        })
    }
}
