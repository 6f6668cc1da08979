//! Vegetable purchase tracker for Rust.
//!
//! Logs vegetable purchases (quantity, unit, price, date) in an embedded
//! DuckDB database and derives price views from them: per-vegetable
//! current/last prices, per-date purchase groups with monetary totals, and
//! searched/sorted variants of both for display.
//!
//! # Quick start
//!
//! ```no_run
//! use vegtrack_sdk::{NewPurchase, Unit, VegtrackSdk};
//!
//! let sdk = VegtrackSdk::builder().build().unwrap();
//!
//! // Log a purchase: 500 g of tomatoes for 20 total
//! sdk.purchases().insert(&NewPurchase {
//!     vegetable_name: "Tomatoes".into(),
//!     quantity: 500.0,
//!     unit: Unit::Gram,
//!     price: 20.0,
//!     date: "2024-03-10".into(),
//! }).unwrap();
//!
//! // Current/last price per vegetable
//! let summaries = sdk.vegetables().summaries().unwrap();
//!
//! // Purchases grouped by date with totals
//! let groups = sdk.groups().list().unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod connection;
pub mod dates;
pub mod error;
pub mod filter;
pub mod grouping;
pub mod models;
pub mod queries;
pub mod sql_builder;
pub mod summary;
pub mod units;

#[cfg(feature = "async")]
pub use async_client::AsyncVegtrackSdk;
pub use connection::Connection;
pub use error::{Result, VegtrackError};
pub use filter::{SortField, SortOrder};
pub use grouping::group_by_date;
pub use models::{
    NewPurchase, NormalizedPrices, PurchaseGroup, PurchaseRecord, Unit, VegetableSummary,
};
pub use sql_builder::SqlBuilder;
pub use summary::derive_vegetable_summaries;
pub use units::{expand_to_reference_weights, to_per_kilogram, ReferenceWeights};

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// VegtrackSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`VegtrackSdk`] instance.
///
/// Use [`VegtrackSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](VegtrackSdkBuilder::build) to create the SDK.
#[derive(Default)]
pub struct VegtrackSdkBuilder {
    data_dir: Option<PathBuf>,
    in_memory: bool,
}

impl VegtrackSdkBuilder {
    /// Set a custom data directory for the database file.
    ///
    /// If not set, the platform-appropriate default data directory is used
    /// (e.g. `~/.local/share/vegtrack-sdk` on Linux,
    /// `~/Library/Application Support/vegtrack-sdk` on macOS).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use an in-memory database instead of a file.
    ///
    /// All purchases are lost when the SDK is dropped; intended for tests
    /// and throwaway sessions.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Build the SDK, opening the database and creating the purchases table
    /// if it does not exist yet.
    pub fn build(self) -> Result<VegtrackSdk> {
        let conn = if self.in_memory {
            Connection::open_in_memory()?
        } else {
            let dir = self.data_dir.unwrap_or_else(config::default_data_dir);
            Connection::open(dir.join(config::DB_FILE))?
        };
        Ok(VegtrackSdk { conn })
    }
}

// ---------------------------------------------------------------------------
// VegtrackSdk
// ---------------------------------------------------------------------------

/// The main entry point for the vegtrack SDK.
///
/// Wraps a [`Connection`] to the embedded purchase database and exposes the
/// query interfaces as lightweight borrowing wrappers.
///
/// Created via [`VegtrackSdk::builder()`].
pub struct VegtrackSdk {
    conn: Connection,
}

impl VegtrackSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> VegtrackSdkBuilder {
        VegtrackSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the purchase record store (list/insert/update/delete).
    pub fn purchases(&self) -> queries::purchases::PurchaseQuery<'_> {
        queries::purchases::PurchaseQuery::new(&self.conn)
    }

    /// Access the derived per-vegetable summary view.
    pub fn vegetables(&self) -> queries::vegetables::VegetableQuery<'_> {
        queries::vegetables::VegetableQuery::new(&self.conn)
    }

    /// Access the derived per-date purchase group view.
    pub fn groups(&self) -> queries::groups::GroupQuery<'_> {
        queries::groups::GroupQuery::new(&self.conn)
    }

    // -- Utility methods ---------------------------------------------------

    /// Execute a raw SQL query against the purchase database.
    ///
    /// Provides escape-hatch access for queries not covered by the query
    /// interfaces.
    ///
    /// # Arguments
    ///
    /// * `query` - SQL string with `?` positional placeholders.
    /// * `params` - Parameter values corresponding to the placeholders.
    ///
    /// # Returns
    ///
    /// A vector of rows, each represented as a `HashMap<String, serde_json::Value>`.
    pub fn sql(
        &self,
        query: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        self.conn.execute(query, params)
    }

    /// Consume the SDK and release the database handle.
    ///
    /// This is called automatically when the SDK is dropped, but can be
    /// invoked explicitly for deterministic cleanup.
    pub fn close(self) {
        drop(self);
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for VegtrackSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.conn.path() {
            Some(path) => write!(f, "VegtrackSdk(db={})", path.display()),
            None => write!(f, "VegtrackSdk(db=:memory:)"),
        }
    }
}
