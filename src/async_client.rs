//! Async wrapper around [`VegtrackSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! DuckDB queries are CPU-bound but fast, making this approach efficient.
//!
//! # Example
//!
//! ```no_run
//! # use vegtrack_sdk::AsyncVegtrackSdk;
//! # async fn example() -> vegtrack_sdk::Result<()> {
//! let sdk = AsyncVegtrackSdk::builder().in_memory().build().await?;
//!
//! // Run any sync SDK method via closure
//! let summaries = sdk.run(|s| s.vegetables().summaries()).await?;
//!
//! // Convenience method for the grouped view
//! let groups = sdk.purchase_groups().await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{Result, VegtrackError};
use crate::models::{NewPurchase, PurchaseGroup, PurchaseRecord, VegetableSummary};
use crate::VegtrackSdk;

// ---------------------------------------------------------------------------
// AsyncVegtrackSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncVegtrackSdk`] instance.
#[derive(Default)]
pub struct AsyncVegtrackSdkBuilder {
    data_dir: Option<PathBuf>,
    in_memory: bool,
}

impl AsyncVegtrackSdkBuilder {
    /// Set a custom data directory for the database file.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use an in-memory database instead of a file.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Build the async SDK, opening the database on the blocking thread pool
    /// so initialization won't block the async event loop.
    pub async fn build(self) -> Result<AsyncVegtrackSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = VegtrackSdk::builder();
            if let Some(dir) = self.data_dir {
                builder = builder.data_dir(dir);
            }
            if self.in_memory {
                builder = builder.in_memory();
            }
            let sdk = builder.build()?;
            Ok(AsyncVegtrackSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| VegtrackError::Runtime(format!("task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncVegtrackSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`VegtrackSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`VegtrackSdk`] is
/// protected by a [`Mutex`] so writes serialize cleanly.
pub struct AsyncVegtrackSdk {
    inner: Arc<Mutex<VegtrackSdk>>,
}

impl AsyncVegtrackSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncVegtrackSdkBuilder {
        AsyncVegtrackSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&VegtrackSdk` reference and should return a
    /// `Result<T>`. The operation runs on a dedicated blocking thread,
    /// keeping the async event loop free.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&VegtrackSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| VegtrackError::Runtime("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| VegtrackError::Runtime(format!("task join error: {e}")))?
    }

    /// List all purchase records, newest date first.
    pub async fn list_purchases(&self) -> Result<Vec<PurchaseRecord>> {
        self.run(|s| s.purchases().list_all()).await
    }

    /// Insert a purchase and return the stored record.
    pub async fn insert_purchase(&self, purchase: NewPurchase) -> Result<PurchaseRecord> {
        self.run(move |s| s.purchases().insert(&purchase)).await
    }

    /// Current/last price summaries, one per vegetable.
    pub async fn vegetable_summaries(&self) -> Result<Vec<VegetableSummary>> {
        self.run(|s| s.vegetables().summaries()).await
    }

    /// All purchases grouped by date with totals.
    pub async fn purchase_groups(&self) -> Result<Vec<PurchaseGroup>> {
        self.run(|s| s.groups().list()).await
    }

    /// Close the SDK, releasing the database handle.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || {
            let sdk = self
                .inner
                .lock()
                .map_err(|_| VegtrackError::Runtime("SDK lock poisoned".into()))?;
            drop(sdk);
            Ok(())
        })
        .await
        .map_err(|e| VegtrackError::Runtime(format!("task join error: {e}")))?
    }
}
