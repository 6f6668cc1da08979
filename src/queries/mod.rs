//! Query modules for the vegtrack SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection). `purchases` covers the
//! durable record store; `vegetables` and `groups` compose the store with
//! the derivation engine to produce the transient display views.

pub mod groups;
pub mod purchases;
pub mod vegetables;

pub use groups::GroupQuery;
pub use purchases::PurchaseQuery;
pub use vegetables::VegetableQuery;
