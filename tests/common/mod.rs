//! Shared test fixtures for the vegtrack SDK integration tests.
//!
//! Provides `setup_sample_sdk()` which creates an in-memory SDK populated
//! with a small purchase history covering several vegetables, dates and
//! units, inserted through the public API.

use vegtrack_sdk::{NewPurchase, Unit, VegtrackSdk};

/// Build a purchase payload. `price` is the total paid for the quantity.
pub fn purchase(name: &str, quantity: f64, unit: Unit, price: f64, date: &str) -> NewPurchase {
    NewPurchase {
        vegetable_name: name.to_string(),
        quantity,
        unit,
        price,
        date: date.to_string(),
    }
}

/// The sample purchase history.
///
/// Per-kilogram prices work out to: Tomatoes 30 then 40, Beans 50,
/// Carrot 30, Spinach 40.
pub fn sample_purchases() -> Vec<NewPurchase> {
    vec![
        purchase("Tomatoes", 1.0, Unit::Kilogram, 30.0, "2024-03-01"),
        purchase("Tomatoes", 2.0, Unit::Kilogram, 80.0, "2024-03-10"),
        purchase("Beans", 500.0, Unit::Gram, 25.0, "2024-03-10"),
        purchase("Carrot", 1.0, Unit::Kilogram, 30.0, "2024-03-01"),
        purchase("Spinach", 250.0, Unit::Gram, 10.0, "2024-02-20"),
    ]
}

/// Create an in-memory SDK with the sample history loaded.
pub fn setup_sample_sdk() -> VegtrackSdk {
    let sdk = VegtrackSdk::builder().in_memory().build().unwrap();
    for p in sample_purchases() {
        sdk.purchases().insert(&p).unwrap();
    }
    sdk
}
