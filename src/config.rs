use std::path::PathBuf;

/// File name of the DuckDB database inside the data directory.
pub const DB_FILE: &str = "purchases.db";

/// DDL for the purchases table. Column names are quoted camelCase so they
/// line up with the serde representation of the purchase models.
pub const PURCHASES_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS purchases (
    "id" VARCHAR PRIMARY KEY,
    "vegetableId" VARCHAR NOT NULL,
    "vegetableName" VARCHAR NOT NULL,
    "quantity" DOUBLE NOT NULL,
    "unit" VARCHAR NOT NULL,
    "price" DOUBLE NOT NULL,
    "date" VARCHAR NOT NULL,
    "pricePerKg" DOUBLE NOT NULL
)
"#;

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("vegtrack-sdk")
    } else {
        PathBuf::from(".vegtrack-sdk")
    }
}
