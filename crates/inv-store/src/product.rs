use serde::{Deserialize, Serialize};

/// Fixed header row of an inventory file, in column order.
pub const EXPECTED_HEADER: [&str; 3] = ["name", "price", "quantity"];

/// One product entry.
///
/// No identity field: two records with equal fields are still two records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Unit price. Non-negative on load; the writer does not check.
    pub price: f64,
    pub quantity: u64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, quantity: u64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}
