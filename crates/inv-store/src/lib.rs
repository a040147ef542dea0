//! inv-store
//!
//! Save a product inventory to a CSV file and load it back.
//!
//! - [`save_products`] writes a fixed `name,price,quantity` header plus one row
//!   per product. An empty inventory is a no-op.
//! - [`load_products`] checks the header, then coerces and validates each row.
//!   Malformed rows are dropped and counted; missing files, bad headers and
//!   read failures abort the load.
//!
//! Neither call returns `Err` or panics: both yield a tagged outcome
//! ([`SaveOutcome`], [`LoadOutcome`]) carrying the cause on failure. The
//! inventory itself is caller-owned; this crate keeps no state between calls.
//!
//! ```no_run
//! use inv_store::{load_products, save_products, Product};
//!
//! let inventory = vec![Product::new("widget", 2.5, 10)];
//! let saved = save_products("inventory.csv", &inventory);
//! println!("{}", saved.message());
//!
//! let (products, rejected) = load_products("inventory.csv").into_parts();
//! assert_eq!(rejected, 0);
//! assert_eq!(products, inventory);
//! ```

mod error;
mod loader;
mod outcome;
mod product;
mod report;
mod store;
mod writer;

pub use error::StoreError;
pub use loader::{
    load_products, load_products_with, parse_price, parse_products_str, parse_quantity,
    read_products, read_products_with,
};
pub use outcome::{LoadOutcome, SaveOutcome};
pub use product::{Product, EXPECTED_HEADER};
pub use report::{
    LoadOptions, LoadReport, RejectCounts, RejectReason, RowReject, DEFAULT_MAX_REJECT_DETAILS,
};
pub use store::InventoryStore;
pub use writer::{save_products, write_products};
