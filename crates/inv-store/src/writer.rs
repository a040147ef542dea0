//! Writer: product slice -> CSV file.

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::{error, info};

use crate::error::StoreError;
use crate::outcome::SaveOutcome;
use crate::product::{Product, EXPECTED_HEADER};

/// Write `products` to `path` as CSV, creating or truncating the file.
///
/// An empty slice is a no-op: the file is neither created nor truncated.
/// A crash mid-write leaves a truncated file.
pub fn save_products(path: impl AsRef<Path>, products: &[Product]) -> SaveOutcome {
    let path = path.as_ref();

    if products.is_empty() {
        info!(path = %path.display(), "inventory save skipped: no products");
        return SaveOutcome::NothingToSave;
    }

    let result = File::create(path)
        .map_err(|e| StoreError::Io(format!("create '{}': {e}", path.display())))
        .and_then(|file| write_products(file, products));

    match result {
        Ok(rows) => {
            info!(path = %path.display(), rows, "inventory saved");
            SaveOutcome::Saved {
                path: path.to_path_buf(),
                rows,
            }
        }
        Err(error) => {
            error!(path = %path.display(), kind = error.kind(), %error, "inventory save failed");
            SaveOutcome::Failed { error }
        }
    }
}

/// Serialize the header and `products` into any sink. Returns rows written.
pub fn write_products<W: io::Write>(sink: W, products: &[Product]) -> Result<usize, StoreError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(sink);

    wtr.write_record(EXPECTED_HEADER)?;
    for p in products {
        wtr.serialize(p)?;
    }
    wtr.flush()?;

    Ok(products.len())
}
