//! Loader: CSV file -> valid products + rejection count.
//!
//! ## Row contract
//!
//! | Column     | Example  | Rejected when                                  |
//! |------------|----------|------------------------------------------------|
//! | `name`     | `widget` | never (kept verbatim, may be empty)            |
//! | `price`    | `2.50`   | missing, not a number, or negative (`-inf` too) |
//! | `quantity` | `10`     | missing, not an integer, out of range, negative |
//!
//! The header must be exactly `name,price,quantity` and must be the first
//! bytes of the input: a UTF-8 BOM or blank lines before it are a header
//! mismatch. Numeric fields are trimmed before parsing. Extra trailing fields
//! are ignored; blank lines between data rows are skipped and not counted.
//! `inf` and `NaN` prices are kept, since neither is negative.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::error::StoreError;
use crate::outcome::LoadOutcome;
use crate::product::{Product, EXPECTED_HEADER};
use crate::report::{LoadOptions, LoadReport, RejectReason, RowReject};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

const NAME: usize = 0;
const PRICE: usize = 1;
const QUANTITY: usize = 2;

/// Load products from `path` with default [`LoadOptions`].
pub fn load_products(path: impl AsRef<Path>) -> LoadOutcome {
    load_products_with(path, &LoadOptions::default())
}

/// Load products from `path`.
///
/// A missing file, a header mismatch, or a read failure aborts the load with
/// [`LoadOutcome::Failed`]. Malformed rows are dropped and counted.
pub fn load_products_with(path: impl AsRef<Path>, opts: &LoadOptions) -> LoadOutcome {
    let path = path.as_ref();

    let result = open(path).and_then(|file| read_products_with(file, opts));

    match result {
        Ok(report) => {
            if !report.is_clean() {
                warn!(
                    path = %path.display(),
                    rejected = report.rejected(),
                    "inventory rows rejected"
                );
            }
            info!(
                path = %path.display(),
                loaded = report.products.len(),
                rejected = report.rejected(),
                "inventory loaded"
            );
            LoadOutcome::Loaded(report)
        }
        Err(error) => {
            match &error {
                StoreError::NotFound(_) | StoreError::HeaderMismatch { .. } => {
                    warn!(path = %path.display(), kind = error.kind(), %error, "inventory load aborted")
                }
                StoreError::Io(_) | StoreError::Csv(_) => {
                    error!(path = %path.display(), kind = error.kind(), %error, "inventory load failed")
                }
            }
            LoadOutcome::Failed { error }
        }
    }
}

fn open(path: &Path) -> Result<File, StoreError> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
        _ => StoreError::Io(format!("open '{}': {e}", path.display())),
    })
}

/// Parse CSV from a string slice (useful for tests without touching the
/// filesystem). See [`read_products_with`] for the contract.
pub fn parse_products_str(src: &str) -> Result<LoadReport, StoreError> {
    read_products(src.as_bytes())
}

pub fn read_products<R: Read>(source: R) -> Result<LoadReport, StoreError> {
    read_products_with(source, &LoadOptions::default())
}

/// Single pass over `source`: check the header, then coerce and validate each
/// data row. Only header and read failures return `Err`.
pub fn read_products_with<R: Read>(
    mut source: R,
    opts: &LoadOptions,
) -> Result<LoadReport, StoreError> {
    let mut buf = Vec::new();
    source.read_to_end(&mut buf)?;
    reject_displaced_header(&buf)?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(buf.as_slice());

    let header = rdr.headers()?;
    if header.iter().ne(EXPECTED_HEADER) {
        return Err(StoreError::HeaderMismatch {
            found: header.iter().map(str::to_string).collect(),
        });
    }

    let mut report = LoadReport::default();

    for rec in rdr.records() {
        let rec = rec?;
        report.rows_read += 1;

        match parse_row(&rec) {
            Ok(product) => report.products.push(product),
            Err(reason) => {
                let line = rec.position().map(|p| p.line()).unwrap_or(0);
                debug!(line, %reason, "inventory row rejected");
                report.reject(
                    RowReject {
                        line,
                        reason,
                        raw: encode_row(&rec),
                    },
                    opts,
                );
            }
        }
    }

    Ok(report)
}

/// The csv reader forgives a leading BOM and leading blank lines; the header
/// row has to start at byte 0.
fn reject_displaced_header(buf: &[u8]) -> Result<(), StoreError> {
    const BOM: &[u8] = b"\xEF\xBB\xBF";

    if !(buf.starts_with(BOM) || buf.starts_with(b"\n") || buf.starts_with(b"\r")) {
        return Ok(());
    }

    let first_line = buf.split(|&b| b == b'\n').next().unwrap_or_default();
    let first_line = String::from_utf8_lossy(first_line);
    Err(StoreError::HeaderMismatch {
        found: first_line
            .trim_end_matches('\r')
            .split(',')
            .map(str::to_string)
            .collect(),
    })
}

/// Re-encode a record as one CSV line so quoted delimiters stay visible.
fn encode_row(rec: &csv::StringRecord) -> String {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let encoded = match wtr.write_record(rec) {
        Ok(()) => wtr.into_inner().ok(),
        Err(_) => None,
    };

    match encoded {
        Some(bytes) => String::from_utf8_lossy(&bytes)
            .trim_end_matches('\n')
            .to_string(),
        None => rec.iter().collect::<Vec<_>>().join(","),
    }
}

// ---------------------------------------------------------------------------
// Field coercion
// ---------------------------------------------------------------------------

fn parse_row(rec: &csv::StringRecord) -> Result<Product, RejectReason> {
    let field = |i: usize| rec.get(i).ok_or(RejectReason::MissingField);

    let name = field(NAME)?;
    let price = parse_price(field(PRICE)?)?;
    let quantity = parse_quantity(field(QUANTITY)?)?;

    Ok(Product::new(name, price, quantity))
}

/// Any float literal that is not below zero. `-0`, `inf` and `NaN` pass.
pub fn parse_price(s: &str) -> Result<f64, RejectReason> {
    let v: f64 = s.trim().parse().map_err(|_| RejectReason::BadPrice)?;
    if v < 0.0 {
        return Err(RejectReason::NegativePrice);
    }
    Ok(v)
}

/// Integer literal with optional sign; negatives are their own reason.
pub fn parse_quantity(s: &str) -> Result<u64, RejectReason> {
    let v: i128 = s.trim().parse().map_err(|_| RejectReason::BadQuantity)?;
    if v < 0 {
        return Err(RejectReason::NegativeQuantity);
    }
    u64::try_from(v).map_err(|_| RejectReason::BadQuantity)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
