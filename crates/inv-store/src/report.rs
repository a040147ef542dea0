//! Load report: valid products plus a breakdown of rejected rows.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Why a data row was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The row has fewer fields than the header.
    MissingField,
    /// `price` is not a float literal.
    BadPrice,
    /// `quantity` is not an integer that fits the quantity range.
    BadQuantity,
    NegativePrice,
    NegativeQuantity,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::MissingField => "missing_field",
            RejectReason::BadPrice => "bad_price",
            RejectReason::BadQuantity => "bad_quantity",
            RejectReason::NegativePrice => "negative_price",
            RejectReason::NegativeQuantity => "negative_quantity",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectCounts {
    pub missing_field: u64,
    pub bad_price: u64,
    pub bad_quantity: u64,
    pub negative_price: u64,
    pub negative_quantity: u64,
}

impl RejectCounts {
    pub fn record(&mut self, reason: RejectReason) {
        match reason {
            RejectReason::MissingField => self.missing_field += 1,
            RejectReason::BadPrice => self.bad_price += 1,
            RejectReason::BadQuantity => self.bad_quantity += 1,
            RejectReason::NegativePrice => self.negative_price += 1,
            RejectReason::NegativeQuantity => self.negative_quantity += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.missing_field
            + self.bad_price
            + self.bad_quantity
            + self.negative_price
            + self.negative_quantity
    }
}

/// Detail for one rejected row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowReject {
    /// 1-based line in the file where the row starts (header is line 1).
    pub line: u64,
    pub reason: RejectReason,
    /// The row re-encoded as CSV, for operator display.
    pub raw: String,
}

/// Rejected-row details kept per load unless configured otherwise.
pub const DEFAULT_MAX_REJECT_DETAILS: usize = 100;

/// Knobs for a single load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// How many [`RowReject`] details to keep. Counts stay exact past this.
    pub max_reject_details: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_reject_details: DEFAULT_MAX_REJECT_DETAILS,
        }
    }
}

/// Result of a successful load pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Valid products, in file order.
    pub products: Vec<Product>,
    /// Data rows seen (blank lines excluded).
    pub rows_read: u64,
    pub rejects: RejectCounts,
    /// First `max_reject_details` rejected rows, in file order.
    pub rejected_rows: Vec<RowReject>,
}

impl LoadReport {
    /// Rejection count.
    pub fn rejected(&self) -> usize {
        self.rejects.total() as usize
    }

    pub fn is_clean(&self) -> bool {
        self.rejects.total() == 0
    }

    pub(crate) fn reject(&mut self, reject: RowReject, opts: &LoadOptions) {
        self.rejects.record(reject.reason);
        if self.rejected_rows.len() < opts.max_reject_details {
            self.rejected_rows.push(reject);
        }
    }
}
