//! Tagged results returned by [`crate::save_products`] and [`crate::load_products`].
//!
//! Neither operation returns `Err`; callers match on the outcome and decide
//! whether to display, log or propagate.

use std::path::PathBuf;

use crate::error::StoreError;
use crate::product::Product;
use crate::report::LoadReport;

#[derive(Debug)]
pub enum SaveOutcome {
    /// Header plus `rows` records written to `path`.
    Saved { path: PathBuf, rows: usize },
    /// Nothing to save; no file was created or touched.
    NothingToSave,
    Failed { error: StoreError },
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved { .. })
    }

    pub fn error(&self) -> Option<&StoreError> {
        match self {
            SaveOutcome::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// One-line human-readable summary.
    pub fn message(&self) -> String {
        match self {
            SaveOutcome::Saved { path, rows } => {
                format!("saved {rows} product(s) to {}", path.display())
            }
            SaveOutcome::NothingToSave => "no products to save".to_string(),
            SaveOutcome::Failed { error } => format!("save failed: {error}"),
        }
    }
}

#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(LoadReport),
    Failed { error: StoreError },
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }

    pub fn report(&self) -> Option<&LoadReport> {
        match self {
            LoadOutcome::Loaded(report) => Some(report),
            LoadOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&StoreError> {
        match self {
            LoadOutcome::Failed { error } => Some(error),
            LoadOutcome::Loaded(_) => None,
        }
    }

    /// Valid products; empty on failure.
    pub fn products(&self) -> &[Product] {
        match self {
            LoadOutcome::Loaded(report) => &report.products,
            LoadOutcome::Failed { .. } => &[],
        }
    }

    /// Rejection count; zero on failure.
    pub fn rejected(&self) -> usize {
        self.report().map(LoadReport::rejected).unwrap_or(0)
    }

    /// `(products, rejected)`. Every failure collapses to `([], 0)`.
    pub fn into_parts(self) -> (Vec<Product>, usize) {
        match self {
            LoadOutcome::Loaded(report) => {
                let rejected = report.rejected();
                (report.products, rejected)
            }
            LoadOutcome::Failed { .. } => (Vec::new(), 0),
        }
    }

    /// One-line human-readable summary.
    pub fn message(&self) -> String {
        match self {
            LoadOutcome::Loaded(report) => format!(
                "loaded {} product(s), rejected {} row(s)",
                report.products.len(),
                report.rejected()
            ),
            LoadOutcome::Failed { error } => format!("load failed: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_load_collapses_to_empty_parts() {
        let outcome = LoadOutcome::Failed {
            error: StoreError::NotFound(PathBuf::from("x.csv")),
        };
        assert!(!outcome.is_loaded());
        assert!(outcome.products().is_empty());
        assert_eq!(outcome.rejected(), 0);
        assert!(outcome.message().contains("not found"));
        assert_eq!(outcome.into_parts(), (Vec::new(), 0));
    }

    #[test]
    fn nothing_to_save_is_not_an_error() {
        let outcome = SaveOutcome::NothingToSave;
        assert!(!outcome.is_saved());
        assert!(outcome.error().is_none());
        assert_eq!(outcome.message(), "no products to save");
    }
}
