use std::path::{Path, PathBuf};

use inv_config::StoreSettings;

use crate::loader::load_products_with;
use crate::outcome::{LoadOutcome, SaveOutcome};
use crate::product::Product;
use crate::report::{LoadOptions, DEFAULT_MAX_REJECT_DETAILS};
use crate::writer::save_products;

/// A configured inventory file: one path, one set of load options.
///
/// Holds no products. Callers own the inventory and pass it in on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    path: PathBuf,
    opts: LoadOptions,
}

impl InventoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            opts: LoadOptions::default(),
        }
    }

    pub fn from_settings(settings: &StoreSettings) -> Self {
        Self {
            path: settings.path.clone(),
            opts: LoadOptions {
                max_reject_details: settings
                    .max_reject_details
                    .unwrap_or(DEFAULT_MAX_REJECT_DETAILS),
            },
        }
    }

    pub fn with_options(mut self, opts: LoadOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &LoadOptions {
        &self.opts
    }

    pub fn save(&self, products: &[Product]) -> SaveOutcome {
        save_products(&self.path, products)
    }

    pub fn load(&self) -> LoadOutcome {
        load_products_with(&self.path, &self.opts)
    }
}
