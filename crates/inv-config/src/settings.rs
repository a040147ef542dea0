//! Typed store settings read from the merged config JSON.
//!
//! Config shape:
//!
//! ```yaml
//! store:
//!   path: "data/inventory.csv"   # required
//! load:
//!   max_reject_details: 100      # optional, store default when absent
//!   unused_keys: warn            # optional, warn | fail
//! ```

use anyhow::{anyhow, bail, Result};
use serde_json::Value;
use std::path::PathBuf;

use crate::{report_unused_keys, UnusedKeyPolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub path: PathBuf,
    /// `None` leaves the store's own default in place.
    pub max_reject_details: Option<usize>,
    pub unused_keys: UnusedKeyPolicy,
}

impl StoreSettings {
    /// Read settings from a merged config value and run the unused-key guard
    /// with the configured policy.
    pub fn from_config_json(config_json: &Value) -> Result<Self> {
        let path = match config_json.pointer("/store/path") {
            Some(Value::String(s)) if !s.trim().is_empty() => PathBuf::from(s),
            Some(_) => bail!("CONFIG_INVALID_VALUE leaf=/store/path expected non-empty string"),
            None => bail!("CONFIG_MISSING_KEY leaf=/store/path"),
        };

        let max_reject_details = match config_json.pointer("/load/max_reject_details") {
            None | Some(Value::Null) => None,
            Some(v) => {
                let n = v
                    .as_u64()
                    .and_then(|n| usize::try_from(n).ok())
                    .ok_or_else(|| {
                        anyhow!(
                            "CONFIG_INVALID_VALUE leaf=/load/max_reject_details expected non-negative integer, got {}",
                            v
                        )
                    })?;
                Some(n)
            }
        };

        let unused_keys = match config_json.pointer("/load/unused_keys") {
            None | Some(Value::Null) => UnusedKeyPolicy::Warn,
            Some(Value::String(s)) => UnusedKeyPolicy::parse(s)?,
            Some(other) => bail!(
                "CONFIG_INVALID_VALUE leaf=/load/unused_keys expected string, got {}",
                other
            ),
        };

        report_unused_keys(config_json, unused_keys)?;

        Ok(StoreSettings {
            path,
            max_reject_details,
            unused_keys,
        })
    }
}
