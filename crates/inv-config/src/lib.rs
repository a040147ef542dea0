//! inv-config
//!
//! Layered YAML configuration for the inventory store.
//!
//! YAML documents are merged in order (earlier docs are base, later docs
//! override) into a single JSON value. Typed settings are read out of that
//! value by [`StoreSettings::from_config_json`]; leaf keys nothing reads can
//! be reported (or refused) with [`report_unused_keys`].

mod settings;

pub use settings::StoreSettings;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;

/// JSON-pointer prefixes the store actually reads.
///
/// A leaf pointer under any of these prefixes counts as consumed. Keep this in
/// sync with `settings.rs`; do not list sections nothing reads.
pub const CONSUMED_POINTERS: &[&str] = &[
    "/store/path",
    "/load/max_reject_details",
    "/load/unused_keys",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnusedKeyPolicy {
    Warn,
    Fail,
}

impl UnusedKeyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnusedKeyPolicy::Warn => "warn",
            UnusedKeyPolicy::Fail => "fail",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warn" => Ok(UnusedKeyPolicy::Warn),
            "fail" => Ok(UnusedKeyPolicy::Fail),
            other => bail!(
                "CONFIG_INVALID_VALUE leaf=/load/unused_keys value='{}' expected one of: warn | fail",
                other
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnusedKeyReport {
    /// Consumed JSON-pointer prefixes used for this analysis (sorted, unique)
    pub consumed_prefixes: Vec<String>,
    /// Unused leaf pointers (sorted)
    pub unused_leaf_pointers: Vec<String>,
}

impl UnusedKeyReport {
    pub fn is_clean(&self) -> bool {
        self.unused_leaf_pointers.is_empty()
    }
}

/// Produce an unused-key report against [`CONSUMED_POINTERS`].
/// If `policy == Fail`, returns an error when unused keys exist.
/// If `policy == Warn`, always returns Ok(report).
pub fn report_unused_keys(config_json: &Value, policy: UnusedKeyPolicy) -> Result<UnusedKeyReport> {
    let mut consumed_prefixes: Vec<String> =
        CONSUMED_POINTERS.iter().map(|p| p.to_string()).collect();
    consumed_prefixes.sort();
    consumed_prefixes.dedup();

    let mut unused: Vec<String> = leaf_pointers(config_json)
        .into_iter()
        .filter(|leaf| !consumed_prefixes.iter().any(|p| covers(p, leaf)))
        .collect();
    unused.sort();

    let report = UnusedKeyReport {
        consumed_prefixes,
        unused_leaf_pointers: unused,
    };

    if policy == UnusedKeyPolicy::Fail && !report.is_clean() {
        let shown: Vec<&str> = report
            .unused_leaf_pointers
            .iter()
            .take(12)
            .map(String::as_str)
            .collect();
        bail!(
            "CONFIG_UNUSED_KEYS: {} unused config leaf key(s) detected. \
            Remove them or update CONSUMED_POINTERS. First few: {}",
            report.unused_leaf_pointers.len(),
            shown.join(", ")
        );
    }

    Ok(report)
}

/// `/load` covers `/load` and `/load/x`, not `/loader`.
fn covers(prefix: &str, leaf: &str) -> bool {
    leaf.strip_prefix(prefix)
        .map(|rest| rest.is_empty() || rest.starts_with('/'))
        .unwrap_or(false)
}

/// JSON pointers of every non-object value. Arrays count as single leaves;
/// no setting indexes into one.
fn leaf_pointers(root: &Value) -> Vec<String> {
    fn walk(v: &Value, at: String, out: &mut Vec<String>) {
        match v.as_object() {
            Some(map) => {
                for (key, child) in map {
                    let token = key.replace('~', "~0").replace('/', "~1");
                    walk(child, format!("{at}/{token}"), out);
                }
            }
            None if at.is_empty() => out.push("/".to_string()),
            None => out.push(at),
        }
    }

    let mut out = Vec::new();
    walk(root, String::new(), &mut out);
    out
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config_json: Value,
}

/// Read and merge YAML files in order; later files override earlier ones.
pub fn load_layered_yaml(paths: &[&str]) -> Result<LoadedConfig> {
    let docs = paths
        .iter()
        .map(|p| fs::read_to_string(p).with_context(|| format!("failed to read yaml path: {p}")))
        .collect::<Result<Vec<String>>>()?;

    let doc_refs: Vec<&str> = docs.iter().map(String::as_str).collect();
    load_layered_yaml_from_strings(&doc_refs)
}

pub fn load_layered_yaml_from_strings(yaml_docs: &[&str]) -> Result<LoadedConfig> {
    let mut config_json = Value::Object(Map::new());
    for raw in yaml_docs {
        let doc: serde_yaml::Value = serde_yaml::from_str(raw).context("invalid yaml")?;
        let doc = serde_json::to_value(doc).context("yaml->json conversion failed")?;
        // Empty documents decode to null and override nothing.
        if !doc.is_null() {
            overlay(&mut config_json, doc);
        }
    }

    Ok(LoadedConfig { config_json })
}

/// Objects merge key by key; anything else replaces the base value.
fn overlay(base: &mut Value, top: Value) {
    match (base, top) {
        (Value::Object(base_map), Value::Object(top_map)) => {
            for (key, top_val) in top_map {
                match base_map.get_mut(&key) {
                    Some(base_val) => overlay(base_val, top_val),
                    None => {
                        base_map.insert(key, top_val);
                    }
                }
            }
        }
        (base, top) => *base = top,
    }
}
