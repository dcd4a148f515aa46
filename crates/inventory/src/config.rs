//! Store configuration (paths and the default low-stock threshold).
//!
//! Everything has a default; the environment can override it.

use std::path::PathBuf;

use stockkeep_core::Threshold;

use crate::persistence::DEFAULT_DATA_PATH;

pub const DEFAULT_LOG_PATH: &str = "inventory.log";

pub const DATA_PATH_VAR: &str = "STOCKKEEP_DATA_PATH";
pub const LOG_PATH_VAR: &str = "STOCKKEEP_LOG_PATH";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKKEEP_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryConfig {
    /// Where `save`/`load` read and write the inventory JSON.
    pub data_path: PathBuf,
    /// Where the audit log is appended.
    pub log_path: PathBuf,
    pub low_stock_threshold: Threshold,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            low_stock_threshold: Threshold::default(),
        }
    }
}

impl InventoryConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (env-like).
    ///
    /// Unset or empty keys keep their default. A threshold that does not parse
    /// or fails validation is ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = get(DATA_PATH_VAR) {
            config.data_path = PathBuf::from(path);
        }
        if let Some(path) = get(LOG_PATH_VAR) {
            config.log_path = PathBuf::from(path);
        }
        if let Some(raw) = get(LOW_STOCK_THRESHOLD_VAR) {
            match raw.trim().parse::<f64>().map(Threshold::new) {
                Ok(Ok(threshold)) => config.low_stock_threshold = threshold,
                _ => tracing::warn!(
                    value = %raw,
                    "{LOW_STOCK_THRESHOLD_VAR} is not a non-negative number; using default"
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = InventoryConfig::from_lookup(lookup(&[]));
        assert_eq!(config, InventoryConfig::default());
        assert_eq!(config.data_path, PathBuf::from("inventory.json"));
        assert_eq!(config.log_path, PathBuf::from("inventory.log"));
        assert_eq!(config.low_stock_threshold.value(), 5.0);
    }

    #[test]
    fn overrides_are_applied() {
        let config = InventoryConfig::from_lookup(lookup(&[
            (DATA_PATH_VAR, "/tmp/stock.json"),
            (LOG_PATH_VAR, "/tmp/stock.log"),
            (LOW_STOCK_THRESHOLD_VAR, " 2.5 "),
        ]));
        assert_eq!(config.data_path, PathBuf::from("/tmp/stock.json"));
        assert_eq!(config.log_path, PathBuf::from("/tmp/stock.log"));
        assert_eq!(config.low_stock_threshold.value(), 2.5);
    }

    #[test]
    fn bad_threshold_falls_back_to_default() {
        for raw in ["lots", "-3", "NaN"] {
            let config =
                InventoryConfig::from_lookup(lookup(&[(LOW_STOCK_THRESHOLD_VAR, raw)]));
            assert_eq!(config.low_stock_threshold.value(), 5.0, "{raw}");
        }
    }

    #[test]
    fn empty_values_keep_defaults() {
        let config = InventoryConfig::from_lookup(lookup(&[(DATA_PATH_VAR, "  ")]));
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    }
}
