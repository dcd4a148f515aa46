//! JSON persistence for [`InventoryStore`].
//!
//! The file is a single JSON object mapping item name to quantity, e.g.
//! `{"apple": 8.0, "banana": 3.0}`. Loading parses into a fresh map and only
//! swaps it in once the whole file has been validated.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use stockkeep_core::{InventoryError, InventoryResult};

use crate::store::InventoryStore;

/// Default location of the inventory file.
pub const DEFAULT_DATA_PATH: &str = "inventory.json";

impl InventoryStore {
    /// Write the whole inventory to `path` as pretty-printed JSON, replacing
    /// any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> InventoryResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.stock)
            .map_err(|e| InventoryError::invalid_format(e.to_string()))?;

        fs::write(path, json).map_err(|e| InventoryError::io(path, e))?;

        tracing::info!(path = %path.display(), items = self.stock.len(), "saved inventory");
        Ok(())
    }

    /// Replace the inventory with the contents of `path`.
    ///
    /// On any error the current contents are kept.
    pub fn load(&mut self, path: impl AsRef<Path>) -> InventoryResult<()> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|e| InventoryError::io(path, e))?;
        let stock = parse_stock(&raw)?;

        self.stock = stock;

        tracing::info!(path = %path.display(), items = self.stock.len(), "loaded inventory");
        Ok(())
    }
}

/// Validate and decode an inventory document.
fn parse_stock(raw: &[u8]) -> InventoryResult<IndexMap<String, f64>> {
    let value: JsonValue = serde_json::from_slice(raw)
        .map_err(|e| InventoryError::invalid_format(format!("not valid JSON: {e}")))?;

    let JsonValue::Object(map) = value else {
        return Err(InventoryError::invalid_format(
            "inventory file must contain a JSON object",
        ));
    };

    let mut stock = IndexMap::with_capacity(map.len());
    for (item, qty) in map {
        let Some(qty) = qty.as_f64() else {
            return Err(InventoryError::invalid_format(format!(
                "quantity for '{item}' is not a number"
            )));
        };
        if qty < 0.0 {
            return Err(InventoryError::invalid_format(format!(
                "quantity for '{item}' is negative ({qty})"
            )));
        }
        stock.insert(item, qty);
    }

    Ok(stock)
}
