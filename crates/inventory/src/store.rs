use chrono::Utc;
use indexmap::IndexMap;

use stockkeep_core::{InventoryError, InventoryResult, ItemName, Quantity, Threshold};

use crate::log::{StockAction, StockLog, StockLogEntry};

/// In-memory inventory: item name -> quantity, in insertion order.
///
/// Invariants:
/// - quantities are finite and never negative
/// - a removal that reaches exactly zero deletes the entry
///
/// Every operation validates fully before touching the map, so an `Err`
/// always leaves the store unchanged.
pub struct InventoryStore {
    pub(crate) stock: IndexMap<String, f64>,
    log: Option<Box<dyn StockLog>>,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for InventoryStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InventoryStore")
            .field("stock", &self.stock)
            .field("log", &self.log.is_some())
            .finish()
    }
}

impl InventoryStore {
    /// Empty store with no audit log attached.
    pub fn new() -> Self {
        Self {
            stock: IndexMap::new(),
            log: None,
        }
    }

    /// Attach an audit sink that receives one entry per add/remove.
    pub fn with_log(mut self, log: impl StockLog + 'static) -> Self {
        self.log = Some(Box::new(log));
        self
    }

    /// Add `qty` of `item`, creating the entry if it does not exist yet.
    pub fn add(&mut self, item: &str, qty: f64) -> InventoryResult<()> {
        let name = ItemName::parse(item)?;
        let qty = Quantity::non_negative(qty)?.value();

        let current = self.stock.get(name.as_str()).copied().unwrap_or(0.0);
        let new_qty = current + qty;
        if !new_qty.is_finite() {
            return Err(InventoryError::invalid_argument(format!(
                "adding {qty} to '{item}' overflows the stored quantity ({current})"
            )));
        }
        self.stock.insert(name.into_inner(), new_qty);

        tracing::info!(item, qty, new_qty, "added stock");
        self.record(item, qty, StockAction::Added);
        Ok(())
    }

    /// Remove `qty` of `item`. Reaching exactly zero deletes the entry.
    pub fn remove(&mut self, item: &str, qty: f64) -> InventoryResult<()> {
        let name = ItemName::parse(item)?;
        let qty = Quantity::positive(qty)?.value();

        let (index, _, stored) = self
            .stock
            .get_full_mut(name.as_str())
            .ok_or_else(|| InventoryError::not_found(item))?;

        let available = *stored;
        let remaining = available - qty;
        if remaining < 0.0 {
            return Err(InventoryError::InsufficientStock {
                item: item.to_string(),
                available,
                requested: qty,
            });
        }

        let deleted = remaining == 0.0;
        if deleted {
            self.stock.shift_remove_index(index);
            tracing::info!(item, qty, "removed stock (deleted at zero)");
        } else {
            *stored = remaining;
            tracing::info!(item, qty, new_qty = remaining, "removed stock");
        }

        self.record(item, qty, StockAction::Removed { deleted });
        Ok(())
    }

    /// Current quantity of `item`.
    pub fn get_quantity(&self, item: &str) -> InventoryResult<f64> {
        self.stock
            .get(item)
            .copied()
            .ok_or_else(|| InventoryError::not_found(item))
    }

    /// Items whose quantity is strictly below `threshold`, in iteration order.
    pub fn check_low_items(&self, threshold: f64) -> InventoryResult<Vec<String>> {
        let threshold = Threshold::new(threshold)?;
        Ok(self.low_items(threshold))
    }

    /// [`Self::check_low_items`] with the default threshold of 5.
    pub fn check_low_items_default(&self) -> Vec<String> {
        self.low_items(Threshold::default())
    }

    pub fn low_items(&self, threshold: Threshold) -> Vec<String> {
        self.stock
            .iter()
            .filter(|(_, qty)| **qty < threshold.value())
            .map(|(item, _)| item.clone())
            .collect()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// `(item, quantity)` pairs in iteration order.
    pub fn items(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.stock.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    fn record(&mut self, item: &str, qty: f64, action: StockAction) {
        if let Some(log) = self.log.as_mut() {
            log.record(&StockLogEntry {
                at: Utc::now(),
                item: item.to_string(),
                qty,
                action,
            });
        }
    }
}
