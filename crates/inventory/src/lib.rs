//! Inventory store: stock quantities keyed by item name.
//!
//! The store itself is plain in-memory state. Persistence, the console report
//! and the audit log are layered on top of it in their own modules.

pub mod config;
pub mod log;
pub mod persistence;
pub mod report;
pub mod store;

pub use config::InventoryConfig;
pub use log::{FileStockLog, MemoryStockLog, StockAction, StockLog, StockLogEntry};
pub use store::InventoryStore;

pub use stockkeep_core::{InventoryError, InventoryResult};
