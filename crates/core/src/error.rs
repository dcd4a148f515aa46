//! Inventory error model.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the inventory crates.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every operation validates before it mutates, so receiving any of these
/// means the store was left exactly as it was before the call.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Bad item name, quantity or threshold.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The item is not present in the inventory.
    #[error("item '{0}' not found in inventory")]
    NotFound(String),

    /// A removal asked for more than is in stock.
    #[error("insufficient stock for '{item}' (available: {available}, requested: {requested})")]
    InsufficientStock {
        item: String,
        available: f64,
        requested: f64,
    },

    /// Persisted data did not have the expected shape.
    #[error("invalid inventory format: {0}")]
    InvalidFormat(String),

    /// Filesystem failure while reading or writing the inventory file.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InventoryError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_message_reports_both_amounts() {
        let err = InventoryError::InsufficientStock {
            item: "apple".to_string(),
            available: 8.0,
            requested: 9.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("apple"));
        assert!(msg.contains("available: 8"));
        assert!(msg.contains("requested: 9.5"));
    }

    #[test]
    fn io_error_keeps_path_and_source() {
        let err = InventoryError::io(
            "missing/inventory.json",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("missing/inventory.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
