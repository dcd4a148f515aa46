//! Stock movement audit log.
//!
//! This is the human-readable trail of adds and removes, separate from the
//! `tracing` diagnostics. The store only knows about the [`StockLog`] trait;
//! where the lines end up is the caller's choice.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use stockkeep_core::{InventoryError, InventoryResult};

/// What happened to the stock.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StockAction {
    Added,
    /// `deleted` is set when the removal took the item to zero.
    Removed { deleted: bool },
}

/// One audit record.
#[derive(Debug, Clone, PartialEq)]
pub struct StockLogEntry {
    pub at: DateTime<Utc>,
    pub item: String,
    pub qty: f64,
    pub action: StockAction,
}

impl core::fmt::Display for StockLogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let at = self.at.to_rfc3339();
        match self.action {
            StockAction::Added => write!(f, "{at}: Added {} of {}", self.qty, self.item),
            StockAction::Removed { deleted: false } => {
                write!(f, "{at}: Removed {} of {}", self.qty, self.item)
            }
            StockAction::Removed { deleted: true } => write!(
                f,
                "{at}: Removed {} of {} (deleted at zero)",
                self.qty, self.item
            ),
        }
    }
}

/// Destination for audit records.
///
/// Recording must not fail the stock operation; sinks that can fail report it
/// through `tracing` instead.
pub trait StockLog {
    fn record(&mut self, entry: &StockLogEntry);
}

impl<F> StockLog for F
where
    F: FnMut(&StockLogEntry),
{
    fn record(&mut self, entry: &StockLogEntry) {
        self(entry)
    }
}

/// In-memory sink for tests and callers that want the lines back.
///
/// Clones share the same buffer, so keep one handle and give the other to the
/// store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStockLog {
    entries: Arc<RwLock<Vec<StockLogEntry>>>,
}

impl MemoryStockLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<StockLogEntry> {
        match self.entries.read() {
            Ok(entries) => entries.clone(),
            Err(_) => vec![],
        }
    }

    /// Entries rendered the same way [`FileStockLog`] writes them.
    pub fn lines(&self) -> Vec<String> {
        self.entries().iter().map(ToString::to_string).collect()
    }
}

impl StockLog for MemoryStockLog {
    fn record(&mut self, entry: &StockLogEntry) {
        if let Ok(mut entries) = self.entries.write() {
            entries.push(entry.clone());
        }
    }
}

/// Append-only file sink (one line per entry).
#[derive(Debug)]
pub struct FileStockLog {
    path: PathBuf,
    file: File,
}

impl FileStockLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> InventoryResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| InventoryError::io(&path, e))?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StockLog for FileStockLog {
    fn record(&mut self, entry: &StockLogEntry) {
        if let Err(err) = writeln!(self.file, "{entry}") {
            tracing::warn!(path = %self.path.display(), "failed to append stock log entry: {err}");
        }
    }
}
