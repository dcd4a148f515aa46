//! Console stock report.

use std::io::{self, Write};

use crate::store::InventoryStore;

pub const REPORT_HEADER: &str = "Items Report";

impl InventoryStore {
    /// Write the report: a header line, then `<item> -> <quantity>` per item.
    pub fn write_report<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{REPORT_HEADER}")?;
        for (item, qty) in self.items() {
            // Debug formatting keeps the decimal point on whole numbers (8.0).
            writeln!(out, "{item} -> {qty:?}")?;
        }
        out.flush()
    }

    /// Print the report to standard output.
    pub fn print_report(&self) {
        let stdout = io::stdout();
        if let Err(err) = self.write_report(stdout.lock()) {
            tracing::warn!("failed to write inventory report: {err}");
        }
    }
}
