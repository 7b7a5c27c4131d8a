//! Human-readable stock report.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::item::ItemName;

pub const REPORT_HEADER: &str = "--- Items Report ---";
pub const REPORT_FOOTER: &str = "----------------------";
pub const EMPTY_INVENTORY: &str = "Inventory is empty.";

/// Write the bordered report block, one `<item> -> <quantity>` line per entry.
pub fn write_report<W: Write>(stock: &BTreeMap<ItemName, i64>, out: &mut W) -> io::Result<()> {
    writeln!(out, "{REPORT_HEADER}")?;
    if stock.is_empty() {
        writeln!(out, "{EMPTY_INVENTORY}")?;
    }
    for (item, quantity) in stock {
        writeln!(out, "{item} -> {quantity}")?;
    }
    writeln!(out, "{REPORT_FOOTER}")
}

pub fn render_report(stock: &BTreeMap<ItemName, i64>) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(stock, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
