//! Fixed demonstration sequence: load, mutate, query, report, save.

use std::io::{self, Write};

use serde_json::json;

use stockroom_inventory::{ActivityLog, InventoryStore, StockObserver};

use crate::config::Config;

/// Run the demo against the file named in `config`, writing query results to
/// `out`. Returns the final store and the activity recorded along the way.
///
/// Console failures are reported through the observer; the save always runs.
pub fn run<O, W>(config: &Config, observer: O, out: &mut W) -> (InventoryStore<O>, ActivityLog)
where
    O: StockObserver,
    W: Write,
{
    let mut store = InventoryStore::load(&config.inventory_file, observer);
    let mut logs = ActivityLog::new();

    store.add("apple", 10, Some(&mut logs));
    store.add("banana", 15, Some(&mut logs));
    store.add("banana", 5, Some(&mut logs));

    // Rejected: wrong types for both arguments.
    store.add_value(&json!(123), &json!("ten"), Some(&mut logs));

    store.remove("apple", 3);
    store.remove("orange", 1);

    if let Err(err) = print_summary(&store, config.low_stock_threshold, out) {
        store
            .observer()
            .error(&format!("Could not print inventory summary: {err}"));
    }

    store.save(&config.inventory_file);

    (store, logs)
}

fn print_summary<O, W>(store: &InventoryStore<O>, threshold: i64, out: &mut W) -> io::Result<()>
where
    O: StockObserver,
    W: Write,
{
    writeln!(out, "Apple stock: {}", store.get_quantity("apple"))?;
    writeln!(out, "Orange stock: {}", store.get_quantity("orange"))?;
    writeln!(out, "Low items (<={threshold}): {:?}", store.low_stock(threshold))?;

    writeln!(out)?;
    store.write_report(out)?;
    writeln!(out)
}
