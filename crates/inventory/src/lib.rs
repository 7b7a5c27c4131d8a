//! Inventory domain module.
//!
//! An in-memory stock mapping (item name -> quantity) that owns its data,
//! reports every outcome through an injectable [`StockObserver`], and persists
//! as a whole-file JSON object.

pub mod activity;
pub mod item;
pub mod observer;
pub mod persistence;
pub mod report;
pub mod store;

pub use activity::{ActivityEntry, ActivityLog};
pub use item::ItemName;
pub use observer::{InMemoryObserver, Severity, StockObserver, TracingObserver};
pub use persistence::{DEFAULT_INVENTORY_FILE, PersistenceError, read_stock, write_stock};
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore, StockChange};
