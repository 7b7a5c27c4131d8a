//! The inventory store: an owned item -> quantity mapping.
//!
//! Every public operation is total. Failures are reported through the store's
//! [`StockObserver`] and leave the mapping untouched; the `try_*` variants hand
//! the same failures back as `Result`s for callers that want them.
//!
//! Invariant: no entry ever holds a quantity `<= 0`. Additions and removals both
//! go through one signed-delta path, and an entry that reaches zero or below is
//! dropped.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;

use serde_json::Value as JsonValue;

use stockroom_core::{DomainError, DomainResult};

use crate::activity::ActivityLog;
use crate::item::ItemName;
use crate::observer::{Severity, StockObserver, TracingObserver};
use crate::persistence::{self, PersistenceError};
use crate::report;

/// Threshold used by callers that do not pick their own.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Outcome of a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockChange {
    /// The entry now holds `quantity` (always positive).
    Set { item: ItemName, quantity: i64 },
    /// The entry reached zero or below and is no longer stored.
    /// `previous` is 0 when the item was never present.
    Removed { item: ItemName, previous: i64 },
}

impl StockChange {
    /// Quantity held after the change.
    pub fn quantity(&self) -> i64 {
        match self {
            StockChange::Set { quantity, .. } => *quantity,
            StockChange::Removed { .. } => 0,
        }
    }
}

#[derive(Debug)]
pub struct InventoryStore<O = TracingObserver>
where
    O: StockObserver,
{
    stock: BTreeMap<ItemName, i64>,
    observer: O,
}

impl Default for InventoryStore<TracingObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore<TracingObserver> {
    /// Empty store reporting through `tracing`.
    pub fn new() -> Self {
        Self::with_observer(TracingObserver)
    }
}

impl<O> InventoryStore<O>
where
    O: StockObserver,
{
    pub fn with_observer(observer: O) -> Self {
        Self {
            stock: BTreeMap::new(),
            observer,
        }
    }

    /// Build a store from existing entries.
    ///
    /// Entries with an empty name or a non-positive quantity are skipped with a
    /// warning. Repeated names are summed.
    pub fn with_stock<I, K>(entries: I, observer: O) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        let mut store = Self::with_observer(observer);
        for (name, quantity) in entries {
            let name = name.into();
            match Self::validate_entry(&name, quantity) {
                Ok(item) => {
                    if let Err(err) = store.apply_delta(item, quantity) {
                        store.report_failure(&format!("Skipping entry '{name}'"), &err);
                    }
                }
                Err(err) => store.report_failure(&format!("Skipping entry '{name}'"), &err),
            }
        }
        store
    }

    /// Observer receiving this store's diagnostics.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Read-only view of the mapping.
    pub fn quantities(&self) -> &BTreeMap<ItemName, i64> {
        &self.stock
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    // ---------------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------------

    /// Add `qty` units of `item`, appending to `logs` when one is supplied.
    pub fn add(&mut self, item: &str, qty: i64, logs: Option<&mut ActivityLog>) {
        if let Err(err) = self.try_add(item, qty, logs) {
            self.report_failure("Add rejected", &err);
        }
    }

    pub fn try_add(
        &mut self,
        item: &str,
        qty: i64,
        logs: Option<&mut ActivityLog>,
    ) -> DomainResult<StockChange> {
        let name = ItemName::parse(item)
            .map_err(|_| DomainError::validation("attempted to add an item with no name"))?;

        let change = self.apply_delta(name, qty)?;

        let message = format!("Added {qty} of {item}");
        if let Some(logs) = logs {
            logs.record(message.as_str());
        }
        self.observer.info(&message);
        if matches!(change, StockChange::Removed { previous, .. } if previous > 0) {
            self.observer
                .info(&format!("Removed '{item}' from stock as quantity reached zero."));
        }

        Ok(change)
    }

    /// Dynamically typed [`add`](Self::add): `item` must be a JSON string and
    /// `qty` a JSON integer, otherwise nothing changes.
    pub fn add_value(&mut self, item: &JsonValue, qty: &JsonValue, logs: Option<&mut ActivityLog>) {
        match Self::typed_args(item, qty) {
            Ok((item, qty)) => self.add(item, qty, logs),
            Err(err) => self.report_failure("Add rejected", &err),
        }
    }

    /// Take `qty` units of `item` out of stock. The entry is dropped when it
    /// reaches zero or below.
    pub fn remove(&mut self, item: &str, qty: i64) {
        if let Err(err) = self.try_remove(item, qty) {
            self.report_failure("Remove rejected", &err);
        }
    }

    pub fn try_remove(&mut self, item: &str, qty: i64) -> DomainResult<StockChange> {
        if !self.stock.contains_key(item) {
            return Err(DomainError::not_found(format!(
                "attempted to remove '{item}', which is not in stock"
            )));
        }
        let name = ItemName::parse(item)?;

        let delta = qty
            .checked_neg()
            .ok_or_else(|| DomainError::validation(format!("quantity {qty} is out of range")))?;
        let change = self.apply_delta(name, delta)?;

        match &change {
            StockChange::Removed { .. } => self
                .observer
                .info(&format!("Removed '{item}' from stock as quantity reached zero.")),
            StockChange::Set { .. } => self.observer.info(&format!("Removed {qty} of '{item}'.")),
        }

        Ok(change)
    }

    /// Dynamically typed [`remove`](Self::remove).
    pub fn remove_value(&mut self, item: &JsonValue, qty: &JsonValue) {
        match Self::typed_args(item, qty) {
            Ok((item, qty)) => self.remove(item, qty),
            Err(err) => self.report_failure("Remove rejected", &err),
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Current quantity of `item`; 0 when absent.
    pub fn get_quantity(&self, item: &str) -> i64 {
        self.stock.get(item).copied().unwrap_or(0)
    }

    /// Names of all items whose quantity is at or below `threshold`.
    pub fn low_stock(&self, threshold: i64) -> Vec<String> {
        self.stock
            .iter()
            .filter(|(_, quantity)| **quantity <= threshold)
            .map(|(item, _)| item.to_string())
            .collect()
    }

    /// Print the report block to stdout.
    pub fn report(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(err) = self.print_report(&mut out) {
            self.observer
                .error(&format!("Could not print inventory report: {err}"));
        }
    }

    fn print_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        self.write_report(out)?;
        writeln!(out)
    }

    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        report::write_report(&self.stock, out)
    }

    pub fn render_report(&self) -> String {
        report::render_report(&self.stock)
    }

    // ---------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------

    /// Load a store from `path`.
    ///
    /// A missing file (warning) or unreadable/undecodable content (error) yields
    /// an empty store.
    pub fn load(path: impl AsRef<Path>, observer: O) -> Self {
        let path = path.as_ref();
        let mut store = Self::with_observer(observer);
        match store.try_reload(path) {
            Ok(_) => {}
            Err(PersistenceError::NotFound(_)) => store.observer.warn(&format!(
                "Inventory file {} not found. Starting with empty inventory.",
                path.display()
            )),
            Err(PersistenceError::Decode { .. }) => store.observer.error(&format!(
                "Could not decode JSON from {}. Starting with empty inventory.",
                path.display()
            )),
            Err(err) => store
                .observer
                .error(&format!("{err}. Starting with empty inventory.")),
        }
        store
    }

    /// Replace the mapping with the contents of `path`, returning the number of
    /// entries kept. On error the current mapping is left as it was.
    ///
    /// Entries that are not positive integers under a non-empty name are
    /// skipped with a warning.
    pub fn try_reload(&mut self, path: impl AsRef<Path>) -> Result<usize, PersistenceError> {
        let path = path.as_ref();
        let raw = persistence::read_stock(path)?;

        let mut stock = BTreeMap::new();
        for (name, value) in raw {
            let entry = value
                .as_i64()
                .ok_or_else(|| {
                    DomainError::invalid_type(format!("quantity must be an integer, found {value}"))
                })
                .and_then(|quantity| Self::validate_entry(&name, quantity).map(|item| (item, quantity)));
            match entry {
                Ok((item, quantity)) => {
                    stock.insert(item, quantity);
                }
                Err(err) => self.report_failure(&format!("Skipping entry '{name}'"), &err),
            }
        }

        self.stock = stock;
        self.observer
            .info(&format!("Stock data loaded from {}", path.display()));
        Ok(self.stock.len())
    }

    /// Overwrite `path` with the current mapping. Failures are reported and the
    /// mapping stays in memory only.
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Err(err) = self.try_save(path) {
            self.observer
                .error(&format!("Could not write to file {}: {err}", path.display()));
        }
    }

    pub fn try_save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        persistence::write_stock(&self.stock, path)?;
        self.observer
            .info(&format!("Stock data saved to {}", path.display()));
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    fn apply_delta(&mut self, item: ItemName, delta: i64) -> DomainResult<StockChange> {
        let previous = self.get_quantity(item.as_str());
        let quantity = previous.checked_add(delta).ok_or_else(|| {
            DomainError::invariant(format!(
                "adjusting '{item}' by {delta} overflows its quantity ({previous})"
            ))
        })?;

        if quantity <= 0 {
            self.stock.remove(item.as_str());
            Ok(StockChange::Removed { item, previous })
        } else {
            self.stock.insert(item.clone(), quantity);
            Ok(StockChange::Set { item, quantity })
        }
    }

    fn validate_entry(name: &str, quantity: i64) -> DomainResult<ItemName> {
        let item = ItemName::parse(name)?;
        if quantity <= 0 {
            return Err(DomainError::validation(format!(
                "quantity must be positive, found {quantity}"
            )));
        }
        Ok(item)
    }

    fn typed_args<'a>(item: &'a JsonValue, qty: &JsonValue) -> DomainResult<(&'a str, i64)> {
        match (item.as_str(), qty.as_i64()) {
            (Some(item), Some(qty)) => Ok((item, qty)),
            _ => Err(DomainError::invalid_type(format!(
                "item must be text and qty must be an integer (got item={item}, qty={qty})"
            ))),
        }
    }

    fn report_failure(&self, context: &str, err: &DomainError) {
        self.observer
            .notify(Severity::from(err), &format!("{context}: {err}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::InMemoryObserver;
    use proptest::prelude::*;
    use serde_json::json;

    fn non_text_value() -> impl Strategy<Value = JsonValue> {
        prop_oneof![
            Just(JsonValue::Null),
            any::<bool>().prop_map(JsonValue::Bool),
            any::<i64>().prop_map(JsonValue::from),
            prop::collection::vec(any::<i32>(), 0..4).prop_map(|v| json!(v)),
            "[a-z]{1,8}".prop_map(|k| JsonValue::Object(std::iter::once((k, JsonValue::from(1))).collect())),
        ]
    }

    fn non_integer_value() -> impl Strategy<Value = JsonValue> {
        prop_oneof![
            Just(JsonValue::Null),
            any::<bool>().prop_map(JsonValue::Bool),
            "[a-z0-9]{0,8}".prop_map(JsonValue::String),
            (-1.0e6f64..1.0e6)
                .prop_filter("fractional", |f| f.fract() != 0.0)
                .prop_map(|f| json!(f)),
            Just(json!(u64::MAX)),
        ]
    }

    fn store(observer: &InMemoryObserver) -> InventoryStore<&InMemoryObserver> {
        InventoryStore::with_observer(observer)
    }

    fn snapshot<O: StockObserver>(store: &InventoryStore<O>) -> Vec<(String, i64)> {
        store
            .quantities()
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn add_accumulates_and_logs_activity() {
        let observer = InMemoryObserver::new();
        let mut store = store(&observer);
        let mut logs = ActivityLog::new();

        store.add("apple", 10, Some(&mut logs));
        store.add("apple", 5, Some(&mut logs));
        store.add("pear", 1, None);

        assert_eq!(store.get_quantity("apple"), 15);
        assert_eq!(store.get_quantity("pear"), 1);
        assert_eq!(logs.messages(), vec!["Added 10 of apple", "Added 5 of apple"]);
        assert_eq!(observer.count(Severity::Info), 3);
    }

    #[test]
    fn add_rejects_empty_name_without_mutation() {
        let observer = InMemoryObserver::new();
        let mut store = store(&observer);
        let mut logs = ActivityLog::new();

        store.add("", 3, Some(&mut logs));

        assert!(store.is_empty());
        assert!(logs.is_empty());
        let (severity, message) = observer.last().unwrap();
        assert_eq!(severity, Severity::Warning);
        assert!(message.contains("no name"), "unexpected message: {message}");
    }

    #[test]
    fn add_value_rejects_wrong_types() {
        let observer = InMemoryObserver::new();
        let mut store = store(&observer);
        store.add("apple", 2, None);

        store.add_value(&json!(123), &json!("ten"), None);
        store.add_value(&json!("apple"), &json!(1.5), None);
        store.add_value(&json!(null), &json!(1), None);

        assert_eq!(snapshot(&store), vec![("apple".to_string(), 2)]);
        assert_eq!(observer.count(Severity::Warning), 3);
    }

    #[test]
    fn add_value_accepts_text_and_integer() {
        let observer = InMemoryObserver::new();
        let mut store = store(&observer);

        store.add_value(&json!("kiwi"), &json!(4), None);

        assert_eq!(store.get_quantity("kiwi"), 4);
    }

    #[test]
    fn negative_add_drops_entry_at_zero_floor() {
        let observer = InMemoryObserver::new();
        let mut store = store(&observer);
        store.add("apple", 3, None);

        let change = store.try_add("apple", -2, None).unwrap();
        assert_eq!(change.quantity(), 1);

        let change = store.try_add("apple", -5, None).unwrap();
        assert_eq!(
            change,
            StockChange::Removed {
                item: ItemName::parse("apple").unwrap(),
                previous: 1
            }
        );
        assert_eq!(store.get_quantity("apple"), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn non_positive_add_on_absent_item_stores_nothing() {
        let observer = InMemoryObserver::new();
        let mut store = store(&observer);

        store.add("ghost", 0, None);
        store.add("ghost", -4, None);

        assert!(store.is_empty());
    }

    #[test]
    fn remove_reduces_or_deletes() {
        let observer = InMemoryObserver::new();
        let mut store = store(&observer);
        store.add("apple", 10, None);
        store.add("banana", 2, None);

        store.remove("apple", 3);
        store.remove("banana", 5);

        assert_eq!(store.get_quantity("apple"), 7);
        assert_eq!(store.get_quantity("banana"), 0);
        assert!(!store.quantities().contains_key("banana"));

        let (severity, message) = observer.last().unwrap();
        assert_eq!(severity, Severity::Info);
        assert_eq!(message, "Removed 'banana' from stock as quantity reached zero.");
    }

    #[test]
    fn remove_exact_quantity_deletes_entry() {
        let observer = InMemoryObserver::new();
        let mut store = store(&observer);
        store.add("apple", 4, None);

        let change = store.try_remove("apple", 4).unwrap();

        assert!(matches!(change, StockChange::Removed { previous: 4, .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_absent_item_is_a_warning_no_op() {
        let observer = InMemoryObserver::new();
        let mut store = store(&observer);
        store.add("apple", 1, None);

        store.remove("orange", 1);

        assert_eq!(snapshot(&store), vec![("apple".to_string(), 1)]);
        let (severity, message) = observer.last().unwrap();
        assert_eq!(severity, Severity::Warning);
        assert!(message.contains("'orange'"));

        let err = store.try_remove("orange", 1).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn remove_value_rejects_wrong_types() {
        let observer = InMemoryObserver::new();
        let mut store = store(&observer);
        store.add("apple", 5, None);

        store.remove_value(&json!("apple"), &json!("three"));

        assert_eq!(store.get_quantity("apple"), 5);
        assert_eq!(observer.last().unwrap().0, Severity::Warning);
    }

    #[test]
    fn overflow_is_rejected_as_error() {
        let observer = InMemoryObserver::new();
        let mut store = store(&observer);
        store.add("bolts", i64::MAX, None);

        store.add("bolts", 1, None);
        store.remove("bolts", -1);

        assert_eq!(store.get_quantity("bolts"), i64::MAX);
        assert_eq!(observer.count(Severity::Error), 2);
    }

    #[test]
    fn with_stock_skips_invalid_entries() {
        let observer = InMemoryObserver::new();
        let store = InventoryStore::with_stock(
            vec![("apple", 3), ("", 4), ("zero", 0), ("debt", -2)],
            &observer,
        );

        assert_eq!(snapshot(&store), vec![("apple".to_string(), 3)]);
        assert_eq!(observer.count(Severity::Warning), 3);
    }

    #[test]
    fn get_quantity_of_absent_item_is_zero() {
        let store = InventoryStore::new();
        assert_eq!(store.get_quantity("anything"), 0);
    }

    #[test]
    fn low_stock_uses_inclusive_threshold() {
        let observer = InMemoryObserver::new();
        let store = InventoryStore::with_stock(
            vec![("a", 1), ("b", 5), ("c", 6), ("d", 100)],
            &observer,
        );

        assert_eq!(store.low_stock(DEFAULT_LOW_STOCK_THRESHOLD), vec!["a", "b"]);
        assert!(store.low_stock(0).is_empty());
    }

    #[test]
    fn render_report_reflects_store() {
        let observer = InMemoryObserver::new();
        let mut store = store(&observer);
        assert!(store.render_report().contains("Inventory is empty."));

        store.add("apple", 7, None);
        assert!(store.render_report().contains("apple -> 7\n"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let observer = InMemoryObserver::new();

        let mut store = store(&observer);
        store.add("apple", 7, None);
        store.add("banana", 20, None);
        store.save(&path);

        let loaded = InventoryStore::load(&path, &observer);
        assert_eq!(loaded.quantities(), store.quantities());
        assert_eq!(observer.count(Severity::Error), 0);
    }

    #[test]
    fn load_missing_file_warns_and_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let observer = InMemoryObserver::new();

        let store = InventoryStore::load(dir.path().join("absent.json"), &observer);

        assert!(store.is_empty());
        assert_eq!(observer.records().len(), 1);
        assert_eq!(observer.last().unwrap().0, Severity::Warning);
    }

    #[test]
    fn load_corrupt_file_errors_and_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, "{\"apple\": 3,").unwrap();
        let observer = InMemoryObserver::new();

        let store = InventoryStore::load(&path, &observer);

        assert!(store.is_empty());
        let (severity, message) = observer.last().unwrap();
        assert_eq!(severity, Severity::Error);
        assert!(message.starts_with("Could not decode JSON"));
    }

    #[test]
    fn load_skips_malformed_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(
            &path,
            r#"{"apple": 3, "": 2, "pear": "many", "fig": 1.5, "plum": 0, "lime": -1}"#,
        )
        .unwrap();
        let observer = InMemoryObserver::new();

        let store = InventoryStore::load(&path, &observer);

        assert_eq!(snapshot(&store), vec![("apple".to_string(), 3)]);
        assert_eq!(observer.count(Severity::Warning), 5);
        assert_eq!(observer.count(Severity::Info), 1);
    }

    #[test]
    fn failed_reload_keeps_current_stock() {
        let dir = tempfile::tempdir().unwrap();
        let observer = InMemoryObserver::new();
        let mut store = store(&observer);
        store.add("apple", 2, None);

        let err = store.try_reload(dir.path().join("absent.json")).unwrap_err();

        assert!(matches!(err, PersistenceError::NotFound(_)));
        assert_eq!(store.get_quantity("apple"), 2);
    }

    #[test]
    fn save_failure_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("inventory.json");
        let observer = InMemoryObserver::new();
        let mut store = store(&observer);
        store.add("apple", 2, None);

        store.save(&path);

        assert_eq!(store.get_quantity("apple"), 2);
        let (severity, message) = observer.last().unwrap();
        assert_eq!(severity, Severity::Error);
        assert!(message.starts_with("Could not write to file"));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: adding a positive quantity raises the stored value by exactly that amount.
        #[test]
        fn add_increments_by_qty(
            item in "[a-z]{1,12}",
            initial in 0i64..1_000_000,
            qty in 1i64..1_000_000,
        ) {
            let observer = InMemoryObserver::new();
            let mut store = InventoryStore::with_observer(&observer);
            store.add(&item, initial, None);
            let before = store.get_quantity(&item);

            store.add(&item, qty, None);

            prop_assert_eq!(store.get_quantity(&item), before + qty);
        }

        /// Property: add_value with a non-text item or a non-integer qty changes nothing.
        #[test]
        fn add_value_with_wrong_types_leaves_stock_unchanged(
            (item, qty) in prop_oneof![
                (non_text_value(), any::<i64>().prop_map(JsonValue::from)),
                ("[a-z]{1,8}".prop_map(JsonValue::String), non_integer_value()),
                (non_text_value(), non_integer_value()),
            ],
        ) {
            let observer = InMemoryObserver::new();
            let mut store = InventoryStore::with_stock(vec![("apple", 3), ("pear", 9)], &observer);
            let before = snapshot(&store);
            let mut logs = ActivityLog::new();

            store.add_value(&item, &qty, Some(&mut logs));

            prop_assert_eq!(snapshot(&store), before);
            prop_assert!(logs.is_empty());
            prop_assert_eq!(observer.last().map(|(s, _)| s), Some(Severity::Warning));
        }

        /// Property: no entry is ever left at or below zero.
        #[test]
        fn quantities_stay_positive(
            ops in prop::collection::vec(("[a-c]", -50i64..50, any::<bool>()), 1..40)
        ) {
            let observer = InMemoryObserver::new();
            let mut store = InventoryStore::with_observer(&observer);

            for (item, qty, is_add) in ops {
                if is_add {
                    store.add(&item, qty, None);
                } else {
                    store.remove(&item, qty);
                }
            }

            prop_assert!(store.quantities().values().all(|q| *q > 0));
        }

        /// Property: low_stock returns exactly the items at or below the threshold.
        #[test]
        fn low_stock_is_exact(
            entries in prop::collection::btree_map("[a-z]{1,8}", 1i64..100, 0..20),
            threshold in -5i64..105,
        ) {
            let observer = InMemoryObserver::new();
            let store = InventoryStore::with_stock(entries.clone(), &observer);

            let expected: Vec<String> = entries
                .iter()
                .filter(|(_, q)| **q <= threshold)
                .map(|(k, _)| k.clone())
                .collect();

            prop_assert_eq!(store.low_stock(threshold), expected);
        }

        /// Property: save followed by load reproduces the mapping.
        #[test]
        fn save_load_round_trip(
            entries in prop::collection::btree_map("\\PC{1,16}", 1i64..i64::MAX, 0..16),
        ) {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("inventory.json");
            let observer = InMemoryObserver::new();
            let store = InventoryStore::with_stock(entries, &observer);

            store.try_save(&path).unwrap();
            let loaded = InventoryStore::load(&path, &observer);

            prop_assert_eq!(loaded.quantities(), store.quantities());
        }
    }
}
