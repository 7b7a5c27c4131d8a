//! Diagnostic stream for inventory operations.
//!
//! The store never decides where its diagnostics go. It holds a
//! [`StockObserver`] chosen by the caller at construction time; production code
//! uses [`TracingObserver`], tests use [`InMemoryObserver`].

use std::sync::{Arc, Mutex};

use stockroom_core::DomainError;

/// Severity of a diagnostic message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&DomainError> for Severity {
    fn from(err: &DomainError) -> Self {
        if err.is_invariant() {
            Severity::Error
        } else {
            Severity::Warning
        }
    }
}

/// Receiver of leveled diagnostic messages.
pub trait StockObserver {
    fn notify(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.notify(Severity::Info, message);
    }

    fn warn(&self, message: &str) {
        self.notify(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }
}

impl<O> StockObserver for Arc<O>
where
    O: StockObserver + ?Sized,
{
    fn notify(&self, severity: Severity, message: &str) {
        (**self).notify(severity, message)
    }
}

impl<O> StockObserver for &O
where
    O: StockObserver + ?Sized,
{
    fn notify(&self, severity: Severity, message: &str) {
        (**self).notify(severity, message)
    }
}

/// Forwards diagnostics to the `tracing` subscriber installed by the process.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingObserver;

impl StockObserver for TracingObserver {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!(target: "stockroom::inventory", "{message}"),
            Severity::Warning => tracing::warn!(target: "stockroom::inventory", "{message}"),
            Severity::Error => tracing::error!(target: "stockroom::inventory", "{message}"),
        }
    }
}

/// In-memory observer for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryObserver {
    records: Mutex<Vec<(Severity, String)>>,
}

impl InMemoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, oldest first.
    pub fn records(&self) -> Vec<(Severity, String)> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(_) => vec![],
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.records()
            .iter()
            .filter(|(s, _)| *s == severity)
            .count()
    }

    pub fn last(&self) -> Option<(Severity, String)> {
        self.records().pop()
    }
}

impl StockObserver for InMemoryObserver {
    fn notify(&self, severity: Severity, message: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push((severity, message.to_string()));
        }
    }
}
