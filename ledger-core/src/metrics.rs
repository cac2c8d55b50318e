//! Metrics collection for observability
//!
//! Prometheus counters for ledger activity, kept on a per-ledger registry so
//! several ledgers can live in one process.
//!
//! # Metrics
//!
//! - `ledger_expenses_accepted_total` - Expenses appended to the ledger
//! - `ledger_expenses_rejected_total` - Forms rejected by validation
//! - `ledger_attachments_total` - Attachment references added

use prometheus::{Encoder, IntCounter, Registry, TextEncoder};
use std::sync::Arc;

/// Metrics collector
#[derive(Clone)]
pub struct Metrics {
    /// Expenses accepted
    pub expenses_accepted: IntCounter,

    /// Forms rejected
    pub expenses_rejected: IntCounter,

    /// Attachment references added
    pub attachments_total: IntCounter,

    /// Prometheus registry
    pub registry: Arc<Registry>,
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("expenses_accepted", &self.expenses_accepted.get())
            .field("expenses_rejected", &self.expenses_rejected.get())
            .field("attachments_total", &self.attachments_total.get())
            .finish()
    }
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> prometheus::Result<Self> {
        let registry = Arc::new(Registry::new());

        let expenses_accepted = IntCounter::new(
            "ledger_expenses_accepted_total",
            "Expenses appended to the ledger",
        )?;
        registry.register(Box::new(expenses_accepted.clone()))?;

        let expenses_rejected = IntCounter::new(
            "ledger_expenses_rejected_total",
            "Expense forms rejected by validation",
        )?;
        registry.register(Box::new(expenses_rejected.clone()))?;

        let attachments_total = IntCounter::new(
            "ledger_attachments_total",
            "Attachment references added",
        )?;
        registry.register(Box::new(attachments_total.clone()))?;

        Ok(Self {
            expenses_accepted,
            expenses_rejected,
            attachments_total,
            registry,
        })
    }

    /// Record an accepted expense
    pub fn record_accepted(&self) {
        self.expenses_accepted.inc();
    }

    /// Record a rejected form
    pub fn record_rejected(&self) {
        self.expenses_rejected.inc();
    }

    /// Record added attachments
    pub fn record_attachments(&self, count: usize) {
        self.attachments_total.inc_by(count as u64);
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> crate::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| crate::Error::Other(format!("Metrics output is not UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        metrics.record_accepted();
        metrics.record_attachments(3);

        assert_eq!(metrics.expenses_accepted.get(), 1);
        assert_eq!(metrics.expenses_rejected.get(), 0);
        assert_eq!(metrics.attachments_total.get(), 3);
    }

    #[test]
    fn test_independent_registries() {
        let first = Metrics::new().unwrap();
        let second = Metrics::new().unwrap();
        first.record_rejected();

        assert_eq!(first.expenses_rejected.get(), 1);
        assert_eq!(second.expenses_rejected.get(), 0);
    }

    #[test]
    fn test_render() {
        let metrics = Metrics::new().unwrap();
        metrics.record_accepted();

        let text = metrics.render().unwrap();
        assert!(text.contains("ledger_expenses_accepted_total 1"));
        assert!(text.contains("ledger_attachments_total 0"));
    }
}
