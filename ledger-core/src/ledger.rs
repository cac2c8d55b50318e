//! In-memory expense ledger
//!
//! Holds the records and pending attachments of one session.
//!
//! # Example
//!
//! ```
//! use ledger_core::{Config, ExpenseForm, Ledger};
//!
//! let mut ledger = Ledger::new(Config::default());
//! let form = ExpenseForm::new("2024-01-01", "Groceries", "Ido", "Lior", "100");
//! assert!(ledger.add_expense(&form).is_some());
//!
//! // Incomplete forms are ignored
//! let empty = ExpenseForm::default();
//! assert!(ledger.add_expense(&empty).is_none());
//! assert_eq!(ledger.len(), 1);
//! ```

use crate::{
    types::{Attachment, ExpenseForm, ExpenseRecord},
    Config, Metrics,
};

/// Session ledger
#[derive(Debug)]
pub struct Ledger {
    /// Accepted records, in insertion order
    records: Vec<ExpenseRecord>,

    /// Attachment references, not tied to any record
    pending_attachments: Vec<Attachment>,

    /// Metrics (optional)
    metrics: Option<Metrics>,

    /// Configuration
    config: Config,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new(config: Config) -> Self {
        Self {
            records: Vec::new(),
            pending_attachments: Vec::new(),
            metrics: None,
            config,
        }
    }

    /// Attach metrics collector
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Append an expense if the form is complete
    ///
    /// Returns the stored record, or `None` when the form was rejected. A
    /// rejected form leaves the ledger unchanged.
    pub fn add_expense(&mut self, form: &ExpenseForm) -> Option<&ExpenseRecord> {
        let record = match form.validate(&self.config.validation) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(reason = %e, "Expense form rejected");
                if let Some(ref metrics) = self.metrics {
                    metrics.record_rejected();
                }
                return None;
            }
        };

        tracing::info!(
            record_id = %record.record_id,
            payer = %record.payer,
            amount = %record.amount,
            "Expense recorded"
        );

        if let Some(ref metrics) = self.metrics {
            metrics.record_accepted();
        }

        self.records.push(record);
        self.records.last()
    }

    /// Append attachment references, unconditionally
    ///
    /// Returns how many were added.
    pub fn add_attachments<I>(&mut self, attachments: I) -> usize
    where
        I: IntoIterator<Item = Attachment>,
    {
        let before = self.pending_attachments.len();
        self.pending_attachments.extend(attachments);
        let added = self.pending_attachments.len() - before;

        if added > 0 {
            tracing::info!(added, total = self.pending_attachments.len(), "Attachments added");
        }
        if let Some(ref metrics) = self.metrics {
            metrics.record_attachments(added);
        }

        added
    }

    /// Records in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Attachment references in insertion order
    pub fn pending_attachments(&self) -> &[Attachment] {
        &self.pending_attachments
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records were added yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Metrics collector, if attached
    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
