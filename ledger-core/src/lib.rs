//! Halves Ledger Core
//!
//! In-memory, append-only ledger of shared expenses paid by one of two
//! participants.
//!
//! # Architecture
//!
//! - **Form validation**: raw form fields become an [`ExpenseRecord`] only when
//!   every field is present and the amount parses as an exact decimal within
//!   [`MAX_AMOUNT_UNITS`] and [`MAX_AMOUNT_SCALE`]
//! - **Append-only**: records are never edited, reordered or deleted
//! - **Session scoped**: nothing is persisted; the ledger lives as long as its owner
//!
//! # Invariants
//!
//! - Insertion order is display order
//! - A rejected form leaves the ledger unchanged
//! - Attachments are references by name only and are never read

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod types;
pub mod ledger;
pub mod error;
pub mod config;
pub mod metrics;

// Re-exports
pub use error::{Error, Result};
pub use types::{
    Attachment, ExpenseForm, ExpenseRecord, Field, PayerId, MAX_AMOUNT_SCALE, MAX_AMOUNT_UNITS,
};
pub use ledger::Ledger;
pub use config::Config;
pub use metrics::Metrics;
