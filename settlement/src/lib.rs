//! Settlement
//!
//! Derives who owes whom from a two-party expense ledger.
//!
//! # Architecture
//!
//! 1. **Collection**: expenses are appended to the session [`ledger_core::Ledger`]
//! 2. **Calculation**: [`SettlementCalculator`] sums, splits in two and balances each payer
//! 3. **Transfer**: the lower of the first two payers pays the difference
//! 4. **Reporting**: [`SummaryReport`] renders the result for the participants
//!
//! The summary is recomputed from the records on every request; nothing is
//! cached or persisted.
//!
//! # Example
//!
//! ```
//! use ledger_core::ExpenseForm;
//! use settlement::{Config, ExpenseSession};
//!
//! fn main() -> settlement::Result<()> {
//!     let mut session = ExpenseSession::new(Config::default())?;
//!     session.add_expense(&ExpenseForm::new("2024-01-01", "Groceries", "Ido", "Lior", "100"));
//!     session.add_expense(&ExpenseForm::new("2024-01-02", "Rent", "Ben", "Tal", "60"));
//!
//!     let summary = session.get_summary();
//!     if let Some(transfer) = summary.displayed_transfer() {
//!         println!("{} pays {} {}", transfer.from, transfer.to, transfer.amount);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod types;
pub mod calculator;
pub mod report;
pub mod error;
pub mod config;
pub mod engine;

// Re-exports
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use calculator::SettlementCalculator;
pub use report::SummaryReport;
pub use engine::ExpenseSession;
