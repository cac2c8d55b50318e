//! Two-party settlement calculator
//!
//! # Algorithm
//!
//! 1. Sum all amounts
//! 2. Divide by the fixed participant count (two)
//! 3. Accumulate totals per payer in first-seen order
//! 4. Balance each payer against the equal share
//! 5. Compare the first two payers to derive the settling transfer
//!
//! # Example
//!
//! ```text
//! Expenses:
//!   Lior paid 100
//!   Tal paid   60
//!
//! Total 160, equal share 80
//!   Lior: paid 100, balance -20 (refund)
//!   Tal:  paid  60, balance +20 (owes)
//!
//! Transfer:
//!   Tal pays Lior 40
//! ```

use crate::{config::SplitConfig, types::*};
use ledger_core::{ExpenseRecord, PayerId};
use rust_decimal::Decimal;

/// Settlement calculator
#[derive(Debug, Clone)]
pub struct SettlementCalculator {
    /// Participants sharing the total
    participants: u32,
}

impl SettlementCalculator {
    /// Create new calculator
    pub fn new(config: &SplitConfig) -> Self {
        Self {
            participants: config.number_of_participants,
        }
    }

    /// Participants sharing the total
    pub fn participants(&self) -> u32 {
        self.participants
    }

    /// Derive the summary of `records`
    ///
    /// Pure: records are not modified and nothing is cached.
    pub fn compute(&self, records: &[ExpenseRecord]) -> SettlementSummary {
        if records.is_empty() {
            return SettlementSummary::empty();
        }

        // Step 1: Total spend
        let total: Decimal = records.iter().map(|r| r.amount).sum();

        // Step 2: Equal share
        let equal_share = self.equal_share(total);

        // Step 3: Totals by payer
        let totals_by_payer = self.totals_by_payer(records);

        // Step 4: Balances
        let balances = totals_by_payer
            .iter()
            .map(|t| PayerBalance {
                payer: t.payer.clone(),
                paid: t.paid,
                balance: equal_share - t.paid,
            })
            .collect();

        // Step 5: Settling transfer
        let settling_transfer = self.settling_transfer(&totals_by_payer);

        if totals_by_payer.len() > 2 {
            tracing::warn!(
                payers = totals_by_payer.len(),
                "More than two payers; settling transfer only covers the first two"
            );
        }

        SettlementSummary {
            total,
            equal_share,
            totals_by_payer,
            balances,
            settling_transfer,
        }
    }

    fn equal_share(&self, total: Decimal) -> Decimal {
        if self.participants == 0 {
            return Decimal::ZERO;
        }
        total / Decimal::from(self.participants)
    }

    /// Accumulate totals keeping first-seen payer order
    fn totals_by_payer(&self, records: &[ExpenseRecord]) -> Vec<PayerTotal> {
        let mut totals: Vec<PayerTotal> = Vec::new();

        for record in records {
            match totals.iter_mut().find(|t| t.payer == record.payer) {
                Some(entry) => entry.paid += record.amount,
                None => totals.push(PayerTotal {
                    payer: record.payer.clone(),
                    paid: record.amount,
                }),
            }
        }

        totals
    }

    /// Transfer between the first two payers
    ///
    /// The lower payer pays the difference. On a tie the second payer is
    /// named with a zero amount.
    fn settling_transfer(&self, totals: &[PayerTotal]) -> Option<SettlingTransfer> {
        let (first, second) = match totals {
            [first, second, ..] => (first, second),
            _ => return None,
        };

        let (from, to): (&PayerId, &PayerId) = if first.paid < second.paid {
            (&first.payer, &second.payer)
        } else {
            (&second.payer, &first.payer)
        };

        Some(SettlingTransfer {
            from: from.clone(),
            to: to.clone(),
            amount: (first.paid - second.paid).abs(),
        })
    }
}

impl Default for SettlementCalculator {
    fn default() -> Self {
        Self::new(&SplitConfig::default())
    }
}
