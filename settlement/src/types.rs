//! Core types for settlement

use ledger_core::PayerId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total paid by one payer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerTotal {
    /// Payer
    pub payer: PayerId,

    /// Sum of amounts this payer covered
    pub paid: Decimal,
}

/// Net position of one payer against the equal share
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerBalance {
    /// Payer
    pub payer: PayerId,

    /// Sum of amounts this payer covered
    pub paid: Decimal,

    /// `equal_share - paid`: positive still owes, negative is owed a refund
    pub balance: Decimal,
}

impl PayerBalance {
    /// Position relative to the equal share
    pub fn position(&self) -> Position {
        if self.balance > Decimal::ZERO {
            Position::Owes(self.balance)
        } else if self.balance < Decimal::ZERO {
            Position::Refund(self.balance.abs())
        } else {
            Position::Even
        }
    }
}

/// Direction of a payer balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// Still has to pay this much to reach the equal share
    Owes(Decimal),
    /// Paid this much above the equal share
    Refund(Decimal),
    /// Paid exactly the equal share
    Even,
}

/// Single payment that equalizes the first two payers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlingTransfer {
    /// Lower-paying payer
    pub from: PayerId,

    /// Higher-paying payer
    pub to: PayerId,

    /// `|paid(first) - paid(second)|`
    pub amount: Decimal,
}

impl SettlingTransfer {
    /// Whether both payers already paid the same
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

/// Derived view of the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementSummary {
    /// Sum of all amounts
    pub total: Decimal,

    /// `total / number_of_participants`
    pub equal_share: Decimal,

    /// Totals per payer, first-seen order
    pub totals_by_payer: Vec<PayerTotal>,

    /// Balances per payer, first-seen order
    pub balances: Vec<PayerBalance>,

    /// Transfer between the first two payers, when there are at least two
    pub settling_transfer: Option<SettlingTransfer>,
}

impl SettlementSummary {
    /// Summary of an empty ledger
    pub fn empty() -> Self {
        Self {
            total: Decimal::ZERO,
            equal_share: Decimal::ZERO,
            totals_by_payer: Vec::new(),
            balances: Vec::new(),
            settling_transfer: None,
        }
    }

    /// Number of distinct payers
    pub fn payer_count(&self) -> usize {
        self.totals_by_payer.len()
    }

    /// Amount paid by `payer`, zero if they paid nothing
    pub fn paid_by(&self, payer: &PayerId) -> Decimal {
        self.totals_by_payer
            .iter()
            .find(|t| &t.payer == payer)
            .map(|t| t.paid)
            .unwrap_or(Decimal::ZERO)
    }

    /// Balance entry for `payer`
    pub fn balance_of(&self, payer: &PayerId) -> Option<&PayerBalance> {
        self.balances.iter().find(|b| &b.payer == payer)
    }

    /// Transfer to show to the participants
    ///
    /// Only returned when exactly two payers exist. With more payers the
    /// transfer only covers the first two and does not settle the group.
    pub fn displayed_transfer(&self) -> Option<&SettlingTransfer> {
        if self.payer_count() == 2 {
            self.settling_transfer.as_ref()
        } else {
            None
        }
    }
}

impl Default for SettlementSummary {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance(amount: i64) -> PayerBalance {
        PayerBalance {
            payer: PayerId::new("Lior"),
            paid: Decimal::ZERO,
            balance: Decimal::from(amount),
        }
    }

    #[test]
    fn test_position() {
        assert_eq!(balance(20).position(), Position::Owes(Decimal::from(20)));
        assert_eq!(balance(-20).position(), Position::Refund(Decimal::from(20)));
        assert_eq!(balance(0).position(), Position::Even);
    }

    #[test]
    fn test_empty_summary() {
        let summary = SettlementSummary::empty();
        assert_eq!(summary.payer_count(), 0);
        assert_eq!(summary.paid_by(&PayerId::new("Tal")), Decimal::ZERO);
        assert!(summary.displayed_transfer().is_none());
    }
}
