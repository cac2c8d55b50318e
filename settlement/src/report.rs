//! Text rendering of the ledger and its settlement summary
//!
//! Amounts are rounded for display only; the summary keeps exact values.

use crate::{config::ReportConfig, types::*};
use ledger_core::{Attachment, ExpenseRecord};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write;

/// Report renderer
#[derive(Debug, Clone)]
pub struct SummaryReport {
    config: ReportConfig,
}

impl SummaryReport {
    /// Create new renderer
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Format an amount with the configured scale and currency label
    pub fn format_amount(&self, amount: Decimal) -> String {
        let scale = self.config.display_scale;
        let rounded = amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
        format!(
            "{:.prec$} {}",
            rounded,
            self.config.currency_label,
            prec = scale as usize
        )
    }

    /// One line per expense, in ledger order
    pub fn render_expenses(&self, records: &[ExpenseRecord]) -> String {
        let mut out = String::from("Expenses:\n");
        if records.is_empty() {
            out.push_str("  (none)\n");
            return out;
        }
        for record in records {
            let _ = writeln!(
                out,
                "  {} | {} | for {} | paid by {} | {}",
                record.date,
                record.item,
                record.beneficiary,
                record.payer,
                self.format_amount(record.amount)
            );
        }
        out
    }

    /// Totals, per-payer balances and the settling transfer
    pub fn render_summary(&self, summary: &SettlementSummary) -> String {
        let mut out = String::from("Summary:\n");
        let _ = writeln!(
            out,
            "  Total: {} | Share: {}",
            self.format_amount(summary.total),
            self.format_amount(summary.equal_share)
        );

        for balance in &summary.balances {
            let position = match balance.position() {
                Position::Owes(amount) => format!("owes {}", self.format_amount(amount)),
                Position::Refund(amount) => format!("refund {}", self.format_amount(amount)),
                Position::Even => "even".to_string(),
            };
            let _ = writeln!(
                out,
                "  {}: paid {} | share {} | {}",
                balance.payer,
                self.format_amount(balance.paid),
                self.format_amount(summary.equal_share),
                position
            );
        }

        if let Some(transfer) = summary.displayed_transfer() {
            let _ = writeln!(
                out,
                "  {} pays {} {} to balance",
                transfer.from,
                transfer.to,
                self.format_amount(transfer.amount)
            );
        }

        out
    }

    /// Attachment names, in the order they were added
    pub fn render_attachments(&self, attachments: &[Attachment]) -> String {
        let mut out = String::from("Attachments:\n");
        if attachments.is_empty() {
            out.push_str("  (none)\n");
        }
        for attachment in attachments {
            let _ = writeln!(out, "  attachment: {}", attachment.name);
        }
        out
    }
}

impl Default for SummaryReport {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}
