//! Expense session
//!
//! Owns the ledger of one session and derives the settlement summary from it
//! on request.

use crate::{
    calculator::SettlementCalculator,
    config::Config,
    report::SummaryReport,
    types::SettlementSummary,
    Result,
};
use ledger_core::{Attachment, ExpenseForm, ExpenseRecord, Ledger, Metrics};

/// Expense session
#[derive(Debug)]
pub struct ExpenseSession {
    /// Session ledger
    ledger: Ledger,

    /// Settlement calculator
    calculator: SettlementCalculator,

    /// Report renderer
    report: SummaryReport,
}

impl ExpenseSession {
    /// Create a session with an empty ledger
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let calculator = SettlementCalculator::new(&config.split);
        let report = SummaryReport::new(config.report.clone());
        let ledger = Ledger::new(config.ledger);

        tracing::info!(
            participants = calculator.participants(),
            service = %config.service_name,
            "Expense session started"
        );

        Ok(Self {
            ledger,
            calculator,
            report,
        })
    }

    /// Create a session that records metrics
    pub fn with_metrics(config: Config) -> Result<Self> {
        let metrics = Metrics::new().map_err(ledger_core::Error::from)?;
        let mut session = Self::new(config)?;
        session.ledger = session.ledger.with_metrics(metrics);
        Ok(session)
    }

    /// Add an expense; incomplete forms are ignored
    pub fn add_expense(&mut self, form: &ExpenseForm) -> Option<&ExpenseRecord> {
        self.ledger.add_expense(form)
    }

    /// Add attachment references
    pub fn add_attachments<I>(&mut self, attachments: I) -> usize
    where
        I: IntoIterator<Item = Attachment>,
    {
        self.ledger.add_attachments(attachments)
    }

    /// Summary recomputed from the current records
    pub fn get_summary(&self) -> SettlementSummary {
        self.calculator.compute(self.ledger.records())
    }

    /// Summary as pretty JSON
    pub fn summary_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.get_summary())?)
    }

    /// Full text report: expenses, summary and attachments
    pub fn render(&self) -> String {
        let mut out = self.report.render_expenses(self.ledger.records());
        out.push_str(&self.report.render_summary(&self.get_summary()));
        out.push_str(&self.report.render_attachments(self.ledger.pending_attachments()));
        out
    }

    /// Report renderer
    pub fn report(&self) -> &SummaryReport {
        &self.report
    }

    /// Session ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Prometheus text for the session metrics, if enabled
    pub fn render_metrics(&self) -> Result<Option<String>> {
        match self.ledger.metrics() {
            Some(metrics) => Ok(Some(metrics.render()?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_core::PayerId;
    use rust_decimal::Decimal;

    #[test]
    fn test_session_creation() {
        let session = ExpenseSession::new(Config::default()).unwrap();
        assert!(session.ledger().is_empty());
        assert_eq!(session.get_summary(), SettlementSummary::empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.split.number_of_participants = 0;
        assert!(ExpenseSession::new(config).is_err());
    }

    #[test]
    fn test_summary_tracks_records() {
        let mut session = ExpenseSession::new(Config::default()).unwrap();
        session.add_expense(&ExpenseForm::new("2024-01-01", "Groceries", "Ido", "Lior", "100"));
        assert!(session.get_summary().displayed_transfer().is_none());

        session.add_expense(&ExpenseForm::new("2024-01-02", "Rent", "Ben", "Tal", "60"));
        session.add_expense(&ExpenseForm::new("2024-01-03", "", "Ben", "Tal", "60"));

        let summary = session.get_summary();
        assert_eq!(summary.total, Decimal::from(160));
        let transfer = summary.displayed_transfer().unwrap();
        assert_eq!(transfer.from, PayerId::new("Tal"));
        assert_eq!(transfer.amount, Decimal::from(40));
    }

    #[test]
    fn test_render_and_json() {
        let mut session = ExpenseSession::new(Config::default()).unwrap();
        session.add_expense(&ExpenseForm::new("2024-01-01", "Groceries", "Ido", "Lior", "100"));
        session.add_attachments(vec![Attachment::new("receipt.jpg")]);

        let text = session.render();
        assert!(text.contains("Groceries"));
        assert!(text.contains("attachment: receipt.jpg"));

        let json: serde_json::Value = serde_json::from_str(&session.summary_json().unwrap()).unwrap();
        let share: Decimal = json["equal_share"].as_str().unwrap().parse().unwrap();
        assert_eq!(share, Decimal::from(50));
        assert_eq!(json["balances"][0]["payer"], "Lior");
    }

    #[test]
    fn test_metrics_optional() {
        let plain = ExpenseSession::new(Config::default()).unwrap();
        assert!(plain.render_metrics().unwrap().is_none());

        let mut metered = ExpenseSession::with_metrics(Config::default()).unwrap();
        metered.add_expense(&ExpenseForm::default());
        let text = metered.render_metrics().unwrap().unwrap();
        assert!(text.contains("ledger_expenses_rejected_total 1"));
    }
}
