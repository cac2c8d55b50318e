//! Core types for the ledger
//!
//! Money is always exact (`Decimal`); dates keep the text the participant
//! entered and are only interpreted on request.

use crate::{config::ValidationConfig, Error, Result};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// ISO calendar date format accepted by [`ExpenseRecord::parsed_date`]
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest accepted amount magnitude, in whole units
///
/// Keeps ledger totals far below `Decimal::MAX` so summing never overflows.
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000;

/// Most decimal places an amount may carry
///
/// Halving a total of such amounts stays exact within `Decimal` precision.
pub const MAX_AMOUNT_SCALE: u32 = 10;

/// Participant who covered an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PayerId(String);

impl PayerId {
    /// Create new payer ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Expense form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Expense date
    Date,
    /// What was paid for
    Item,
    /// Who the expense was for
    Beneficiary,
    /// Who paid
    Payer,
    /// How much
    Amount,
}

impl Field {
    /// Form field name
    pub fn name(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Item => "item",
            Field::Beneficiary => "beneficiary",
            Field::Payer => "payer",
            Field::Amount => "amount",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw expense form as entered by a participant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseForm {
    /// Date text
    pub date: String,
    /// Item description
    pub item: String,
    /// Beneficiary name
    pub beneficiary: String,
    /// Payer name
    pub payer: String,
    /// Amount text
    pub amount: String,
}

impl ExpenseForm {
    /// Create a filled form
    pub fn new(
        date: impl Into<String>,
        item: impl Into<String>,
        beneficiary: impl Into<String>,
        payer: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            item: item.into(),
            beneficiary: beneficiary.into(),
            payer: payer.into(),
            amount: amount.into(),
        }
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Turn the form into a record
    ///
    /// Every field must be non-blank. An amount that does not parse as a
    /// decimal counts as missing.
    pub fn validate(&self, rules: &ValidationConfig) -> Result<ExpenseRecord> {
        let date = required(&self.date, Field::Date)?;
        let item = required(&self.item, Field::Item)?;
        let beneficiary = required(&self.beneficiary, Field::Beneficiary)?;
        let payer = required(&self.payer, Field::Payer)?;
        let amount_text = required(&self.amount, Field::Amount)?;

        let amount = parse_amount(amount_text).ok_or(Error::MissingField(Field::Amount))?;

        if !rules.allow_non_positive_amounts && amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(format!(
                "{} must be greater than zero",
                amount
            )));
        }

        if amount.abs() > Decimal::from(MAX_AMOUNT_UNITS) {
            return Err(Error::InvalidAmount(format!(
                "{} exceeds the maximum of {}",
                amount, MAX_AMOUNT_UNITS
            )));
        }

        if amount.scale() > MAX_AMOUNT_SCALE {
            return Err(Error::InvalidAmount(format!(
                "{} has more than {} decimal places",
                amount, MAX_AMOUNT_SCALE
            )));
        }

        if rules.require_iso_date && NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
            return Err(Error::InvalidDate(date.to_string()));
        }

        Ok(ExpenseRecord {
            record_id: Uuid::now_v7(),
            date: date.to_string(),
            item: item.to_string(),
            beneficiary: beneficiary.to_string(),
            payer: PayerId::new(payer),
            amount,
        })
    }
}

fn required(value: &str, field: Field) -> Result<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingField(field));
    }
    Ok(trimmed)
}

/// Parse amount text as an exact decimal
///
/// Accepts plain (`12.50`) and scientific (`1.2e3`) notation.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Accepted expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Record ID (UUIDv7, time-ordered)
    pub record_id: Uuid,

    /// Date as entered
    pub date: String,

    /// What was paid for
    pub item: String,

    /// Who the expense was for
    pub beneficiary: String,

    /// Who paid
    pub payer: PayerId,

    /// Amount paid (exact decimal)
    pub amount: Decimal,
}

impl ExpenseRecord {
    /// Date as a calendar date, if it is in ISO form
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// Receipt reference (display name only, never read)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Display name
    pub name: String,

    /// Size reported by the picker, if any
    pub size_bytes: Option<u64>,

    /// When the reference was added
    pub attached_at: DateTime<Utc>,
}

impl Attachment {
    /// Create attachment reference
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes: None,
            attached_at: Utc::now(),
        }
    }

    /// Set reported size
    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = Some(size_bytes);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groceries() -> ExpenseForm {
        ExpenseForm::new("2024-01-01", "Groceries", "Ido", "Lior", "100")
    }

    #[test]
    fn test_validate_complete_form() {
        let record = groceries().validate(&ValidationConfig::default()).unwrap();
        assert_eq!(record.payer, PayerId::new("Lior"));
        assert_eq!(record.amount, Decimal::from(100));
        assert_eq!(record.item, "Groceries");
        assert_eq!(
            record.parsed_date(),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
    }

    #[test]
    fn test_validate_trims_fields() {
        let form = ExpenseForm::new(" 2024-01-01 ", "  Rent", "Ben ", " Tal ", " 60.5 ");
        let record = form.validate(&ValidationConfig::default()).unwrap();
        assert_eq!(record.payer.as_str(), "Tal");
        assert_eq!(record.amount, Decimal::new(605, 1));
    }

    #[test]
    fn test_missing_fields() {
        let rules = ValidationConfig::default();
        let cases = [
            (ExpenseForm { date: String::new(), ..groceries() }, Field::Date),
            (ExpenseForm { item: "   ".into(), ..groceries() }, Field::Item),
            (ExpenseForm { beneficiary: String::new(), ..groceries() }, Field::Beneficiary),
            (ExpenseForm { payer: "\t".into(), ..groceries() }, Field::Payer),
            (ExpenseForm { amount: String::new(), ..groceries() }, Field::Amount),
        ];

        for (form, field) in cases {
            match form.validate(&rules) {
                Err(Error::MissingField(f)) => assert_eq!(f, field),
                other => panic!("expected missing {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_unparsable_amount_is_missing() {
        let form = ExpenseForm { amount: "abc".into(), ..groceries() };
        let err = form.validate(&ValidationConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MissingField(Field::Amount)));
        assert!(err.is_rejection());
    }

    #[test]
    fn test_non_positive_amount() {
        let negative = ExpenseForm { amount: "-5".into(), ..groceries() };
        let zero = ExpenseForm { amount: "0".into(), ..groceries() };

        let strict = ValidationConfig::default();
        assert!(matches!(negative.validate(&strict), Err(Error::InvalidAmount(_))));
        assert!(matches!(zero.validate(&strict), Err(Error::InvalidAmount(_))));

        let lenient = ValidationConfig {
            allow_non_positive_amounts: true,
            ..ValidationConfig::default()
        };
        assert_eq!(negative.validate(&lenient).unwrap().amount, Decimal::from(-5));
    }

    #[test]
    fn test_amount_magnitude_limit() {
        let rules = ValidationConfig {
            allow_non_positive_amounts: true,
            ..ValidationConfig::default()
        };
        let at_limit = ExpenseForm { amount: "1000000000000".into(), ..groceries() };
        assert_eq!(at_limit.validate(&rules).unwrap().amount, Decimal::from(MAX_AMOUNT_UNITS));

        for text in ["1000000000000.01", "50000000000000000000000000000", "-2000000000000"] {
            let form = ExpenseForm { amount: text.into(), ..groceries() };
            let err = form.validate(&rules).unwrap_err();
            assert!(matches!(err, Error::InvalidAmount(_)), "{} accepted", text);
            assert!(err.is_rejection());
        }
    }

    #[test]
    fn test_amount_scale_limit() {
        let rules = ValidationConfig::default();
        let fine = ExpenseForm { amount: "0.0000000001".into(), ..groceries() };
        assert_eq!(fine.validate(&rules).unwrap().amount.scale(), MAX_AMOUNT_SCALE);

        let too_fine = ExpenseForm { amount: "0.0000000000000000000000000001".into(), ..groceries() };
        assert!(matches!(too_fine.validate(&rules), Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn test_iso_date_rule() {
        let form = ExpenseForm { date: "01/02/2024".into(), ..groceries() };
        assert!(form.validate(&ValidationConfig::default()).is_ok());

        let strict = ValidationConfig {
            require_iso_date: true,
            ..ValidationConfig::default()
        };
        assert!(matches!(form.validate(&strict), Err(Error::InvalidDate(_))));
        assert!(groceries().validate(&strict).is_ok());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50"), Some(Decimal::new(1250, 2)));
        assert_eq!(parse_amount("1.2e3"), Some(Decimal::from(1200)));
        assert_eq!(parse_amount("12abc"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_form_clear() {
        let mut form = groceries();
        form.clear();
        assert_eq!(form, ExpenseForm::default());
    }
}
