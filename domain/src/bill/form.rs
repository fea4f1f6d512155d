//! New-bill form input and its assembly into a [`Bill`]

use super::draft::BillDraft;
use super::entities::{Bill, ExpenseType};
use crate::session::Session;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// VAT percentage used when the field is empty, unparsable or zero
pub const DEFAULT_PCT: i64 = 20;

/// Expected layout of the date picker value
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons a form cannot be turned into a bill
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BillFormError {
    #[error("Unknown expense type: {0}")]
    UnknownExpenseType(String),

    #[error("Amount is not a number: {0:?}")]
    InvalidAmount(String),

    #[error("Date must be YYYY-MM-DD: {0:?}")]
    InvalidDate(String),
}

/// Raw text of the new-bill form fields, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillForm {
    pub expense_type: String,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl BillForm {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Builder Methods ====================

    pub fn with_expense_type(mut self, value: impl Into<String>) -> Self {
        self.expense_type = value.into();
        self
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = value.into();
        self
    }

    pub fn with_amount(mut self, value: impl Into<String>) -> Self {
        self.amount = value.into();
        self
    }

    pub fn with_date(mut self, value: impl Into<String>) -> Self {
        self.date = value.into();
        self
    }

    pub fn with_vat(mut self, value: impl Into<String>) -> Self {
        self.vat = value.into();
        self
    }

    pub fn with_pct(mut self, value: impl Into<String>) -> Self {
        self.pct = value.into();
        self
    }

    pub fn with_commentary(mut self, value: impl Into<String>) -> Self {
        self.commentary = value.into();
        self
    }

    /// Build a pending bill from the form, the session user and the draft's receipt.
    ///
    /// A non-numeric amount is rejected here so that no bill ever leaves with
    /// an undefined amount.
    pub fn assemble(&self, session: &Session, draft: &BillDraft) -> Result<Bill, BillFormError> {
        let expense_type: ExpenseType = self
            .expense_type
            .parse()
            .map_err(|_| BillFormError::UnknownExpenseType(self.expense_type.clone()))?;

        let amount = parse_leading_int(&self.amount)
            .ok_or_else(|| BillFormError::InvalidAmount(self.amount.clone()))?;

        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| BillFormError::InvalidDate(self.date.clone()))?;

        let pct = match parse_leading_int(&self.pct) {
            Some(0) | None => DEFAULT_PCT,
            Some(pct) => pct,
        };

        let commentary = Some(self.commentary.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(Bill::pending(
            session.email().to_string(),
            expense_type,
            self.name.trim().to_string(),
            amount,
            date,
            self.vat.trim().to_string(),
            pct,
            commentary,
            draft.file_url().map(str::to_string),
            draft.file_name().map(str::to_string),
        ))
    }
}

/// Parse the integer prefix of a text field.
///
/// Leading whitespace and an optional sign are allowed, parsing stops at the
/// first non-digit (`"12.5"` is 12, `"348€"` is 348). `None` when no digit
/// starts the value or it overflows.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
