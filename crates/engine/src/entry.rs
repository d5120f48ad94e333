//! The module contains the `Entry` type representing a recorded expense.
//!
//! Entries are created once through [`Ledger::add_entry`] and never change
//! afterwards. A [`NewEntry`] is the validated input for that call.
//!
//!  [`Ledger::add_entry`]: crate::Ledger::add_entry
use core::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// How an entry was recorded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryMethod {
    #[default]
    Manual,
    Voice,
}

impl EntryMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Voice => "voice",
        }
    }
}

/// Represent an expense stored in the ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    /// Always > 0.
    pub amount: f64,
    pub category: String,
    pub note: Option<String>,
    pub method: EntryMethod,
    pub occurred_at: DateTime<FixedOffset>,
    /// Calendar date of `occurred_at`, in its own offset.
    pub date: NaiveDate,
}

impl Entry {
    pub(crate) fn new(new: NewEntry, occurred_at: DateTime<FixedOffset>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount: new.amount,
            category: new.category,
            note: new.note,
            method: new.method,
            date: occurred_at.date_naive(),
            occurred_at,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {} ({})", self.amount, self.category, self.method.as_str())?;
        if let Some(note) = &self.note {
            write!(f, " {note}")?;
        }
        Ok(())
    }
}

/// Validated input for a new entry.
///
/// `amount` is finite and > 0 and `category` is not empty, so adding it to
/// the ledger cannot fail.
#[derive(Clone, Debug, PartialEq)]
pub struct NewEntry {
    amount: f64,
    category: String,
    note: Option<String>,
    occurred_at: Option<DateTime<FixedOffset>>,
    method: EntryMethod,
}

impl NewEntry {
    pub fn new(amount: f64, category: impl Into<String>) -> ResultEngine<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(EngineError::InvalidAmount(format!(
                "amount must be greater than 0, got {amount}"
            )));
        }
        let category = category.into();
        if category.is_empty() {
            return Err(EngineError::InvalidCategory(
                "category must not be empty".to_string(),
            ));
        }

        Ok(Self {
            amount,
            category,
            note: None,
            occurred_at: None,
            method: EntryMethod::Manual,
        })
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    /// When absent the ledger uses its clock.
    pub fn with_occurred_at(mut self, occurred_at: Option<DateTime<FixedOffset>>) -> Self {
        self.occurred_at = occurred_at;
        self
    }

    pub fn with_method(mut self, method: EntryMethod) -> Self {
        self.method = method;
        self
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn method(&self) -> EntryMethod {
        self.method
    }

    pub(crate) fn occurred_at(&self) -> Option<DateTime<FixedOffset>> {
        self.occurred_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_negative_amounts() {
        assert!(matches!(
            NewEntry::new(0.0, "food"),
            Err(EngineError::InvalidAmount(_))
        ));
        assert!(matches!(
            NewEntry::new(-3.5, "food"),
            Err(EngineError::InvalidAmount(_))
        ));
    }

    #[test]
    fn rejects_non_finite_amounts() {
        assert!(NewEntry::new(f64::NAN, "food").is_err());
        assert!(NewEntry::new(f64::INFINITY, "food").is_err());
    }

    #[test]
    fn rejects_empty_category() {
        let err = NewEntry::new(1.0, "").unwrap_err();
        assert_eq!(err.field(), "category");
    }

    #[test]
    fn defaults_to_manual_without_note() {
        let new = NewEntry::new(2.0, "coffee").unwrap();
        assert_eq!(new.method(), EntryMethod::Manual);
        assert_eq!(new.note(), None);
        assert_eq!(new.occurred_at(), None);
    }

    #[test]
    fn date_follows_occurred_at_offset() {
        let occurred_at = DateTime::parse_from_rfc3339("2024-03-01T23:30:00-05:00").unwrap();
        let entry = Entry::new(NewEntry::new(5.0, "food").unwrap(), occurred_at);
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn display_includes_note() {
        let occurred_at = DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z").unwrap();
        let new = NewEntry::new(3.0, "coffee")
            .unwrap()
            .with_note(Some("espresso".to_string()));
        let entry = Entry::new(new, occurred_at);
        assert_eq!(entry.to_string(), "3.00 coffee (manual) espresso");
    }
}
