use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

use crate::errors::LedgerError;

use super::{Ledger, Transaction, TransactionKind};

/// A calendar month targeted by a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, LedgerError> {
        if !(1..=12).contains(&month) {
            return Err(LedgerError::InvalidInput(format!(
                "month {} out of range 1-12",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// Parses a `YYYY-MM` string. The month must land in 1..=12.
    pub fn parse(raw: &str) -> Result<Self, LedgerError> {
        let trimmed = raw.trim();
        let Some((year_part, month_part)) = trimmed.split_once('-') else {
            return Err(LedgerError::InvalidInput(format!(
                "invalid month `{}`",
                trimmed
            )));
        };
        let year: i32 = year_part.trim().parse().map_err(|_| {
            LedgerError::InvalidInput(format!("invalid year in `{}`", trimmed))
        })?;
        let month: u32 = month_part.trim().parse().map_err(|_| {
            LedgerError::InvalidInput(format!("invalid month in `{}`", trimmed))
        })?;
        Self::new(year, month)
    }

    /// The current month in local time.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Totals and matching rows for one month, rows in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary<'a> {
    pub month: MonthKey,
    pub total_income: f64,
    pub total_expense: f64,
    pub items: Vec<&'a Transaction>,
}

impl<'a> MonthlySummary<'a> {
    /// Filters the ledger down to the target month and accumulates totals.
    /// Rows whose stored date fails to parse are silently skipped.
    pub fn for_month(ledger: &'a Ledger, month: MonthKey) -> Self {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;
        let mut items = Vec::new();
        for txn in &ledger.transactions {
            let Some(date) = txn.parsed_date() else {
                continue;
            };
            if !month.contains(date) {
                continue;
            }
            match txn.kind {
                TransactionKind::Income => total_income += txn.amount,
                TransactionKind::Expense => total_expense += txn.amount,
            }
            items.push(txn);
        }
        Self {
            month,
            total_income,
            total_expense,
            items,
        }
    }

    /// Income minus expense.
    pub fn balance(&self) -> f64 {
        self.total_income - self.total_expense
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
