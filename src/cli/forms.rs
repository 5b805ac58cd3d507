//! Interactive field collection for menu operations.
//!
//! A form either completes with a validated value or aborts, leaving the
//! ledger untouched. Validation failures are reported where they happen.

use chrono::{Local, NaiveDate};

use crate::ledger::transaction::DATE_FORMAT;
use crate::ledger::{MonthKey, Transaction, TransactionKind};

use super::io;
use super::shell_context::{CommandError, ShellContext};

/// Outcome of a form: a completed value, or an abort that already told the
/// user why.
pub enum FormResult<T> {
    Completed(T),
    Aborted,
}

/// Collects amount, description, and date for a new transaction.
pub fn transaction_form(
    ctx: &mut ShellContext,
    kind: TransactionKind,
) -> Result<FormResult<Transaction>, CommandError> {
    let Some(raw_amount) = ctx.read_answer("Amount (e.g. 150000.50)")? else {
        return Ok(FormResult::Aborted);
    };
    let amount = match parse_amount(&raw_amount) {
        Ok(value) => value,
        Err(message) => {
            io::print_error(message);
            return Ok(FormResult::Aborted);
        }
    };

    let desc = match ctx.read_answer("Short description")? {
        Some(value) => value.trim().to_string(),
        None => return Ok(FormResult::Aborted),
    };

    let Some(raw_date) = ctx.read_answer("Date (YYYY-MM-DD) [blank = today]")? else {
        return Ok(FormResult::Aborted);
    };
    let date = match parse_entry_date(&raw_date) {
        Ok(value) => value,
        Err(message) => {
            io::print_error(message);
            return Ok(FormResult::Aborted);
        }
    };

    Ok(FormResult::Completed(Transaction::new(
        date, kind, amount, desc,
    )))
}

/// Resolves the summary month: an inline argument wins, a blank answer means
/// the current month.
pub fn summary_month_form(
    ctx: &mut ShellContext,
    inline: Option<&str>,
) -> Result<FormResult<MonthKey>, CommandError> {
    let raw = match inline {
        Some(value) => value.trim().to_string(),
        None => match ctx.read_answer("Month (YYYY-MM) [blank = current]")? {
            Some(value) => value.trim().to_string(),
            None => return Ok(FormResult::Aborted),
        },
    };
    if raw.is_empty() {
        return Ok(FormResult::Completed(MonthKey::current()));
    }
    match MonthKey::parse(&raw) {
        Ok(month) => Ok(FormResult::Completed(month)),
        Err(err) => {
            io::print_error(format!("{err}. Use YYYY-MM (e.g. 2025-01)."));
            Ok(FormResult::Aborted)
        }
    }
}

fn parse_amount(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| format!("Invalid amount `{trimmed}`."))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!(
            "Amount must be a non-negative number, got `{trimmed}`."
        ));
    }
    Ok(value)
}

fn parse_entry_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| format!("Invalid date `{trimmed}`. Use YYYY-MM-DD."))
}
