//! Menu operation handlers bridging forms, ledger state, and storage.

use crate::format::format_amount;
use crate::ledger::{MonthlySummary, TransactionKind};

use super::forms::{self, FormResult};
use super::io;
use super::output;
use super::shell_context::{CommandError, ShellContext};

/// Records a new income or expense entry and persists the ledger.
pub fn add_transaction(
    ctx: &mut ShellContext,
    kind: TransactionKind,
) -> Result<(), CommandError> {
    output::section(format!("Add {}", kind.label()));
    let transaction = match forms::transaction_form(ctx, kind)? {
        FormResult::Completed(value) => value,
        FormResult::Aborted => return Ok(()),
    };

    let message = format!(
        "Recorded {} of {} on {}.",
        kind.label(),
        format_amount(transaction.amount),
        transaction.date
    );
    tracing::debug!(
        kind = kind.label(),
        amount = transaction.amount,
        date = %transaction.date,
        "transaction added"
    );
    ctx.ledger_mut().add_transaction(transaction);
    ctx.persist()?;
    io::print_success(message);
    Ok(())
}

/// Prints totals and matching entries for the requested month.
pub fn show_summary(ctx: &mut ShellContext, inline: Option<&str>) -> Result<(), CommandError> {
    output::section("Monthly summary");
    let month = match forms::summary_month_form(ctx, inline)? {
        FormResult::Completed(value) => value,
        FormResult::Aborted => return Ok(()),
    };

    let summary = MonthlySummary::for_month(ctx.ledger(), month);
    output::plain(format!("Income:  {}", format_amount(summary.total_income)));
    output::plain(format!("Expense: {}", format_amount(summary.total_expense)));
    output::plain(format!("Balance: {}", format_amount(summary.balance())));

    if summary.is_empty() {
        io::print_info(format!("No transactions for {}.", summary.month));
        return Ok(());
    }

    output::plain("");
    output::plain("Transactions:");
    for txn in &summary.items {
        output::plain(format!(
            "{}  {}{}  {}",
            txn.date,
            txn.kind.sign(),
            format_amount(txn.amount),
            txn.desc
        ));
    }
    Ok(())
}

/// Lists every transaction, sorted by date ascending.
pub fn list_all(ctx: &ShellContext) -> Result<(), CommandError> {
    output::section("All transactions");
    if ctx.ledger().is_empty() {
        io::print_info("No transactions recorded yet.");
        return Ok(());
    }
    for txn in ctx.ledger().transactions_by_date() {
        output::plain(format!(
            "{}  {:<7}  {}  {}",
            txn.date,
            txn.kind.label(),
            format_amount(txn.amount),
            txn.desc
        ));
    }
    Ok(())
}

/// Removes the most recently appended transaction and persists.
pub fn delete_last(ctx: &mut ShellContext) -> Result<(), CommandError> {
    let Some(removed) = ctx.ledger_mut().delete_last() else {
        io::print_info("No transactions to delete.");
        return Ok(());
    };
    ctx.persist()?;
    tracing::debug!(date = %removed.date, "last transaction deleted");
    io::print_success(format!(
        "Deleted last entry: {}  {}  {}  {}",
        removed.date,
        removed.kind.label(),
        format_amount(removed.amount),
        removed.desc
    ));
    Ok(())
}
