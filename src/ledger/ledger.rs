use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// The full ordered collection of transactions backing one data file.
///
/// Append-only, except for removal of the most recently appended entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transaction, returning its position in insertion order.
    pub fn add_transaction(&mut self, transaction: Transaction) -> usize {
        self.transactions.push(transaction);
        self.transactions.len() - 1
    }

    /// Removes and returns the most recently appended transaction, which is
    /// not necessarily the latest one by date.
    pub fn delete_last(&mut self) -> Option<Transaction> {
        self.transactions.pop()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// All transactions sorted by date ascending. The stored `YYYY-MM-DD`
    /// text sorts lexicographically in calendar order, and the sort is
    /// stable, so entries sharing a date keep insertion order.
    pub fn transactions_by_date(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| a.date.cmp(&b.date));
        sorted
    }
}
