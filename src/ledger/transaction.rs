use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage format for transaction dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Sign prefix used by summary listings.
    pub fn sign(self) -> char {
        match self {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        }
    }
}

/// One income or expense record. The date is kept in its canonical
/// `YYYY-MM-DD` text form, which is also what lands on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    #[serde(default)]
    pub desc: String,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        amount: f64,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            kind,
            amount,
            desc: desc.into(),
        }
    }

    /// Parses the stored date. Rows hand-edited into the data file may carry
    /// text that is not a calendar date; callers skip those.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn serializes_with_external_field_names() {
        let txn = Transaction::new(date(2025, 1, 10), TransactionKind::Income, 150000.50, "salary");
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"date\":\"2025-01-10\""));
        assert!(json.contains("\"type\":\"income\""));
        assert!(json.contains("\"desc\":\"salary\""));
    }

    #[test]
    fn deserializes_expense_kind() {
        let json = r#"{"date":"2025-02-01","type":"expense","amount":50.0,"desc":""}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert!(!txn.is_income());
    }

    #[test]
    fn missing_desc_defaults_to_empty() {
        let json = r#"{"date":"2025-02-01","type":"income","amount":1.0}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.desc, "");
    }

    #[test]
    fn parsed_date_rejects_invalid_text() {
        let mut txn = Transaction::new(date(2025, 1, 10), TransactionKind::Income, 1.0, "");
        assert_eq!(txn.parsed_date(), Some(date(2025, 1, 10)));
        txn.date = "not-a-date".into();
        assert_eq!(txn.parsed_date(), None);
    }
}
