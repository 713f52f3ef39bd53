use chrono::{Local, NaiveDateTime, SubsecRound};
use rust_decimal::Decimal;

use crate::transaction::{Transaction, TransactionKind};

/// Format used when rendering entry timestamps.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: NaiveDateTime,
}

impl HistoryEntry {
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

/// Append-only record of the transactions applied to one account, in the
/// order they were applied.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn transactions(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries of the given kind.
    pub fn count(&self, kind: TransactionKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// Only [`Transaction::register`] may call this, after the account
    /// accepted the movement. Withdrawal caps are derived from these entries.
    pub(crate) fn add_transaction(&mut self, transaction: &Transaction) {
        self.add_transaction_at(transaction, Local::now().naive_local());
    }

    fn add_transaction_at(&mut self, transaction: &Transaction, timestamp: NaiveDateTime) {
        self.entries.push(HistoryEntry {
            kind: transaction.kind(),
            amount: transaction.amount(),
            timestamp: timestamp.trunc_subsecs(0),
        });
    }
}
