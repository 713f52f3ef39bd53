use std::fmt;

use rust_decimal::Decimal;
use tracing::debug;

use crate::account::{Account, AccountError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("Deposit"),
            TransactionKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// A single monetary movement. The amount is not validated here, the account
/// decides whether it is acceptable when the transaction is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
}

impl Transaction {
    pub fn deposit(amount: Decimal) -> Self {
        Self {
            kind: TransactionKind::Deposit,
            amount,
        }
    }

    pub fn withdrawal(amount: Decimal) -> Self {
        Self {
            kind: TransactionKind::Withdrawal,
            amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Applies the transaction to `account` and records it in the account
    /// history. Nothing is recorded when the account rejects the movement.
    pub fn register(&self, account: &mut Account) -> Result<(), AccountError> {
        match self.kind {
            TransactionKind::Deposit => account.deposit(self.amount)?,
            TransactionKind::Withdrawal => account.withdraw(self.amount)?,
        }
        account.history_mut().add_transaction(self);
        debug!(
            account = account.number(),
            kind = %self.kind,
            amount = %self.amount,
            balance = %account.balance(),
            "transaction registered"
        );
        Ok(())
    }
}
