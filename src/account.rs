use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

use crate::{
    customer::TaxId,
    history::History,
    transaction::TransactionKind,
};

pub type AccountNumber = u32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid amount {amount}, it must be greater than zero")]
    InvalidAmount { amount: Decimal },
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },
    #[error("Withdrawal amount {amount} exceeds the limit of {limit}")]
    ExceedsTransactionLimit { amount: Decimal, limit: Decimal },
    #[error("Maximum number of withdrawals ({max}) exceeded")]
    ExceedsWithdrawalCount { max: usize },
    #[error("Depositing {amount} would overflow the balance")]
    BalanceOverflow { amount: Decimal },
}

/// Restrictions applied to withdrawals on capped (checking) accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalPolicy {
    /// Largest amount a single withdrawal may take.
    pub limit: Decimal,
    pub max_withdrawals: usize,
}

impl Default for WithdrawalPolicy {
    fn default() -> Self {
        Self {
            limit: Decimal::from(500),
            max_withdrawals: 3,
        }
    }
}

#[derive(Debug)]
pub struct Account {
    number: AccountNumber,
    branch: String,
    owner: TaxId,
    balance: Decimal,
    history: History,
    policy: Option<WithdrawalPolicy>,
}

impl Account {
    /// Creates an empty account. Without a policy the account only enforces
    /// amount positivity and balance sufficiency.
    pub fn new(
        number: AccountNumber,
        branch: impl Into<String>,
        owner: impl Into<TaxId>,
        policy: Option<WithdrawalPolicy>,
    ) -> Self {
        Self {
            number,
            branch: branch.into(),
            owner: owner.into(),
            balance: Decimal::zero(),
            history: History::default(),
            policy,
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Tax ID of the owning customer.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn policy(&self) -> Option<&WithdrawalPolicy> {
        self.policy.as_ref()
    }

    pub fn withdrawal_count(&self) -> usize {
        self.history.count(TransactionKind::Withdrawal)
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub(crate) fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::zero() {
            return Err(AccountError::InvalidAmount { amount });
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::BalanceOverflow { amount })?;
        Ok(())
    }

    /// Policy gates come first, so a policy violation is reported even when
    /// the balance would not cover the amount either.
    pub(crate) fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if let Some(policy) = self.policy {
            if amount > policy.limit {
                return Err(AccountError::ExceedsTransactionLimit {
                    amount,
                    limit: policy.limit,
                });
            }
            if self.withdrawal_count() >= policy.max_withdrawals {
                return Err(AccountError::ExceedsWithdrawalCount {
                    max: policy.max_withdrawals,
                });
            }
        }
        self.withdraw_from_balance(amount)
    }

    // Insufficient balance takes priority over a non-positive amount.
    fn withdraw_from_balance(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount > self.balance {
            return Err(AccountError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        if amount <= Decimal::zero() {
            return Err(AccountError::InvalidAmount { amount });
        }
        self.balance -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::transaction::Transaction;

    fn with_balance(balance: Decimal, policy: Option<WithdrawalPolicy>) -> Account {
        Account {
            balance,
            ..Account::new(7, "0001", "111", policy)
        }
    }

    #[test]
    fn new_account_is_empty() {
        let acc = Account::new(7, "0001", "111", None);
        assert_eq!(acc.number(), 7);
        assert_eq!(acc.branch(), "0001");
        assert_eq!(acc.owner(), "111");
        assert_eq!(acc.balance(), Decimal::zero());
        assert!(acc.history().transactions().is_empty());
        assert!(acc.policy().is_none());
    }

    #[test]
    fn deposit() {
        let mut acc = Account::new(1, "0001", "111", None);
        acc.deposit(dec!(12.5)).unwrap();
        acc.deposit(dec!(0.5)).unwrap();
        assert_eq!(acc.balance(), dec!(13));

        let err = acc.deposit(dec!(0)).unwrap_err();
        assert_eq!(err, AccountError::InvalidAmount { amount: dec!(0) });
        let err = acc.deposit(dec!(-3)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid amount -3, it must be greater than zero");
        assert_eq!(acc.balance(), dec!(13));
    }

    #[test]
    fn overflowing_deposit_is_rejected() {
        let mut acc = Account::new(1, "0001", "111", None);
        Transaction::deposit(Decimal::MAX)
            .register(&mut acc)
            .unwrap();

        let err = Transaction::deposit(Decimal::MAX)
            .register(&mut acc)
            .unwrap_err();
        assert_eq!(err, AccountError::BalanceOverflow { amount: Decimal::MAX });
        assert_eq!(acc.balance(), Decimal::MAX);
        assert_eq!(acc.history().transactions().len(), 1);

        let err = acc.deposit(dec!(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Depositing 1 would overflow the balance"
        );
        assert_eq!(acc.balance(), Decimal::MAX);
    }

    #[test]
    fn base_withdraw() {
        let mut acc = with_balance(dec!(100), None);

        // no per-transaction limit nor count limit without a policy
        for _ in 0..5 {
            acc.withdraw(dec!(10)).unwrap();
        }
        acc.withdraw(dec!(50)).unwrap();
        assert_eq!(acc.balance(), dec!(0));

        let err = acc.withdraw(dec!(0.01)).unwrap_err();
        assert_eq!(
            err,
            AccountError::InsufficientBalance {
                requested: dec!(0.01),
                available: dec!(0)
            }
        );
        assert_eq!(
            err.to_string(),
            "Insufficient balance: requested 0.01, available 0"
        );
    }

    #[test]
    fn base_withdraw_checks_balance_before_amount() {
        let mut acc = with_balance(dec!(0), None);
        // zero does not exceed an empty balance, so the amount is the problem
        let err = acc.withdraw(dec!(0)).unwrap_err();
        assert!(matches!(err, AccountError::InvalidAmount { .. }));

        let mut acc = with_balance(dec!(-1), None);
        let err = acc.withdraw(dec!(0)).unwrap_err();
        assert!(matches!(err, AccountError::InsufficientBalance { .. }));

        let mut acc = with_balance(dec!(20), None);
        let err = acc.withdraw(dec!(-5)).unwrap_err();
        assert_eq!(err, AccountError::InvalidAmount { amount: dec!(-5) });
        assert_eq!(acc.balance(), dec!(20));
    }

    #[test]
    fn capped_withdraw_checks_limit_first() {
        let policy = WithdrawalPolicy {
            limit: dec!(500),
            max_withdrawals: 0,
        };
        let mut acc = with_balance(dec!(100), Some(policy));

        // over the limit, over the count and over the balance at once
        let err = acc.withdraw(dec!(600)).unwrap_err();
        assert_eq!(
            err,
            AccountError::ExceedsTransactionLimit {
                amount: dec!(600),
                limit: dec!(500)
            }
        );
        assert_eq!(
            err.to_string(),
            "Withdrawal amount 600 exceeds the limit of 500"
        );

        // over the count and over the balance
        let err = acc.withdraw(dec!(150)).unwrap_err();
        assert_eq!(err, AccountError::ExceedsWithdrawalCount { max: 0 });
        assert_eq!(acc.balance(), dec!(100));
    }

    #[test]
    fn capped_withdraw_delegates_to_balance_checks() {
        let mut acc = with_balance(dec!(100), Some(WithdrawalPolicy::default()));

        let err = acc.withdraw(dec!(150)).unwrap_err();
        assert!(matches!(err, AccountError::InsufficientBalance { .. }));
        let err = acc.withdraw(dec!(0)).unwrap_err();
        assert!(matches!(err, AccountError::InvalidAmount { .. }));

        // exactly the limit is allowed
        let mut acc = with_balance(dec!(1000), Some(WithdrawalPolicy::default()));
        acc.withdraw(dec!(500)).unwrap();
        assert_eq!(acc.balance(), dec!(500));
    }

    #[test]
    fn withdrawal_count_is_derived_from_history() {
        let policy = WithdrawalPolicy {
            limit: dec!(1000),
            max_withdrawals: 2,
        };
        let mut acc = with_balance(dec!(0), Some(policy));
        Transaction::deposit(dec!(300)).register(&mut acc).unwrap();
        assert_eq!(acc.withdrawal_count(), 0);

        Transaction::withdrawal(dec!(100))
            .register(&mut acc)
            .unwrap();
        // a rejected attempt does not count
        Transaction::withdrawal(dec!(900))
            .register(&mut acc)
            .unwrap_err();
        assert_eq!(acc.withdrawal_count(), 1);

        Transaction::withdrawal(dec!(100))
            .register(&mut acc)
            .unwrap();
        assert_eq!(acc.withdrawal_count(), 2);

        let err = Transaction::withdrawal(dec!(1))
            .register(&mut acc)
            .unwrap_err();
        assert_eq!(err, AccountError::ExceedsWithdrawalCount { max: 2 });
        assert_eq!(acc.balance(), dec!(100));
    }

    #[test]
    fn default_policy() {
        let policy = WithdrawalPolicy::default();
        assert_eq!(policy.limit, dec!(500));
        assert_eq!(policy.max_withdrawals, 3);
    }
}
