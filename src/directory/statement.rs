use std::fmt;

use rust_decimal::Decimal;

use crate::{
    account::{Account, AccountNumber},
    customer::Customer,
    history::{HistoryEntry, TIMESTAMP_FORMAT},
};

/// Read-only snapshot of an account and its history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub branch: String,
    pub number: AccountNumber,
    pub owner: String,
    pub entries: Vec<HistoryEntry>,
    pub balance: Decimal,
}

impl Statement {
    pub fn new(account: &Account, owner: &Customer) -> Self {
        Self {
            branch: account.branch().to_string(),
            number: account.number(),
            owner: owner.name().to_string(),
            entries: account.history().transactions().to_vec(),
            balance: account.balance(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch: {}", self.branch)?;
        writeln!(f, "Account: {}", self.number)?;
        writeln!(f, "Owner: {}", self.owner)?;
        writeln!(f)?;
        writeln!(f, "Transactions:")?;
        if self.entries.is_empty() {
            writeln!(f, "No transactions.")?;
        }
        for entry in &self.entries {
            writeln!(
                f,
                "{} - {}: {:.2}",
                entry.timestamp().format(TIMESTAMP_FORMAT),
                entry.kind(),
                entry.amount()
            )?;
        }
        writeln!(f)?;
        write!(f, "Current Balance: {:.2}", self.balance)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{customer::NewCustomer, transaction::Transaction};

    fn owner() -> Customer {
        Customer::from(NewCustomer {
            tax_id: "42".to_string(),
            name: "Ana Souza".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1985, 1, 2).unwrap(),
            address: "Av. Brasil, 1500".to_string(),
        })
    }

    #[test]
    fn empty_statement() {
        let acc = Account::new(2, "0001", "42", None);
        let statement = Statement::new(&acc, &owner());

        assert_eq!(
            statement.to_string(),
            "Branch: 0001\nAccount: 2\nOwner: Ana Souza\n\nTransactions:\nNo transactions.\n\nCurrent Balance: 0.00"
        );
    }

    #[test]
    fn statement_lists_entries_in_order() {
        let mut acc = Account::new(2, "0001", "42", None);
        Transaction::deposit(dec!(500)).register(&mut acc).unwrap();
        Transaction::withdrawal(dec!(120.5))
            .register(&mut acc)
            .unwrap();
        let statement = Statement::new(&acc, &owner());

        assert_eq!(statement.entries.len(), 2);
        assert_eq!(statement.balance, dec!(379.5));

        let rendered = statement.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[5].ends_with(" - Deposit: 500.00"), "{}", lines[5]);
        assert!(lines[6].ends_with(" - Withdrawal: 120.50"), "{}", lines[6]);
        assert_eq!(lines.last(), Some(&"Current Balance: 379.50"));
    }
}
