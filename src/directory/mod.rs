use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::{
    account::{Account, AccountError, AccountNumber},
    customer::{Customer, NewCustomer, TaxId},
};

pub mod in_memory_directory;
mod statement;

pub use statement::Statement;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Customer with tax ID `{tax_id}` already exists")]
    DuplicateCustomer { tax_id: TaxId },
    #[error("Customer with tax ID `{tax_id}` not found")]
    CustomerNotFound { tax_id: TaxId },
    #[error("Account {number} not found")]
    AccountNotFound { number: AccountNumber },
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

/// One line of the accounts listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub branch: String,
    pub number: AccountNumber,
    pub owner: String,
    pub balance: Decimal,
}

impl AccountSummary {
    pub fn new(account: &Account, owner: &str) -> Self {
        Self {
            branch: account.branch().to_string(),
            number: account.number(),
            owner: owner.to_string(),
            balance: account.balance(),
        }
    }
}

/// Registry of customers and their accounts. Every change to an account goes
/// through a [`Transaction`](crate::transaction::Transaction).
pub trait Directory {
    fn find_customer(&self, tax_id: &str) -> Option<&Customer>;

    fn find_account(&self, number: AccountNumber) -> Option<&Account>;

    fn create_customer(&mut self, customer: NewCustomer) -> Result<&Customer, DirectoryError>;

    /// Opens a new account for an existing customer.
    fn create_account(&mut self, tax_id: &str) -> Result<&Account, DirectoryError>;

    fn deposit(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<&Account, DirectoryError>;

    fn withdraw(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<&Account, DirectoryError>;

    /// All accounts, ordered by account number.
    fn list_accounts(&self) -> Vec<AccountSummary>;

    fn show_statement(&self, number: AccountNumber) -> Result<Statement, DirectoryError> {
        let account = self
            .find_account(number)
            .ok_or(DirectoryError::AccountNotFound { number })?;
        let owner = self.find_customer(account.owner()).ok_or_else(|| {
            DirectoryError::CustomerNotFound {
                tax_id: account.owner().to_string(),
            }
        })?;
        Ok(Statement::new(account, owner))
    }

    fn customer_accounts(&self, tax_id: &str) -> Result<Vec<&Account>, DirectoryError> {
        let customer = self
            .find_customer(tax_id)
            .ok_or_else(|| DirectoryError::CustomerNotFound {
                tax_id: tax_id.to_string(),
            })?;
        Ok(customer
            .accounts()
            .iter()
            .filter_map(|number| self.find_account(*number))
            .collect())
    }
}
