use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    account::{Account, AccountNumber},
    config::BankConfig,
    customer::{Customer, NewCustomer},
    transaction::Transaction,
};

use super::{AccountSummary, Directory, DirectoryError};

/// Keeps customers and accounts in insertion order. Lookups are linear
/// scans, which is fine for a single interactive session.
#[derive(Debug)]
pub struct InMemoryDirectory {
    config: BankConfig,
    customers: Vec<Customer>,
    accounts: Vec<Account>,
    next_account_number: AccountNumber,
}

impl InMemoryDirectory {
    pub fn new(config: BankConfig) -> Self {
        Self {
            config,
            customers: Vec::new(),
            accounts: Vec::new(),
            next_account_number: 1,
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    fn register(
        &mut self,
        number: AccountNumber,
        transaction: Transaction,
    ) -> Result<&Account, DirectoryError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|acc| acc.number() == number)
            .ok_or(DirectoryError::AccountNotFound { number })?;
        if let Err(err) = transaction.register(account) {
            debug!(
                account = number,
                kind = %transaction.kind(),
                amount = %transaction.amount(),
                error = %err,
                "transaction rejected"
            );
            return Err(err.into());
        }
        Ok(&*account)
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new(BankConfig::default())
    }
}

impl Directory for InMemoryDirectory {
    fn find_customer(&self, tax_id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.tax_id() == tax_id)
    }

    fn find_account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.number() == number)
    }

    fn create_customer(&mut self, customer: NewCustomer) -> Result<&Customer, DirectoryError> {
        if self.find_customer(&customer.tax_id).is_some() {
            debug!(tax_id = %customer.tax_id, "duplicate customer rejected");
            return Err(DirectoryError::DuplicateCustomer {
                tax_id: customer.tax_id,
            });
        }
        info!(tax_id = %customer.tax_id, "customer created");
        let idx = self.customers.len();
        self.customers.push(customer.into());
        Ok(&self.customers[idx])
    }

    fn create_account(&mut self, tax_id: &str) -> Result<&Account, DirectoryError> {
        let Some(customer) = self.customers.iter_mut().find(|c| c.tax_id() == tax_id) else {
            debug!(tax_id, "account requested for unknown customer");
            return Err(DirectoryError::CustomerNotFound {
                tax_id: tax_id.to_string(),
            });
        };
        let number = self.next_account_number;
        customer.add_account(number);
        self.next_account_number += 1;

        let account = Account::new(
            number,
            self.config.branch.clone(),
            tax_id,
            self.config.withdrawal_policy,
        );
        info!(tax_id, account = number, "account created");
        let idx = self.accounts.len();
        self.accounts.push(account);
        Ok(&self.accounts[idx])
    }

    fn deposit(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<&Account, DirectoryError> {
        self.register(number, Transaction::deposit(amount))
    }

    fn withdraw(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<&Account, DirectoryError> {
        self.register(number, Transaction::withdrawal(amount))
    }

    fn list_accounts(&self) -> Vec<AccountSummary> {
        self.accounts
            .iter()
            .map(|acc| {
                let owner = self.find_customer(acc.owner()).map_or("", |c| c.name());
                AccountSummary::new(acc, owner)
            })
            .collect()
    }
}
