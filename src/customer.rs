use chrono::NaiveDate;

use crate::account::AccountNumber;

/// Tax identification number (SSN/CPF). Unique per customer.
pub type TaxId = String;

/// Data required to register a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub tax_id: TaxId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
}

#[derive(Debug)]
pub struct Customer {
    tax_id: TaxId,
    name: String,
    birth_date: NaiveDate,
    address: String,
    accounts: Vec<AccountNumber>,
}

impl Customer {
    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Numbers of the accounts owned by this customer, oldest first.
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub(crate) fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }
}

impl From<NewCustomer> for Customer {
    fn from(value: NewCustomer) -> Self {
        Self {
            tax_id: value.tax_id,
            name: value.name,
            birth_date: value.birth_date,
            address: value.address,
            accounts: Vec::new(),
        }
    }
}
