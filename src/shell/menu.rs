use std::str::FromStr;

use super::prompt::InputError;

pub const MENU: &str = "
===== Banking System =====
1. Create Customer
2. Create Account
3. Deposit
4. Withdraw
5. Bank Statement
6. List All Accounts
7. List Customer Accounts
0. Exit
Select an option: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    CreateCustomer,
    CreateAccount,
    Deposit,
    Withdraw,
    Statement,
    ListAccounts,
    CustomerAccounts,
    Exit,
}

impl FromStr for MenuOption {
    type Err = InputError;

    /// Accepts the menu numbers and the short letter commands.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "nu" => Ok(Self::CreateCustomer),
            "2" | "na" => Ok(Self::CreateAccount),
            "3" | "d" => Ok(Self::Deposit),
            "4" | "w" => Ok(Self::Withdraw),
            "5" | "b" => Ok(Self::Statement),
            "6" | "sa" => Ok(Self::ListAccounts),
            "7" | "ca" => Ok(Self::CustomerAccounts),
            "0" | "q" => Ok(Self::Exit),
            _ => Err(InputError::UnknownOption {
                input: s.trim().to_string(),
            }),
        }
    }
}
