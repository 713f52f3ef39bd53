//! Interactive front end of the ledger: reads menu selections and answers
//! from any [`BufRead`], drives a [`Directory`] and reports the outcome on
//! any [`Write`]. Rejected operations are reported and the session goes on.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::info;

use crate::{
    account::AccountNumber,
    config::BankConfig,
    customer::NewCustomer,
    directory::{
        AccountSummary, Directory, DirectoryError, in_memory_directory::InMemoryDirectory,
    },
};
use menu::{MENU, MenuOption};
use printer::print_accounts;
use prompt::{
    InputError, Prompt, parse_account_number, parse_amount, parse_birth_date, required,
};

pub mod menu;
pub mod printer;
pub mod prompt;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl ShellError {
    /// Output failures end the session, everything else is reported.
    fn is_fatal(&self) -> bool {
        matches!(self, ShellError::Io(_) | ShellError::Csv(_))
    }
}

pub struct Shell<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub config: BankConfig,
}

impl<'w, R, W> Shell<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    pub fn run(self) -> Result<()> {
        let mut directory = InMemoryDirectory::new(self.config);
        let mut prompt = Prompt::new(self.input, self.output);

        loop {
            let selected = prompt
                .ask(MENU)
                .and_then(|answer| Ok(answer.parse::<MenuOption>()?))
                .and_then(|option| execute(&mut directory, &mut prompt, option));
            match selected {
                Ok(MenuOption::Exit) => break,
                Ok(_) => {}
                Err(ShellError::Input(InputError::EndOfInput)) => break,
                Err(err) if err.is_fatal() => {
                    return Err(err).context("Failed to write to the console");
                }
                Err(ShellError::Input(err @ InputError::UnknownOption { .. })) => {
                    prompt.say(format_args!("\n!!! {err} !!!"))?;
                }
                Err(err) => {
                    prompt.say(format_args!("\n!!! Operation failed! {err} !!!"))?;
                }
            }
        }
        prompt.say("\n=== Exiting system ===")?;
        info!("session closed");
        Ok(())
    }
}

fn execute<D, R, W>(
    directory: &mut D,
    prompt: &mut Prompt<'_, R, W>,
    option: MenuOption,
) -> Result<MenuOption, ShellError>
where
    D: Directory,
    R: BufRead,
    W: Write,
{
    match option {
        MenuOption::CreateCustomer => create_customer(directory, prompt)?,
        MenuOption::CreateAccount => create_account(directory, prompt)?,
        MenuOption::Deposit => deposit(directory, prompt)?,
        MenuOption::Withdraw => withdraw(directory, prompt)?,
        MenuOption::Statement => show_statement(directory, prompt)?,
        MenuOption::ListAccounts => {
            prompt.say("\n=== All Accounts ===")?;
            print_accounts(prompt.output(), directory.list_accounts().into_iter())?;
        }
        MenuOption::CustomerAccounts => customer_accounts(directory, prompt)?,
        MenuOption::Exit => {}
    }
    Ok(option)
}

fn create_customer<D, R, W>(
    directory: &mut D,
    prompt: &mut Prompt<'_, R, W>,
) -> Result<(), ShellError>
where
    D: Directory,
    R: BufRead,
    W: Write,
{
    prompt.say("\n=== Create New Customer ===")?;
    let name = required("name", prompt.ask("Full name: ")?)?;
    let birth_date = parse_birth_date(&prompt.ask("Birth date (DD-MM-YYYY): ")?)?;
    let tax_id = required("tax ID", prompt.ask("Tax ID: ")?)?;
    let address = prompt.ask("Address: ")?;

    directory.create_customer(NewCustomer {
        tax_id,
        name,
        birth_date,
        address,
    })?;
    prompt.say("\n=== Customer created successfully! ===")?;
    Ok(())
}

fn create_account<D, R, W>(
    directory: &mut D,
    prompt: &mut Prompt<'_, R, W>,
) -> Result<(), ShellError>
where
    D: Directory,
    R: BufRead,
    W: Write,
{
    prompt.say("\n=== Create New Account ===")?;
    let tax_id = prompt.ask("Customer tax ID: ")?;
    let account = directory.create_account(&tax_id)?;
    let (branch, number) = (account.branch().to_string(), account.number());
    let owner = directory
        .find_customer(&tax_id)
        .map(|c| c.name().to_string())
        .unwrap_or_default();

    prompt.say("\n=== Account created successfully! ===")?;
    prompt.say(format_args!(
        "Branch:\t{branch}\nAccount:\t{number}\nOwner:\t{owner}"
    ))?;
    Ok(())
}

fn deposit<D, R, W>(
    directory: &mut D,
    prompt: &mut Prompt<'_, R, W>,
) -> Result<(), ShellError>
where
    D: Directory,
    R: BufRead,
    W: Write,
{
    prompt.say("\n=== Deposit ===")?;
    let number = existing_account(directory, prompt)?;
    let amount = parse_amount(&prompt.ask("Amount to deposit: ")?)?;
    let balance = directory.deposit(number, amount)?.balance();
    prompt.say(format_args!(
        "\n=== Deposit successful! ===\nBalance: {balance:.2}"
    ))?;
    Ok(())
}

fn withdraw<D, R, W>(
    directory: &mut D,
    prompt: &mut Prompt<'_, R, W>,
) -> Result<(), ShellError>
where
    D: Directory,
    R: BufRead,
    W: Write,
{
    prompt.say("\n=== Withdraw ===")?;
    let number = existing_account(directory, prompt)?;
    let amount = parse_amount(&prompt.ask("Amount to withdraw: ")?)?;
    let balance = directory.withdraw(number, amount)?.balance();
    prompt.say(format_args!(
        "\n=== Withdrawal successful! ===\nBalance: {balance:.2}"
    ))?;
    Ok(())
}

fn show_statement<D, R, W>(
    directory: &D,
    prompt: &mut Prompt<'_, R, W>,
) -> Result<(), ShellError>
where
    D: Directory,
    R: BufRead,
    W: Write,
{
    prompt.say("\n=== Bank Statement ===")?;
    let number = parse_account_number(&prompt.ask("Account number: ")?)?;
    let statement = directory.show_statement(number)?;
    prompt.say(statement)?;
    Ok(())
}

fn customer_accounts<D, R, W>(
    directory: &D,
    prompt: &mut Prompt<'_, R, W>,
) -> Result<(), ShellError>
where
    D: Directory,
    R: BufRead,
    W: Write,
{
    prompt.say("\n=== Customer Accounts ===")?;
    let tax_id = prompt.ask("Customer tax ID: ")?;
    let owner = directory
        .find_customer(&tax_id)
        .map(|c| c.name().to_string())
        .unwrap_or_default();
    let accounts: Vec<_> = directory
        .customer_accounts(&tax_id)?
        .into_iter()
        .map(|acc| AccountSummary::new(acc, &owner))
        .collect();
    print_accounts(prompt.output(), accounts.into_iter())
}

/// Asks for an account number and fails early when it is unknown, before the
/// amount is requested.
fn existing_account<D, R, W>(
    directory: &D,
    prompt: &mut Prompt<'_, R, W>,
) -> Result<AccountNumber, ShellError>
where
    D: Directory,
    R: BufRead,
    W: Write,
{
    let number = parse_account_number(&prompt.ask("Account number: ")?)?;
    if directory.find_account(number).is_none() {
        return Err(DirectoryError::AccountNotFound { number }.into());
    }
    Ok(number)
}
