use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    str::FromStr,
};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::account::AccountNumber;

use super::ShellError;

pub const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("`{input}` is not a valid amount")]
    InvalidAmount { input: String },
    #[error("`{input}` is not a valid account number")]
    InvalidAccountNumber { input: String },
    #[error("`{input}` is not a valid date, expected DD-MM-YYYY")]
    InvalidDate { input: String },
    #[error("Invalid option `{input}`")]
    UnknownOption { input: String },
    #[error("Unexpected end of input")]
    EndOfInput,
}

/// Line-oriented console: writes a label, reads the answer.
pub struct Prompt<'w, R, W> {
    input: R,
    output: &'w mut W,
}

impl<'w, R, W> Prompt<'w, R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: &'w mut W) -> Self {
        Self { input, output }
    }

    /// Returns the trimmed answer. Fails with [`InputError::EndOfInput`] once
    /// the input is exhausted.
    pub fn ask(&mut self, label: &str) -> Result<String, ShellError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::EndOfInput.into());
        }
        Ok(line.trim().to_string())
    }

    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    pub fn output(&mut self) -> &mut W {
        &mut *self.output
    }
}

pub fn required(field: &'static str, input: String) -> Result<String, InputError> {
    if input.is_empty() {
        Err(InputError::Empty { field })
    } else {
        Ok(input)
    }
}

/// Sign is kept, the account decides whether the amount is acceptable.
pub fn parse_amount(input: &str) -> Result<Decimal, InputError> {
    Decimal::from_str(input).map_err(|_| InputError::InvalidAmount {
        input: input.to_string(),
    })
}

pub fn parse_account_number(input: &str) -> Result<AccountNumber, InputError> {
    input
        .parse()
        .map_err(|_| InputError::InvalidAccountNumber {
            input: input.to_string(),
        })
}

pub fn parse_birth_date(input: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(input, BIRTH_DATE_FORMAT).map_err(|_| InputError::InvalidDate {
        input: input.to_string(),
    })
}
