use std::io::Write;

use csv::Writer;

use crate::directory::AccountSummary;

use super::ShellError;

/// Writes the accounts as CSV, with a `branch,number,owner,balance` header.
pub fn print_accounts<W>(
    output: &mut W,
    accounts: impl Iterator<Item = AccountSummary>,
) -> Result<(), ShellError>
where
    W: Write,
{
    let mut writer = Writer::from_writer(&mut *output);
    let mut empty = true;
    for acc in accounts {
        writer.serialize(acc)?;
        empty = false;
    }
    writer.flush()?;
    drop(writer);
    if empty {
        writeln!(output, "No accounts.")?;
    }
    Ok(())
}
