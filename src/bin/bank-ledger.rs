use std::{fs::File, io::BufReader};

use anyhow::{Context, Result};
use bank_ledger::{config::BankConfig, shell::Shell};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout belongs to the shell
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout();
    match std::env::args().nth(1) {
        Some(filename) => {
            let file =
                File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;
            Shell {
                input: BufReader::new(file),
                output: &mut stdout,
                config: BankConfig::default(),
            }
            .run()
        }
        None => Shell {
            input: std::io::stdin().lock(),
            output: &mut stdout,
            config: BankConfig::default(),
        }
        .run(),
    }
}
