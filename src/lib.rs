/// Account balance and withdrawal rules.
/// Balance only changes through [`transaction::Transaction::register`].
pub mod account;

/// Deposit and withdrawal values that apply themselves to an account and
/// record themselves in its history when accepted.
pub mod transaction;

/// Append-only, timestamped log of the transactions applied to an account.
pub mod history;

/// Customer identity and the accounts it owns.
pub mod customer;

/// Branch code and withdrawal policy given to newly opened accounts.
pub mod config;

/// Directory interface, plus "in memory" implementation.
/// Resolves customers and accounts and routes transactions to them.
pub mod directory;

/// Console front end. Kept in the library so that integration tests can
/// drive a whole session.
pub mod shell;
