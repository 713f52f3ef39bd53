use crate::account::WithdrawalPolicy;

pub const DEFAULT_BRANCH: &str = "0001";

/// Settings applied to every account the directory opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankConfig {
    pub branch: String,
    /// `None` opens uncapped accounts.
    pub withdrawal_policy: Option<WithdrawalPolicy>,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            withdrawal_policy: Some(WithdrawalPolicy::default()),
        }
    }
}
