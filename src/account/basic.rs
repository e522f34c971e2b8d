//! Basic account variant
//!
//! No overdraft facility: withdrawals are checked against the raw balance,
//! so the balance never goes negative and closure always succeeds.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::core::AccountCore;
use super::BankAccount;

/// A basic account with no overdraft facility.
///
/// Opened through [`Ledger::open_basic`](crate::registry::Ledger::open_basic).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicAccount {
    core: AccountCore,
}

impl BasicAccount {
    pub(crate) fn new(core: AccountCore) -> Self {
        Self { core }
    }
}

impl BankAccount for BasicAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AccountCore {
        &mut self.core
    }
}

impl fmt::Display for BasicAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The account name is {}. The available balance is £{:.2}. \
             There is no overdraft facility as this is a Basic Account.",
            self.core.holder_name(),
            self.available_balance()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::BalanceSummary;
    use crate::domain::DomainError;
    use crate::registry::Ledger;
    use rust_decimal_macros::dec;

    fn open(balance: rust_decimal::Decimal) -> BasicAccount {
        Ledger::new().open_basic("Alice", balance)
    }

    #[test]
    fn test_deposit_positive() {
        let mut account = open(dec!(100));
        account.deposit(dec!(50)).unwrap();
        assert_eq!(account.balance(), dec!(150));
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut account = open(dec!(100));

        assert!(account.deposit(dec!(0)).unwrap_err().is_validation());
        assert!(account.deposit(dec!(-5)).unwrap_err().is_validation());
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_withdraw_within_balance() {
        let mut account = open(dec!(100));
        let new_balance = account.withdraw(dec!(30)).unwrap();

        assert_eq!(new_balance, dec!(70));
        assert_eq!(account.balance(), dec!(70));
    }

    #[test]
    fn test_withdraw_exceeding_balance() {
        let mut account = open(dec!(100));
        let err = account.withdraw(dec!(100.01)).unwrap_err();

        assert!(matches!(err, DomainError::InsufficientFunds { .. }));
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_withdraw_rejects_non_positive() {
        let mut account = open(dec!(100));

        assert!(account.withdraw(dec!(0)).unwrap_err().is_validation());
        assert!(account.withdraw(dec!(-1)).unwrap_err().is_validation());
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_available_equals_balance() {
        let account = open(dec!(42.42));
        assert_eq!(account.available_balance(), account.balance());
    }

    #[test]
    fn test_summary_has_no_overdraft() {
        let account = open(dec!(10));
        assert_eq!(
            account.balance_summary(),
            BalanceSummary::Standard { balance: dec!(10) }
        );
    }

    #[test]
    fn test_close_zero_balance() {
        let mut account = open(dec!(0));
        assert_eq!(account.close().unwrap(), dec!(0));
        assert_eq!(account.balance(), dec!(0));
    }

    #[test]
    fn test_close_drains_positive_balance() {
        let mut account = open(dec!(75.25));
        assert_eq!(account.close().unwrap(), dec!(75.25));
        assert_eq!(account.balance(), dec!(0));
    }
}
