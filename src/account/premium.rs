//! Premium account variant
//!
//! Adds an overdraft facility on top of the shared account behavior: the
//! balance may run negative down to the limit, availability includes the
//! unused headroom, and closure is refused while the account is overdrawn.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::core::{AccountCore, BalanceSummary};
use super::BankAccount;
use crate::domain::{DomainError, OverdraftLimit};

/// An account with an overdraft facility.
///
/// Opened through
/// [`Ledger::open_premium`](crate::registry::Ledger::open_premium).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumAccount {
    core: AccountCore,

    /// How far below zero the balance may go
    overdraft_limit: OverdraftLimit,

    /// Set once at opening: true iff the initial limit was nonzero. Later
    /// limit changes do not touch it.
    has_overdraft: bool,
}

impl PremiumAccount {
    pub(crate) fn new(core: AccountCore, initial_overdraft: OverdraftLimit) -> Self {
        Self {
            core,
            has_overdraft: !initial_overdraft.is_zero(),
            overdraft_limit: initial_overdraft,
        }
    }

    /// Replace the overdraft limit.
    ///
    /// # Errors
    /// `DomainError::InvalidAmount` if `new_limit < 0`; the limit is left
    /// unchanged. The `has_overdraft` flag is never adjusted here.
    pub fn set_overdraft_limit(&mut self, new_limit: Decimal) -> Result<(), DomainError> {
        let limit = OverdraftLimit::new(new_limit)?;

        tracing::debug!(
            account = %self.core.number(),
            old = %self.overdraft_limit,
            new = %limit,
            "overdraft limit changed"
        );
        self.overdraft_limit = limit;
        Ok(())
    }

    /// Whether the account was opened with a facility.
    pub fn has_overdraft(&self) -> bool {
        self.has_overdraft
    }
}

impl BankAccount for PremiumAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AccountCore {
        &mut self.core
    }

    fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit.value()
    }

    fn balance_summary(&self) -> BalanceSummary {
        let balance = self.balance();

        if !self.has_overdraft {
            return BalanceSummary::Standard { balance };
        }

        let limit = self.overdraft_limit.value();
        let remaining = if balance < Decimal::ZERO {
            limit + balance
        } else {
            limit
        };

        BalanceSummary::Overdraft {
            balance,
            limit,
            remaining,
        }
    }
}

impl fmt::Display for PremiumAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The account name is {}. The available balance is £{:.2}. \
             There is an overdraft of £{:.2}.",
            self.core.holder_name(),
            self.available_balance(),
            self.overdraft_limit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Ledger;
    use rust_decimal_macros::dec;

    fn open(balance: Decimal, limit: Decimal) -> PremiumAccount {
        Ledger::new().open_premium("Bob", balance, OverdraftLimit::new(limit).unwrap())
    }

    #[test]
    fn test_available_includes_overdraft() {
        let account = open(dec!(50), dec!(100));
        assert_eq!(account.available_balance(), dec!(150));
        assert_eq!(account.balance(), dec!(50));
    }

    #[test]
    fn test_withdraw_into_overdraft() {
        let mut account = open(dec!(0), dec!(100));
        let new_balance = account.withdraw(dec!(80)).unwrap();

        assert_eq!(new_balance, dec!(-80));
        assert_eq!(account.available_balance(), dec!(20));
    }

    #[test]
    fn test_withdraw_beyond_overdraft_rejected() {
        let mut account = open(dec!(0), dec!(100));
        let err = account.withdraw(dec!(100.01)).unwrap_err();

        assert!(matches!(err, DomainError::InsufficientFunds { .. }));
        assert_eq!(account.balance(), dec!(0));
    }

    #[test]
    fn test_has_overdraft_set_at_opening() {
        assert!(open(dec!(0), dec!(100)).has_overdraft());
        assert!(!open(dec!(0), dec!(0)).has_overdraft());
    }

    #[test]
    fn test_set_overdraft_limit() {
        let mut account = open(dec!(0), dec!(100));
        account.set_overdraft_limit(dec!(250)).unwrap();

        assert_eq!(BankAccount::overdraft_limit(&account), dec!(250));
        assert_eq!(account.available_balance(), dec!(250));
    }

    #[test]
    fn test_set_overdraft_limit_negative_rejected() {
        let mut account = open(dec!(0), dec!(100));
        let err = account.set_overdraft_limit(dec!(-10)).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(BankAccount::overdraft_limit(&account), dec!(100));
    }

    #[test]
    fn test_limit_change_does_not_touch_flag() {
        let mut account = open(dec!(0), dec!(0));
        account.set_overdraft_limit(dec!(500)).unwrap();

        // Flag reflects the opening facility only
        assert!(!account.has_overdraft());
        assert!(matches!(
            account.balance_summary(),
            BalanceSummary::Standard { .. }
        ));
    }

    #[test]
    fn test_summary_overdrawn_shows_headroom() {
        let mut account = open(dec!(0), dec!(100));
        account.withdraw(dec!(30)).unwrap();

        assert_eq!(
            account.balance_summary(),
            BalanceSummary::Overdraft {
                balance: dec!(-30),
                limit: dec!(100),
                remaining: dec!(70),
            }
        );
    }

    #[test]
    fn test_summary_in_credit_shows_full_limit() {
        let account = open(dec!(40), dec!(100));

        assert_eq!(
            account.balance_summary(),
            BalanceSummary::Overdraft {
                balance: dec!(40),
                limit: dec!(100),
                remaining: dec!(100),
            }
        );
    }

    #[test]
    fn test_close_refused_while_overdrawn() {
        let mut account = open(dec!(0), dec!(100));
        account.withdraw(dec!(80)).unwrap();

        let err = account.close().unwrap_err();
        assert_eq!(err, DomainError::overdrawn(dec!(80)));
        assert_eq!(account.balance(), dec!(-80));
    }

    #[test]
    fn test_close_after_repaying_debt() {
        let mut account = open(dec!(0), dec!(100));
        account.withdraw(dec!(80)).unwrap();
        account.deposit(dec!(80)).unwrap();

        assert_eq!(account.close().unwrap(), dec!(0));
    }

    #[test]
    fn test_close_drains_positive_balance() {
        let mut account = open(dec!(60), dec!(100));
        assert_eq!(account.close().unwrap(), dec!(60));
        assert_eq!(account.balance(), dec!(0));
    }
}
