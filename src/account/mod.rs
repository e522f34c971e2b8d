//! Account module
//!
//! The two account variants and the `BankAccount` trait they share. Only one
//! level of specialisation exists (overdraft handling), so the variants are
//! thin wrappers over [`AccountCore`] and the trait carries the shared
//! behavior as default methods, with availability as the override hook.

pub mod basic;
pub mod core;
pub mod premium;

pub use basic::BasicAccount;
pub use core::{AccountCore, AccountNumber, BalanceSummary};
pub use premium::PremiumAccount;

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;

use crate::domain::{Amount, Card, DomainError};

/// Capability set shared by every account variant.
pub trait BankAccount {
    /// The shared record backing this account
    fn core(&self) -> &AccountCore;

    /// Mutable access for the default method implementations
    fn core_mut(&mut self) -> &mut AccountCore;

    /// Overdraft headroom added to the balance when checking withdrawals.
    /// Zero unless the variant carries a facility.
    fn overdraft_limit(&self) -> Decimal {
        Decimal::ZERO
    }

    /// Deposit a positive amount.
    ///
    /// # Errors
    /// `DomainError::InvalidAmount` if `amount <= 0`; the balance is left
    /// unchanged.
    fn deposit(&mut self, amount: Decimal) -> Result<(), DomainError> {
        let amount = Amount::new(amount)?;
        self.core_mut().credit(&amount);

        tracing::debug!(
            account = %self.core().number(),
            %amount,
            balance = %self.core().balance(),
            "deposit applied"
        );
        Ok(())
    }

    /// Withdraw a positive amount not exceeding the available balance.
    /// Returns the new balance on success.
    ///
    /// # Errors
    /// - `DomainError::InvalidAmount` if `amount <= 0`
    /// - `DomainError::InsufficientFunds` if `amount > available_balance()`
    ///
    /// The balance is left unchanged on every failure path.
    fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, DomainError> {
        let amount = Amount::new(amount)?;

        let available = self.available_balance();
        if amount.value() > available {
            return Err(DomainError::insufficient_funds(amount.value(), available));
        }

        self.core_mut().debit(&amount);
        let new_balance = self.core().balance().value();

        tracing::info!(
            account = %self.core().number(),
            holder = self.core().holder_name(),
            %amount,
            balance = %new_balance,
            "withdrawal applied"
        );
        Ok(new_balance)
    }

    /// Balance plus any overdraft headroom; what withdrawals are checked
    /// against.
    fn available_balance(&self) -> Decimal {
        self.core().balance().value() + self.overdraft_limit()
    }

    /// Raw balance, not including any overdraft.
    fn balance(&self) -> Decimal {
        self.core().balance().value()
    }

    fn holder_name(&self) -> &str {
        self.core().holder_name()
    }

    fn account_number(&self) -> AccountNumber {
        self.core().number()
    }

    fn card(&self) -> &Card {
        self.core().card()
    }

    /// Issue a new card dated today, replacing any prior card.
    fn issue_card<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.issue_card_at(rng, Utc::now().date_naive());
    }

    /// Issue a new card dated from an explicit date. Tests pair this with a
    /// seeded rng for deterministic numbers and expiries.
    fn issue_card_at<R: Rng + ?Sized>(&mut self, rng: &mut R, today: chrono::NaiveDate) {
        let card = Card::issue(rng, today);
        tracing::debug!(account = %self.core().number(), %card, "card issued");
        self.core_mut().replace_card(card);
    }

    /// Structured balance report for rendering.
    fn balance_summary(&self) -> BalanceSummary {
        BalanceSummary::Standard {
            balance: self.balance(),
        }
    }

    /// Close the account, draining any positive balance through
    /// [`withdraw`](Self::withdraw). Returns the amount paid out.
    ///
    /// # Errors
    /// `DomainError::Overdrawn` if the balance is negative; nothing is
    /// mutated and the account stays open. A basic account can never be
    /// overdrawn, so for it closure always succeeds.
    ///
    /// Closure is a point-in-time result: no closed flag is stored and later
    /// operations are not blocked.
    fn close(&mut self) -> Result<Decimal, DomainError> {
        let balance = self.balance();

        if balance < Decimal::ZERO {
            tracing::warn!(
                account = %self.core().number(),
                %balance,
                "closure refused while overdrawn"
            );
            return Err(DomainError::overdrawn(-balance));
        }

        if balance.is_zero() {
            tracing::info!(account = %self.core().number(), "account closed");
            return Ok(Decimal::ZERO);
        }

        self.withdraw(balance)?;
        tracing::info!(
            account = %self.core().number(),
            paid_out = %balance,
            "account closed"
        );
        Ok(balance)
    }
}
