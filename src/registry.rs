//! Account ledger
//!
//! `Ledger` is the factory through which every account is opened. It owns
//! the process-wide sequential account-number counter, shared across both
//! variants. The counter is atomic so concurrent opens still produce unique,
//! monotonically assigned numbers.

use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::account::core::{AccountCore, AccountNumber};
use crate::account::{BasicAccount, PremiumAccount};
use crate::domain::OverdraftLimit;

/// Factory for opening accounts with sequential numbering from 1.
#[derive(Debug)]
pub struct Ledger {
    next_number: AtomicU64,
}

impl Ledger {
    /// Create a ledger whose first account will be number 1.
    pub fn new() -> Self {
        Self {
            next_number: AtomicU64::new(1),
        }
    }

    fn allocate(&self) -> AccountNumber {
        AccountNumber::new(self.next_number.fetch_add(1, Ordering::Relaxed))
    }

    /// Open a basic account. The opening balance is stored as-is.
    pub fn open_basic(&self, holder_name: impl Into<String>, opening_balance: Decimal) -> BasicAccount {
        let core = AccountCore::open(self.allocate(), holder_name.into(), opening_balance);

        tracing::info!(
            account = %core.number(),
            holder = core.holder_name(),
            balance = %core.balance(),
            "basic account opened"
        );
        BasicAccount::new(core)
    }

    /// Open a premium account with an overdraft facility. A zero limit opens
    /// the account with the facility flag unset.
    pub fn open_premium(
        &self,
        holder_name: impl Into<String>,
        opening_balance: Decimal,
        initial_overdraft: OverdraftLimit,
    ) -> PremiumAccount {
        let core = AccountCore::open(self.allocate(), holder_name.into(), opening_balance);

        tracing::info!(
            account = %core.number(),
            holder = core.holder_name(),
            balance = %core.balance(),
            overdraft = %initial_overdraft,
            "premium account opened"
        );
        PremiumAccount::new(core, initial_overdraft)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
