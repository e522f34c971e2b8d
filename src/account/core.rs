//! Shared account record
//!
//! `AccountCore` holds the fields common to both account variants. The
//! variants wrap it and the [`BankAccount`](super::BankAccount) trait drives
//! its mutation primitives, so balance changes only happen through validated
//! amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{Amount, Balance, Card};

/// Sequential account identifier, unique across all variants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AccountNumber(u64);

impl AccountNumber {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields shared by every account variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountCore {
    /// Account holder's name, immutable after opening
    holder_name: String,

    /// Sequential account number assigned at opening
    number: AccountNumber,

    /// Current balance
    balance: Balance,

    /// Attached payment card (all-zero until issued)
    card: Card,
}

impl AccountCore {
    /// Build the shared record for a newly opened account. The opening
    /// balance is stored as-is; there is no positivity check at opening.
    pub(crate) fn open(number: AccountNumber, holder_name: String, opening_balance: Decimal) -> Self {
        Self {
            holder_name,
            number,
            balance: Balance::new(opening_balance),
            card: Card::unissued(),
        }
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub(crate) fn credit(&mut self, amount: &Amount) {
        self.balance = self.balance.credit(amount);
    }

    pub(crate) fn debit(&mut self, amount: &Amount) {
        self.balance = self.balance.debit(amount);
    }

    pub(crate) fn replace_card(&mut self, card: Card) {
        self.card = card;
    }
}

/// Structured balance report.
///
/// The original model printed one of three advisory lines; callers here get
/// the figures and render them however they like (`Display` reproduces the
/// advisory text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BalanceSummary {
    /// No overdraft facility on the account
    Standard { balance: Decimal },

    /// Facility present; `remaining` is `limit + balance` while overdrawn
    /// and the full `limit` otherwise
    Overdraft {
        balance: Decimal,
        limit: Decimal,
        remaining: Decimal,
    },
}

impl BalanceSummary {
    pub fn balance(&self) -> Decimal {
        match self {
            Self::Standard { balance } | Self::Overdraft { balance, .. } => *balance,
        }
    }
}

impl fmt::Display for BalanceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard { balance } => {
                write!(
                    f,
                    "The balance of the account is £{balance:.2}. An overdraft is not available."
                )
            }
            Self::Overdraft {
                balance,
                limit,
                remaining,
            } => {
                write!(
                    f,
                    "The balance of the account is £{balance:.2}. An overdraft is available \
                     which is £{limit:.2}. The overdraft remaining is £{remaining:.2}."
                )
            }
        }
    }
}
