//! passbook
//!
//! An in-process bank-account model: deposits, withdrawals, overdraft-aware
//! balance queries, card issuance, and account closure. Accounts are opened
//! through a [`Ledger`], which hands out sequential account numbers shared
//! across both variants.
//!
//! ```
//! use passbook::{BankAccount, Ledger};
//! use rust_decimal::Decimal;
//!
//! let ledger = Ledger::new();
//! let mut account = ledger.open_basic("Alice", Decimal::new(10000, 2));
//!
//! account.deposit(Decimal::new(5000, 2)).unwrap();
//! assert_eq!(account.balance(), Decimal::new(15000, 2));
//! assert_eq!(account.account_number().value(), 1);
//! ```

pub mod account;
pub mod domain;
pub mod registry;

pub use account::{AccountNumber, BalanceSummary, BankAccount, BasicAccount, PremiumAccount};
pub use domain::{Amount, AmountError, Balance, Card, CardExpiry, DomainError, OverdraftLimit};
pub use registry::Ledger;
