//! Domain module
//!
//! Core domain types and business logic.

pub mod amount;
pub mod card;
pub mod error;

pub use amount::{Amount, AmountError, Balance, OverdraftLimit};
pub use card::{Card, CardExpiry, CARD_NUMBER_LEN};
pub use error::DomainError;
