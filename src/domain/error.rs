//! Domain error types
//!
//! Every failure an account operation can report. All of these are local to
//! the invoked operation and leave account state untouched; nothing here is
//! fatal.

use rust_decimal::Decimal;
use thiserror::Error;

use super::AmountError;

/// Domain-specific errors raised by account operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Amount failed validation (non-positive deposit/withdrawal, negative
    /// overdraft limit, unparseable input)
    #[error(transparent)]
    InvalidAmount(#[from] AmountError),

    /// Withdrawal exceeds the available balance
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Closure refused because the account is overdrawn
    #[error("cannot close account while overdrawn by {debt}")]
    Overdrawn { debt: Decimal },
}

impl DomainError {
    /// Create an insufficient funds error
    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    /// Create an overdrawn-closure error; `debt` is the positive magnitude
    pub fn overdrawn(debt: Decimal) -> Self {
        Self::Overdrawn { debt }
    }

    /// Check if this is an input-validation failure rather than a business
    /// refusal (insufficient funds, overdrawn closure)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }
}
