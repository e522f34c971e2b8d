//! Amount and balance types
//!
//! Domain primitives for monetary values. Operation amounts are validated at
//! construction time, ensuring invalid values cannot reach the account
//! arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amount represents a validated operation amount (a deposit or withdrawal).
///
/// # Invariants
/// - Value is always strictly positive (> 0)
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use passbook::domain::Amount;
///
/// let amount = Amount::new(Decimal::new(100, 0)).unwrap();
/// assert_eq!(amount.value(), Decimal::new(100, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(Decimal);

/// Errors that can occur when validating a monetary value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount must be a positive value (got {0})")]
    NotPositive(Decimal),

    #[error("value must not be negative (got {0})")]
    Negative(Decimal),

    #[error("invalid amount format: {0}")]
    Parse(String),
}

impl Amount {
    /// Create a new Amount with validation.
    ///
    /// # Errors
    /// - `AmountError::NotPositive` if value <= 0
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive(value));
        }

        Ok(Self(value))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s).map_err(|e| AmountError::Parse(e.to_string()))?;
        Amount::new(decimal)
    }
}

impl TryFrom<String> for Amount {
    type Error = AmountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Amount::from_str(&value)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        format!("{:.2}", amount.0)
    }
}

/// OverdraftLimit represents a validated overdraft facility size.
///
/// Unlike [`Amount`] it may be zero (no facility), but it can never be
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OverdraftLimit(Decimal);

impl OverdraftLimit {
    /// Create a new limit (zero or positive).
    ///
    /// # Errors
    /// - `AmountError::Negative` if value < 0
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            return Err(AmountError::Negative(value));
        }

        Ok(Self(value))
    }

    /// A zero limit (no overdraft facility).
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for OverdraftLimit {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for OverdraftLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Balance represents an account's running balance.
///
/// A balance is signed: it goes negative when an overdraft facility is drawn
/// on. The floor (`-overdraft_limit`) is enforced by withdrawal validation,
/// not here, so opening balances are stored exactly as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Balance(Decimal);

impl Balance {
    /// Create a balance with the given value, stored as-is.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a zero balance.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Add a validated amount to the balance.
    pub fn credit(&self, amount: &Amount) -> Balance {
        Self(self.0 + amount.value())
    }

    /// Subtract a validated amount from the balance.
    pub fn debit(&self, amount: &Amount) -> Balance {
        Self(self.0 - amount.value())
    }

    /// Check whether the balance is below zero.
    pub fn is_overdrawn(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self::zero()
    }
}
