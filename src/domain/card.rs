//! Payment card type
//!
//! A card is a 16-digit number plus an (MM, YY) expiry. Accounts start with
//! an unissued all-zero card; issuance replaces it with freshly drawn random
//! digits and an expiry three years out.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a card number in decimal digits
pub const CARD_NUMBER_LEN: usize = 16;

/// How many years from issuance a card stays valid
const CARD_VALIDITY_YEARS: i32 = 3;

/// Card expiry in (month, two-digit year) form.
///
/// An unissued card carries `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardExpiry {
    pub month: u32,
    pub year: u32,
}

impl fmt::Display for CardExpiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year)
    }
}

/// A payment card attached to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    number: String,
    expiry: CardExpiry,
}

impl Card {
    /// The placeholder card every account starts with: all-zero number,
    /// `(0, 0)` expiry.
    pub fn unissued() -> Self {
        Self {
            number: "0".repeat(CARD_NUMBER_LEN),
            expiry: CardExpiry { month: 0, year: 0 },
        }
    }

    /// Issue a new card dated from `today`.
    ///
    /// Each of the 16 digits is drawn uniformly from 0-9 (a leading zero is
    /// allowed; this is not a Luhn-valid PAN). Expiry is the issue month and
    /// the issue year's last two digits plus three, with no century wrap.
    pub fn issue<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Self {
        let number: String = (0..CARD_NUMBER_LEN)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();

        let expiry = CardExpiry {
            month: today.month(),
            year: (today.year().rem_euclid(100) + CARD_VALIDITY_YEARS) as u32,
        };

        Self { number, expiry }
    }

    /// The full 16-digit number.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn expiry(&self) -> CardExpiry {
        self.expiry
    }

    /// Whether a real card has been issued yet.
    pub fn is_issued(&self) -> bool {
        self.expiry != (CardExpiry { month: 0, year: 0 })
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::unissued()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the last four digits are shown
        let tail = &self.number[CARD_NUMBER_LEN - 4..];
        write!(f, "**** **** **** {} (exp {})", tail, self.expiry)
    }
}
