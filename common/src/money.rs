//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Amount of money in US dollars, the currency listings are priced in.
///
/// Deserializes from both JSON strings (`"350000.00"`) and numbers.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount, meaning "price on application" for listings.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Money`] out of the provided `amount`.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the amount of this [`Money`].
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Indicates whether this [`Money`] is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns a compact label of this [`Money`] in thousands (`$350k`), or
    /// `POA` if the amount is zero.
    #[must_use]
    pub fn short(self) -> String {
        if self.is_zero() {
            return "POA".to_owned();
        }
        let thousands = (self.0 / Decimal::ONE_THOUSAND)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("${}k", thousands.normalize())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0.round_dp(2);
        let sign = if amount.is_sign_negative() { "-" } else { "" };
        let amount = amount.abs();

        let units = amount.trunc().normalize().to_string();
        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, digit) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        if amount.fract().is_zero() {
            write!(f, "{sign}${grouped}")
        } else {
            let cents = (amount.fract() * Decimal::ONE_HUNDRED).trunc();
            write!(f, "{sign}${grouped}.{cents:0>2}")
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s
            .trim()
            .trim_start_matches('$')
            .chars()
            .filter(|c| *c != ',')
            .collect::<String>();
        if cleaned.is_empty() {
            return Err("empty amount");
        }
        Decimal::from_str(&cleaned)
            .map(Self)
            .map_err(|_| "invalid amount")
    }
}
