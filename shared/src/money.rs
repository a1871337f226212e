//! Money arithmetic using rust_decimal for precision
//!
//! Amounts travel on the wire as plain JSON numbers already denominated
//! in the smallest conventionally displayed currency unit, so they are
//! held as `Decimal` end to end and never as a binary float.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decimal places of the smallest displayed currency unit.
///
/// The backend sends whole-unit amounts (e.g. `50000`), so monetary
/// rounding targets whole units.
pub const MINOR_UNIT_PLACES: u32 = 0;

/// Money construction error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Prices and totals are non-negative
    #[error("amount must be non-negative, got {0}")]
    Negative(Decimal),
}

/// A non-negative currency amount.
///
/// Serializes transparently as the underlying number, matching the
/// backend's wire format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Create a money value, rejecting negative amounts.
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a money value from a whole number of display units.
    pub fn from_units(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Wrap a decimal whose non-negativity is already established.
    pub(crate) const fn from_raw(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Round half-up to the minor unit.
    pub fn round_to_minor(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(MINOR_UNIT_PLACES, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Saturating addition (totals never overflow at POS scale, but the
    /// checked path keeps the arithmetic total-order safe).
    pub fn saturating_add(self, other: Money) -> Money {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::fmt::Display for Money {
    /// Formats with thousands grouping: `75000` renders as `75,000`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let normalized = self.0.normalize();
        let text = normalized.to_string();
        let (sign, unsigned) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.as_str()),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((i, d)) => (i, Some(d)),
            None => (unsigned, None),
        };

        let digits: Vec<char> = int_part.chars().collect();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.iter().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(*ch);
        }

        match frac_part {
            Some(frac) => write!(f, "{}{}.{}", sign, grouped, frac),
            None => write!(f, "{}{}", sign, grouped),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        assert!(Money::new(Decimal::from(-1)).is_err());
        assert!(Money::new(Decimal::ZERO).is_ok());
        assert!(Money::new(Decimal::from(50_000)).is_ok());
    }

    #[test]
    fn test_round_to_minor_half_up() {
        let half = Money::new(Decimal::new(5, 1)).unwrap(); // 0.5
        assert_eq!(half.round_to_minor(), Money::from_units(1));

        let below = Money::new(Decimal::new(49, 2)).unwrap(); // 0.49
        assert_eq!(below.round_to_minor(), Money::ZERO);

        let exact = Money::from_units(75_000);
        assert_eq!(exact.round_to_minor(), exact);
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_units(0).to_string(), "0");
        assert_eq!(Money::from_units(999).to_string(), "999");
        assert_eq!(Money::from_units(75_000).to_string(), "75,000");
        assert_eq!(Money::from_units(1_234_567).to_string(), "1,234,567");
    }

    #[test]
    fn test_display_keeps_fraction() {
        let m = Money::new(Decimal::new(123_456_75, 2)).unwrap(); // 123456.75
        assert_eq!(m.to_string(), "123,456.75");
    }

    #[test]
    fn test_serde_transparent_number() {
        let m: Money = serde_json::from_str("50000").unwrap();
        assert_eq!(m, Money::from_units(50_000));

        let json = serde_json::to_string(&Money::from_units(37_500)).unwrap();
        assert_eq!(json, "37500.0");
    }

    #[test]
    fn test_saturating_add() {
        let a = Money::from_units(100);
        let b = Money::from_units(250);
        assert_eq!(a.saturating_add(b), Money::from_units(350));
    }
}
