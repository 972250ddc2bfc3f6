//! Amount type for budgets and allocations
//!
//! Sliders move in whole currency units, so amounts are stored as an unsigned
//! count of units. A negative allocation cannot be represented at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A non-negative amount of whole currency units
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Create an amount from whole units
    ///
    /// # Examples
    /// ```
    /// use allot::models::Amount;
    /// let amount = Amount::new(30);
    /// assert_eq!(amount.units(), 30);
    /// ```
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Largest representable amount
    pub const MAX: Amount = Amount(u64::MAX);

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Subtract, stopping at zero
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Add, stopping at `u64::MAX`
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// This amount's share of `excess`, proportional to `self / whole`
    ///
    /// Rounds half up, so `30 / 80 * 20 = 7.5` becomes 8. Returns zero when
    /// `whole` is zero.
    pub fn proportional_share(&self, whole: Amount, excess: Amount) -> Amount {
        if whole.is_zero() {
            return Amount::zero();
        }
        let numerator = (self.0 as u128)
            .checked_mul(2 * excess.0 as u128)
            .and_then(|n| n.checked_add(whole.0 as u128));
        match numerator {
            Some(n) => {
                let share = n / (2 * whole.0 as u128);
                Amount(u64::try_from(share).unwrap_or(u64::MAX))
            }
            None => {
                let share = (self.0 as f64 / whole.0 as f64) * excess.0 as f64;
                Amount(share.round() as u64)
            }
        }
    }

    /// Parse an amount from raw user input
    ///
    /// Accepts plain numbers with an optional leading `+` and an optional
    /// fractional part, which is truncated: "30", " 30 ", "30.9", "+4".
    /// An empty string parses as zero. Negative numbers are rejected.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::zero());
        }

        if let Some(rest) = s.strip_prefix('-') {
            if rest.trim().is_empty() {
                return Err(AmountParseError::InvalidFormat(s.to_string()));
            }
            // Only a well-formed number counts as negative; "-abc" is just invalid
            return match Self::parse(rest) {
                Ok(amount) if amount.is_zero() => Ok(amount),
                Ok(_) => Err(AmountParseError::Negative(s.to_string())),
                Err(_) => Err(AmountParseError::InvalidFormat(s.to_string())),
            };
        }
        let s = s.strip_prefix('+').unwrap_or(s);

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }

        if whole.is_empty() {
            return Ok(Self::zero());
        }

        whole
            .parse::<u64>()
            .map(Self)
            .map_err(|_| AmountParseError::TooLarge(s.to_string()))
    }

    /// Parse raw input, substituting `fallback` for anything unusable
    ///
    /// Never fails: invalid and negative input become `fallback`. A number
    /// too large for `u64` saturates to `u64::MAX` so callers can clamp it.
    pub fn coerce(raw: &str, fallback: Amount) -> Amount {
        match Self::parse(raw) {
            Ok(amount) => amount,
            Err(AmountParseError::TooLarge(_)) => Self::MAX,
            Err(_) => fallback,
        }
    }

    /// Format with a currency label, e.g. "70 USD"
    pub fn format_with_label(&self, label: &str) -> String {
        if label.is_empty() {
            self.0.to_string()
        } else {
            format!("{} {}", self.0, label)
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Amount {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

/// Addition saturates at `u64::MAX`
impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

/// Subtraction saturates at zero
impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.saturating_sub(other)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, other: Self) {
        *self = self.saturating_sub(other);
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
    Negative(String),
    TooLarge(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
            AmountParseError::Negative(s) => write!(f, "Amount cannot be negative: {}", s),
            AmountParseError::TooLarge(s) => write!(f, "Amount is too large: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("30").unwrap().units(), 30);
        assert_eq!(Amount::parse(" 200 ").unwrap().units(), 200);
        assert_eq!(Amount::parse("+4").unwrap().units(), 4);
        assert_eq!(Amount::parse("30.9").unwrap().units(), 30);
        assert_eq!(Amount::parse(".5").unwrap().units(), 0);
        assert_eq!(Amount::parse("").unwrap().units(), 0);
        assert_eq!(Amount::parse("-0").unwrap().units(), 0);
    }

    #[test]
    fn test_parse_rejects() {
        assert!(matches!(
            Amount::parse("abc"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Amount::parse("-5"),
            Err(AmountParseError::Negative(_))
        ));
        assert!(matches!(
            Amount::parse("-abc"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Amount::parse("99999999999999999999999"),
            Err(AmountParseError::TooLarge(_))
        ));
        assert!(Amount::parse("1.2.3").is_err());
        assert!(Amount::parse(".").is_err());
        assert!(Amount::parse("10 USD").is_err());
    }

    #[test]
    fn test_coerce() {
        let one = Amount::new(1);
        assert_eq!(Amount::coerce("abc", one), one);
        assert_eq!(Amount::coerce("-20", one), one);
        assert_eq!(Amount::coerce("250", one), Amount::new(250));
    }

    #[test]
    fn test_coerce_oversized_number_saturates() {
        let zero = Amount::zero();
        assert_eq!(Amount::coerce("99999999999999999999", zero), Amount::MAX);
        assert_eq!(Amount::coerce("18446744073709551616.5", zero), Amount::MAX);
        assert_eq!(
            Amount::coerce("18446744073709551615", zero),
            Amount::new(u64::MAX)
        );
        // Still negative, so still the fallback
        assert_eq!(Amount::coerce("-99999999999999999999", zero), zero);
    }

    #[test]
    fn test_proportional_share_rounds_half_up() {
        // 50 / 80 * 20 = 12.5
        assert_eq!(
            Amount::new(50).proportional_share(Amount::new(80), Amount::new(20)),
            Amount::new(13)
        );
        // 30 / 80 * 20 = 7.5
        assert_eq!(
            Amount::new(30).proportional_share(Amount::new(80), Amount::new(20)),
            Amount::new(8)
        );
        // 1 / 3 * 1 = 0.33
        assert_eq!(
            Amount::new(1).proportional_share(Amount::new(3), Amount::new(1)),
            Amount::zero()
        );
        assert_eq!(
            Amount::new(5).proportional_share(Amount::zero(), Amount::new(5)),
            Amount::zero()
        );
    }

    #[test]
    fn test_proportional_share_large_values() {
        let big = Amount::new(u64::MAX / 2);
        assert_eq!(big.proportional_share(big, Amount::new(7)), Amount::new(7));
    }

    #[test]
    fn test_proportional_share_overflow_fallback() {
        // v * 2 * excess does not fit in u128 for any of these
        assert_eq!(Amount::MAX.proportional_share(Amount::MAX, Amount::MAX), Amount::MAX);

        let excess = Amount::new(3 << 62);
        assert_eq!(Amount::MAX.proportional_share(Amount::MAX, excess), excess);

        // three quarters of the whole
        let share = Amount::new(3 << 62).proportional_share(Amount::MAX, Amount::MAX);
        assert!(share.units().abs_diff(u64::MAX / 4 * 3) <= 4096);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let a = Amount::new(10);
        let b = Amount::new(25);
        assert_eq!(a + b, Amount::new(35));
        assert_eq!(a - b, Amount::zero());
        assert_eq!(b - a, Amount::new(15));
        assert_eq!(Amount::MAX + a, Amount::MAX);

        let mut c = Amount::new(u64::MAX - 1);
        c += b;
        assert_eq!(c, Amount::MAX);
    }

    #[test]
    fn test_sum() {
        let amounts = [Amount::new(37), Amount::new(22), Amount::new(40)];
        let total: Amount = amounts.iter().sum();
        assert_eq!(total, Amount::new(99));

        let near_max = [Amount::MAX, Amount::new(5)];
        assert_eq!(near_max.iter().sum::<Amount>(), Amount::MAX);
    }

    #[test]
    fn test_format_with_label() {
        assert_eq!(Amount::new(70).format_with_label("USD"), "70 USD");
        assert_eq!(Amount::new(70).format_with_label(""), "70");
        assert_eq!(Amount::new(70).to_string(), "70");
    }

    #[test]
    fn test_serialization() {
        let a = Amount::new(42);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "42");
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
