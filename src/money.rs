//! Fixed-point monetary type with 2 decimal places precision.
//!
//! Uses `rust_decimal` internally with scale enforcement so balance
//! arithmetic never accumulates floating-point errors. The comparison
//! tolerance exists for allocation sums only: equal splits may lose up
//! to a cent cumulatively (100.00 / 3 yields 33.33 per head).

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A monetary amount held at exactly 2 decimal places.
///
/// Wraps `rust_decimal::Decimal` and rescales after every operation so
/// all amounts in the system share a single scale.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use tripsplit::Money;
///
/// let amount = Money::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Allocation sums are accepted when they differ from the expense
    /// amount by no more than one cent.
    pub const TOLERANCE: Self = Money(Decimal::from_parts(1, 0, 0, false, 2));

    /// Creates a new `Money` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        Money(value.round_dp(Self::SCALE))
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if this value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Divides the amount evenly into `parts`, rounding to 2 places.
    ///
    /// Remainders are not redistributed: the shares of an uneven split
    /// sum to within [`Money::TOLERANCE`] of the original amount, not
    /// necessarily to it exactly.
    ///
    /// # Panics
    ///
    /// Panics if `parts` is zero. Callers validate the participant
    /// count before dividing (see `split::equal_split`).
    pub fn split_even(&self, parts: usize) -> Self {
        assert!(parts > 0, "split_even requires at least one part");
        Money::new(self.0 / Decimal::from(parts as u64))
    }

}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money::new(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money::new(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:.2}", self.0))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_normalizes_scale() {
        let m = Money::from_str("1.0").unwrap();
        assert_eq!(m.to_string(), "1.00");

        let m = Money::from_str("1.5").unwrap();
        assert_eq!(m.to_string(), "1.50");

        let m = Money::from_str("1.57").unwrap();
        assert_eq!(m.to_string(), "1.57");

        let m = Money::from_str("  2.5  ").unwrap();
        assert_eq!(m.to_string(), "2.50");
    }

    #[test]
    fn test_arithmetic_preserves_scale() {
        let a = Money::from_str("1.5").unwrap();
        let b = Money::from_str("2.5").unwrap();

        assert_eq!((a + b).to_string(), "4.00");
        assert_eq!((b - a).to_string(), "1.00");
    }

    #[test]
    fn test_tolerance_is_one_cent() {
        assert_eq!(Money::TOLERANCE.to_string(), "0.01");
    }

    #[test]
    fn test_split_even_exact() {
        let m = Money::from_str("180.00").unwrap();
        assert_eq!(m.split_even(3).to_string(), "60.00");
    }

    #[test]
    fn test_split_even_rounds_and_loses_remainder() {
        let m = Money::from_str("100.00").unwrap();
        let share = m.split_even(3);
        assert_eq!(share.to_string(), "33.33");

        let total = share + share + share;
        let drift = (m - total).abs();
        assert!(drift <= Money::TOLERANCE);
    }

    #[test]
    fn test_negative_values() {
        let positive = Money::from_str("1.0").unwrap();
        let negative = Money::from_str("-1.0").unwrap();

        assert_eq!((positive - negative).to_string(), "2.00");
        assert_eq!((-positive).to_string(), "-1.00");
        assert!(negative.is_negative());
        assert!(!positive.is_negative());
        assert_eq!(negative.abs(), positive);
    }

    #[test]
    fn test_sum_over_iterator() {
        let amounts = ["10.00", "0.50", "4.25"]
            .iter()
            .map(|s| Money::from_str(s).unwrap());
        assert_eq!(amounts.sum::<Money>().to_string(), "14.75");
    }
}
