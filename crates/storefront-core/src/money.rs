//! # Money Module
//!
//! Provides the `Money` type for prices shown on product cards.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The product API sends prices as JSON numbers:  { "price": 19.99 }      │
//! │  As an f64 that is 19.989999999999998... and 0.1 + 0.2 != 0.3           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "19.99" is parsed from its TEXT form straight into 1999 cents.       │
//! │    All sums (cart subtotal) are integer additions.                      │
//! │    Only the final display converts back to "$19.99".                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::parse_decimal("19.99").unwrap();
//! assert_eq!(price.cents(), 1999);
//! assert_eq!(price.to_string(), "$19.99");
//!
//! let line = price * 3;
//! assert_eq!(line.cents(), 5997);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Product.price ──┬──► Card label "$19.99"
///                 │
///                 └──► CartItem.unit_price ──► Cart.subtotal
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal amount in major units ("19.99", "5", "-0.5").
    ///
    /// ## Rounding
    /// Digits past the second decimal are rounded half away from zero:
    /// `"10.005"` → 1001 cents, `"10.004"` → 1000 cents.
    ///
    /// Exponent notation (`"1e3"`, produced by JSON encoders for very large
    /// or very small numbers) is accepted and rounded to the nearest cent.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("19.99").unwrap().cents(), 1999);
    /// assert_eq!(Money::parse_decimal("0.5").unwrap().cents(), 50);
    /// assert!(Money::parse_decimal("abc").is_err());
    /// ```
    pub fn parse_decimal(input: &str) -> Result<Money, ValidationError> {
        let text = input.trim();
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        if text.is_empty() {
            return Err(invalid("empty amount"));
        }

        if text.contains(['e', 'E']) {
            let value: f64 = text.parse().map_err(|_| invalid("not a number"))?;
            if !value.is_finite() || (value * 100.0).abs() > i64::MAX as f64 {
                return Err(invalid("amount out of range"));
            }
            return Ok(Money((value * 100.0).round() as i64));
        }

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("not a number"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("not a number"));
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|w| w.checked_mul(100))
                .ok_or_else(|| invalid("amount out of range"))?
        };

        let digit = |i: usize| -> i64 {
            fraction
                .as_bytes()
                .get(i)
                .map(|b| (b - b'0') as i64)
                .unwrap_or(0)
        };
        let mut frac_cents = digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            frac_cents += 1;
        }

        let cents = whole_cents
            .checked_add(frac_cents)
            .ok_or_else(|| invalid("amount out of range"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Multiplies money by a quantity, `None` on overflow.
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$12.34`, the format used on product cards.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Wire Format: Decimal Dollars
// =============================================================================

/// Serde adapter for prices sent as decimal major units.
///
/// Accepts a JSON number, a numeric string, `null`, or a missing field
/// (use together with `#[serde(default)]`). Serializes back to a JSON
/// number in dollars, for display consumers only.
pub mod dollars {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    use super::Money;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => Money::parse_decimal(&n.to_string())
                .map(Some)
                .map_err(D::Error::custom),
            Some(Value::String(s)) => Money::parse_decimal(&s)
                .map(Some)
                .map_err(D::Error::custom),
            Some(other) => Err(D::Error::custom(format!(
                "price must be a number, got {}",
                other
            ))),
        }
    }

    pub fn serialize<S>(price: &Option<Money>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match price {
            Some(m) => serializer.serialize_f64(m.cents() as f64 / 100.0),
            None => serializer.serialize_none(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_parse_decimal_plain() {
        assert_eq!(Money::parse_decimal("19.99").unwrap().cents(), 1999);
        assert_eq!(Money::parse_decimal("5").unwrap().cents(), 500);
        assert_eq!(Money::parse_decimal("5.").unwrap().cents(), 500);
        assert_eq!(Money::parse_decimal(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse_decimal("-2.25").unwrap().cents(), -225);
        assert_eq!(Money::parse_decimal(" 7.10 ").unwrap().cents(), 710);
    }

    #[test]
    fn test_parse_decimal_rounds_third_digit() {
        assert_eq!(Money::parse_decimal("10.005").unwrap().cents(), 1001);
        assert_eq!(Money::parse_decimal("10.004").unwrap().cents(), 1000);
        assert_eq!(Money::parse_decimal("0.999").unwrap().cents(), 100);
    }

    #[test]
    fn test_parse_decimal_exponent() {
        assert_eq!(Money::parse_decimal("1e3").unwrap().cents(), 100_000);
        assert_eq!(Money::parse_decimal("2.5E-1").unwrap().cents(), 25);
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert!(Money::parse_decimal("").is_err());
        assert!(Money::parse_decimal("-").is_err());
        assert!(Money::parse_decimal(".").is_err());
        assert!(Money::parse_decimal("1.2.3").is_err());
        assert!(Money::parse_decimal("12abc").is_err());
        assert!(Money::parse_decimal("99999999999999999999").is_err());
    }

    #[test]
    fn test_sum_and_multiply() {
        let total: Money = [Money::from_cents(100), Money::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), 350);
        assert_eq!((Money::from_cents(299) * 2).cents(), 598);
        assert_eq!(Money::from_cents(299).multiply_quantity(0), Money::zero());
    }

    #[test]
    fn test_huge_amounts_do_not_overflow() {
        let huge = Money::parse_decimal("90000000000000000").unwrap();

        assert_eq!(huge.checked_multiply_quantity(2), None);
        assert_eq!(huge.multiply_quantity(2).cents(), i64::MAX);
        assert_eq!((huge * 2).cents(), i64::MAX);
        assert_eq!((huge + huge).cents(), i64::MAX);
        assert_eq!(huge.checked_add(huge), None);

        let total: Money = [huge, huge, huge].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);

        assert_eq!(
            Money::from_cents(250).checked_multiply_quantity(4),
            Some(Money::from_cents(1000))
        );
    }
}
