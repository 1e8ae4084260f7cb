//! # Money Module
//!
//! Provides the `Money` type for handling prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every price in a catalogue is a whole number of the smallest          │
//! │  currency unit. A bulk offer of "3 for 130" and a unit price of 50     │
//! │  are both exact, so totals are exact:                                   │
//! │                                                                         │
//! │    7 × A  →  2 × 130 + 1 × 50  =  310                                   │
//! │                                                                         │
//! │  No floating point, no rounding step, no drift across a basket.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! let unit = Money::from_cents(50);
//! let line = unit.checked_mul_quantity(3).unwrap();
//! assert_eq!(line.cents(), 150);
//! assert_eq!(line.to_string(), "1.50");
//! ```
//!
//! ## Overflow
//! Prices are unbounded above, so every operation is checked and returns
//! `None` when the result does not fit in an `i64`. Callers turn that into
//! a typed error carrying the SKU.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// Signed so that derived figures such as savings can go negative when an
/// offer is priced above the plain unit total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the smallest currency unit.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in the smallest currency unit.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Narrows a widened intermediate back to `Money`.
    ///
    /// `None` if `cents` does not fit in an `i64`.
    #[inline]
    pub fn from_wide(cents: i128) -> Option<Self> {
        i64::try_from(cents).ok().map(Money)
    }

    /// Multiplies by a unit count.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let bundle = Money::from_cents(130);
    /// assert_eq!(bundle.checked_mul_quantity(2).unwrap().cents(), 260);
    /// assert_eq!(Money::from_cents(i64::MAX).checked_mul_quantity(2), None);
    /// ```
    #[inline]
    pub fn checked_mul_quantity(&self, qty: u32) -> Option<Self> {
        // i64 × u32 always fits in i128
        Money::from_wide(i128::from(self.0) * i128::from(qty))
    }

    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    #[inline]
    pub fn checked_sub(&self, other: Money) -> Option<Self> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Sums `amounts`, `None` on overflow.
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, amount| acc.checked_add(amount))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `major.minor` with two minor digits, no currency symbol.
///
/// The symbol belongs to whoever prints the value.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(310).to_string(), "3.10");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-40).to_string(), "-0.40");
        assert_eq!(Money::from_cents(-1250).to_string(), "-12.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(130);
        let b = Money::from_cents(50);

        assert_eq!(a.checked_add(b).unwrap().cents(), 180);
        assert_eq!(b.checked_sub(a).unwrap().cents(), -80);
        assert_eq!(a.checked_mul_quantity(2).unwrap().cents(), 260);
        assert_eq!(a.checked_mul_quantity(0).unwrap(), Money::zero());
    }

    #[test]
    fn test_overflow_is_none() {
        let max = Money::from_cents(i64::MAX);

        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MAX / 2 + 1).checked_mul_quantity(2), None);
        assert_eq!(max.checked_mul_quantity(u32::MAX), None);
        assert_eq!(max.checked_mul_quantity(1), Some(max));
        assert_eq!(Money::from_wide(i128::from(i64::MAX) + 1), None);
    }

    #[test]
    fn test_checked_sum() {
        let parts = [Money::from_cents(130), Money::from_cents(45), Money::from_cents(35)];
        assert_eq!(Money::checked_sum(parts).unwrap().cents(), 210);
        assert_eq!(Money::checked_sum(std::iter::empty()), Some(Money::zero()));
        assert_eq!(
            Money::checked_sum([Money::from_cents(i64::MAX), Money::from_cents(1)]),
            None
        );
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_cents(-1).is_negative());
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_string(&Money::from_cents(130)).unwrap();
        assert_eq!(json, "130");
        let back: Money = serde_json::from_str("45").unwrap();
        assert_eq!(back.cents(), 45);
    }
}
