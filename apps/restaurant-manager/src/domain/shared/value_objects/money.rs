//! Money value object for prices and order totals.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// A monetary amount.
///
/// Represented as a Decimal for exact sums. Storage keeps prices in REAL
/// columns, so conversion to and from `f64` happens only at that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new Money value from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Convert a stored REAL value.
    ///
    /// # Errors
    ///
    /// Returns error if the value is NaN or infinite.
    pub fn from_f64(amount: f64) -> Result<Self, DomainError> {
        Decimal::from_f64(amount)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidValue {
                field: "money".to_string(),
                message: format!("{amount} is not a finite amount"),
            })
    }

    /// Value to write into a REAL column.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// Whether the amount can be read back from a REAL column. Amounts near
    /// `Decimal::MAX` round up past it as `f64`.
    #[must_use]
    pub fn fits_real_column(&self) -> bool {
        Self::from_f64(self.to_f64()).is_ok()
    }

    /// Sum of two amounts, or `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Returns true if this amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Round to 2 decimal places.
    #[must_use]
    pub fn round(&self) -> Self {
        Self(self.0.round_dp(2))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Money::new(dec!(5)).to_string(), "$5.00");
        assert_eq!(Money::new(dec!(3.5)).to_string(), "$3.50");
        assert_eq!(Money::new(dec!(19.99)).to_string(), "$19.99");
    }

    #[test]
    fn f64_boundary_keeps_value() {
        let money = Money::from_f64(5.0).unwrap();
        assert_eq!(money, Money::new(dec!(5)));
        assert_eq!(money.to_f64(), 5.0);

        let quarter = Money::from_f64(2.25).unwrap();
        assert_eq!(quarter, Money::new(dec!(2.25)));
    }

    #[test]
    fn from_f64_rejects_nan() {
        assert!(Money::from_f64(f64::NAN).is_err());
        assert!(Money::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn checked_add_sums() {
        let total = Money::new(dec!(5))
            .checked_add(Money::new(dec!(2.25)))
            .unwrap();
        assert_eq!(total, Money::new(dec!(7.25)));
    }

    #[test]
    fn checked_add_reports_overflow() {
        let half = Money::new(dec!(50000000000000000000000000000));
        assert_eq!(half.checked_add(half), None);
        assert_eq!(Money::new(Decimal::MAX).checked_add(Money::new(dec!(1))), None);
    }

    #[test]
    fn real_column_round_trip_limit() {
        assert!(Money::new(dec!(5.00)).fits_real_column());
        assert!(Money::new(dec!(10000000000000000000000000000)).fits_real_column());
        // Rounds to 2^96 as f64, which exceeds Decimal::MAX.
        assert!(!Money::new(Decimal::MAX).fits_real_column());
    }

    #[test]
    fn negative_detection() {
        assert!(Money::new(dec!(-0.01)).is_negative());
        assert!(!Money::ZERO.is_negative());
        assert!(!Money::new(dec!(1)).is_negative());
    }
}
