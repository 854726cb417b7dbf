//! Value objects for the order domain.

use serde::{Deserialize, Serialize};

/// Money amount represented in cents to avoid floating point issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in cents (e.g., 1000 = $10.00)
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a new Money amount from a whole dollar value.
    ///
    /// Values beyond the `i64` cent range saturate at `i64::MIN` / `i64::MAX` cents.
    pub const fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars.saturating_mul(100),
        }
    }

    /// Returns zero money.
    pub const fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the dollar portion (whole number).
    pub fn dollars(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after dollars).
    pub fn cents_part(&self) -> i64 {
        (self.cents.unsigned_abs() % 100) as i64
    }

    /// Returns true if the amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-${}.{:02}", self.dollars().unsigned_abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_dollars() {
        let money = Money::from_dollars(1234);
        assert_eq!(money.cents(), 123_400);
        assert_eq!(money.dollars(), 1234);
        assert_eq!(money.cents_part(), 0);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(1234).to_string(), "$12.34");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1234).to_string(), "-$12.34");
        assert_eq!(
            Money::from_cents(i64::MIN).to_string(),
            "-$92233720368547758.08"
        );
        assert_eq!(
            Money::from_cents(i64::MAX).to_string(),
            "$92233720368547758.07"
        );
    }

    #[test]
    fn test_money_from_dollars_saturates() {
        assert_eq!(Money::from_dollars(i64::MAX).cents(), i64::MAX);
        assert_eq!(Money::from_dollars(i64::MIN).cents(), i64::MIN);
    }

    #[test]
    fn test_money_positivity() {
        assert!(Money::from_cents(1).is_positive());
        assert!(!Money::zero().is_positive());
        assert!(!Money::from_cents(-100).is_positive());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every amount renders with a two-digit cents part.
            #[test]
            fn display_never_panics(cents in any::<i64>()) {
                let text = Money::from_cents(cents).to_string();
                prop_assert_eq!(text.starts_with('-'), cents < 0);
                let fraction = text.rsplit('.').next().unwrap_or_default();
                prop_assert_eq!(fraction.len(), 2);
            }
        }
    }
}
