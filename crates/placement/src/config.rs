//! Placement rule thresholds, loaded from environment variables.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::customer::Customer;

/// Thresholds applied when placing an order. All comparisons are strict.
///
/// Reads from environment variables:
/// - `PLACEMENT_MIN_CREDIT_RATING`: rating a customer must exceed (default: `200`)
/// - `PLACEMENT_EXPEDITE_MIN_PURCHASES`: purchases needed for expedite (default: `5000`)
/// - `PLACEMENT_EXPEDITE_MIN_CREDIT_RATING`: rating needed for expedite (default: `500`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementRules {
    pub min_credit_rating: i32,
    pub expedite_min_purchases: i64,
    pub expedite_min_credit_rating: i32,
}

impl PlacementRules {
    /// Loads rules from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads rules through `lookup`, falling back to defaults for missing or
    /// unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            min_credit_rating: parse_or(
                &lookup,
                "PLACEMENT_MIN_CREDIT_RATING",
                defaults.min_credit_rating,
            ),
            expedite_min_purchases: parse_or(
                &lookup,
                "PLACEMENT_EXPEDITE_MIN_PURCHASES",
                defaults.expedite_min_purchases,
            ),
            expedite_min_credit_rating: parse_or(
                &lookup,
                "PLACEMENT_EXPEDITE_MIN_CREDIT_RATING",
                defaults.expedite_min_credit_rating,
            ),
        }
    }

    /// Returns true if orders from this customer ship expedited.
    ///
    /// Uses the purchase count as it stands before the order is recorded.
    pub fn qualifies_for_expedite(&self, customer: &Customer) -> bool {
        customer.total_purchases() > self.expedite_min_purchases
            && customer.credit_rating() > self.expedite_min_credit_rating
    }
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self {
            min_credit_rating: 200,
            expedite_min_purchases: 5000,
            expedite_min_credit_rating: 500,
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, value = %raw, error = %err, "ignoring invalid placement rule");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn customer(total_purchases: i64, credit_rating: i32) -> Customer {
        Customer::builder(56)
            .credit_rating(credit_rating)
            .total_purchases(total_purchases)
            .build()
    }

    #[test]
    fn test_default_values() {
        let rules = PlacementRules::default();
        assert_eq!(rules.min_credit_rating, 200);
        assert_eq!(rules.expedite_min_purchases, 5000);
        assert_eq!(rules.expedite_min_credit_rating, 500);
    }

    #[test]
    fn test_lookup_overrides() {
        let rules = PlacementRules::from_lookup(lookup_from(&[
            ("PLACEMENT_MIN_CREDIT_RATING", "300"),
            ("PLACEMENT_EXPEDITE_MIN_PURCHASES", " 10 "),
        ]));
        assert_eq!(rules.min_credit_rating, 300);
        assert_eq!(rules.expedite_min_purchases, 10);
        assert_eq!(rules.expedite_min_credit_rating, 500);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let rules = PlacementRules::from_lookup(lookup_from(&[
            ("PLACEMENT_MIN_CREDIT_RATING", "high"),
            ("PLACEMENT_EXPEDITE_MIN_CREDIT_RATING", ""),
        ]));
        assert_eq!(rules, PlacementRules::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let rules: PlacementRules =
            serde_json::from_str(r#"{"expedite_min_purchases": 100}"#).unwrap();
        assert_eq!(rules.expedite_min_purchases, 100);
        assert_eq!(rules.min_credit_rating, 200);
    }

    #[test]
    fn expedite_needs_both_thresholds() {
        let rules = PlacementRules::default();
        assert!(rules.qualifies_for_expedite(&customer(5002, 564)));
        assert!(!rules.qualifies_for_expedite(&customer(100, 564)));
        assert!(!rules.qualifies_for_expedite(&customer(6000, 400)));
    }

    #[test]
    fn expedite_thresholds_are_exclusive() {
        let rules = PlacementRules::default();
        assert!(!rules.qualifies_for_expedite(&customer(5000, 564)));
        assert!(!rules.qualifies_for_expedite(&customer(5001, 500)));
        assert!(rules.qualifies_for_expedite(&customer(5001, 501)));
    }
}
