//! Postal address of a customer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builders::AddressBuilder;

/// Errors raised when a customer's home address is incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Street1 is required")]
    MissingStreet1,

    #[error("City is required")]
    MissingCity,

    #[error("State is required")]
    MissingState,

    #[error("PostalCode is required")]
    MissingPostalCode,

    #[error("Country is required")]
    MissingCountry,
}

/// A postal address.
///
/// Nothing is enforced at construction. The required lines are only checked
/// when an order is placed, and an empty line counts as a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street3: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    /// Returns a builder starting from an empty address.
    pub fn builder() -> AddressBuilder {
        AddressBuilder::default()
    }

    /// Checks the required lines in order: street1, city, state, postal code, country.
    pub fn validate(&self) -> Result<(), AddressError> {
        let required = [
            (&self.street1, AddressError::MissingStreet1),
            (&self.city, AddressError::MissingCity),
            (&self.state, AddressError::MissingState),
            (&self.postal_code, AddressError::MissingPostalCode),
            (&self.country, AddressError::MissingCountry),
        ];

        for (value, error) in required {
            if value.is_empty() {
                return Err(error);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Address {
        Address {
            street1: "123 St".to_string(),
            street2: Some("S 1000".to_string()),
            street3: None,
            city: "Taco Town".to_string(),
            state: "Idaho".to_string(),
            postal_code: "12345".to_string(),
            country: "USA".to_string(),
        }
    }

    #[test]
    fn complete_address_is_valid() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn optional_lines_are_not_required() {
        let address = Address {
            street2: None,
            street3: None,
            ..complete()
        };
        assert!(address.validate().is_ok());
    }

    #[test]
    fn empty_address_reports_street1_first() {
        assert_eq!(
            Address::default().validate(),
            Err(AddressError::MissingStreet1)
        );
    }

    #[test]
    fn each_required_line_is_reported() {
        let cases: [(fn(&mut Address), AddressError); 5] = [
            (|a| a.street1.clear(), AddressError::MissingStreet1),
            (|a| a.city.clear(), AddressError::MissingCity),
            (|a| a.state.clear(), AddressError::MissingState),
            (|a| a.postal_code.clear(), AddressError::MissingPostalCode),
            (|a| a.country.clear(), AddressError::MissingCountry),
        ];

        for (blank, expected) in cases {
            let mut address = complete();
            blank(&mut address);
            assert_eq!(address.validate(), Err(expected));
        }
    }

    #[test]
    fn whitespace_counts_as_present() {
        let address = Address {
            city: " ".to_string(),
            ..complete()
        };
        assert!(address.validate().is_ok());
    }

    #[test]
    fn test_address_serialization_skips_missing_lines() {
        let json = serde_json::to_value(complete()).unwrap();
        assert_eq!(json["street2"], "S 1000");
        assert!(json.get("street3").is_none());

        let back: Address = serde_json::from_value(json).unwrap();
        assert_eq!(back, complete());
    }
}
