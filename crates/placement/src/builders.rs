//! Builders for assembling addresses, customers and orders.
//!
//! Handy for test data: start from a blank value and set only the fields the
//! case cares about.
//!
//! ```
//! use placement::{Address, Customer, Money, Order};
//!
//! let customer = Customer::builder(56)
//!     .address(Some(
//!         Address::builder()
//!             .street1("123 St")
//!             .city("Taco Town")
//!             .state("Idaho")
//!             .postal_code("12345")
//!             .country("USA")
//!             .build(),
//!     ))
//!     .name("Peter", "Parker")
//!     .credit_rating(564)
//!     .build_shared();
//!
//! let order = Order::builder()
//!     .amount(Money::from_dollars(1234))
//!     .customer(Some(&customer))
//!     .build();
//! assert!(order.belongs_to(&customer));
//! ```

use common::{CustomerId, OrderId};

use crate::customer::{Address, Customer, CustomerRef, SharedCustomer};
use crate::order::{Money, Order};

/// Builder for [`Address`].
#[derive(Debug, Default)]
pub struct AddressBuilder {
    address: Address,
}

impl AddressBuilder {
    pub fn street1(mut self, street1: impl Into<String>) -> Self {
        self.address.street1 = street1.into();
        self
    }

    pub fn street2(mut self, street2: impl Into<String>) -> Self {
        self.address.street2 = Some(street2.into());
        self
    }

    pub fn street3(mut self, street3: impl Into<String>) -> Self {
        self.address.street3 = Some(street3.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.address.city = city.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.address.state = state.into();
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.address.postal_code = postal_code.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.address.country = country.into();
        self
    }

    pub fn build(self) -> Address {
        self.address
    }
}

/// Builder for [`Customer`].
#[derive(Debug)]
pub struct CustomerBuilder {
    customer: Customer,
}

impl CustomerBuilder {
    /// Starts a customer with the given id and no other data.
    pub fn new(id: impl Into<CustomerId>) -> Self {
        Self {
            customer: Customer::new(id),
        }
    }

    /// Sets or clears the home address.
    pub fn address(mut self, address: Option<Address>) -> Self {
        self.customer.home_address = address;
        self
    }

    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.customer.first_name = Some(first_name.into());
        self.customer.last_name = Some(last_name.into());
        self
    }

    pub fn credit_rating(mut self, credit_rating: i32) -> Self {
        self.customer.credit_rating = credit_rating;
        self
    }

    pub fn total_purchases(mut self, total_purchases: i64) -> Self {
        self.customer.total_purchases = total_purchases;
        self
    }

    pub fn build(self) -> Customer {
        self.customer
    }

    /// Builds the customer behind a shared handle, ready to be referenced by orders.
    pub fn build_shared(self) -> SharedCustomer {
        self.customer.into_shared()
    }
}

/// Builder for [`Order`].
///
/// Starts from an unplaced order with a zero amount and no customer.
#[derive(Debug, Default)]
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn id(mut self, id: impl Into<OrderId>) -> Self {
        self.order.id = id.into();
        self
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.order.total_amount = amount;
        self
    }

    /// Sets or clears the customer the order refers to.
    pub fn customer(mut self, customer: Option<&SharedCustomer>) -> Self {
        self.order.customer = customer.map(CustomerRef::from);
        self
    }

    pub fn build(self) -> Order {
        self.order
    }
}
