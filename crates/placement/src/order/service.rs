//! Order service placing orders against their customers.

use crate::config::PlacementRules;
use crate::customer::Customer;
use crate::error::PlacementError;

use super::Order;

/// Service for placing orders.
///
/// Placing an order checks the order, then its customer, then the customer's
/// home address, stopping at the first broken rule. If everything passes, the
/// order may be flagged as expedited and is then recorded in the customer's
/// history.
#[derive(Debug, Clone, Default)]
pub struct OrderService {
    rules: PlacementRules,
}

impl OrderService {
    /// Creates a service using the default placement rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service using custom placement rules.
    pub fn with_rules(rules: PlacementRules) -> Self {
        Self { rules }
    }

    /// Returns the rules this service applies.
    pub fn rules(&self) -> &PlacementRules {
        &self.rules
    }

    /// Places an order.
    ///
    /// On success the order is appended to its customer's history and the
    /// customer's purchase count goes up by one. Placing the same order twice
    /// records it twice.
    ///
    /// On failure neither the order nor the customer is modified.
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id(), amount = %order.total_amount()))]
    pub fn place_order(&self, order: &mut Order) -> Result<(), PlacementError> {
        self.try_place(order).inspect_err(|err| {
            metrics::counter!("orders_rejected_total", "kind" => err.kind()).increment(1);
            tracing::warn!(kind = err.kind(), error = %err, "order rejected");
        })
    }

    fn try_place(&self, order: &mut Order) -> Result<(), PlacementError> {
        let shared = order.validate()?;

        // Held until the order is recorded.
        let mut customer = shared.lock();
        self.validate_customer(&customer)?;
        let total_purchases = customer.next_purchase_count()?;

        if self.rules.qualifies_for_expedite(&customer) {
            tracing::debug!(
                customer_id = %customer.id(),
                total_purchases = customer.total_purchases(),
                credit_rating = customer.credit_rating(),
                "order qualifies for expedite"
            );
            order.mark_expedited();
            metrics::counter!("orders_expedited_total").increment(1);
        }

        customer.record_order(order.clone(), total_purchases);
        metrics::counter!("orders_placed_total").increment(1);

        tracing::info!(
            customer_id = %customer.id(),
            expedited = order.is_expedited(),
            total_purchases = customer.total_purchases(),
            "order placed"
        );

        Ok(())
    }

    fn validate_customer(&self, customer: &Customer) -> Result<(), PlacementError> {
        let address = customer.validate(&self.rules)?;
        address.validate()?;
        Ok(())
    }
}
