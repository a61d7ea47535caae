//! Customer weight resolution.
//!
//! A customer's weight in value calculations defaults to an equal share of
//! all customers on the roadmap and can be overridden per roadmap by the
//! planner.

use waypoint_core::error::{Result, WaypointError};
use waypoint_core::models::{Customer, PlannerCustomerWeight};
use waypoint_core::types::CustomerId;

/// The planner's override weight for a customer, `1.0` when unset.
pub fn planner_weight(overrides: &[PlannerCustomerWeight], customer_id: CustomerId) -> f64 {
    overrides
        .iter()
        .find(|w| w.customer_id == customer_id)
        .map(|w| w.weight)
        .unwrap_or(1.0)
}

/// A customer's effective weight.
///
/// Returns the override weight when `overrides` carries an entry for the
/// customer, otherwise the equal share `1 / total_customers`.
///
/// `total_customers` is the size of the caller's customer set;
/// `total_customers == 0` is a precondition violation and fails with
/// [`WaypointError::EmptyCollection`] rather than dividing by zero.
pub fn customer_weight(
    customer: &Customer,
    total_customers: usize,
    overrides: &[PlannerCustomerWeight],
) -> Result<f64> {
    if let Some(entry) = overrides.iter().find(|w| w.customer_id == customer.id) {
        return Ok(entry.weight);
    }
    if total_customers == 0 {
        return Err(WaypointError::empty("customers"));
    }
    Ok(1.0 / total_customers as f64)
}
