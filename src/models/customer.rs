//! Customer type.

use serde::{Deserialize, Serialize};

use crate::distance::Position;

/// A delivery stop: a location and the quantity to drop off there.
///
/// Customers compare by value, so two customers at the same position with
/// the same quantity are interchangeable on a route.
///
/// # Examples
///
/// ```
/// use u_route::models::Customer;
///
/// let c = Customer::new(41.0, 49.0, 10);
/// assert_eq!(c.x(), 41.0);
/// assert_eq!(c.quantity(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    position: Position,
    quantity: u32,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(x: f64, y: f64, quantity: u32) -> Self {
        Self {
            position: Position::new(x, y),
            quantity,
        }
    }

    /// Location of this customer.
    pub fn position(&self) -> Position {
        self.position
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.position.x()
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.position.y()
    }

    /// Quantity to deliver at this customer.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Euclidean distance to another customer.
    pub fn distance_to(&self, other: &Customer) -> f64 {
        self.position.distance_to(&other.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_new() {
        let c = Customer::new(10.0, 20.0, 5);
        assert_eq!(c.x(), 10.0);
        assert_eq!(c.y(), 20.0);
        assert_eq!(c.quantity(), 5);
        assert_eq!(c.position(), Position::new(10.0, 20.0));
    }

    #[test]
    fn test_customer_value_equality() {
        assert_eq!(Customer::new(1.0, 2.0, 3), Customer::new(1.0, 2.0, 3));
        assert_ne!(Customer::new(1.0, 2.0, 3), Customer::new(1.0, 2.0, 4));
        assert_ne!(Customer::new(1.0, 2.0, 3), Customer::new(2.0, 1.0, 3));
    }

    #[test]
    fn test_customer_distance() {
        let a = Customer::new(0.0, 0.0, 0);
        let b = Customer::new(3.0, 4.0, 0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }
}
