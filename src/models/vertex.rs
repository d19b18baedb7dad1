//! Vertices supplied to route construction.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Customer, Depot};
use crate::distance::Position;

/// A positioned point of a routing graph: either the depot or a customer.
///
/// The depot sits behind an [`Arc`] so that every route built from the same
/// vertices refers to one shared depot instead of a private copy.
///
/// # Examples
///
/// ```
/// use u_route::models::Vertex;
///
/// let depot = Vertex::depot(0.0, 0.0);
/// let customer = Vertex::customer(3.0, 4.0, 10);
/// assert!(depot.is_depot());
/// assert_eq!(customer.as_customer().map(|c| c.quantity()), Some(10));
/// assert_eq!(depot.position().distance_to(&customer.position()), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vertex {
    /// Start and end point of a route.
    Depot(Arc<Depot>),
    /// Delivery stop.
    Customer(Customer),
}

impl Vertex {
    /// Creates a depot vertex at the given coordinates.
    pub fn depot(x: f64, y: f64) -> Self {
        Vertex::Depot(Arc::new(Depot::new(x, y)))
    }

    /// Creates a customer vertex.
    pub fn customer(x: f64, y: f64, quantity: u32) -> Self {
        Vertex::Customer(Customer::new(x, y, quantity))
    }

    /// Location of this vertex.
    pub fn position(&self) -> Position {
        match self {
            Vertex::Depot(depot) => depot.position(),
            Vertex::Customer(customer) => customer.position(),
        }
    }

    /// Returns `true` for the depot variant.
    pub fn is_depot(&self) -> bool {
        matches!(self, Vertex::Depot(_))
    }

    /// The depot, if this vertex is one.
    pub fn as_depot(&self) -> Option<&Arc<Depot>> {
        match self {
            Vertex::Depot(depot) => Some(depot),
            Vertex::Customer(_) => None,
        }
    }

    /// The customer, if this vertex is one.
    pub fn as_customer(&self) -> Option<&Customer> {
        match self {
            Vertex::Customer(customer) => Some(customer),
            Vertex::Depot(_) => None,
        }
    }
}

impl From<Customer> for Vertex {
    fn from(customer: Customer) -> Self {
        Vertex::Customer(customer)
    }
}

impl From<Depot> for Vertex {
    fn from(depot: Depot) -> Self {
        Vertex::Depot(Arc::new(depot))
    }
}

impl From<Arc<Depot>> for Vertex {
    fn from(depot: Arc<Depot>) -> Self {
        Vertex::Depot(depot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertex_variants() {
        let d = Vertex::depot(1.0, 2.0);
        assert!(d.is_depot());
        assert!(d.as_customer().is_none());
        assert_eq!(d.as_depot().map(|d| d.x()), Some(1.0));

        let c = Vertex::customer(3.0, 4.0, 7);
        assert!(!c.is_depot());
        assert!(c.as_depot().is_none());
        assert_eq!(c.as_customer(), Some(&Customer::new(3.0, 4.0, 7)));
    }

    #[test]
    fn test_vertex_position() {
        assert_eq!(Vertex::depot(1.0, 2.0).position(), Position::new(1.0, 2.0));
        assert_eq!(
            Vertex::customer(3.0, 4.0, 0).position(),
            Position::new(3.0, 4.0)
        );
    }

    #[test]
    fn test_vertex_from() {
        let shared = Arc::new(Depot::new(0.0, 0.0));
        let v = Vertex::from(Arc::clone(&shared));
        assert!(v.as_depot().is_some_and(|d| Arc::ptr_eq(d, &shared)));
        assert_eq!(Vertex::from(Depot::new(0.0, 0.0)), v);
        assert_eq!(
            Vertex::from(Customer::new(1.0, 1.0, 1)),
            Vertex::customer(1.0, 1.0, 1)
        );
    }

    #[test]
    fn test_depot_and_customer_at_same_point_differ() {
        let set: HashSet<Vertex> = [Vertex::depot(0.0, 0.0), Vertex::customer(0.0, 0.0, 0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_vertex_serde() {
        let v = Vertex::customer(3.0, 4.0, 10);
        let json = serde_json::to_string(&v).expect("serialize");
        let back: Vertex = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, v);
    }
}
