//! Route type: one vehicle's ordered customer visits from and back to a depot.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace, warn};

use super::{Customer, Depot, Vehicle, Vertex};
use crate::error::{Result, RouteError};

/// An ordered sequence of customers served by one vehicle, starting and
/// ending at a depot.
///
/// Total distance and total demand are recomputed after every structural
/// change, and the total demand never exceeds the vehicle capacity. The
/// customer sequence can only be changed through [`Route::add_customer`] and
/// [`Route::remove_customer`].
///
/// A route needs `&mut` access to mutate, so it cannot be mutated from two
/// threads at once; wrap it in a `Mutex` to share it for mutation.
///
/// # Examples
///
/// ```
/// use u_route::models::{Customer, Route, Vertex};
///
/// let route = Route::new(vec![
///     Vertex::depot(0.0, 0.0),
///     Vertex::customer(3.0, 4.0, 5),
///     Vertex::customer(6.0, 8.0, 5),
/// ])
/// .unwrap();
/// // depot -> (3,4) -> (6,8) -> depot = 5 + 5 + 10
/// assert_eq!(route.total_distance(), 20.0);
/// assert_eq!(route.total_demand(), 10);
/// assert_eq!(route.customers()[0], Customer::new(3.0, 4.0, 5));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    customers: Vec<Customer>,
    depot: Arc<Depot>,
    vehicle: Vehicle,
    total_distance: f64,
    /// Never exceeds `vehicle.capacity()`.
    total_demand: u32,
}

impl Route {
    /// Builds a route from a vertex set using a default vehicle.
    ///
    /// Customers are visited in the order the vertices are enumerated. If
    /// several depots are present, the last one enumerated is used.
    ///
    /// # Errors
    ///
    /// - [`RouteError::EmptyVertexSet`] if `vertices` yields nothing.
    /// - [`RouteError::DepotNotFound`] if no vertex is a depot.
    /// - [`RouteError::CapacityExceeded`] if the customers' combined quantity
    ///   exceeds the vehicle capacity.
    pub fn new<I>(vertices: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vertex>,
    {
        Self::with_vehicle(vertices, Vehicle::default())
    }

    /// Builds a route from a vertex set for the given vehicle.
    ///
    /// Same rules and errors as [`Route::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_route::error::RouteError;
    /// use u_route::models::{Route, Vehicle, Vertex};
    ///
    /// let vertices = vec![Vertex::depot(0.0, 0.0), Vertex::customer(1.0, 0.0, 30)];
    /// let small = Vehicle::new(20).unwrap();
    /// assert_eq!(
    ///     Route::with_vehicle(vertices, small).unwrap_err(),
    ///     RouteError::CapacityExceeded { demand: 30, capacity: 20 },
    /// );
    /// ```
    pub fn with_vehicle<I>(vertices: I, vehicle: Vehicle) -> Result<Self>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut vertices = vertices.into_iter().peekable();
        if vertices.peek().is_none() {
            return Err(RouteError::EmptyVertexSet);
        }

        let mut customers = Vec::new();
        let mut depot = None;
        for vertex in vertices {
            match vertex {
                Vertex::Customer(customer) => customers.push(customer),
                Vertex::Depot(found) => {
                    if depot.is_some() {
                        warn!("several depots in vertex set, keeping the last one");
                    }
                    depot = Some(found);
                }
            }
        }
        let depot = depot.ok_or(RouteError::DepotNotFound)?;

        let demand = demand_of(&customers);
        if !vehicle.can_carry(demand) {
            return Err(RouteError::CapacityExceeded {
                demand,
                capacity: vehicle.capacity(),
            });
        }

        let mut route = Self {
            customers,
            depot,
            vehicle,
            total_distance: 0.0,
            total_demand: 0,
        };
        route.recompute();
        debug!(
            customers = route.customers.len(),
            demand = route.total_demand,
            distance = route.total_distance,
            "route built"
        );
        Ok(route)
    }

    /// Creates an empty route at `depot` using a default vehicle.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use u_route::models::{Customer, Depot, Route};
    ///
    /// let mut route = Route::from_depot(Arc::new(Depot::new(0.0, 0.0)));
    /// assert!(route.add_customer(Customer::new(3.0, 4.0, 10)));
    /// assert_eq!(route.total_distance(), 10.0);
    /// assert!(!route.add_customer(Customer::new(3.0, 4.0, 200)));
    /// assert_eq!(route.total_demand(), 10);
    /// ```
    pub fn from_depot(depot: Arc<Depot>) -> Self {
        Self::from_depot_with_vehicle(depot, Vehicle::default())
    }

    /// Creates an empty route at `depot` for the given vehicle.
    pub fn from_depot_with_vehicle(depot: Arc<Depot>, vehicle: Vehicle) -> Self {
        Self {
            customers: Vec::new(),
            depot,
            vehicle,
            total_distance: 0.0,
            total_demand: 0,
        }
    }

    /// Appends `customer` to the end of the route if the vehicle can carry it.
    ///
    /// Returns `false` and leaves the route untouched when the added quantity
    /// would exceed the vehicle capacity. Unlike construction, this is not
    /// treated as an error.
    pub fn add_customer(&mut self, customer: Customer) -> bool {
        let demand = demand_of(&self.customers) + u64::from(customer.quantity());
        if !self.vehicle.can_carry(demand) {
            debug!(
                demand,
                capacity = self.vehicle.capacity(),
                "customer rejected, capacity exceeded"
            );
            return false;
        }
        self.customers.push(customer);
        self.recompute();
        true
    }

    /// Removes the first customer equal to `customer`, if any.
    ///
    /// Removing a customer that is not on the route does nothing.
    pub fn remove_customer(&mut self, customer: &Customer) {
        if let Some(index) = self.customers.iter().position(|c| c == customer) {
            self.customers.remove(index);
        }
        self.recompute();
    }

    /// Total travel distance depot -> customers -> depot.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Summed quantity of all customers on the route.
    pub fn total_demand(&self) -> u32 {
        self.total_demand
    }

    /// Shared depot where the route starts and ends.
    pub fn depot(&self) -> &Arc<Depot> {
        &self.depot
    }

    /// Customers in visiting order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Vehicle driving this route.
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Number of customer visits (excluding the depot).
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns `true` if the route visits no customer.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Capacity still available on the vehicle.
    pub fn remaining_capacity(&self) -> u32 {
        self.vehicle.capacity().saturating_sub(self.total_demand)
    }

    /// Returns `true` if a customer equal to `customer` is on the route.
    pub fn contains(&self, customer: &Customer) -> bool {
        self.customers.contains(customer)
    }

    /// Returns `true` if both routes refer to the same depot instance.
    ///
    /// Routes built from the same vertices share their depot; routes built
    /// from two equal but separately created depots do not.
    pub fn shares_depot_with(&self, other: &Route) -> bool {
        Arc::ptr_eq(&self.depot, &other.depot)
    }

    fn recompute(&mut self) {
        let depot = self.depot.position();
        self.total_distance = match self.customers.as_slice() {
            [] => 0.0,
            [only] => 2.0 * depot.distance_to(&only.position()),
            [first, .., last] => {
                let mut distance = depot.distance_to(&first.position());
                for pair in self.customers.windows(2) {
                    distance += pair[0].distance_to(&pair[1]);
                }
                distance + last.position().distance_to(&depot)
            }
        };
        let demand = demand_of(&self.customers);
        debug_assert!(self.vehicle.can_carry(demand));
        self.total_demand = u32::try_from(demand).unwrap_or(u32::MAX);
        trace!(
            distance = self.total_distance,
            demand = self.total_demand,
            "route totals recomputed"
        );
    }
}

fn demand_of(customers: &[Customer]) -> u64 {
    customers.iter().map(|c| u64::from(c.quantity())).sum()
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.customers == other.customers
            && self.depot == other.depot
            && self.total_distance.to_bits() == other.total_distance.to_bits()
            && self.total_demand == other.total_demand
            && self.vehicle == other.vehicle
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.customers.hash(state);
        self.depot.hash(state);
        self.total_distance.to_bits().hash(state);
        self.total_demand.hash(state);
        self.vehicle.hash(state);
    }
}
