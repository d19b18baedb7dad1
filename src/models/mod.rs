//! Domain model types for a single delivery route.
//!
//! Provides the vertices a route is built from (a depot and customers with
//! delivery quantities), the capacity-limited vehicle, and the route itself
//! with its derived distance and demand.

mod customer;
mod depot;
mod route;
mod vehicle;
mod vertex;

pub use customer::Customer;
pub use depot::Depot;
pub use route::Route;
pub use vehicle::{Vehicle, DEFAULT_CAPACITY};
pub use vertex::Vertex;
