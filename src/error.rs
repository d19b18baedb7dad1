//! Errors raised while building a route.

use thiserror::Error;

/// Reasons a [`Route`](crate::models::Route) cannot be constructed.
///
/// Each variant is fatal to the construction call that produced it; retrying
/// with the same vertices fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The vertex set was empty.
    #[error("the vertex set is empty")]
    EmptyVertexSet,
    /// No vertex in the set was a depot.
    #[error("no depot found in the vertex set")]
    DepotNotFound,
    /// The customers' combined demand exceeds the vehicle capacity.
    #[error("vehicle capacity exceeded: demand {demand} > capacity {capacity}")]
    CapacityExceeded {
        /// Summed quantity of every customer in the set.
        demand: u64,
        /// Capacity of the vehicle the route was built for.
        capacity: u32,
    },
}

/// Result alias for route construction.
pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(RouteError::EmptyVertexSet.to_string(), "the vertex set is empty");
        assert_eq!(
            RouteError::DepotNotFound.to_string(),
            "no depot found in the vertex set"
        );
        let err = RouteError::CapacityExceeded {
            demand: 120,
            capacity: 100,
        };
        assert_eq!(
            err.to_string(),
            "vehicle capacity exceeded: demand 120 > capacity 100"
        );
    }
}
