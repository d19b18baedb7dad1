//! Depot type.

use serde::{Deserialize, Serialize};

use crate::distance::Position;

/// The start and end point of a route. A depot has no demand.
///
/// # Examples
///
/// ```
/// use u_route::models::Depot;
///
/// let depot = Depot::new(35.0, 35.0);
/// assert_eq!(depot.x(), 35.0);
/// assert_eq!(depot.y(), 35.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Depot {
    position: Position,
}

impl Depot {
    /// Creates a depot at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Position::new(x, y),
        }
    }

    /// Location of this depot.
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
}
