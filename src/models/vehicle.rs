//! Vehicle type with a capacity limit.

use serde::{Deserialize, Serialize};

/// Capacity of a vehicle built with [`Vehicle::default`].
pub const DEFAULT_CAPACITY: u32 = 100;

/// The vehicle driving a route. Its capacity bounds the route's total demand.
///
/// # Examples
///
/// ```
/// use u_route::models::{Vehicle, DEFAULT_CAPACITY};
///
/// assert_eq!(Vehicle::default().capacity(), DEFAULT_CAPACITY);
///
/// let v = Vehicle::new(200).unwrap();
/// assert_eq!(v.capacity(), 200);
/// assert!(Vehicle::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    capacity: u32,
}

impl Vehicle {
    /// Creates a vehicle with the given capacity.
    ///
    /// Returns `None` if `capacity` is zero.
    pub fn new(capacity: u32) -> Option<Self> {
        if capacity == 0 {
            return None;
        }
        Some(Self { capacity })
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns `true` if a load of `load` units fits in this vehicle.
    pub fn can_carry(&self, load: u64) -> bool {
        load <= u64::from(self.capacity)
    }
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
