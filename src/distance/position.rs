//! Coordinates in the plane.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
///
/// # Examples
///
/// ```
/// use u_route::distance::euclidean;
///
/// assert_eq!(euclidean(0.0, 0.0, 3.0, 4.0), 5.0);
/// assert_eq!(euclidean(3.0, 4.0, 0.0, 0.0), 5.0);
/// ```
pub fn euclidean(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    (dx * dx + dy * dy).sqrt()
}

/// A point in the plane.
///
/// Two positions are equal when their coordinates are bitwise identical, which
/// keeps equality consistent with hashing. `0.0` and `-0.0` are therefore
/// different positions.
///
/// # Examples
///
/// ```
/// use u_route::distance::Position;
///
/// let a = Position::new(0.0, 0.0);
/// let b = Position::new(6.0, 8.0);
/// assert_eq!(a.distance_to(&b), 10.0);
/// assert_eq!(a, Position::new(0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// Creates a position at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_euclidean() {
        assert!((euclidean(1.0, 1.0, 4.0, 5.0) - 5.0).abs() < 1e-10);
        assert_eq!(euclidean(2.0, 7.0, 2.0, 7.0), 0.0);
    }

    #[test]
    fn test_euclidean_symmetric() {
        let d1 = euclidean(1.5, -2.0, 7.25, 3.0);
        let d2 = euclidean(7.25, 3.0, 1.5, -2.0);
        assert_eq!(d1, d2);
        assert!(d1 > 0.0);
    }

    #[test]
    fn test_position_accessors() {
        let p = Position::new(10.0, 20.0);
        assert_eq!(p.x(), 10.0);
        assert_eq!(p.y(), 20.0);
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(3.0, 4.0);
        let b = Position::new(6.0, 8.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn test_position_bitwise_equality() {
        assert_eq!(Position::new(1.0, 2.0), Position::new(1.0, 2.0));
        assert_ne!(Position::new(0.0, 0.0), Position::new(-0.0, 0.0));
        let nan = Position::new(f64::NAN, 1.0);
        assert_eq!(nan, nan);
    }

    #[test]
    fn test_position_hash_consistent() {
        let mut set = HashSet::new();
        set.insert(Position::new(1.0, 2.0));
        set.insert(Position::new(1.0, 2.0));
        set.insert(Position::new(2.0, 1.0));
        assert_eq!(set.len(), 2);
    }
}
