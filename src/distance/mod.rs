//! Planar positions and Euclidean distance.

mod position;

pub use position::{euclidean, Position};
