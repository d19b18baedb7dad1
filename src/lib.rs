//! # u-route
//!
//! A capacitated delivery route for one vehicle: an ordered list of customers
//! visited from and back to a depot, with total distance and total demand
//! kept consistent after every change.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Vertex, Depot, Customer, Vehicle, Route)
//! - [`distance`] — Positions and Euclidean distance
//! - [`error`] — Route construction errors

pub mod distance;
pub mod error;
pub mod models;
