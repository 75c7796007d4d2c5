//! Numeric building blocks shared by the service layer.
//!
//! These are pure functions with no I/O: least-squares fitting for the
//! trend forecaster and great-circle distance math for proximity ranking.

pub mod geo;
pub mod regression;

pub use geo::{haversine_km, EARTH_RADIUS_KM, MISSING_COORDS_DISTANCE_KM};
pub use regression::{fit_line, LineFit};
