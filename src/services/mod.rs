//! Service layer for the analytics computations.
//!
//! Each service exposes a pure computation function plus thin store-backed
//! wrappers that fetch collaborator rows and delegate. The pure functions
//! own all the numeric semantics and are what the unit tests exercise.

pub mod forecast;
pub mod outlook;
pub mod proximity;
pub mod stats;

pub use forecast::{compute_forecast, forecast_beds, forecast_stock, DEFAULT_HORIZON};
pub use outlook::{compute_outlook, stock_outlook, OUTLOOK_WINDOW, URGENT_THRESHOLD_PERIODS};
pub use proximity::{
    match_donors, nearest_hospitals, rank_candidates, rank_hospitals, EligibilityFilter,
    ProximityError, DEFAULT_K,
};
pub use stats::platform_stats;
