//! # Hemolink Analytics Backend
//!
//! Stateless computation service for a blood-donation management platform.
//!
//! This crate provides the numeric core behind the platform's dashboards: a
//! linear-trend forecaster for blood-stock and bed-availability histories, a
//! consumption-rate urgency heuristic, and a great-circle proximity ranker
//! for hospitals and donors. The backend exposes a REST API via Axum for the
//! web frontend.
//!
//! ## Features
//!
//! - **Trend Forecasting**: Least-squares extrapolation over observed
//!   histories, with floor/ceiling clamping
//! - **Stock Outlook**: Consumption-rate heuristic with restock urgency
//! - **Proximity Ranking**: Haversine nearest-K facilities and donors with
//!   eligibility filtering
//! - **Platform Stats**: Donor, hospital, and inventory totals
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Domain and DTO types shared across layers
//! - [`algorithms`]: Pure numeric routines (least squares, haversine)
//! - [`db`]: Read-only collaborator store access via the Repository pattern
//! - [`services`]: Computation services over collaborator-supplied rows
//! - [`config`]: TOML service configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! The computation services are pure and synchronous; they hold no state
//! between calls and perform no I/O of their own. All rows they consume are
//! fetched by the boundary layer through the [`db`] traits.

pub mod algorithms;

pub mod api;

pub mod config;

pub mod db;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
