//! Collaborator data access for the analytics core.
//!
//! The computation services are pure; everything they consume comes from two
//! narrow read-only interfaces defined here via the Repository pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, tests)                    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - forecast, outlook,         │
//! │  proximity, stats                                       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - HistoryReader,       │
//! │  FacilityDirectory                                      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The core never writes through these interfaces; the seeding methods on
//! [`repositories::LocalRepository`] exist for tests and local development.

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod repositories;
pub mod repository;

pub use repository::{
    FacilityDirectory, FullRepository, HistoryReader, RepositoryError, RepositoryResult,
};
