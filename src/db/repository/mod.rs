//! Read-only repository traits consumed by the computation services.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{BloodGroup, Candidate, HospitalId, HospitalRecord, TimeSeriesPoint};

/// Time-series history reader.
///
/// Returned series are ordered ascending by date. Duplicate dates are
/// preserved as separate samples. An empty series for a known hospital is
/// not an error; the forecaster reports it as an insufficient-data
/// condition.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait HistoryReader: Send + Sync {
    /// Fetch the recorded stock levels for one hospital and blood group.
    async fn fetch_stock_history(
        &self,
        hospital: HospitalId,
        group: BloodGroup,
    ) -> RepositoryResult<Vec<TimeSeriesPoint>>;

    /// Fetch the recorded available-bed counts for one hospital.
    async fn fetch_bed_history(&self, hospital: HospitalId)
        -> RepositoryResult<Vec<TimeSeriesPoint>>;
}

/// Facility and donor directory reader.
///
/// Donor queries narrow by blood group at the store (mirroring a SQL WHERE
/// clause); availability and disqualifying-condition checks are eligibility
/// filters applied by the proximity service, not here.
#[async_trait]
pub trait FacilityDirectory: Send + Sync {
    /// Fetch a single hospital row, inventory included.
    async fn fetch_hospital(&self, id: HospitalId) -> RepositoryResult<HospitalRecord>;

    /// Fetch all hospital rows, inventory included.
    async fn fetch_hospitals(&self) -> RepositoryResult<Vec<HospitalRecord>>;

    /// Fetch donors, optionally restricted to one blood group.
    async fn fetch_donors(&self, group: Option<BloodGroup>) -> RepositoryResult<Vec<Candidate>>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}

/// Combined repository interface used by the HTTP state.
pub trait FullRepository: HistoryReader + FacilityDirectory {}

impl<T: HistoryReader + FacilityDirectory> FullRepository for T {}
