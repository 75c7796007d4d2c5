//! Great-circle proximity ranking of facilities and donors.

use serde::{Deserialize, Serialize};

use crate::algorithms::geo;
use crate::api::{
    BloodGroup, Candidate, GeoPoint, HospitalRecord, RankedCandidate, RankedHospital,
};
use crate::db::repository::RepositoryError;
use crate::db::FullRepository;

/// Result-set size used when a request does not specify one.
pub const DEFAULT_K: usize = 3;

/// Errors raised by the proximity service.
#[derive(Debug, thiserror::Error)]
pub enum ProximityError {
    /// The query origin is missing, out of range, or non-finite. The whole
    /// request is rejected; there is no partial result.
    #[error("invalid origin coordinates: {0}")]
    InvalidOrigin(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Predicates a candidate must satisfy before it is ranked.
///
/// A candidate failing any enabled predicate is excluded outright; it is
/// never ranked and never counts toward K.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EligibilityFilter {
    /// Require an exact blood-group match.
    #[serde(default)]
    pub blood_group: Option<BloodGroup>,
    /// Require the candidate to be marked available.
    #[serde(default)]
    pub require_available: bool,
    /// Exclude candidates with any disqualifying condition on record.
    #[serde(default)]
    pub exclude_disqualified: bool,
}

impl EligibilityFilter {
    /// The filter applied to donor matching: exact group, available, and
    /// no disqualifying conditions.
    pub fn for_donor_match(group: BloodGroup) -> Self {
        Self {
            blood_group: Some(group),
            require_available: true,
            exclude_disqualified: true,
        }
    }

    pub fn passes(&self, candidate: &Candidate) -> bool {
        if let Some(required) = self.blood_group {
            if candidate.blood_group != Some(required) {
                return false;
            }
        }
        if self.require_available && !candidate.available {
            return false;
        }
        if self.exclude_disqualified && !candidate.disqualifying_conditions.is_empty() {
            return false;
        }
        true
    }
}

fn validate_origin(origin: &GeoPoint) -> Result<(), ProximityError> {
    if origin.is_valid() {
        Ok(())
    } else {
        Err(ProximityError::InvalidOrigin(format!(
            "latitude {} / longitude {} out of range",
            origin.latitude.value(),
            origin.longitude.value()
        )))
    }
}

/// Usable location of a candidate record. Out-of-range coordinates are
/// treated like missing ones: the candidate stays rankable at the sentinel
/// distance instead of poisoning the sort with garbage math.
fn usable_location(location: Option<GeoPoint>) -> Option<GeoPoint> {
    location.filter(|l| l.is_valid())
}

/// Rank candidates by distance from `origin`, nearest first.
///
/// Processing order is fixed: filter, measure, stable-sort ascending, take
/// K. Ties keep input order. Fewer than K survivors is a smaller result,
/// not an error.
pub fn rank_candidates(
    origin: &GeoPoint,
    candidates: Vec<Candidate>,
    filter: &EligibilityFilter,
    k: usize,
) -> Result<Vec<RankedCandidate>, ProximityError> {
    validate_origin(origin)?;

    let mut ranked: Vec<RankedCandidate> = candidates
        .into_iter()
        .filter(|c| filter.passes(c))
        .map(|candidate| {
            let location = usable_location(candidate.location);
            let distance_km = geo::distance_or_sentinel(origin, location.as_ref());
            RankedCandidate {
                candidate,
                distance_km,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(k);
    Ok(ranked)
}

/// Rank hospitals by distance from `origin`, nearest first.
pub fn rank_hospitals(
    origin: &GeoPoint,
    hospitals: Vec<HospitalRecord>,
    k: usize,
) -> Result<Vec<RankedHospital>, ProximityError> {
    validate_origin(origin)?;

    let mut ranked: Vec<RankedHospital> = hospitals
        .into_iter()
        .map(|hospital| {
            let location = usable_location(Some(hospital.location));
            let distance_km = geo::distance_or_sentinel(origin, location.as_ref());
            RankedHospital {
                hospital,
                distance_km,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(k);
    Ok(ranked)
}

/// The K nearest hospitals to a caller's position, inventory included.
pub async fn nearest_hospitals(
    repo: &dyn FullRepository,
    origin: &GeoPoint,
    k: usize,
) -> Result<Vec<RankedHospital>, ProximityError> {
    validate_origin(origin)?;
    let hospitals = repo.fetch_hospitals().await?;
    rank_hospitals(origin, hospitals, k)
}

/// The K best donors for a blood group around a caller's position:
/// matching group, available, no disqualifying conditions, nearest first.
pub async fn match_donors(
    repo: &dyn FullRepository,
    group: BloodGroup,
    origin: &GeoPoint,
    k: usize,
) -> Result<Vec<RankedCandidate>, ProximityError> {
    validate_origin(origin)?;
    let donors = repo.fetch_donors(Some(group)).await?;
    rank_candidates(origin, donors, &EligibilityFilter::for_donor_match(group), k)
}

#[cfg(test)]
#[path = "proximity_tests.rs"]
mod proximity_tests;
