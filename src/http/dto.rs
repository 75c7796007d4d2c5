//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Core result types (forecast series, ranked candidates, stats) already
//! derive Serialize/Deserialize and are re-exported or embedded directly;
//! the types here exist where the wire shape is looser than the typed core
//! (string blood groups, per-point date parsing, flat lat/lng pairs).

use serde::{Deserialize, Serialize};

pub use crate::api::{ForecastSeries, PlatformStats, RankedCandidate, RankedHospital, StockOutlook};
use crate::api::{BloodGroup, Candidate, DonorId, GeoPoint};
pub use crate::services::EligibilityFilter;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Collaborator store status
    pub store: String,
}

/// Query parameters for forecast endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForecastQuery {
    /// Number of future days to predict
    #[serde(default)]
    pub horizon: Option<usize>,
}

/// Query parameters for the nearest-hospitals endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NearestQuery {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    /// Result-set size
    #[serde(default)]
    pub k: Option<usize>,
}

/// A latitude/longitude pair as sent on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for GeoPoint {
    fn from(value: LatLng) -> Self {
        GeoPoint::new(value.lat, value.lng)
    }
}

/// One raw history point of an inline forecast request. Dates arrive as
/// strings and are parsed per point so one bad row never rejects the
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawForecastPoint {
    pub date: String,
    #[serde(default)]
    pub value: Option<f64>,
}

/// Request body for an inline forecast over caller-supplied points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Caller's series key (hospital+metric), echoed back unchanged.
    pub series_id: String,
    #[serde(default)]
    pub horizon: Option<usize>,
    #[serde(default)]
    pub points: Vec<RawForecastPoint>,
}

/// Response for an inline forecast request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub series_id: String,
    #[serde(flatten)]
    pub series: ForecastSeries,
}

/// Response for the stock-outlook endpoint. The outlook fields are absent
/// when there is no recorded history to judge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlookResponse {
    pub insufficient_data: bool,
    #[serde(flatten)]
    pub outlook: Option<StockOutlook>,
}

/// One candidate of an inline proximity request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateDto {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub disqualifying_conditions: Vec<String>,
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

impl CandidateDto {
    /// Convert into the typed core candidate. Fails only on a malformed
    /// blood-group string; the caller drops such rows and counts them.
    pub fn into_candidate(self) -> Result<Candidate, String> {
        let blood_group = match self.blood_group {
            Some(raw) => Some(raw.parse::<BloodGroup>()?),
            None => None,
        };
        let location = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        };
        Ok(Candidate {
            id: DonorId::new(self.id),
            name: self.name.unwrap_or_default(),
            blood_group,
            location,
            disqualifying_conditions: self.disqualifying_conditions.into_iter().collect(),
            available: self.available,
        })
    }
}

/// Request body for the inline proximity-ranking endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankRequest {
    pub origin: LatLng,
    pub candidates: Vec<CandidateDto>,
    #[serde(default)]
    pub filters: EligibilityFilter,
    #[serde(default)]
    pub k: Option<usize>,
}

/// Response for the inline proximity-ranking endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub results: Vec<RankedCandidate>,
    /// Count of malformed candidate rows dropped before ranking.
    pub skipped_candidates: usize,
}

/// Request body for donor matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDonorsRequest {
    pub blood_group: String,
    pub origin: LatLng,
    #[serde(default)]
    pub k: Option<usize>,
}

/// Response for donor matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDonorsResponse {
    pub donors: Vec<RankedCandidate>,
}

/// Response for the nearest-hospitals endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestHospitalsResponse {
    pub hospitals: Vec<RankedHospital>,
}

/// Round a distance for display. Core values keep full precision; only the
/// serialized response is rounded.
pub fn round_distance_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
