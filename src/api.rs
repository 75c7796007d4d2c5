//! Public API surface for the analytics backend.
//!
//! This file consolidates the domain and DTO types shared by the service
//! layer, the collaborator store, and the HTTP API. All types derive
//! Serialize/Deserialize for JSON serialization.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hospital identifier (collaborator-store primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HospitalId(pub i64);

impl HospitalId {
    pub fn new(value: i64) -> Self {
        HospitalId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for HospitalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Donor identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DonorId(pub i64);

impl DonorId {
    pub fn new(value: i64) -> Self {
        DonorId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for DonorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ABO/Rh blood group.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    /// All eight groups, in the conventional listing order.
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A+" => Ok(BloodGroup::APositive),
            "A-" => Ok(BloodGroup::ANegative),
            "B+" => Ok(BloodGroup::BPositive),
            "B-" => Ok(BloodGroup::BNegative),
            "AB+" => Ok(BloodGroup::AbPositive),
            "AB-" => Ok(BloodGroup::AbNegative),
            "O+" => Ok(BloodGroup::OPositive),
            "O-" => Ok(BloodGroup::ONegative),
            other => Err(format!("unknown blood group: {other:?}")),
        }
    }
}

/// Geographic coordinates in degrees.
///
/// Latitude must lie in [-90, 90] and longitude in [-180, 180]; use
/// [`GeoPoint::is_valid`] before trusting caller-supplied values.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: qtty::Degrees,
    pub longitude: qtty::Degrees,
}

impl GeoPoint {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude: qtty::Degrees::new(latitude_deg),
            longitude: qtty::Degrees::new(longitude_deg),
        }
    }

    /// Check that both coordinates are finite and within range.
    pub fn is_valid(&self) -> bool {
        let lat = self.latitude.value();
        let lng = self.longitude.value();
        lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng)
    }
}

/// A single observed sample of a tracked quantity (stock units, free beds).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// One day of a forecast. `historical_value` is populated only for days
/// inside the observed span; days beyond the last observation carry `None`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub historical_value: Option<f64>,
    pub predicted_value: f64,
}

/// Full forecast covering the observed span plus the forward horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSeries {
    /// True when there was no usable history and the forecast is all zeros.
    pub insufficient_data: bool,
    /// Count of malformed input rows dropped before fitting.
    pub dropped_points: usize,
    pub points: Vec<ForecastPoint>,
}

/// Restock recommendation emitted by the consumption heuristic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Ok,
    UrgentRestockNeeded,
}

/// Marker serialized as the literal string "stable".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    Stable,
}

/// Estimated periods until a stock runs out: a finite count, or "stable"
/// when no consumption trend exists.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepletionEstimate {
    Periods(i64),
    Stable(Stability),
}

impl DepletionEstimate {
    pub fn stable() -> Self {
        DepletionEstimate::Stable(Stability::Stable)
    }

    pub fn periods(&self) -> Option<i64> {
        match self {
            DepletionEstimate::Periods(n) => Some(*n),
            DepletionEstimate::Stable(_) => None,
        }
    }
}

/// Urgency view over a stock history, independent of the regression forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockOutlook {
    pub blood_group: BloodGroup,
    pub current_stock: f64,
    pub avg_consumption: f64,
    pub periods_until_empty: DepletionEstimate,
    pub recommendation: Recommendation,
}

/// A rankable entity (typically a donor) as supplied by the directory
/// collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: DonorId,
    pub name: String,
    pub blood_group: Option<BloodGroup>,
    /// Missing coordinates are allowed; such candidates rank last.
    pub location: Option<GeoPoint>,
    pub disqualifying_conditions: BTreeSet<String>,
    pub available: bool,
}

/// A candidate annotated with its great-circle distance from the query
/// origin. Created fresh per query, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    /// Full-precision distance; round only for display.
    pub distance_km: f64,
}

/// Hospital row from the facility directory, inventory included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecord {
    pub id: HospitalId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub location: GeoPoint,
    pub total_beds: u32,
    pub available_beds: u32,
    /// Current stock units per blood group.
    pub inventory: BTreeMap<BloodGroup, u32>,
}

/// A hospital annotated with its distance from the query origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedHospital {
    #[serde(flatten)]
    pub hospital: HospitalRecord,
    pub distance_km: f64,
}

/// Platform-wide totals for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformStats {
    pub total_donors: usize,
    pub total_hospitals: usize,
    /// Stock units summed across all hospitals, per blood group.
    pub inventory: BTreeMap<BloodGroup, u64>,
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
