//! In-memory repository for tests and local development.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{BloodGroup, Candidate, HospitalId, HospitalRecord, TimeSeriesPoint};
use crate::db::repository::{
    ErrorContext, FacilityDirectory, HistoryReader, RepositoryError, RepositoryResult,
};

/// In-memory implementation of the repository traits.
///
/// Backed by `parking_lot` locks; cheap to construct per test. The seeding
/// methods mutate the store directly and are not part of the read-only
/// repository interface the services see.
#[derive(Default)]
pub struct LocalRepository {
    hospitals: RwLock<BTreeMap<i64, HospitalRecord>>,
    donors: RwLock<Vec<Candidate>>,
    stock_history: RwLock<HashMap<(i64, BloodGroup), Vec<TimeSeriesPoint>>>,
    bed_history: RwLock<HashMap<i64, Vec<TimeSeriesPoint>>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a hospital row.
    pub fn insert_hospital(&self, hospital: HospitalRecord) {
        self.hospitals.write().insert(hospital.id.value(), hospital);
    }

    /// Insert a donor row. Donors keep their insertion order, which is the
    /// stable tie-break order for equidistant ranking results.
    pub fn insert_donor(&self, donor: Candidate) {
        self.donors.write().push(donor);
    }

    /// Append a stock observation for a hospital and blood group.
    ///
    /// Values are stored as supplied; malformed samples are the forecast
    /// service's data-quality concern, not the store's.
    pub fn record_stock(
        &self,
        hospital: HospitalId,
        group: BloodGroup,
        point: TimeSeriesPoint,
    ) -> RepositoryResult<()> {
        self.require_hospital(hospital, "record_stock")?;
        self.stock_history
            .write()
            .entry((hospital.value(), group))
            .or_default()
            .push(point);
        Ok(())
    }

    /// Append an available-beds observation for a hospital.
    pub fn record_beds(&self, hospital: HospitalId, point: TimeSeriesPoint) -> RepositoryResult<()> {
        self.require_hospital(hospital, "record_beds")?;
        self.bed_history
            .write()
            .entry(hospital.value())
            .or_default()
            .push(point);
        Ok(())
    }

    fn require_hospital(&self, id: HospitalId, operation: &str) -> RepositoryResult<()> {
        if self.hospitals.read().contains_key(&id.value()) {
            Ok(())
        } else {
            Err(RepositoryError::not_found(
                format!("hospital {} does not exist", id),
                ErrorContext::new(operation)
                    .with_entity("hospital")
                    .with_entity_id(id),
            ))
        }
    }

    fn sorted_ascending(mut points: Vec<TimeSeriesPoint>) -> Vec<TimeSeriesPoint> {
        // Stable sort keeps same-date duplicates in insertion order.
        points.sort_by_key(|p| p.date);
        points
    }
}

#[async_trait]
impl HistoryReader for LocalRepository {
    async fn fetch_stock_history(
        &self,
        hospital: HospitalId,
        group: BloodGroup,
    ) -> RepositoryResult<Vec<TimeSeriesPoint>> {
        self.require_hospital(hospital, "fetch_stock_history")?;
        let points = self
            .stock_history
            .read()
            .get(&(hospital.value(), group))
            .cloned()
            .unwrap_or_default();
        Ok(Self::sorted_ascending(points))
    }

    async fn fetch_bed_history(
        &self,
        hospital: HospitalId,
    ) -> RepositoryResult<Vec<TimeSeriesPoint>> {
        self.require_hospital(hospital, "fetch_bed_history")?;
        let points = self
            .bed_history
            .read()
            .get(&hospital.value())
            .cloned()
            .unwrap_or_default();
        Ok(Self::sorted_ascending(points))
    }
}

#[async_trait]
impl FacilityDirectory for LocalRepository {
    async fn fetch_hospital(&self, id: HospitalId) -> RepositoryResult<HospitalRecord> {
        self.hospitals.read().get(&id.value()).cloned().ok_or_else(|| {
            RepositoryError::not_found(
                format!("hospital {} does not exist", id),
                ErrorContext::new("fetch_hospital")
                    .with_entity("hospital")
                    .with_entity_id(id),
            )
        })
    }

    async fn fetch_hospitals(&self) -> RepositoryResult<Vec<HospitalRecord>> {
        Ok(self.hospitals.read().values().cloned().collect())
    }

    async fn fetch_donors(&self, group: Option<BloodGroup>) -> RepositoryResult<Vec<Candidate>> {
        let donors = self.donors.read();
        Ok(donors
            .iter()
            .filter(|d| group.is_none() || d.blood_group == group)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn hospital(id: i64, name: &str) -> HospitalRecord {
        HospitalRecord {
            id: HospitalId::new(id),
            name: name.to_string(),
            address: "1 Clinic Road".to_string(),
            phone: "555-0100".to_string(),
            location: crate::api::GeoPoint::new(28.6, 77.2),
            total_beds: 50,
            available_beds: 10,
            inventory: BTreeMap::new(),
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_hospital_not_found() {
        let repo = LocalRepository::new();
        let err = repo.fetch_hospital(HospitalId::new(1)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_stock_history_sorted_ascending() {
        let repo = LocalRepository::new();
        repo.insert_hospital(hospital(1, "City General"));

        for day in [3, 1, 2] {
            repo.record_stock(
                HospitalId::new(1),
                BloodGroup::OPositive,
                TimeSeriesPoint {
                    date: date(day),
                    value: day as f64,
                },
            )
            .unwrap();
        }

        let history = repo
            .fetch_stock_history(HospitalId::new(1), BloodGroup::OPositive)
            .await
            .unwrap();
        let days: Vec<u32> = history.iter().map(|p| p.value as u32).collect();
        assert_eq!(days, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_empty_history_is_ok_for_known_hospital() {
        let repo = LocalRepository::new();
        repo.insert_hospital(hospital(1, "City General"));

        let history = repo
            .fetch_stock_history(HospitalId::new(1), BloodGroup::ANegative)
            .await
            .unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_record_stock_unknown_hospital_fails() {
        let repo = LocalRepository::new();
        let err = repo
            .record_stock(
                HospitalId::new(9),
                BloodGroup::APositive,
                TimeSeriesPoint {
                    date: date(1),
                    value: 5.0,
                },
            )
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_fetch_donors_narrows_by_group() {
        let repo = LocalRepository::new();
        for (id, group) in [
            (1, BloodGroup::OPositive),
            (2, BloodGroup::ANegative),
            (3, BloodGroup::OPositive),
        ] {
            repo.insert_donor(Candidate {
                id: crate::api::DonorId::new(id),
                name: format!("donor-{id}"),
                blood_group: Some(group),
                location: None,
                disqualifying_conditions: BTreeSet::new(),
                available: true,
            });
        }

        let all = repo.fetch_donors(None).await.unwrap();
        assert_eq!(all.len(), 3);

        let o_pos = repo.fetch_donors(Some(BloodGroup::OPositive)).await.unwrap();
        assert_eq!(o_pos.len(), 2);
        assert!(o_pos.iter().all(|d| d.blood_group == Some(BloodGroup::OPositive)));
    }

    #[tokio::test]
    async fn test_health_check() {
        let repo = LocalRepository::new();
        assert!(repo.health_check().await.unwrap());
    }
}
