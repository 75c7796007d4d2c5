//! Shared fixtures for the integration suites.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use hemolink::api::{
    BloodGroup, Candidate, DonorId, GeoPoint, HospitalId, HospitalRecord, TimeSeriesPoint,
};
use hemolink::db::repositories::LocalRepository;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn hospital(id: i64, name: &str, lat: f64, lng: f64) -> HospitalRecord {
    HospitalRecord {
        id: HospitalId::new(id),
        name: name.to_string(),
        address: format!("{name} Road"),
        phone: "555-0100".to_string(),
        location: GeoPoint::new(lat, lng),
        total_beds: 50,
        available_beds: 10,
        inventory: BTreeMap::new(),
    }
}

pub fn donor(id: i64, name: &str, group: BloodGroup, location: Option<GeoPoint>) -> Candidate {
    Candidate {
        id: DonorId::new(id),
        name: name.to_string(),
        blood_group: Some(group),
        location,
        disqualifying_conditions: BTreeSet::new(),
        available: true,
    }
}

/// A small city: two hospitals around Delhi, a handful of donors, and a
/// declining O+ stock history at the first hospital.
pub fn seeded_repo() -> LocalRepository {
    let repo = LocalRepository::new();

    let mut central = hospital(1, "City General", 28.6139, 77.2090);
    central.inventory.insert(BloodGroup::OPositive, 20);
    central.inventory.insert(BloodGroup::ANegative, 4);
    repo.insert_hospital(central);

    let mut north = hospital(2, "North Clinic", 28.7041, 77.1025);
    north.inventory.insert(BloodGroup::OPositive, 7);
    repo.insert_hospital(north);

    // Ascending history; newest-first this reads 20, 18, 15, 15, 10.
    for (day, value) in [(1, 10.0), (2, 15.0), (3, 15.0), (4, 18.0), (5, 20.0)] {
        repo.record_stock(
            HospitalId::new(1),
            BloodGroup::OPositive,
            TimeSeriesPoint {
                date: date(2025, 7, day),
                value,
            },
        )
        .unwrap();
    }

    repo.insert_donor(donor(
        1,
        "Asha",
        BloodGroup::OPositive,
        Some(GeoPoint::new(28.62, 77.21)),
    ));
    repo.insert_donor(donor(
        2,
        "Vikram",
        BloodGroup::OPositive,
        Some(GeoPoint::new(19.0760, 72.8777)),
    ));
    repo.insert_donor(donor(3, "Meera", BloodGroup::ANegative, None));

    repo
}
