//! Platform-wide dashboard totals.

use std::collections::BTreeMap;

use crate::api::PlatformStats;
use crate::db::repository::RepositoryResult;
use crate::db::FullRepository;

/// Aggregate donor, hospital, and inventory totals across the platform.
pub async fn platform_stats(repo: &dyn FullRepository) -> RepositoryResult<PlatformStats> {
    let hospitals = repo.fetch_hospitals().await?;
    let donors = repo.fetch_donors(None).await?;

    let mut inventory: BTreeMap<_, u64> = BTreeMap::new();
    for hospital in &hospitals {
        for (group, quantity) in &hospital.inventory {
            *inventory.entry(*group).or_insert(0) += u64::from(*quantity);
        }
    }

    Ok(PlatformStats {
        total_donors: donors.len(),
        total_hospitals: hospitals.len(),
        inventory,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::api::{BloodGroup, Candidate, DonorId, GeoPoint, HospitalId, HospitalRecord};
    use crate::db::repositories::LocalRepository;

    fn hospital(id: i64, inventory: &[(BloodGroup, u32)]) -> HospitalRecord {
        HospitalRecord {
            id: HospitalId::new(id),
            name: format!("hospital-{id}"),
            address: "1 Clinic Road".to_string(),
            phone: "555-0100".to_string(),
            location: GeoPoint::new(28.6, 77.2),
            total_beds: 50,
            available_beds: 10,
            inventory: inventory.iter().copied().collect(),
        }
    }

    #[tokio::test]
    async fn test_empty_platform() {
        let repo = LocalRepository::new();
        let stats = platform_stats(&repo).await.unwrap();
        assert_eq!(stats.total_donors, 0);
        assert_eq!(stats.total_hospitals, 0);
        assert!(stats.inventory.is_empty());
    }

    #[tokio::test]
    async fn test_inventory_summed_across_hospitals() {
        let repo = LocalRepository::new();
        repo.insert_hospital(hospital(
            1,
            &[(BloodGroup::OPositive, 12), (BloodGroup::ANegative, 3)],
        ));
        repo.insert_hospital(hospital(2, &[(BloodGroup::OPositive, 8)]));
        repo.insert_donor(Candidate {
            id: DonorId::new(1),
            name: "Asha".to_string(),
            blood_group: Some(BloodGroup::OPositive),
            location: None,
            disqualifying_conditions: BTreeSet::new(),
            available: true,
        });

        let stats = platform_stats(&repo).await.unwrap();
        assert_eq!(stats.total_donors, 1);
        assert_eq!(stats.total_hospitals, 2);
        assert_eq!(stats.inventory[&BloodGroup::OPositive], 20);
        assert_eq!(stats.inventory[&BloodGroup::ANegative], 3);
    }
}
