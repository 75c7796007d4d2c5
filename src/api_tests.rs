use super::*;

#[test]
fn test_hospital_id_value() {
    let id = HospitalId::new(42);
    assert_eq!(id.value(), 42);
    assert_eq!(id.to_string(), "42");
}

#[test]
fn test_donor_id_value() {
    let id = DonorId::new(7);
    assert_eq!(id.value(), 7);
    assert_eq!(id.to_string(), "7");
}

#[test]
fn test_blood_group_roundtrip() {
    for group in BloodGroup::ALL {
        let parsed: BloodGroup = group.as_str().parse().unwrap();
        assert_eq!(parsed, group);
    }
}

#[test]
fn test_blood_group_parse_lowercase() {
    assert_eq!("ab+".parse::<BloodGroup>().unwrap(), BloodGroup::AbPositive);
    assert_eq!(" o- ".parse::<BloodGroup>().unwrap(), BloodGroup::ONegative);
}

#[test]
fn test_blood_group_parse_unknown() {
    assert!("C+".parse::<BloodGroup>().is_err());
    assert!("".parse::<BloodGroup>().is_err());
}

#[test]
fn test_blood_group_serde_rename() {
    let json = serde_json::to_string(&BloodGroup::AbNegative).unwrap();
    assert_eq!(json, "\"AB-\"");
    let back: BloodGroup = serde_json::from_str("\"O+\"").unwrap();
    assert_eq!(back, BloodGroup::OPositive);
}

#[test]
fn test_geo_point_valid_ranges() {
    assert!(GeoPoint::new(0.0, 0.0).is_valid());
    assert!(GeoPoint::new(-90.0, 180.0).is_valid());
    assert!(GeoPoint::new(90.0, -180.0).is_valid());
    assert!(!GeoPoint::new(90.1, 0.0).is_valid());
    assert!(!GeoPoint::new(0.0, -180.5).is_valid());
    assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
}

#[test]
fn test_depletion_estimate_serialization() {
    let finite = serde_json::to_value(DepletionEstimate::Periods(6)).unwrap();
    assert_eq!(finite, serde_json::json!(6));

    let stable = serde_json::to_value(DepletionEstimate::stable()).unwrap();
    assert_eq!(stable, serde_json::json!("stable"));
}

#[test]
fn test_depletion_estimate_periods_accessor() {
    assert_eq!(DepletionEstimate::Periods(3).periods(), Some(3));
    assert_eq!(DepletionEstimate::stable().periods(), None);
}

#[test]
fn test_recommendation_serialization() {
    assert_eq!(
        serde_json::to_value(Recommendation::Ok).unwrap(),
        serde_json::json!("OK")
    );
    assert_eq!(
        serde_json::to_value(Recommendation::UrgentRestockNeeded).unwrap(),
        serde_json::json!("URGENT_RESTOCK_NEEDED")
    );
}

#[test]
fn test_forecast_point_historical_none_beyond_span() {
    let point = ForecastPoint {
        date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        historical_value: None,
        predicted_value: 12.0,
    };
    let json = serde_json::to_value(point).unwrap();
    assert_eq!(json["historical_value"], serde_json::Value::Null);
    assert_eq!(json["predicted_value"], serde_json::json!(12.0));
}

#[test]
fn test_ranked_candidate_flattens_fields() {
    let candidate = Candidate {
        id: DonorId::new(1),
        name: "Asha".to_string(),
        blood_group: Some(BloodGroup::OPositive),
        location: Some(GeoPoint::new(28.6, 77.2)),
        disqualifying_conditions: BTreeSet::new(),
        available: true,
    };
    let ranked = RankedCandidate {
        candidate,
        distance_km: 4.25,
    };
    let json = serde_json::to_value(&ranked).unwrap();
    assert_eq!(json["name"], serde_json::json!("Asha"));
    assert_eq!(json["distance_km"], serde_json::json!(4.25));
}
