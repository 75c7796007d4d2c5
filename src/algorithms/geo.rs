//! Great-circle distance math.

use crate::api::GeoPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Sentinel distance assigned to candidates without coordinates so they
/// sort after every real distance without being excluded.
pub const MISSING_COORDS_DISTANCE_KM: f64 = 99_999.0;

/// Haversine distance between two points, in kilometers.
pub fn haversine_km(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = from.latitude.value().to_radians();
    let lat2 = to.latitude.value().to_radians();
    let d_lat = (to.latitude.value() - from.latitude.value()).to_radians();
    let d_lon = (to.longitude.value() - from.longitude.value()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance from `origin` to an optional location, substituting the
/// sentinel for missing coordinates.
pub fn distance_or_sentinel(origin: &GeoPoint, location: Option<&GeoPoint>) -> f64 {
    match location {
        Some(point) => haversine_km(origin, point),
        None => MISSING_COORDS_DISTANCE_KM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let delhi = GeoPoint::new(28.6139, 77.2090);
        assert!(haversine_km(&delhi, &delhi).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let delhi = GeoPoint::new(28.6139, 77.2090);
        let mumbai = GeoPoint::new(19.0760, 72.8777);
        let forward = haversine_km(&delhi, &mumbai);
        let backward = haversine_km(&mumbai, &delhi);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_delhi_mumbai_known_distance() {
        let delhi = GeoPoint::new(28.6139, 77.2090);
        let mumbai = GeoPoint::new(19.0760, 72.8777);
        let distance = haversine_km(&delhi, &mumbai);
        assert!(
            (1150.0..=1160.0).contains(&distance),
            "expected ~1155 km, got {distance}"
        );
    }

    #[test]
    fn test_antipodal_points_near_half_circumference() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let distance = haversine_km(&a, &b);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((distance - half_circumference).abs() < 1.0);
    }

    #[test]
    fn test_missing_coordinates_get_sentinel() {
        let origin = GeoPoint::new(28.6139, 77.2090);
        assert_eq!(
            distance_or_sentinel(&origin, None),
            MISSING_COORDS_DISTANCE_KM
        );
        let mumbai = GeoPoint::new(19.0760, 72.8777);
        assert!(distance_or_sentinel(&origin, Some(&mumbai)) < MISSING_COORDS_DISTANCE_KM);
    }
}
