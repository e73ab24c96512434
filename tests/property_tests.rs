use chrono::{TimeDelta, TimeZone, Utc};
use proptest::prelude::*;
use voyage_planner::engine::navigation::{haversine_nm, interpolate};
use voyage_planner::{Coordinate, VoyagePlanner};

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

proptest! {
    /// Property: distance does not depend on direction of travel
    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        let ab = haversine_nm(&a, &b);
        let ba = haversine_nm(&b, &a);
        prop_assert!(
            (ab - ba).abs() <= 1e-9 * ab.max(1.0),
            "distance({:?}, {:?}) = {} but reverse is {}", a, b, ab, ba
        );
    }

    /// Property: a point is zero miles from itself
    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        prop_assert_eq!(haversine_nm(&a, &a), 0.0);
    }

    /// Property: distance is never negative and never exceeds half the circumference
    #[test]
    fn distance_is_bounded(a in coordinate(), b in coordinate()) {
        let d = haversine_nm(&a, &b);
        let half_circumference = 6371.0 * std::f64::consts::PI / 1.852;
        prop_assert!(d >= 0.0);
        prop_assert!(d <= half_circumference + 1e-6);
    }

    /// Property: antipodal pairs are half the circumference apart, never NaN
    #[test]
    fn antipodal_distance_is_finite(lat in -90.0f64..=90.0, lon in -180.0f64..=0.0) {
        let a = Coordinate::new(lat, lon);
        let b = Coordinate::new(-lat, lon + 180.0);
        let d = haversine_nm(&a, &b);
        let half_circumference = 6371.0 * std::f64::consts::PI / 1.852;
        prop_assert!(d.is_finite(), "distance {:?} -> {:?} is {}", a, b, d);
        prop_assert!((d - half_circumference).abs() < 1e-3, "distance {:?} -> {:?} is {}", a, b, d);
    }

    /// Property: going via a third point is never shorter
    #[test]
    fn triangle_inequality(a in coordinate(), b in coordinate(), c in coordinate()) {
        let direct = haversine_nm(&a, &c);
        let via = haversine_nm(&a, &b) + haversine_nm(&b, &c);
        prop_assert!(direct <= via + 1e-6, "direct {} > via {}", direct, via);
    }

    /// Property: interpolation has the requested length and exact endpoints
    #[test]
    fn interpolation_endpoints_are_exact(
        start in coordinate(),
        end in coordinate(),
        steps in 2usize..500
    ) {
        let points = interpolate(start, end, steps).unwrap();
        prop_assert_eq!(points.len(), steps);
        prop_assert_eq!(points[0], start);
        prop_assert_eq!(points[steps - 1], end);
    }

    /// Property: track length and timing follow the route shape
    #[test]
    fn track_spacing_is_one_minute(
        route in prop::collection::vec(coordinate(), 2..6),
        speed in 0.5f64..40.0
    ) {
        let departure = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let result = VoyagePlanner::default().plan(&route, speed, departure).unwrap();

        prop_assert_eq!(result.track.len(), (route.len() - 1) * 60);
        prop_assert_eq!(result.track[0].timestamp, departure);
        for pair in result.track.windows(2) {
            prop_assert_eq!(pair[1].timestamp - pair[0].timestamp, TimeDelta::minutes(1));
        }
        prop_assert!(result.eta >= departure);
    }
}
