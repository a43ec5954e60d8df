//! Unit tests for jp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{RouteId, StopId};

    #[test]
    fn index_roundtrip() {
        let id = StopId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StopId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(StopId(0) < StopId(1));
        assert!(RouteId(100) > RouteId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(StopId::INVALID.0, u32::MAX);
        assert_eq!(RouteId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(StopId(7).to_string(), "StopId(7)");
    }
}

#[cfg(test)]
mod geo {
    use proptest::prelude::*;

    use crate::{GeoPoint, walk_secs, walk_secs_at};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(40.4168, -3.7038);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn hundredth_degree_at_equator() {
        let d = GeoPoint::new(0.0, 0.0).distance_m(GeoPoint::new(0.0, 0.01));
        assert!((d - 1_111.95).abs() < 1.0, "got {d}");
    }

    #[test]
    fn validity() {
        assert!(GeoPoint::new(0.0, 0.0).is_valid());
        assert!(GeoPoint::new(-90.0, 180.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
    }

    #[test]
    fn degree_extent_near_equator() {
        let (d_lat, d_lng) = GeoPoint::new(0.0, 0.0).degree_extent(1_000.0).unwrap();
        assert!((d_lat - 0.008_993).abs() < 1e-5, "got {d_lat}");
        assert!(d_lng >= d_lat);
    }

    #[test]
    fn degree_extent_gives_up_at_pole_and_antimeridian() {
        assert!(GeoPoint::new(89.999, 0.0).degree_extent(1_000.0).is_none());
        assert!(GeoPoint::new(0.0, 179.999).degree_extent(1_000.0).is_none());
    }

    #[test]
    fn walk_time_rounds() {
        assert_eq!(walk_secs(0.0), 0);
        assert_eq!(walk_secs(140.0), 100);
        assert_eq!(walk_secs(1.0), 1); // 0.714 s rounds up
        assert_eq!(walk_secs(0.5), 0); // 0.357 s rounds down
        assert_eq!(walk_secs_at(100.0, 2.0), 50);
    }

    #[test]
    fn walk_time_clamps_bad_input() {
        assert_eq!(walk_secs(-50.0), 0);
        assert_eq!(walk_secs(f64::NAN), 0);
    }

    fn coord() -> impl Strategy<Value = GeoPoint> {
        (-89.0f64..89.0, -179.0f64..179.0).prop_map(|(lat, lng)| GeoPoint::new(lat, lng))
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in coord(), b in coord()) {
            let ab = a.distance_m(b);
            let ba = b.distance_m(a);
            prop_assert!((ab - ba).abs() < 1e-6, "{ab} vs {ba}");
        }

        #[test]
        fn distance_to_self_is_zero(a in coord()) {
            prop_assert_eq!(a.distance_m(a), 0.0);
        }

        #[test]
        fn distance_is_non_negative(a in coord(), b in coord()) {
            prop_assert!(a.distance_m(b) >= 0.0);
        }
    }
}

#[cfg(test)]
mod time {
    use crate::Timestamp;

    #[test]
    fn timestamp_arithmetic() {
        let t = Timestamp(10);
        assert_eq!(t + 5, Timestamp(15));
        assert_eq!(t.offset(3), Timestamp(13));
        assert_eq!(Timestamp(15) - Timestamp(10), 5);
        assert_eq!(Timestamp(10).since(Timestamp(15)), -5);
    }

    #[test]
    fn offset_saturates() {
        assert_eq!(Timestamp::NEVER.offset(10), Timestamp::NEVER);
    }

    #[test]
    fn display_time_of_day() {
        assert_eq!(Timestamp(8 * 3_600 + 5 * 60 + 9).to_string(), "08:05:09");
        // Wraps at midnight.
        assert_eq!(Timestamp(86_400 + 60).to_string(), "00:01:00");
        assert_eq!(Timestamp::NEVER.to_string(), "never");
    }
}

#[cfg(test)]
mod config {
    use crate::{JpError, PlannerConfig, Reconstruction};

    #[test]
    fn defaults() {
        let c = PlannerConfig::default();
        assert_eq!(c.walking_speed_mps, 1.4);
        assert_eq!(c.secs_per_hop, 120);
        assert_eq!(c.average_wait_secs, 300);
        assert_eq!(c.max_rounds, 3);
        assert_eq!(c.max_walk_radius_m, 1_000.0);
        assert_eq!(c.max_candidate_stops, 5);
        assert_eq!(c.max_results, 3);
        assert_eq!(c.reconstruction, Reconstruction::FullChain);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_zero_speed() {
        let c = PlannerConfig { walking_speed_mps: 0.0, ..PlannerConfig::default() };
        assert!(matches!(c.validate(), Err(JpError::Config(_))));
    }

    #[test]
    fn rejects_nan_radius() {
        let c = PlannerConfig { max_walk_radius_m: f64::NAN, ..PlannerConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_bounds() {
        for c in [
            PlannerConfig { max_rounds: 0, ..PlannerConfig::default() },
            PlannerConfig { max_candidate_stops: 0, ..PlannerConfig::default() },
            PlannerConfig { max_results: 0, ..PlannerConfig::default() },
        ] {
            assert!(c.validate().is_err(), "{c:?} should be rejected");
        }
    }
}
