//! Unit tests for jp-network.
//!
//! All tests use hand-crafted snapshots; no external data files.

#[cfg(test)]
mod helpers {
    use jp_core::GeoPoint;

    use crate::{NetworkGraph, Route, Stop};

    /// A small corridor along the equator plus one branch north.
    ///
    /// Stops (lat, lng):
    ///   A:(0,0)  B:(0,0.01)  C:(0,0.02)  D:(0.01,0.01)
    ///
    /// Routes:
    ///   R1: A → B → C
    ///   R2: B → D
    pub fn corridor() -> NetworkGraph {
        NetworkGraph::from_snapshot(
            [
                Stop::new("A", "Alameda", GeoPoint::new(0.0, 0.0)),
                Stop::new("B", "Bolsa", GeoPoint::new(0.0, 0.01)),
                Stop::new("C", "Catedral", GeoPoint::new(0.0, 0.02)),
                Stop::new("D", "Dársena", GeoPoint::new(0.01, 0.01)),
            ],
            [
                Route::new("R1", "Line 1", ["A", "B", "C"]),
                Route::new("R2", "Line 2", ["B", "D"]),
            ],
        )
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use jp_core::{GeoPoint, StopId};

    use crate::{NetworkGraph, NetworkGraphBuilder, Route, RouteVisit, Stop};

    #[test]
    fn empty_build() {
        let net = NetworkGraphBuilder::new().build();
        assert_eq!(net.stop_count(), 0);
        assert_eq!(net.route_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn stops_without_routes_is_empty() {
        let net = NetworkGraph::from_snapshot(
            [Stop::new("A", "Alameda", GeoPoint::new(0.0, 0.0))],
            Vec::<Route>::new(),
        );
        assert_eq!(net.stop_count(), 1);
        assert!(net.is_empty());
    }

    #[test]
    fn route_stop_lists() {
        let net = super::helpers::corridor();
        let r1 = net.route_id("R1").unwrap();
        let ids: Vec<&str> = net.route_stops(r1).iter().map(|&s| net.stop(s).id.as_str()).collect();
        assert_eq!(ids, ["A", "B", "C"]);
        assert_eq!(net.route(r1).name, "Line 1");
    }

    #[test]
    fn reverse_index_carries_positions() {
        let net = super::helpers::corridor();
        let b = net.stop_id("B").unwrap();
        let r1 = net.route_id("R1").unwrap();
        let r2 = net.route_id("R2").unwrap();

        let visits = net.routes_serving(b);
        assert_eq!(visits.len(), 2);
        assert!(visits.contains(&RouteVisit { route: r1, pos: 1 }));
        assert!(visits.contains(&RouteVisit { route: r2, pos: 0 }));

        // Every visit points back at the stop it was listed under.
        for (id, _) in net.stops() {
            for v in net.routes_serving(id) {
                assert_eq!(net.route_stops(v.route)[v.pos as usize], id);
            }
        }
    }

    #[test]
    fn short_route_is_skipped() {
        let net = NetworkGraph::from_snapshot(
            [
                Stop::new("A", "Alameda", GeoPoint::new(0.0, 0.0)),
                Stop::new("B", "Bolsa", GeoPoint::new(0.0, 0.01)),
            ],
            [
                Route::new("solo", "Solo", ["A"]),
                Route::new("none", "None", Vec::<String>::new()),
                Route::new("ok", "Ok", ["A", "B"]),
            ],
        );
        assert_eq!(net.route_count(), 1);
        assert!(net.route_id("solo").is_none());
        assert!(net.route_id("none").is_none());
        assert!(net.route_id("ok").is_some());
    }

    #[test]
    fn invalid_coordinates_drop_out_of_routes() {
        let net = NetworkGraph::from_snapshot(
            [
                Stop::new("A", "Alameda", GeoPoint::new(0.0, 0.0)),
                Stop::new("X", "Broken", GeoPoint::new(f64::NAN, 0.0)),
                Stop::new("B", "Bolsa", GeoPoint::new(0.0, 0.01)),
            ],
            [
                Route::new("R1", "Line 1", ["A", "X", "B"]),
                Route::new("R2", "Line 2", ["X", "B"]),
            ],
        );
        let r1 = net.route_id("R1").unwrap();
        assert_eq!(net.route_stops(r1).len(), 2);
        // R2 has only one usable stop left.
        assert!(net.route_id("R2").is_none());

        let x = net.stop_id("X").unwrap();
        assert!(net.routes_serving(x).is_empty());
    }

    #[test]
    fn unknown_stop_reference_is_dropped() {
        let net = NetworkGraph::from_snapshot(
            [
                Stop::new("A", "Alameda", GeoPoint::new(0.0, 0.0)),
                Stop::new("B", "Bolsa", GeoPoint::new(0.0, 0.01)),
            ],
            [Route::new("R1", "Line 1", ["A", "ghost", "B"])],
        );
        let r1 = net.route_id("R1").unwrap();
        assert_eq!(net.route_stops(r1), &[StopId(0), StopId(1)]);
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let net = NetworkGraph::from_snapshot(
            [
                Stop::new("A", "First", GeoPoint::new(0.0, 0.0)),
                Stop::new("A", "Second", GeoPoint::new(1.0, 1.0)),
                Stop::new("B", "Bolsa", GeoPoint::new(0.0, 0.01)),
            ],
            [
                Route::new("R1", "Original", ["A", "B"]),
                Route::new("R1", "Copy", ["B", "A"]),
            ],
        );
        assert_eq!(net.stop_count(), 2);
        assert_eq!(net.stop(net.stop_id("A").unwrap()).name, "First");
        assert_eq!(net.route_count(), 1);
        assert_eq!(net.route(net.route_id("R1").unwrap()).name, "Original");
    }

    #[test]
    fn looping_route_visits_stop_twice() {
        let net = NetworkGraph::from_snapshot(
            [
                Stop::new("A", "Alameda", GeoPoint::new(0.0, 0.0)),
                Stop::new("B", "Bolsa", GeoPoint::new(0.0, 0.01)),
            ],
            [Route::new("loop", "Circular", ["A", "B", "A"])],
        );
        let a = net.stop_id("A").unwrap();
        let positions: Vec<u32> = net.routes_serving(a).iter().map(|v| v.pos).collect();
        assert_eq!(positions, [0, 2]);
    }

    #[test]
    fn require_stop_reports_missing() {
        let net = super::helpers::corridor();
        assert!(net.require_stop("A").is_ok());
        assert!(matches!(
            net.require_stop("Z"),
            Err(crate::NetworkError::UnknownStop(id)) if id == "Z"
        ));
    }
}

// ── Nearest-stop lookup ───────────────────────────────────────────────────────

#[cfg(test)]
mod nearby {
    use jp_core::GeoPoint;

    use crate::{NetworkGraph, Route, Stop};

    #[test]
    fn exact_position_first() {
        let net = super::helpers::corridor();
        let found = net.nearby(GeoPoint::new(0.0, 0.0), 5, 1_000.0);
        assert_eq!(found[0].stop, net.stop_id("A").unwrap());
        assert_eq!(found[0].distance_m, 0.0);
    }

    #[test]
    fn radius_bounds_results() {
        let net = super::helpers::corridor();
        // B is ~1.11 km from A; a 1 km radius only finds A.
        let found = net.nearby(GeoPoint::new(0.0, 0.0), 5, 1_000.0);
        assert_eq!(found.len(), 1);

        let wider = net.nearby(GeoPoint::new(0.0, 0.0), 5, 1_200.0);
        assert_eq!(wider.len(), 2);
        assert_eq!(wider[1].stop, net.stop_id("B").unwrap());
    }

    #[test]
    fn ordered_and_capped() {
        let net = super::helpers::corridor();
        let found = net.nearby(GeoPoint::new(0.0, 0.004), 2, 5_000.0);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].stop, net.stop_id("A").unwrap());
        assert_eq!(found[1].stop, net.stop_id("B").unwrap());
        assert!(found[0].distance_m <= found[1].distance_m);
    }

    #[test]
    fn equidistant_ties_break_on_stop_id() {
        let net = NetworkGraph::from_snapshot(
            [
                Stop::new("E", "East", GeoPoint::new(0.0, 0.001)),
                Stop::new("W", "West", GeoPoint::new(0.0, -0.001)),
            ],
            Vec::<Route>::new(),
        );
        let found = net.nearby(GeoPoint::new(0.0, 0.0), 5, 500.0);
        assert_eq!(found.len(), 2);
        assert!(found[0].stop < found[1].stop);
    }

    #[test]
    fn invalid_stops_never_found() {
        let net = NetworkGraph::from_snapshot(
            [
                Stop::new("X", "Broken", GeoPoint::new(f64::NAN, f64::NAN)),
                Stop::new("A", "Alameda", GeoPoint::new(0.0, 0.0)),
            ],
            Vec::<Route>::new(),
        );
        let found = net.nearby(GeoPoint::new(0.0, 0.0), 5, 1_000.0);
        assert_eq!(found.len(), 1);
        assert_eq!(net.stop(found[0].stop).id, "A");
    }

    #[test]
    fn invalid_query_finds_nothing() {
        let net = super::helpers::corridor();
        assert!(net.nearby(GeoPoint::new(f64::NAN, 0.0), 5, 1_000.0).is_empty());
        assert!(net.nearby(GeoPoint::new(0.0, 0.0), 0, 1_000.0).is_empty());
        assert!(net.nearby(GeoPoint::new(0.0, 0.0), 5, -1.0).is_empty());
    }

    #[test]
    fn empty_network_finds_nothing() {
        let net = NetworkGraph::empty();
        assert!(net.nearby(GeoPoint::new(0.0, 0.0), 5, 1_000.0).is_empty());
    }

    #[test]
    fn antimeridian_falls_back_to_scan() {
        let net = NetworkGraph::from_snapshot(
            [
                Stop::new("E", "East", GeoPoint::new(0.0, 179.999)),
                Stop::new("W", "West", GeoPoint::new(0.0, -179.999)),
            ],
            Vec::<Route>::new(),
        );
        // ~111 m either side of the antimeridian.
        let found = net.nearby(GeoPoint::new(0.0, 180.0), 5, 500.0);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn matches_brute_force_scan() {
        // 10 × 10 grid of stops ~111 m apart.
        let stops: Vec<Stop> = (0..100)
            .map(|i| {
                let pos = GeoPoint::new(40.0 + (i / 10) as f64 * 0.001, -3.7 + (i % 10) as f64 * 0.001);
                Stop::new(format!("s{i}"), format!("Stop {i}"), pos)
            })
            .collect();
        let net = NetworkGraph::from_snapshot(stops, []);
        let query = GeoPoint::new(40.0043, -3.6957);

        let mut expected: Vec<(f64, jp_core::StopId)> = net
            .stops()
            .map(|(id, s)| (query.distance_m(s.pos), id))
            .filter(|(d, _)| *d <= 350.0)
            .collect();
        expected.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        expected.truncate(7);

        let found: Vec<(f64, jp_core::StopId)> = net
            .nearby(query, 7, 350.0)
            .into_iter()
            .map(|n| (n.distance_m, n.stop))
            .collect();
        assert_eq!(found, expected);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use crate::{NetworkError, NetworkGraph, load_routes_csv, load_routes_reader, load_stops_csv, load_stops_reader};

    const STOPS: &str = "\
id,name,lat,lng,code\n\
A,Alameda,0.0,0.0,C01\n\
B,Bolsa,0.0,0.01,\n\
C,Catedral,0.0,0.02,C03\n\
";

    const ROUTES: &str = "\
id,name,color,stop_ids\n\
R1,Line 1,#e4002b,A|B|C\n\
R2,Line 2,, B | C |\n\
";

    #[test]
    fn parses_stops() {
        let stops = load_stops_reader(Cursor::new(STOPS)).unwrap();
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].id, "A");
        assert_eq!(stops[0].code.as_deref(), Some("C01"));
        assert_eq!(stops[1].code, None);
        assert_eq!(stops[1].pos.lng, 0.01);
    }

    #[test]
    fn parses_routes() {
        let routes = load_routes_reader(Cursor::new(ROUTES)).unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].stop_ids, ["A", "B", "C"]);
        assert_eq!(routes[0].color.as_deref(), Some("#e4002b"));
        assert_eq!(routes[1].color, None);
        assert_eq!(routes[1].stop_ids, ["B", "C"]);
    }

    #[test]
    fn loaded_snapshot_builds_graph() {
        let stops = load_stops_reader(Cursor::new(STOPS)).unwrap();
        let routes = load_routes_reader(Cursor::new(ROUTES)).unwrap();
        let net = NetworkGraph::from_snapshot(stops, routes);
        assert_eq!(net.stop_count(), 3);
        assert_eq!(net.route_count(), 2);
    }

    #[test]
    fn bad_coordinate_is_parse_error() {
        let csv = "id,name,lat,lng,code\nA,Alameda,north,0.0,\n";
        let result = load_stops_reader(Cursor::new(csv));
        assert!(matches!(result, Err(NetworkError::Parse(_))));
    }

    #[test]
    fn nan_coordinate_is_accepted() {
        let csv = "id,name,lat,lng,code\nA,Alameda,NaN,0.0,\n";
        let stops = load_stops_reader(Cursor::new(csv)).unwrap();
        assert!(!stops[0].pos.is_valid());
    }

    #[test]
    fn reads_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let stops_path = dir.path().join("stops.csv");
        let routes_path = dir.path().join("routes.csv");
        std::fs::File::create(&stops_path).unwrap().write_all(STOPS.as_bytes()).unwrap();
        std::fs::File::create(&routes_path).unwrap().write_all(ROUTES.as_bytes()).unwrap();

        assert_eq!(load_stops_csv(&stops_path).unwrap().len(), 3);
        assert_eq!(load_routes_csv(&routes_path).unwrap().len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_stops_csv(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(NetworkError::Io(_))));
    }
}
