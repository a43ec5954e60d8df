//! downtown: plans a handful of trips over a small synthetic transit network.
//!
//! The network is a 10-stop, 5-line snapshot inspired by downtown Mobile,
//! Alabama (see `network.rs`).  Each trip is planned twice: once with the
//! default headway proxy and once with a rush-hour model that doubles the
//! wait for a vehicle between 07:00 and 09:00.  The best morning itinerary
//! is also printed as JSON.
//!
//! Set `RUST_LOG=debug` to see per-request planning logs.

mod logger;
mod network;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;

use jp_core::{PlannerConfig, RouteId, Timestamp};
use jp_network::NetworkGraph;
use jp_planner::{Itinerary, JourneyPlanner, PlanQuery};
use jp_raptor::{HeadwayProxy, TravelTimeModel};

use network::build_network;

// ── Constants ─────────────────────────────────────────────────────────────────

const MORNING: Timestamp = Timestamp(8 * 3_600);
const MIDDAY:  Timestamp = Timestamp(13 * 3_600);

/// `(label, origin lat, origin lng, destination lat, destination lng)`.
const TRIPS: [(&str, f64, f64, f64, f64); 5] = [
    ("North Terminal → Commerce Park",  30.7095, -88.0695, 30.7005, -88.0305),
    ("South Terminal → Downtown Hub",   30.6705, -88.0305, 30.6948, -88.0502),
    ("Downtown Hub → Spring Hill Ave",  30.6950, -88.0500, 30.7052, -88.0638),
    ("Downtown Hub (stay put)",         30.6950, -88.0500, 30.6950, -88.0500),
    ("Out of town → Downtown Hub",      30.9000, -88.3000, 30.6950, -88.0500),
];

// ── Rush-hour travel model ────────────────────────────────────────────────────

/// Headway proxy whose wait doubles during the morning peak.
struct RushHour {
    base:  HeadwayProxy,
    peak:  (Timestamp, Timestamp),
}

impl TravelTimeModel for RushHour {
    fn ride_arrival(
        &self,
        graph:      &NetworkGraph,
        route:      RouteId,
        board_pos:  usize,
        alight_pos: usize,
        board_time: Timestamp,
    ) -> Option<Timestamp> {
        let arrival = self.base.ride_arrival(graph, route, board_pos, alight_pos, board_time)?;
        let (from, to) = self.peak;
        if board_time >= from && board_time < to {
            Some(arrival.offset(self.base.average_wait_secs))
        } else {
            Some(arrival)
        }
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_itineraries(trips: &[Itinerary]) {
    if trips.is_empty() {
        println!("    no routes available");
        return;
    }
    for (rank, it) in trips.iter().enumerate() {
        println!(
            "  #{}  {} → {}  ({} min, {} transfer(s), {:.0} m walking)",
            rank + 1,
            it.departure(),
            it.arrival(),
            it.total_duration_secs() / 60,
            it.transfer_count(),
            it.total_walk_m(),
        );
        for seg in it.segments() {
            println!("      {} – {}  {}", seg.start, seg.end, seg.instruction);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logger::init()?;

    println!("=== downtown: journey planner demo ===");
    println!();

    // 1. Load the network snapshot.
    let graph = Arc::new(build_network()?);
    println!(
        "Network: {} stops, {} routes",
        graph.stop_count(),
        graph.route_count()
    );

    // 2. Build planners.  Both share the same graph.
    let config = PlannerConfig::default();
    let planner = JourneyPlanner::new(Arc::clone(&graph), config.clone())?;
    let rush = JourneyPlanner::new(Arc::clone(&graph), config.clone())?.with_travel_model(RushHour {
        base: HeadwayProxy::from_config(&config),
        peak: (Timestamp(7 * 3_600), Timestamp(9 * 3_600)),
    });
    println!(
        "Config: walk {} m/s, radius {} m, {} rounds, top {}",
        config.walking_speed_mps, config.max_walk_radius_m, config.max_rounds, config.max_results
    );
    println!();

    // 3. Plan every trip at midday and during the morning peak.
    let t0 = Instant::now();
    let mut showcase: Option<Itinerary> = None;

    for (label, o_lat, o_lng, d_lat, d_lng) in TRIPS {
        println!("{label}");

        println!("  midday ({MIDDAY})");
        let midday = planner.plan(&PlanQuery::new(o_lat, o_lng, d_lat, d_lng, MIDDAY))?;
        print_itineraries(&midday);

        println!("  morning peak ({MORNING})");
        let morning = rush.plan(&PlanQuery::new(o_lat, o_lng, d_lat, d_lng, MORNING))?;
        print_itineraries(&morning);
        println!();

        if showcase.is_none() {
            showcase = morning.into_iter().next();
        }
    }

    info!(trips = TRIPS.len(), elapsed_ms = t0.elapsed().as_millis() as u64, "planning complete");

    // 4. One itinerary as JSON, the shape a client would consume.
    if let Some(it) = showcase {
        println!("{}", serde_json::to_string_pretty(&it)?);
    }

    Ok(())
}
