//! Result ordering.

use crate::itinerary::Itinerary;

/// Order itineraries best-first and keep at most `max`.
///
/// Itineraries are ranked by:
/// 1. Total duration (shorter is better)
/// 2. Number of transfers (fewer is better)
///
/// The sort is stable: itineraries that tie on both keep their input order.
pub fn rank_itineraries(mut itineraries: Vec<Itinerary>, max: usize) -> Vec<Itinerary> {
    itineraries.sort_by_key(|it| (it.total_duration_secs(), it.transfer_count()));
    itineraries.truncate(max);
    itineraries
}
