//! Arrival labels and the per-round label table.

use jp_core::{RouteId, StopId, Timestamp};

/// How a ride label was reached: the vehicle and where the rider got on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RideLink {
    pub route: RouteId,
    /// Stop the rider boarded at.  Its label in round `ArrivalLabel::round`
    /// is the previous link in the chain.
    pub board_stop: StopId,
    /// Time the rider was at `board_stop`, before any wait.
    pub board_time: Timestamp,
}

/// Best known arrival at one stop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArrivalLabel {
    pub arrival: Timestamp,
    /// Round in which the label was produced.  Equals the transfer count for
    /// ride labels and `0` for the origin seed.
    pub round: usize,
    /// `None` only for the origin seed.
    pub ride: Option<RideLink>,
}

impl ArrivalLabel {
    pub(crate) fn seed(board_time: Timestamp) -> Self {
        Self { arrival: board_time, round: 0, ride: None }
    }

    /// `true` if this label was reached on a vehicle.
    pub fn is_ride(&self) -> bool {
        self.ride.is_some()
    }

    /// Transfers made to reach this stop.
    pub fn transfers(&self) -> usize {
        self.round
    }

    /// `true` if `self` should win over `other`: earlier arrival, then fewer
    /// transfers.
    #[inline]
    pub fn beats(&self, other: &ArrivalLabel) -> bool {
        (self.arrival, self.round) < (other.arrival, other.round)
    }
}

/// Label table produced by one propagation: `labels[r][stop]`.
///
/// Round 0 holds only the origin seed.  Each later round starts as a copy of
/// the previous one, so a stop's arrival never gets later as `r` grows.
#[derive(Clone, Debug)]
pub struct RoundLabels {
    pub(crate) origin:      StopId,
    pub(crate) destination: StopId,
    pub(crate) rounds:      Vec<Vec<Option<ArrivalLabel>>>,
}

impl RoundLabels {
    pub fn origin(&self) -> StopId {
        self.origin
    }

    pub fn destination(&self) -> StopId {
        self.destination
    }

    /// Number of label maps, including round 0.  Smaller than
    /// `max_rounds + 1` when propagation reached a fixed point early.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// All labels of round `r`, indexed by `StopId`.
    ///
    /// # Panics
    /// Panics if `r >= round_count()`.
    pub fn round(&self, r: usize) -> &[Option<ArrivalLabel>] {
        &self.rounds[r]
    }

    /// Label of `stop` in round `r`, if any.
    pub fn label(&self, r: usize, stop: StopId) -> Option<&ArrivalLabel> {
        self.rounds.get(r)?.get(stop.index())?.as_ref()
    }

    /// Best label at `stop` across all rounds: minimum arrival, ties broken
    /// by fewest transfers.
    pub fn best_at(&self, stop: StopId) -> Option<&ArrivalLabel> {
        self.rounds
            .iter()
            .filter_map(|round| round.get(stop.index())?.as_ref())
            .fold(None, |best: Option<&ArrivalLabel>, label| match best {
                Some(b) if !label.beats(b) => Some(b),
                _ => Some(label),
            })
    }

    /// Winning label at the destination, or `None` if it was never reached.
    pub fn winner(&self) -> Option<&ArrivalLabel> {
        self.best_at(self.destination)
    }
}
