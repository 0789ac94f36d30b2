//! Per-participant race record and action log.

use std::fmt;

use serde::Serialize;

use crate::vehicle::Vehicle;

/// One entry in a participant's action log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RaceAction {
    /// Covered ground this round.
    Traveled {
        round: u32,
        distance_km: f64,
        odometer_km: f64,
    },
    /// Could not move at all this round.
    Stalled { round: u32 },
    /// Fuel ran out before the finish line.
    RanOutOfFuel { round: u32, shortfall_km: f64 },
    /// Pit stop at the end of the round.
    Refueled { round: u32, liters: f64 },
    /// Reached the race distance.
    Finished { round: u32 },
    /// Still short of the finish when the round cap was reached.
    DidNotFinish { rounds: u32 },
}

impl fmt::Display for RaceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaceAction::Traveled {
                round,
                distance_km,
                odometer_km,
            } => write!(
                f,
                "Round {round}: traveled {distance_km} km (odometer {odometer_km} km)"
            ),
            RaceAction::Stalled { round } => write!(f, "Round {round}: stalled with no range"),
            RaceAction::RanOutOfFuel {
                round,
                shortfall_km,
            } => write!(
                f,
                "Round {round}: ran out of fuel {shortfall_km} km short of the finish"
            ),
            RaceAction::Refueled { round, liters } => {
                write!(f, "Round {round}: refueled {liters} liters")
            }
            RaceAction::Finished { round } => write!(f, "Round {round}: crossed the finish line"),
            RaceAction::DidNotFinish { rounds } => {
                write!(f, "Did not finish after {rounds} rounds")
            }
        }
    }
}

/// A participant's vehicle, action history and final placing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceRecord {
    vehicle: Vehicle,
    history: Vec<RaceAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rank: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    finished_round: Option<u32>,
}

impl RaceRecord {
    pub(crate) fn new(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            history: Vec::new(),
            rank: None,
            finished_round: None,
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub(crate) fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    /// Ordered action log.
    pub fn history(&self) -> &[RaceAction] {
        &self.history
    }

    /// Action log rendered as human-readable lines.
    pub fn history_lines(&self) -> Vec<String> {
        self.history.iter().map(ToString::to_string).collect()
    }

    /// 1-based placing, assigned once the race has finished.
    pub fn rank(&self) -> Option<usize> {
        self.rank
    }

    /// Round in which the vehicle reached the race distance, `None` if it never did.
    pub fn finished_round(&self) -> Option<u32> {
        self.finished_round
    }

    pub fn did_finish(&self) -> bool {
        self.finished_round.is_some()
    }

    pub(crate) fn log(&mut self, action: RaceAction) {
        self.history.push(action);
    }

    pub(crate) fn mark_finished(&mut self, round: u32) {
        self.finished_round = Some(round);
        self.log(RaceAction::Finished { round });
    }

    pub(crate) fn set_rank(&mut self, rank: usize) {
        self.rank = Some(rank);
    }
}
