//! Round-based race simulation.
//!
//! Each round every unfinished participant tries to cover its whole remaining
//! distance in one trip. A fuel-limited trip ends with a pit stop that fills the
//! tank, and the vehicle resumes next round. Standings are ordered by the round
//! in which each vehicle crossed the line, with roster order breaking ties.

mod record;

pub use record::{RaceAction, RaceRecord};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::rounding::round2;
use crate::trip::{attempt_trip, refuel};
use crate::vehicle::Vehicle;

/// Extra rounds granted above the computed bound before unfinished vehicles
/// are declared DNF.
pub const ROUND_CAP_SLACK: u32 = 2;

/// Lifecycle of a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceState {
    NotStarted,
    InProgress,
    Finished,
}

/// A race over a fixed distance between an ordered roster of vehicles.
///
/// # Examples
///
/// ```
/// use fuelrace_lib::race::Race;
/// use fuelrace_lib::vehicle::Vehicle;
///
/// let roster = vec![
///     Vehicle::car("Filigree", 50.0, 50.0, false).unwrap(),
///     Vehicle::truck("Hauler", 150.0, 150.0, 2000.0).unwrap(),
/// ];
/// let mut race = Race::new("Grand Filigree Race", 1000.0, roster).unwrap();
/// race.start().unwrap();
///
/// let results = race.results().unwrap();
/// assert_eq!(results[0].vehicle().name(), "Filigree");
/// assert_eq!(results[0].finished_round(), Some(2));
/// assert_eq!(results[1].vehicle().name(), "Hauler");
/// ```
#[derive(Debug, Clone)]
pub struct Race {
    name: String,
    total_distance_km: f64,
    participants: Vec<RaceRecord>,
    state: RaceState,
    rounds: u32,
    round_cap: u32,
}

impl Race {
    /// Build a race, rejecting an empty roster, a non-positive distance or a
    /// vehicle with a non-positive tank.
    ///
    /// Name uniqueness is the caller's responsibility.
    pub fn new(
        name: impl Into<String>,
        total_distance_km: f64,
        roster: Vec<Vehicle>,
    ) -> Result<Self> {
        if !total_distance_km.is_finite() || total_distance_km <= 0.0 {
            return Err(Error::invalid_argument(format!(
                "race distance must be a finite positive number, got {total_distance_km}"
            )));
        }
        if roster.is_empty() {
            return Err(Error::invalid_argument("race roster must not be empty"));
        }
        if let Some(vehicle) = roster.iter().find(|v| v.capacity_liters() <= 0.0) {
            return Err(Error::invalid_argument(format!(
                "vehicle {} has a non-positive tank capacity",
                vehicle.name()
            )));
        }

        let round_cap = round_cap(total_distance_km, &roster);

        Ok(Self {
            name: name.into(),
            total_distance_km,
            participants: roster.into_iter().map(RaceRecord::new).collect(),
            state: RaceState::NotStarted,
            rounds: 0,
            round_cap,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    pub fn state(&self) -> RaceState {
        self.state
    }

    /// Rounds simulated so far.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Rounds after which unfinished vehicles are declared DNF.
    pub fn round_cap(&self) -> u32 {
        self.round_cap
    }

    /// Participants in roster order.
    pub fn participants(&self) -> &[RaceRecord] {
        &self.participants
    }

    /// Run the race to completion.
    ///
    /// Calling `start` on a finished race is a no-op.
    ///
    /// # Errors
    /// Returns [`Error::InvalidState`] if the race is already in progress.
    pub fn start(&mut self) -> Result<()> {
        match self.state {
            RaceState::Finished => return Ok(()),
            RaceState::InProgress => {
                return Err(Error::invalid_state("race is already in progress"));
            }
            RaceState::NotStarted => {}
        }

        self.state = RaceState::InProgress;
        info!(
            race = %self.name,
            distance_km = self.total_distance_km,
            participants = self.participants.len(),
            round_cap = self.round_cap,
            "race started"
        );

        while !self.all_finished() {
            if self.rounds >= self.round_cap {
                self.retire_unfinished();
                break;
            }
            self.rounds += 1;
            self.run_round()?;
        }

        self.assign_ranks();
        self.state = RaceState::Finished;

        info!(
            race = %self.name,
            rounds = self.rounds,
            finishers = self.participants.iter().filter(|r| r.did_finish()).count(),
            "race finished"
        );
        Ok(())
    }

    /// Participants ordered by final rank.
    ///
    /// # Errors
    /// Returns [`Error::InvalidState`] unless the race has finished.
    pub fn results(&self) -> Result<Vec<&RaceRecord>> {
        if self.state != RaceState::Finished {
            return Err(Error::invalid_state(
                "results are only available once the race has finished",
            ));
        }
        let mut ranked: Vec<&RaceRecord> = self.participants.iter().collect();
        ranked.sort_by_key(|record| record.rank());
        Ok(ranked)
    }

    fn all_finished(&self) -> bool {
        self.participants.iter().all(RaceRecord::did_finish)
    }

    fn run_round(&mut self) -> Result<()> {
        let round = self.rounds;
        for record in &mut self.participants {
            run_leg(record, round, self.total_distance_km)?;
        }
        debug!(race = %self.name, round, "round complete");
        Ok(())
    }

    fn retire_unfinished(&mut self) {
        let rounds = self.rounds;
        for record in self.participants.iter_mut().filter(|r| !r.did_finish()) {
            warn!(
                race = %self.name,
                vehicle = record.vehicle().name(),
                odometer_km = record.vehicle().odometer_km(),
                rounds,
                "round cap reached, vehicle did not finish"
            );
            record.log(RaceAction::DidNotFinish { rounds });
        }
    }

    fn assign_ranks(&mut self) {
        let mut order: Vec<usize> = (0..self.participants.len()).collect();
        // Stable sort keeps roster order among equal keys.
        order.sort_by_key(|&i| self.participants[i].finished_round().unwrap_or(u32::MAX));
        for (position, index) in order.into_iter().enumerate() {
            self.participants[index].set_rank(position + 1);
        }
    }
}

/// Play one participant's turn in `round`.
fn run_leg(record: &mut RaceRecord, round: u32, total_distance_km: f64) -> Result<()> {
    if record.did_finish() {
        return Ok(());
    }
    // Distances are compared at the precision ranges are rounded to.
    let remaining = round2(total_distance_km - record.vehicle().odometer_km());
    if remaining <= 0.0 {
        record.mark_finished(round);
        return Ok(());
    }

    let shortfall = round2(attempt_trip(record.vehicle_mut(), remaining)?);
    let covered = round2(remaining - shortfall);

    if covered > 0.0 {
        let odometer_km = round2(record.vehicle().odometer_km());
        record.log(RaceAction::Traveled {
            round,
            distance_km: covered,
            odometer_km,
        });
    } else {
        record.log(RaceAction::Stalled { round });
    }

    if shortfall <= 0.0 {
        record.mark_finished(round);
        return Ok(());
    }

    if covered > 0.0 {
        record.log(RaceAction::RanOutOfFuel {
            round,
            shortfall_km: shortfall,
        });
    }
    let liters = refuel(record.vehicle_mut(), 0.0);
    record.log(RaceAction::Refueled { round, liters });
    Ok(())
}

/// Upper bound on rounds for `roster` to cover `total_distance_km`.
///
/// After the first round every unfinished vehicle starts with a full tank, so
/// the slowest mover needs at most one round plus `distance / full-tank range`.
fn round_cap(total_distance_km: f64, roster: &[Vehicle]) -> u32 {
    let slowest_gain = roster
        .iter()
        .map(Vehicle::full_tank_autonomy)
        .filter(|gain| *gain > 0.0)
        .fold(f64::INFINITY, f64::min);

    if slowest_gain.is_finite() {
        let rounds = (total_distance_km / slowest_gain).ceil();
        (rounds.min(f64::from(u32::MAX - ROUND_CAP_SLACK)) as u32) + ROUND_CAP_SLACK
    } else {
        ROUND_CAP_SLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(name: &str) -> Vehicle {
        Vehicle::car(name, 50.0, 50.0, false).expect("valid car")
    }

    #[test]
    fn round_cap_follows_slowest_mover() {
        let roster = vec![
            car("Quick"),
            Vehicle::truck("Hauler", 150.0, 150.0, 2000.0).expect("valid truck"),
        ];
        assert_eq!(round_cap(1000.0, &roster), 2 + ROUND_CAP_SLACK);
    }

    #[test]
    fn round_cap_for_stalled_roster_is_slack() {
        let roster = vec![Vehicle::truck("Anchor", 100.0, 100.0, 9000.0).expect("valid truck")];
        assert_eq!(round_cap(1000.0, &roster), ROUND_CAP_SLACK);
    }

    #[test]
    fn leg_logs_travel_shortfall_and_refuel() {
        let mut record = RaceRecord::new(car("Leg"));
        run_leg(&mut record, 1, 1000.0).expect("leg runs");
        assert_eq!(
            record.history(),
            &[
                RaceAction::Traveled {
                    round: 1,
                    distance_km: 500.0,
                    odometer_km: 500.0
                },
                RaceAction::RanOutOfFuel {
                    round: 1,
                    shortfall_km: 500.0
                },
                RaceAction::Refueled {
                    round: 1,
                    liters: 40.0
                },
            ]
        );
        assert!(!record.did_finish());
    }

    #[test]
    fn fractional_range_finishes_on_exact_leg() {
        // 150.7 km per tank: three legs cover 452.1 km.
        let mut record = RaceRecord::new(
            Vehicle::car("Fraction", 15.07, 15.07, false).expect("valid car"),
        );
        for round in 1..=3 {
            run_leg(&mut record, round, 452.1).expect("leg runs");
        }
        assert_eq!(record.finished_round(), Some(3));
        assert_eq!(record.vehicle().odometer_km(), 452.1);
        assert!(!record
            .history()
            .iter()
            .any(|action| matches!(action, RaceAction::Stalled { .. })));
    }

    #[test]
    fn finished_vehicle_is_skipped() {
        let mut record = RaceRecord::new(car("Done"));
        run_leg(&mut record, 1, 300.0).expect("leg runs");
        assert_eq!(record.finished_round(), Some(1));
        let logged = record.history().len();
        run_leg(&mut record, 2, 300.0).expect("leg runs");
        assert_eq!(record.history().len(), logged);
    }

    #[test]
    fn results_before_finish_is_invalid_state() {
        let race = Race::new("Early", 100.0, vec![car("Eager")]).expect("valid race");
        assert!(matches!(race.results(), Err(Error::InvalidState { .. })));
    }

    #[test]
    fn start_while_in_progress_is_rejected() {
        let mut race = Race::new("Reentrant", 100.0, vec![car("Loop")]).expect("valid race");
        race.state = RaceState::InProgress;
        assert!(matches!(race.start(), Err(Error::InvalidState { .. })));
    }
}
