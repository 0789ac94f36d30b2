//! Trip execution and refuelling.
//!
//! A trip tries to cover a requested distance, bounded by the vehicle's
//! current autonomy. The uncovered remainder is returned to the caller so the
//! race engine can decide whether a pit stop is needed.

use tracing::debug;

use crate::error::{Error, Result};
use crate::rounding::round2;
use crate::vehicle::Vehicle;

/// Attempt to cover `requested_km`, returning the shortfall.
///
/// The vehicle travels `min(current_autonomy, requested_km)`; fuel for that
/// distance is burned and the odometer advances. The returned shortfall is
/// always non-negative and `covered + shortfall == requested_km`.
///
/// A vehicle with no autonomy is left untouched and reports the whole request
/// as shortfall.
///
/// # Examples
/// ```
/// use fuelrace_lib::trip::attempt_trip;
/// use fuelrace_lib::vehicle::Vehicle;
///
/// let mut car = Vehicle::car("Filigree", 50.0, 50.0, false).unwrap();
/// let shortfall = attempt_trip(&mut car, 1000.0).unwrap();
/// assert_eq!(shortfall, 500.0);
/// assert_eq!(car.odometer_km(), 500.0);
/// assert_eq!(car.fuel_liters(), 10.0); // reserve floor
/// ```
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `requested_km` is negative or not finite.
pub fn attempt_trip(vehicle: &mut Vehicle, requested_km: f64) -> Result<f64> {
    if !requested_km.is_finite() || requested_km < 0.0 {
        return Err(Error::invalid_argument(format!(
            "trip distance must be finite and non-negative, got {requested_km}"
        )));
    }

    let autonomy = vehicle.current_autonomy();
    if autonomy <= 0.0 || requested_km == 0.0 {
        debug!(
            vehicle = vehicle.name(),
            requested_km, autonomy, "trip covered no distance"
        );
        return Ok(requested_km);
    }

    let covered = autonomy.min(requested_km);
    let fuel_before = vehicle.fuel_liters();
    vehicle.consume_fuel_for_distance(covered);
    vehicle.advance_odometer(covered);

    debug!(
        vehicle = vehicle.name(),
        requested_km,
        covered_km = covered,
        fuel_before,
        fuel_after = vehicle.fuel_liters(),
        odometer_km = vehicle.odometer_km(),
        "trip completed"
    );

    Ok(requested_km - covered)
}

/// Refuel a vehicle and return the litres actually added.
///
/// A non-positive (or NaN) `amount_liters` fills the tank; otherwise the amount
/// is added and capped at capacity.
pub fn refuel(vehicle: &mut Vehicle, amount_liters: f64) -> f64 {
    let before = vehicle.fuel_liters();
    let target = if amount_liters > 0.0 {
        before + amount_liters
    } else {
        vehicle.capacity_liters()
    };
    vehicle.set_fuel(target);
    let added = round2(vehicle.fuel_liters() - before);

    debug!(
        vehicle = vehicle.name(),
        added_liters = added,
        fuel_liters = vehicle.fuel_liters(),
        "refuelled"
    );

    added
}
