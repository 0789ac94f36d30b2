//! Vehicle identity and tank state.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::rounding::round2;

use super::constants::RESERVE_FRACTION;
use super::kind::{FuelModel, QuadCategory, VehicleKind};

/// A race participant: identity, tank, odometer and kind.
///
/// Fuel is only ever written through [`Vehicle::set_fuel`], which enforces the
/// reserve floor and the capacity ceiling.
///
/// # Examples
///
/// ```
/// use fuelrace_lib::vehicle::Vehicle;
///
/// let car = Vehicle::car("Filigree", 50.0, 50.0, false).unwrap();
/// assert_eq!(car.current_autonomy(), 500.0);
///
/// // Below the reserve floor the tank reports 20% of capacity.
/// let low = Vehicle::car("Sparrow", 50.0, 3.0, false).unwrap();
/// assert_eq!(low.fuel_liters(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    name: String,
    make: String,
    model: String,
    capacity_liters: f64,
    fuel_liters: f64,
    odometer_km: f64,
    #[serde(flatten)]
    kind: VehicleKind,
}

impl Vehicle {
    /// Create a vehicle after validating every attribute.
    ///
    /// Capacity is rounded to two decimals and must stay positive. The initial
    /// fuel goes through the same clamp as any later write.
    pub fn new(
        name: impl Into<String>,
        capacity_liters: f64,
        fuel_liters: f64,
        kind: VehicleKind,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid_argument("vehicle name must not be blank"));
        }

        let capacity = round2(capacity_liters);
        if !capacity_liters.is_finite() || capacity <= 0.0 {
            return Err(Error::invalid_argument(format!(
                "tank capacity must be a finite positive number, got {capacity_liters}"
            )));
        }

        if !fuel_liters.is_finite() || fuel_liters < 0.0 {
            return Err(Error::invalid_argument(format!(
                "initial fuel must be finite and non-negative, got {fuel_liters}"
            )));
        }

        kind.validate()?;

        let mut vehicle = Self {
            name,
            make: String::new(),
            model: String::new(),
            capacity_liters: capacity,
            fuel_liters: 0.0,
            odometer_km: 0.0,
            kind,
        };
        vehicle.set_fuel(fuel_liters);
        Ok(vehicle)
    }

    pub fn car(
        name: impl Into<String>,
        capacity_liters: f64,
        fuel_liters: f64,
        hybrid: bool,
    ) -> Result<Self> {
        Self::new(name, capacity_liters, fuel_liters, VehicleKind::car(hybrid))
    }

    pub fn motorcycle(
        name: impl Into<String>,
        capacity_liters: f64,
        fuel_liters: f64,
        displacement_cc: u32,
    ) -> Result<Self> {
        let kind = VehicleKind::motorcycle(displacement_cc)?;
        Self::new(name, capacity_liters, fuel_liters, kind)
    }

    pub fn quad(
        name: impl Into<String>,
        capacity_liters: f64,
        fuel_liters: f64,
        displacement_cc: u32,
        category: QuadCategory,
    ) -> Result<Self> {
        let kind = VehicleKind::quad(displacement_cc, category)?;
        Self::new(name, capacity_liters, fuel_liters, kind)
    }

    pub fn truck(
        name: impl Into<String>,
        capacity_liters: f64,
        fuel_liters: f64,
        weight_kg: f64,
    ) -> Result<Self> {
        let kind = VehicleKind::truck(weight_kg)?;
        Self::new(name, capacity_liters, fuel_liters, kind)
    }

    /// Attach make and model labels.
    pub fn with_make_model(mut self, make: impl Into<String>, model: impl Into<String>) -> Self {
        self.make = make.into();
        self.model = model.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    pub fn capacity_liters(&self) -> f64 {
        self.capacity_liters
    }

    pub fn fuel_liters(&self) -> f64 {
        self.fuel_liters
    }

    pub fn odometer_km(&self) -> f64 {
        self.odometer_km
    }

    /// Lowest fuel level the tank ever reports.
    pub fn reserve_liters(&self) -> f64 {
        round2(self.capacity_liters * RESERVE_FRACTION)
    }

    /// Write a raw fuel level, applying the clamp policy.
    ///
    /// Values above capacity become capacity, values below the reserve floor
    /// (including negatives and NaN) become the reserve floor, everything else
    /// is rounded to two decimals.
    pub fn set_fuel(&mut self, raw_liters: f64) {
        let reserve = self.reserve_liters();
        self.fuel_liters = if raw_liters > self.capacity_liters {
            self.capacity_liters
        } else if raw_liters >= reserve {
            round2(raw_liters)
        } else {
            reserve
        };
    }

    /// Distance in kilometres the current fuel can cover.
    pub fn current_autonomy(&self) -> f64 {
        self.kind.range_km(self.fuel_liters)
    }

    /// Distance a full tank would cover.
    pub fn full_tank_autonomy(&self) -> f64 {
        self.kind.range_km(self.capacity_liters)
    }

    /// Quad range measured against a rival two-wheeler.
    ///
    /// A quad facing a two-wheeler (motorcycle or quad) of the same
    /// displacement gets half its usual range. Every other pairing, and any
    /// vehicle that is not a quad, reports [`Vehicle::current_autonomy`].
    pub fn autonomy_against(&self, rival: &Vehicle) -> f64 {
        let own = self.current_autonomy();
        match (self.kind.displacement_cc(), rival.kind.displacement_cc()) {
            (Some(mine), Some(theirs)) if self.kind.is_quad() && mine == theirs => {
                round2(own / 2.0)
            }
            _ => own,
        }
    }

    /// Burn the fuel billed for `distance_km`.
    pub fn consume_fuel_for_distance(&mut self, distance_km: f64) {
        let burned = self.kind.fuel_for_distance(distance_km);
        self.set_fuel(self.fuel_liters - burned);
    }

    /// Odometer writes are kept at two decimals so repeated legs do not drift.
    pub(crate) fn advance_odometer(&mut self, distance_km: f64) {
        if distance_km > 0.0 {
            self.odometer_km = round2(self.odometer_km + distance_km);
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.kind, self.name)?;
        match (self.make.is_empty(), self.model.is_empty()) {
            (false, false) => write!(f, ", {} {}", self.make, self.model)?,
            (false, true) => write!(f, ", {}", self.make)?,
            (true, false) => write!(f, ", {}", self.model)?,
            (true, true) => {}
        }
        write!(
            f,
            ", odometer {} km, fuel {}/{} L",
            round2(self.odometer_km),
            self.fuel_liters,
            self.capacity_liters
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_rounded_at_construction() {
        let car = Vehicle::car("Rounder", 45.678, 45.678, false).expect("valid car");
        assert_eq!(car.capacity_liters(), 45.68);
        assert_eq!(car.fuel_liters(), 45.68);
    }

    #[test]
    fn rejects_capacity_that_rounds_to_zero() {
        assert!(Vehicle::car("Tiny", 0.001, 0.0, false).is_err());
        assert!(Vehicle::car("Nope", -5.0, 0.0, false).is_err());
    }

    #[test]
    fn rejects_blank_name_and_negative_fuel() {
        assert!(Vehicle::car("   ", 40.0, 10.0, false).is_err());
        assert!(Vehicle::car("Drain", 40.0, -1.0, false).is_err());
    }

    #[test]
    fn initial_fuel_above_capacity_is_capped() {
        let car = Vehicle::car("Overflow", 40.0, 90.0, true).expect("valid car");
        assert_eq!(car.fuel_liters(), 40.0);
    }

    #[test]
    fn set_fuel_applies_reserve_floor() {
        let mut bike = Vehicle::motorcycle("Floor", 15.0, 15.0, 125).expect("valid bike");
        bike.set_fuel(1.0);
        assert_eq!(bike.fuel_liters(), 3.0);
        bike.set_fuel(-20.0);
        assert_eq!(bike.fuel_liters(), 3.0);
        bike.set_fuel(f64::NAN);
        assert_eq!(bike.fuel_liters(), 3.0);
        bike.set_fuel(7.456);
        assert_eq!(bike.fuel_liters(), 7.46);
    }

    #[test]
    fn quad_halves_range_against_equal_displacement() {
        let quad = Vehicle::quad("Mud", 20.0, 20.0, 500, QuadCategory::HeavyQuadricycle)
            .expect("valid quad");
        let bike = Vehicle::motorcycle("Road", 20.0, 20.0, 500).expect("valid bike");
        let other = Vehicle::motorcycle("Big", 20.0, 20.0, 1000).expect("valid bike");
        assert_eq!(quad.current_autonomy(), 300.0);
        assert_eq!(quad.autonomy_against(&bike), 150.0);
        assert_eq!(quad.autonomy_against(&other), 300.0);
        // Only quads are penalised.
        assert_eq!(bike.autonomy_against(&quad), 300.0);
    }

    #[test]
    fn display_includes_identity_and_tank() {
        let truck = Vehicle::truck("Hauler", 150.0, 150.0, 2000.0)
            .expect("valid truck")
            .with_make_model("Ford", "Explorer");
        let text = truck.to_string();
        assert!(text.contains("Truck (2000 kg)"));
        assert!(text.contains("\"Hauler\""));
        assert!(text.contains("Ford Explorer"));
        assert!(text.contains("fuel 150/150 L"));
    }
}
