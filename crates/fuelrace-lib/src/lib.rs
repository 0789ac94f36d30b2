//! Fuelrace library entry points.
//!
//! This crate models a fleet of vehicles with kind-specific fuel efficiency and
//! runs them through a distance-based race. Higher-level consumers (the CLI)
//! should only depend on the items exported here instead of reimplementing
//! behavior.
//!

#![deny(warnings)]

pub mod catalog;
pub mod error;
pub mod race;
pub mod rounding;
pub mod trip;
pub mod vehicle;

pub use catalog::{check_vehicle_name, VehicleCatalog};
pub use error::{Error, Result};
pub use race::{Race, RaceAction, RaceRecord, RaceState};
pub use trip::{attempt_trip, refuel};
pub use vehicle::{FuelModel, QuadCategory, Vehicle, VehicleKind};
