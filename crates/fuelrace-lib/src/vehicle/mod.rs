//! Vehicle data types, kind-specific range formulas and fuel handling.
//!
//! - [`profile`] - The [`Vehicle`] record with its clamped fuel mutator
//! - [`kind`] - Vehicle kinds and the [`FuelModel`] capability
//! - [`constants`] - Efficiency constants and validation bounds
//!
//! # Example
//!
//! ```
//! use fuelrace_lib::vehicle::{QuadCategory, Vehicle};
//!
//! let truck = Vehicle::truck("Hauler", 150.0, 150.0, 2000.0).unwrap();
//! assert_eq!(truck.current_autonomy(), 637.5);
//!
//! let quad = Vehicle::quad("Mud", 20.0, 20.0, 250, QuadCategory::LightQuadricycle).unwrap();
//! let bike = Vehicle::motorcycle("Road", 20.0, 20.0, 250).unwrap();
//! assert_eq!(quad.autonomy_against(&bike), quad.current_autonomy() / 2.0);
//! ```

pub mod constants;
pub mod kind;
pub mod profile;

pub use constants::{
    ALLOWED_DISPLACEMENTS_CC, HYBRID_RANGE_FACTOR, KM_PER_LITER, RESERVE_FRACTION,
    TRUCK_BASE_KM_PER_LITER,
};
pub use kind::{FuelModel, QuadCategory, VehicleKind};
pub use profile::Vehicle;
