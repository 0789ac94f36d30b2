//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use fuelrace_lib::vehicle::Vehicle;

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// The two-vehicle roster used by the reference race scenario.
#[allow(dead_code)]
pub fn car_and_truck() -> Vec<Vehicle> {
    vec![
        Vehicle::car("Filigree", 50.0, 50.0, false).expect("valid car"),
        Vehicle::truck("Hauler", 150.0, 150.0, 2000.0).expect("valid truck"),
    ]
}
