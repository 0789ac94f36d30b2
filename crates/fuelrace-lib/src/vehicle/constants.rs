//! Vehicle-related constants used across range and fuel calculations.

/// Base automobile efficiency, and the fixed consumption rate every trip is billed at.
pub const KM_PER_LITER: f64 = 10.0;

/// Fraction of tank capacity that fuel is never allowed to drop below.
pub const RESERVE_FRACTION: f64 = 0.2;

/// Share of the base range a hybrid automobile keeps.
pub const HYBRID_RANGE_FACTOR: f64 = 0.9;

/// Heavy hauler baseline efficiency (16 L / 100 km).
pub const TRUCK_BASE_KM_PER_LITER: f64 = 6.25;

/// Each full step of weight costs a heavy hauler one km/L.
pub const TRUCK_WEIGHT_STEP_KG: f64 = 1000.0;

pub const TRUCK_MIN_WEIGHT_KG: f64 = 1000.0;
pub const TRUCK_MAX_WEIGHT_KG: f64 = 10000.0;

/// Engine displacements a two-wheeler (or quad) may be built with.
pub const ALLOWED_DISPLACEMENTS_CC: [u32; 7] = [125, 250, 400, 500, 750, 900, 1000];

pub const QUAD_MIN_DISPLACEMENT_CC: u32 = 125;
pub const QUAD_MAX_DISPLACEMENT_CC: u32 = 1000;

/// Precision applied to fuel, range and odometer values.
pub const DECIMAL_PLACES: u32 = 2;
