//! Vehicle kinds and their range formulas.
//!
//! Every kind answers the same two questions through [`FuelModel`]: how many
//! kilometres a given amount of fuel buys, and how much fuel a distance costs.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::rounding::round2;

use super::constants::{
    ALLOWED_DISPLACEMENTS_CC, HYBRID_RANGE_FACTOR, KM_PER_LITER, QUAD_MAX_DISPLACEMENT_CC,
    QUAD_MIN_DISPLACEMENT_CC, TRUCK_BASE_KM_PER_LITER, TRUCK_MAX_WEIGHT_KG, TRUCK_MIN_WEIGHT_KG,
    TRUCK_WEIGHT_STEP_KG,
};

/// Two-wheeler efficiency (km/L) for each entry of [`ALLOWED_DISPLACEMENTS_CC`].
const MOTORCYCLE_KM_PER_LITER: [f64; 7] = [20.0, 18.0, 16.0, 15.0, 13.0, 12.0, 11.0];

/// Range and consumption rules shared by every vehicle kind.
pub trait FuelModel {
    /// Kilometres delivered per litre of fuel.
    fn km_per_liter(&self) -> f64;

    /// Range in kilometres for `fuel_liters`, rounded to two decimals.
    fn range_km(&self, fuel_liters: f64) -> f64 {
        round2(fuel_liters * self.km_per_liter())
    }

    /// Fuel billed for covering `distance_km`.
    ///
    /// Consumption is charged at the fixed [`KM_PER_LITER`] rate regardless of
    /// kind; only the range side of the model varies.
    fn fuel_for_distance(&self, distance_km: f64) -> f64 {
        round2(distance_km / KM_PER_LITER)
    }
}

/// Regulatory sub-category of a quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuadCategory {
    LightQuadricycle,
    HeavyQuadricycle,
    SpecialVehicle,
}

impl QuadCategory {
    pub const ALL: [QuadCategory; 3] = [
        QuadCategory::LightQuadricycle,
        QuadCategory::HeavyQuadricycle,
        QuadCategory::SpecialVehicle,
    ];

    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            QuadCategory::LightQuadricycle => "Light quadricycles",
            QuadCategory::HeavyQuadricycle => "Heavy quadricycles",
            QuadCategory::SpecialVehicle => "Special vehicles",
        }
    }
}

impl fmt::Display for QuadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed set of vehicle kinds with their kind-specific attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VehicleKind {
    Car {
        hybrid: bool,
    },
    Motorcycle {
        displacement_cc: u32,
    },
    Quad {
        displacement_cc: u32,
        category: QuadCategory,
    },
    Truck {
        weight_kg: f64,
    },
}

impl VehicleKind {
    pub fn car(hybrid: bool) -> Self {
        VehicleKind::Car { hybrid }
    }

    /// Create a motorcycle kind, rejecting displacements outside the allowed set.
    pub fn motorcycle(displacement_cc: u32) -> Result<Self> {
        let kind = VehicleKind::Motorcycle { displacement_cc };
        kind.validate()?;
        Ok(kind)
    }

    /// Create a quad kind. Quads share the motorcycle displacement set and are
    /// further limited to the quad displacement range.
    pub fn quad(displacement_cc: u32, category: QuadCategory) -> Result<Self> {
        let kind = VehicleKind::Quad {
            displacement_cc,
            category,
        };
        kind.validate()?;
        Ok(kind)
    }

    /// Create a heavy hauler kind with a weight in the permitted range.
    pub fn truck(weight_kg: f64) -> Result<Self> {
        let kind = VehicleKind::Truck { weight_kg };
        kind.validate()?;
        Ok(kind)
    }

    /// Validate kind-specific attributes.
    pub fn validate(&self) -> Result<()> {
        match *self {
            VehicleKind::Car { .. } => Ok(()),
            VehicleKind::Motorcycle { displacement_cc } => validate_displacement(displacement_cc),
            VehicleKind::Quad {
                displacement_cc, ..
            } => {
                validate_displacement(displacement_cc)?;
                if !(QUAD_MIN_DISPLACEMENT_CC..=QUAD_MAX_DISPLACEMENT_CC)
                    .contains(&displacement_cc)
                {
                    return Err(Error::invalid_argument(format!(
                        "quad displacement must be between {QUAD_MIN_DISPLACEMENT_CC} cc and \
                         {QUAD_MAX_DISPLACEMENT_CC} cc, got {displacement_cc} cc"
                    )));
                }
                Ok(())
            }
            VehicleKind::Truck { weight_kg } => {
                if !weight_kg.is_finite()
                    || !(TRUCK_MIN_WEIGHT_KG..=TRUCK_MAX_WEIGHT_KG).contains(&weight_kg)
                {
                    return Err(Error::invalid_argument(format!(
                        "truck weight must be between {TRUCK_MIN_WEIGHT_KG} and \
                         {TRUCK_MAX_WEIGHT_KG} kg, got {weight_kg}"
                    )));
                }
                Ok(())
            }
        }
    }

    /// Short label for the kind.
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car { .. } => "Car",
            VehicleKind::Motorcycle { .. } => "Motorcycle",
            VehicleKind::Quad { .. } => "Quad",
            VehicleKind::Truck { .. } => "Truck",
        }
    }

    /// Engine displacement for two-wheelers and quads.
    pub fn displacement_cc(&self) -> Option<u32> {
        match *self {
            VehicleKind::Motorcycle { displacement_cc }
            | VehicleKind::Quad {
                displacement_cc, ..
            } => Some(displacement_cc),
            _ => None,
        }
    }

    pub fn is_quad(&self) -> bool {
        matches!(self, VehicleKind::Quad { .. })
    }
}

impl FuelModel for VehicleKind {
    fn km_per_liter(&self) -> f64 {
        match *self {
            VehicleKind::Car { hybrid: false } => KM_PER_LITER,
            VehicleKind::Car { hybrid: true } => KM_PER_LITER * HYBRID_RANGE_FACTOR,
            VehicleKind::Motorcycle { displacement_cc }
            | VehicleKind::Quad {
                displacement_cc, ..
            } => motorcycle_km_per_liter(displacement_cc),
            VehicleKind::Truck { weight_kg } => truck_km_per_liter(weight_kg),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            VehicleKind::Car { hybrid } => {
                write!(f, "Car ({})", if hybrid { "hybrid" } else { "combustion" })
            }
            VehicleKind::Motorcycle { displacement_cc } => {
                write!(f, "Motorcycle ({displacement_cc} cc)")
            }
            VehicleKind::Quad {
                displacement_cc,
                category,
            } => write!(f, "Quad ({displacement_cc} cc, {category})"),
            VehicleKind::Truck { weight_kg } => write!(f, "Truck ({weight_kg} kg)"),
        }
    }
}

fn validate_displacement(displacement_cc: u32) -> Result<()> {
    if !ALLOWED_DISPLACEMENTS_CC.contains(&displacement_cc) {
        return Err(Error::invalid_argument(format!(
            "displacement must be one of {ALLOWED_DISPLACEMENTS_CC:?} cc, got {displacement_cc} cc"
        )));
    }
    Ok(())
}

/// Efficiency for a two-wheeler; larger engines burn more per kilometre.
fn motorcycle_km_per_liter(displacement_cc: u32) -> f64 {
    let index = ALLOWED_DISPLACEMENTS_CC
        .iter()
        .position(|&allowed| allowed >= displacement_cc)
        .unwrap_or(ALLOWED_DISPLACEMENTS_CC.len() - 1);
    MOTORCYCLE_KM_PER_LITER[index]
}

/// Heavy hauler efficiency: one km/L lost per full weight step.
///
/// Whatever is left below one full km/L is not enough to move the vehicle and
/// collapses to zero, so haulers from 6000 kg upward stall.
fn truck_km_per_liter(weight_kg: f64) -> f64 {
    let steps = (weight_kg / TRUCK_WEIGHT_STEP_KG).floor();
    let efficiency = TRUCK_BASE_KM_PER_LITER - steps;
    if efficiency < 1.0 {
        0.0
    } else {
        efficiency
    }
}
