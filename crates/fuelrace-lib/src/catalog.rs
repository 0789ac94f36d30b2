//! Make/model catalog and random roster generation.
//!
//! The race core never draws random numbers or touches names; this module is
//! the collaborator that turns participant names into validated vehicles.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use once_cell::sync::Lazy;
use rand::Rng;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::rounding::round2;
use crate::vehicle::constants::{ALLOWED_DISPLACEMENTS_CC, RESERVE_FRACTION};
use crate::vehicle::{QuadCategory, Vehicle, VehicleKind};

const BUILTIN_MODELS: &[(&str, &[&str])] = &[
    ("Toyota", &["Corolla", "Camry", "Rav4", "Yaris", "Highlander"]),
    ("Honda", &["Civic", "Accord", "CR-V", "Pilot", "Odyssey"]),
    ("Ford", &["Fiesta", "Focus", "Mustang", "Escape", "Explorer"]),
    ("Volkswagen", &["Golf", "Jetta", "Passat", "Tiguan", "Atlas"]),
    ("Nissan", &["Sentra", "Altima", "Maxima", "Rogue", "Pathfinder"]),
    ("BMW", &["3 Series", "5 Series", "X3", "X5", "7 Series"]),
    ("Yamaha", &["YZF-R1", "MT-09", "YZF-R6", "MT-07", "YZF-R3", "YZF-R125"]),
];

static BUILTIN: Lazy<VehicleCatalog> = Lazy::new(|| VehicleCatalog {
    makes: BUILTIN_MODELS
        .iter()
        .map(|(make, models)| MakeEntry {
            make: (*make).to_string(),
            models: models.iter().map(|m| (*m).to_string()).collect(),
        })
        .collect(),
    source: None,
});

/// A make together with the models available for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeEntry {
    pub make: String,
    pub models: Vec<String>,
}

/// Collection of makes and models vehicles are drawn from.
#[derive(Debug, Clone, Default)]
pub struct VehicleCatalog {
    makes: Vec<MakeEntry>,
    source: Option<PathBuf>,
}

impl VehicleCatalog {
    /// The catalog shipped with the library.
    pub fn builtin() -> &'static VehicleCatalog {
        &BUILTIN
    }

    /// Load a catalog from a `make,model` CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Load a catalog from a reader yielding `make,model` CSV rows.
    ///
    /// Headers are matched case-insensitively, fields are trimmed and rows
    /// are grouped by make in first-seen order.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::CatalogValidation {
                message: format!("failed to read catalog headers: {err}"),
            })?
            .clone();

        let column = |wanted: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(wanted))
                .ok_or_else(|| Error::CatalogValidation {
                    message: format!(
                        "catalog missing required column '{wanted}'. Available: {}",
                        headers.iter().collect::<Vec<_>>().join(", ")
                    ),
                })
        };
        let make_idx = column("make")?;
        let model_idx = column("model")?;

        let mut makes: Vec<MakeEntry> = Vec::new();
        for (offset, result) in csv_reader.records().enumerate() {
            // header is line 1
            let row = offset + 2;
            let record = result.map_err(|err| Error::CatalogValidation {
                message: err.to_string(),
            })?;

            let make = record.get(make_idx).unwrap_or_default().trim();
            let model = record.get(model_idx).unwrap_or_default().trim();
            if make.is_empty() || model.is_empty() {
                return Err(Error::CatalogValidation {
                    message: format!("blank make or model at row {row}"),
                });
            }

            match makes
                .iter_mut()
                .find(|entry| entry.make.eq_ignore_ascii_case(make))
            {
                Some(entry) => {
                    if !entry.models.iter().any(|m| m == model) {
                        entry.models.push(model.to_string());
                    }
                }
                None => makes.push(MakeEntry {
                    make: make.to_string(),
                    models: vec![model.to_string()],
                }),
            }
        }

        if makes.is_empty() {
            return Err(Error::CatalogValidation {
                message: "catalog contains no makes".to_string(),
            });
        }

        Ok(Self {
            makes,
            source: None,
        })
    }

    /// Makes in catalog order.
    pub fn makes(&self) -> &[MakeEntry] {
        &self.makes
    }

    /// Models for a make (case-insensitive lookup).
    pub fn models(&self, make: &str) -> Option<&[String]> {
        self.makes
            .iter()
            .find(|entry| entry.make.eq_ignore_ascii_case(make.trim()))
            .map(|entry| entry.models.as_slice())
    }

    pub fn model_count(&self) -> usize {
        self.makes.iter().map(|entry| entry.models.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.makes.is_empty()
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Build a random vehicle for `name`.
    ///
    /// The name is checked against `existing` with [`check_vehicle_name`],
    /// then a make/model and a kind are drawn from `rng`.
    pub fn generate_vehicle<R: Rng>(
        &self,
        name: &str,
        existing: &[Vehicle],
        rng: &mut R,
    ) -> Result<Vehicle> {
        if self.makes.is_empty() {
            return Err(Error::CatalogValidation {
                message: "catalog contains no makes".to_string(),
            });
        }
        let name = check_vehicle_name(name, existing)?;

        let entry = &self.makes[rng.random_range(0..self.makes.len())];
        let model = &entry.models[rng.random_range(0..entry.models.len())];

        let vehicle = match rng.random_range(0..4u32) {
            0 => {
                let capacity = f64::from(rng.random_range(15..=30u32));
                let fuel = random_fuel(capacity, rng);
                Vehicle::motorcycle(name, capacity, fuel, random_displacement(rng))?
            }
            1 => {
                let capacity = f64::from(rng.random_range(20..=40u32));
                let fuel = random_fuel(capacity, rng);
                let category = QuadCategory::ALL[rng.random_range(0..QuadCategory::ALL.len())];
                Vehicle::quad(name, capacity, fuel, random_displacement(rng), category)?
            }
            2 => {
                let capacity = f64::from(rng.random_range(30..=60u32));
                let fuel = random_fuel(capacity, rng);
                Vehicle::new(name, capacity, fuel, VehicleKind::car(rng.random_bool(0.5)))?
            }
            _ => {
                let capacity = f64::from(rng.random_range(90..=150u32));
                let fuel = random_fuel(capacity, rng);
                let weight = f64::from(rng.random_range(1000..10000u32));
                Vehicle::truck(name, capacity, fuel, weight)?
            }
        };

        let vehicle = vehicle.with_make_model(entry.make.clone(), model.clone());
        debug!(vehicle = %vehicle, "generated vehicle");
        Ok(vehicle)
    }
}

/// Validate and normalise a participant name.
///
/// Blank names are rejected. The name is trimmed and each word capitalised;
/// if it collides (case-insensitively) with an existing vehicle a numeric
/// suffix is appended: `Bolt`, `Bolt (2)`, `Bolt (3)`, ...
pub fn check_vehicle_name(name: &str, existing: &[Vehicle]) -> Result<String> {
    if name.trim().is_empty() {
        return Err(Error::invalid_argument(
            "vehicle name must not be blank or whitespace only",
        ));
    }

    let base = capitalize_words(name.trim());
    let taken = |candidate: &str| {
        existing
            .iter()
            .any(|v| v.name().eq_ignore_ascii_case(candidate))
    };

    if !taken(&base) {
        return Ok(base);
    }

    let mut suffix = 2;
    loop {
        let candidate = format!("{base} ({suffix})");
        if !taken(&candidate) {
            warn!(requested = %base, assigned = %candidate, "vehicle name already in use, renamed");
            return Ok(candidate);
        }
        suffix += 1;
    }
}

/// Capitalise the first letter of every space-separated word.
///
/// ```
/// use fuelrace_lib::catalog::capitalize_words;
///
/// assert_eq!(capitalize_words("red rocket mk2"), "Red Rocket Mk2");
/// assert_eq!(capitalize_words("eL toro"), "EL Toro");
/// ```
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Random starting fuel between the reserve floor and a full tank.
pub fn random_fuel<R: Rng>(capacity_liters: f64, rng: &mut R) -> f64 {
    let min = capacity_liters * RESERVE_FRACTION;
    if capacity_liters <= min {
        return round2(capacity_liters);
    }
    round2(rng.random_range(min..capacity_liters))
}

/// Random displacement from the allowed two-wheeler set.
pub fn random_displacement<R: Rng>(rng: &mut R) -> u32 {
    ALLOWED_DISPLACEMENTS_CC[rng.random_range(0..ALLOWED_DISPLACEMENTS_CC.len())]
}
