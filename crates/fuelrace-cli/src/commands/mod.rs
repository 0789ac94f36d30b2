// CLI subcommand handlers. main.rs parses arguments and dispatches here.

pub mod catalog;
pub mod race;

use std::path::Path;

use anyhow::{Context, Result};

use fuelrace_lib::VehicleCatalog;

/// Load the catalog at `path`, falling back to the built-in one.
pub fn load_catalog(path: Option<&Path>) -> Result<VehicleCatalog> {
    match path {
        Some(path) => VehicleCatalog::from_path(path)
            .with_context(|| format!("failed to load vehicle catalog from {}", path.display())),
        None => Ok(VehicleCatalog::builtin().clone()),
    }
}
