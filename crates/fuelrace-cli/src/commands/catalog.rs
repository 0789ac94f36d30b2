//! Catalog command handler for listing makes and models.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use fuelrace_cli::terminal::ColorPalette;
use fuelrace_lib::VehicleCatalog;

use super::load_catalog;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// CSV file with `make,model` columns replacing the built-in catalog.
    #[arg(long, env = "FUELRACE_CATALOG")]
    pub catalog: Option<PathBuf>,
}

/// Handle the catalog subcommand.
pub fn handle_list_catalog(args: &CatalogArgs, palette: &ColorPalette) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    print_catalog(&catalog, palette);
    Ok(())
}

fn print_catalog(catalog: &VehicleCatalog, palette: &ColorPalette) {
    match catalog.source_path() {
        Some(path) => println!("Catalog loaded from {}", path.display()),
        None => println!("Built-in catalog"),
    }
    println!(
        "Available makes ({}), {} models:",
        catalog.makes().len(),
        catalog.model_count()
    );
    for entry in catalog.makes() {
        println!(
            "  {}{}{}: {}",
            palette.white_bold,
            entry.make,
            palette.reset,
            entry.models.join(", ")
        );
    }
}
