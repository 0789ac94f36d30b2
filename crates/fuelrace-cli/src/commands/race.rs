//! Race command handler.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use fuelrace_cli::output::{render_json, render_roster, render_text, OutputFormat};
use fuelrace_cli::roster::{auto_names, build_roster, prompt_participants};
use fuelrace_cli::terminal::ColorPalette;
use fuelrace_lib::Race;

use super::load_catalog;

const DEFAULT_RACE_NAME: &str = "Grand Filigree Race";

#[derive(Args, Debug)]
pub struct RaceArgs {
    /// Participant name (repeatable). Without names or --participants the
    /// roster is read interactively from stdin.
    #[arg(long = "vehicle", value_name = "NAME")]
    pub vehicles: Vec<String>,

    /// Enter N auto-named participants instead of prompting.
    #[arg(long, value_name = "N", conflicts_with = "vehicles")]
    pub participants: Option<usize>,

    /// Race distance in kilometres.
    #[arg(long, default_value_t = 1000.0)]
    pub distance: f64,

    /// Name printed in the race banner.
    #[arg(long, default_value = DEFAULT_RACE_NAME)]
    pub race_name: String,

    /// Seed for vehicle generation; the same seed reproduces the same race.
    #[arg(long, env = "FUELRACE_SEED")]
    pub seed: Option<u64>,

    /// CSV file with `make,model` columns replacing the built-in catalog.
    #[arg(long, env = "FUELRACE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Handle the race subcommand.
pub fn handle_race(args: &RaceArgs, palette: &ColorPalette) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let names = participant_names(args)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let roster = build_roster(&catalog, &names, &mut rng).context("failed to build the roster")?;
    info!(participants = roster.len(), seed = ?args.seed, "roster assembled");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.format == OutputFormat::Text {
        render_roster(&mut out, &roster, palette)?;
    }

    let mut race = Race::new(args.race_name.as_str(), args.distance, roster)
        .context("failed to set up the race")?;
    race.start().context("race aborted")?;

    match args.format {
        OutputFormat::Text => render_text(&mut out, &race, palette)?,
        OutputFormat::Json => render_json(&mut out, &race)?,
    }
    out.flush()?;
    Ok(())
}

fn participant_names(args: &RaceArgs) -> Result<Vec<String>> {
    if let Some(count) = args.participants {
        return Ok(auto_names(count));
    }
    if !args.vehicles.is_empty() {
        return Ok(args.vehicles.clone());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    // Keep prompts out of the JSON document.
    match args.format {
        OutputFormat::Text => prompt_participants(&mut input, &mut io::stdout().lock()),
        OutputFormat::Json => prompt_participants(&mut input, &mut io::stderr().lock()),
    }
}
