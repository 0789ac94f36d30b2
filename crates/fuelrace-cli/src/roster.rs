//! Participant collection and roster assembly.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use rand::Rng;

use fuelrace_lib::{Vehicle, VehicleCatalog};

/// Ask for a participant count followed by one name per participant.
///
/// Prompts go to `output`, answers are read line by line from `input`.
pub fn prompt_participants<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Vec<String>> {
    write!(output, "Enter the number of participants: ")?;
    output.flush()?;
    let answer = read_answer(input)?;
    let count: usize = answer
        .trim()
        .parse()
        .with_context(|| format!("invalid participant count '{}'", answer.trim()))?;

    let mut names = Vec::with_capacity(count);
    for index in 1..=count {
        write!(output, "     * Name of vehicle {index} -> ")?;
        output.flush()?;
        names.push(read_answer(input)?);
    }
    writeln!(output)?;
    Ok(names)
}

/// Generated names for non-interactive runs: `racer 1`, `racer 2`, ...
pub fn auto_names(count: usize) -> Vec<String> {
    (1..=count).map(|index| format!("racer {index}")).collect()
}

/// Turn participant names into vehicles drawn from `catalog`.
///
/// Names are normalised and deduplicated against the vehicles already built.
pub fn build_roster<R: Rng>(
    catalog: &VehicleCatalog,
    names: &[String],
    rng: &mut R,
) -> fuelrace_lib::Result<Vec<Vehicle>> {
    let mut roster = Vec::with_capacity(names.len());
    for name in names {
        let vehicle = catalog.generate_vehicle(name, &roster, rng)?;
        roster.push(vehicle);
    }
    Ok(roster)
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("unexpected end of input while reading participants");
    }
    Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
}
