//! Output formatting for race rendering.
//!
//! Races render either as human-readable text (standings followed by the
//! detailed per-vehicle history) or as a single JSON document.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use fuelrace_lib::{Race, RaceRecord, Vehicle};

use crate::terminal::ColorPalette;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Serializable race summary handed to JSON consumers.
#[derive(Debug, Serialize)]
pub struct RaceReport<'a> {
    pub race: &'a str,
    pub distance_km: f64,
    pub rounds: u32,
    pub results: Vec<&'a RaceRecord>,
}

impl<'a> RaceReport<'a> {
    /// Build a report from a finished race.
    pub fn from_race(race: &'a Race) -> Result<Self> {
        Ok(Self {
            race: race.name(),
            distance_km: race.total_distance_km(),
            rounds: race.rounds(),
            results: race.results()?,
        })
    }
}

/// Print the vehicle each participant was assigned.
pub fn render_roster<W: Write>(
    out: &mut W,
    roster: &[Vehicle],
    palette: &ColorPalette,
) -> Result<()> {
    for vehicle in roster {
        writeln!(
            out,
            "     You got a {}{}{}",
            palette.white_bold, vehicle, palette.reset
        )?;
    }
    Ok(())
}

/// Render a finished race in text format.
pub fn render_text<W: Write>(out: &mut W, race: &Race, palette: &ColorPalette) -> Result<()> {
    let results = race.results()?;

    writeln!(
        out,
        "\n{}*** {} ***{}\n",
        palette.orange,
        race.name(),
        palette.reset
    )?;

    writeln!(out, "{}* Standings:{}\n", palette.cyan, palette.reset)?;
    for record in &results {
        writeln!(out, "{}", standing_line(record, palette))?;
    }

    writeln!(out, "\n{}* Detailed history:{}\n", palette.cyan, palette.reset)?;
    for record in &results {
        writeln!(
            out,
            "{} -> {}{}{}",
            record.rank().unwrap_or_default(),
            palette.white_bold,
            record.vehicle().name(),
            palette.reset
        )?;
        for line in record.history_lines() {
            writeln!(out, "{}{}{}", palette.gray, line, palette.reset)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Render a finished race as a JSON document.
pub fn render_json<W: Write>(out: &mut W, race: &Race) -> Result<()> {
    let report = RaceReport::from_race(race)?;
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn standing_line(record: &RaceRecord, palette: &ColorPalette) -> String {
    let vehicle = record.vehicle();
    let odometer = fuelrace_lib::rounding::round2(vehicle.odometer_km());
    let marker = if record.did_finish() {
        format!("{}✓{}", palette.green, palette.reset)
    } else {
        format!("{}DNF{}", palette.red, palette.reset)
    };
    format!(
        "{} -> {} ({} km) {}",
        record.rank().unwrap_or_default(),
        vehicle.name(),
        odometer,
        marker
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished_race() -> Race {
        let roster = vec![
            Vehicle::car("Filigree", 50.0, 50.0, false).expect("valid car"),
            Vehicle::truck("Anchor", 150.0, 150.0, 9000.0).expect("valid truck"),
        ];
        let mut race = Race::new("Test Cup", 1000.0, roster).expect("valid race");
        race.start().expect("race runs");
        race
    }

    #[test]
    fn text_output_lists_standings_and_history() {
        let race = finished_race();
        let mut buffer = Vec::new();
        render_text(&mut buffer, &race, &ColorPalette::plain()).expect("render");
        let text = String::from_utf8(buffer).expect("utf8");

        assert!(text.contains("*** Test Cup ***"));
        assert!(text.contains("1 -> Filigree (1000 km) ✓"));
        assert!(text.contains("2 -> Anchor (0 km) DNF"));
        assert!(text.contains("Round 2: crossed the finish line"));
        assert!(text.contains("Did not finish after"));
    }

    #[test]
    fn json_output_is_ranked() {
        let race = finished_race();
        let mut buffer = Vec::new();
        render_json(&mut buffer, &race).expect("render");
        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");

        assert_eq!(value["race"], "Test Cup");
        assert_eq!(value["rounds"], 4);
        let results = value["results"].as_array().expect("results array");
        assert_eq!(results[0]["vehicle"]["name"], "Filigree");
        assert_eq!(results[0]["vehicle"]["kind"], "car");
        assert_eq!(results[0]["rank"], 1);
        assert_eq!(results[1]["history"][0]["action"], "stalled");
    }
}
