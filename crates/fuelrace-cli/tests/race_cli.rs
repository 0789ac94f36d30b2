use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

fn fixture_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/vehicle_catalog.csv")
        .canonicalize()
        .expect("catalog fixture present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("fuelrace");
    cmd.env("RUST_LOG", "error")
        .env_remove("FUELRACE_SEED")
        .env_remove("FUELRACE_CATALOG")
        .arg("--no-color");
    cmd
}

fn json_race(args: &[&str]) -> serde_json::Value {
    let output = cli()
        .arg("race")
        .args(args)
        .args(["--format", "json"])
        .output()
        .expect("run fuelrace");
    assert!(output.status.success(), "race failed: {output:?}");
    serde_json::from_slice(&output.stdout).expect("stdout is json")
}

#[test]
fn named_vehicles_race_in_text_mode() {
    cli()
        .args(["race", "--vehicle", "alpha", "--vehicle", "beta", "--seed", "7"])
        .assert()
        .success()
        .stdout(contains("You got a"))
        .stdout(contains("*** Grand Filigree Race ***"))
        .stdout(contains("* Standings:"))
        .stdout(contains("* Detailed history:"))
        .stdout(contains("Alpha"))
        .stdout(contains("Beta"))
        .stdout(contains("Round 1:"));
}

#[test]
fn custom_race_name_and_distance_are_reported() {
    let report = json_race(&[
        "--participants",
        "3",
        "--seed",
        "1",
        "--distance",
        "250",
        "--race-name",
        "Sprint",
    ]);

    assert_eq!(report["race"], "Sprint");
    assert_eq!(report["distance_km"], 250.0);
    let results = report["results"].as_array().expect("results array");
    assert_eq!(results.len(), 3);
    for (index, record) in results.iter().enumerate() {
        assert_eq!(record["rank"], index + 1);
        assert!(record["history"].as_array().is_some_and(|h| !h.is_empty()));
    }
}

#[test]
fn same_seed_reproduces_the_race() {
    let first = json_race(&["--participants", "5", "--seed", "42"]);
    let second = json_race(&["--participants", "5", "--seed", "42"]);
    assert_eq!(first, second);
}

#[test]
fn seed_is_read_from_environment() {
    let run = || {
        cli()
            .env("FUELRACE_SEED", "99")
            .args(["race", "--participants", "2", "--format", "json"])
            .output()
            .expect("run fuelrace")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn interactive_prompt_collects_names() {
    cli()
        .args(["race", "--seed", "5"])
        .write_stdin("2\nred rocket\nred rocket\n")
        .assert()
        .success()
        .stdout(contains("Enter the number of participants"))
        .stdout(contains("Red Rocket"))
        .stdout(contains("Red Rocket (2)"));
}

#[test]
fn interactive_prompt_rejects_bad_count() {
    cli()
        .args(["race", "--seed", "5"])
        .write_stdin("lots\n")
        .assert()
        .failure()
        .stderr(contains("invalid participant count 'lots'"));
}

#[test]
fn blank_name_is_rejected() {
    cli()
        .args(["race", "--vehicle", "   "])
        .assert()
        .failure()
        .stderr(contains("vehicle name must not be blank"));
}

#[test]
fn non_positive_distance_is_rejected() {
    cli()
        .args(["race", "--vehicle", "solo", "--distance", "0"])
        .assert()
        .failure()
        .stderr(contains("race distance must be a finite positive number"));
}

#[test]
fn empty_roster_is_rejected() {
    cli()
        .args(["race", "--participants", "0"])
        .assert()
        .failure()
        .stderr(contains("race roster must not be empty"));
}

#[test]
fn custom_catalog_supplies_makes() {
    let report = json_race(&[
        "--participants",
        "6",
        "--seed",
        "3",
        "--catalog",
        fixture_catalog().to_str().expect("utf8 path"),
    ]);

    let results = report["results"].as_array().expect("results array");
    for record in results {
        let make = record["vehicle"]["make"].as_str().expect("make");
        assert!(
            ["Derbi", "Volvo", "Polaris"].contains(&make),
            "unexpected make {make}"
        );
    }
}

#[test]
fn malformed_catalog_fails_with_context() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("broken.csv");
    fs::write(&path, "make,colour\nToyota,red\n").expect("write catalog");

    cli()
        .args(["race", "--participants", "2", "--catalog"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("failed to load vehicle catalog"))
        .stderr(contains("missing required column 'model'"));
}

#[test]
fn json_output_has_no_roster_chatter() {
    cli()
        .args(["race", "--participants", "2", "--seed", "8", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("You got a").not())
        .stdout(predicate::str::starts_with("{"));
}
