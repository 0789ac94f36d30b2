use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

fn fixture_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/vehicle_catalog.csv")
        .canonicalize()
        .expect("catalog fixture present")
}

#[test]
fn lists_builtin_catalog() {
    cargo_bin_cmd!("fuelrace")
        .env("RUST_LOG", "error")
        .env_remove("FUELRACE_CATALOG")
        .args(["--no-color", "catalog"])
        .assert()
        .success()
        .stdout(contains("Built-in catalog"))
        .stdout(contains("Available makes (7)"))
        .stdout(contains("Toyota: Corolla, Camry, Rav4, Yaris, Highlander"))
        .stdout(contains("Yamaha"));
}

#[test]
fn lists_catalog_from_file() {
    cargo_bin_cmd!("fuelrace")
        .env("RUST_LOG", "error")
        .args(["--no-color", "catalog", "--catalog"])
        .arg(fixture_catalog())
        .assert()
        .success()
        .stdout(contains("Catalog loaded from"))
        .stdout(contains("Available makes (3), 5 models:"))
        .stdout(contains("Derbi: Senda, Terra"));
}

#[test]
fn catalog_path_is_read_from_environment() {
    cargo_bin_cmd!("fuelrace")
        .env("RUST_LOG", "error")
        .env("FUELRACE_CATALOG", fixture_catalog())
        .args(["--no-color", "catalog"])
        .assert()
        .success()
        .stdout(contains("Volvo: FH16, FMX"));
}

#[test]
fn missing_catalog_file_fails() {
    cargo_bin_cmd!("fuelrace")
        .env("RUST_LOG", "error")
        .args(["catalog", "--catalog", "/definitely/not/here.csv"])
        .assert()
        .failure()
        .stderr(contains("failed to load vehicle catalog"));
}
